#![allow(clippy::new_without_default)]

pub mod actor;
pub mod collection;
pub mod error;
pub mod remote;
pub mod show;
pub mod slug;
pub mod util;
pub mod webapi;
