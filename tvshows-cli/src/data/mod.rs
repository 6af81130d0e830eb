mod config;
mod nav;

pub use crate::data::{config::Config, nav::Nav};
