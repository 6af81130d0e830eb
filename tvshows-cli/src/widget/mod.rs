//! Render targets the views draw into.  Views never own a concrete surface;
//! the front end injects one of these at construction.

mod template;
mod terminal;

pub use template::{Template, DEFAULT_ROW_TEMPLATE};
pub use terminal::{LineConfirm, LineInput, SharedOutput, TerminalList};

/// Identity of a rendered list row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RowId(pub u64);

/// A list container holding rendered rows in insertion order.
pub trait ListTarget {
    fn clear(&mut self);

    fn append(&mut self, row: RowId, content: String);

    fn remove(&mut self, row: RowId);

    /// Cosmetic pass over the whole container after a change.
    fn refresh(&mut self);
}

/// A single-line text input.
pub trait TextInput {
    fn value(&self) -> String;

    fn set_value(&mut self, value: &str);
}

/// A yes/no prompt shown to the user.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}
