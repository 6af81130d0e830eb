use std::sync::Arc;

use tvshows_core::{collection::ShowCollection, show::Show};

use crate::widget::TextInput;

#[allow(dead_code)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    /// Text typed into the title input.
    Input(String),
    KeyPress(Key),
    /// The add button.
    Click,
}

/// Title input plus add button.
pub struct AddShowForm {
    input: Box<dyn TextInput>,
}

impl AddShowForm {
    pub fn new(input: Box<dyn TextInput>) -> Self {
        Self { input }
    }

    pub fn event(&mut self, event: FormEvent, shows: &mut ShowCollection) {
        match event {
            FormEvent::Input(text) => self.input.set_value(&text),
            FormEvent::KeyPress(Key::Enter) | FormEvent::Click => {
                self.add_show(shows);
            }
            FormEvent::KeyPress(_) => {}
        }
    }

    /// Take the typed title and create a show from it.  The input is cleared
    /// even when the title is blank and nothing gets created.
    pub fn add_show(&mut self, shows: &mut ShowCollection) -> Option<Arc<Show>> {
        let title = self.input.value();
        self.input.set_value("");
        if title.trim().is_empty() {
            log::debug!("ignoring blank title");
            return None;
        }
        Some(shows.create(Show::new(&title)))
    }
}
