pub mod add_show;
pub mod home;
pub mod show_list;

pub use add_show::{AddShowForm, FormEvent, Key};
pub use home::{HomeView, Surface, UiEvent};
pub use show_list::ShowListView;
