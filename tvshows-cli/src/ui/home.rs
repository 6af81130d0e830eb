use tvshows_core::{collection::ShowCollection, remote::Response};

use crate::widget::{Confirm, ListTarget, Template, TextInput};

use super::{AddShowForm, FormEvent, ShowListView};

/// The render targets the home page draws into.
pub struct Surface {
    pub input: Box<dyn TextInput>,
    pub list: Box<dyn ListTarget>,
    pub confirm: Box<dyn Confirm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    Form(FormEvent),
    /// Delete button of the row at this 0-based position.
    Delete(usize),
    Refresh,
}

/// Add form and show list over one collection.
pub struct HomeView {
    shows: ShowCollection,
    add_show: AddShowForm,
    show_list: ShowListView,
    confirm: Box<dyn Confirm>,
}

impl HomeView {
    /// Build the page and start loading the list.
    pub fn new(mut shows: ShowCollection, surface: Surface, template: Template) -> Self {
        let show_list = ShowListView::new(&mut shows, surface.list, template);
        let add_show = AddShowForm::new(surface.input);
        shows.fetch();
        Self {
            shows,
            add_show,
            show_list,
            confirm: surface.confirm,
        }
    }

    pub fn shows(&self) -> &ShowCollection {
        &self.shows
    }

    pub fn show_list(&self) -> &ShowListView {
        &self.show_list
    }

    pub fn event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Form(event) => self.add_show.event(event, &mut self.shows),
            UiEvent::Delete(position) => {
                self.show_list
                    .delete(position, self.confirm.as_mut(), &self.shows);
            }
            UiEvent::Refresh => self.shows.fetch(),
        }
        self.show_list.sync();
    }

    pub fn handle(&mut self, response: Response) {
        self.shows.handle(response);
        self.show_list.sync();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ui::Key,
        widget::testing::{RecordingList, ScriptedConfirm, SharedInput},
    };
    use crossbeam_channel::{unbounded, Receiver};
    use tvshows_core::{remote::Request, show::Show};

    struct Fixture {
        home: HomeView,
        requests: Receiver<Request>,
        input: SharedInput,
        list: RecordingList,
        confirm: ScriptedConfirm,
    }

    fn fixture(answers: &[bool]) -> Fixture {
        let (send, requests) = unbounded();
        let input = SharedInput::default();
        let list = RecordingList::default();
        let confirm = ScriptedConfirm::answering(answers);
        let home = HomeView::new(
            ShowCollection::new(send),
            Surface {
                input: Box::new(input.clone()),
                list: Box::new(list.clone()),
                confirm: Box::new(confirm.clone()),
            },
            Template::new("{{title}}"),
        );
        Fixture {
            home,
            requests,
            input,
            list,
            confirm,
        }
    }

    fn fetched(shows: &[(&str, &str)]) -> Response {
        Response::Fetched(Ok(shows
            .iter()
            .map(|(slug, title)| Show::with_slug(slug, title))
            .collect()))
    }

    fn type_and_enter(home: &mut HomeView, text: &str) {
        home.event(UiEvent::Form(FormEvent::Input(text.to_string())));
        home.event(UiEvent::Form(FormEvent::KeyPress(Key::Enter)));
    }

    #[test]
    fn construction_fetches_the_list() {
        let f = fixture(&[]);
        assert!(matches!(f.requests.try_recv(), Ok(Request::Fetch)));
        assert!(f.requests.try_recv().is_err());
        assert!(f.list.0.borrow().rows.is_empty());
    }

    #[test]
    fn fetched_list_is_rendered() {
        let mut f = fixture(&[]);
        f.home.handle(fetched(&[("lost", "Lost"), ("24", "24")]));
        assert_eq!(f.home.shows().len(), 2);
        assert!(f.home.shows().get("lost").is_some());
        assert!(f.home.shows().get("24").is_some());
        assert_eq!(f.list.0.borrow().contents(), ["Lost", "24"]);
        assert_eq!(f.home.show_list().len(), 2);
    }

    #[test]
    fn submitting_a_title_appends_a_row() {
        let mut f = fixture(&[]);
        f.home.handle(fetched(&[("lost", "Lost")]));
        type_and_enter(&mut f.home, "Fringe");
        assert_eq!(f.list.0.borrow().contents(), ["Lost", "Fringe"]);
        assert_eq!(f.input.value(), "");
        assert_eq!(f.home.shows().len(), 2);
    }

    #[test]
    fn empty_submission_only_clears_the_input() {
        let mut f = fixture(&[]);
        f.home.event(UiEvent::Form(FormEvent::Input("  ".to_string())));
        f.home.event(UiEvent::Form(FormEvent::Click));
        assert!(f.home.shows().is_empty());
        assert_eq!(f.input.value(), "");
        assert!(f.list.0.borrow().rows.is_empty());
    }

    #[test]
    fn delete_asks_before_removing() {
        let mut f = fixture(&[false, true]);
        f.home.handle(fetched(&[("lost", "Lost"), ("24", "24")]));

        f.home.event(UiEvent::Delete(1));
        assert_eq!(f.list.0.borrow().contents(), ["Lost", "24"]);

        f.home.event(UiEvent::Delete(1));
        assert_eq!(f.list.0.borrow().contents(), ["Lost"]);
        assert_eq!(f.confirm.asked.borrow().len(), 2);

        let deleted = f
            .requests
            .try_iter()
            .find_map(|request| match request {
                Request::Delete(show) => Some(show),
                _ => None,
            })
            .unwrap();
        assert_eq!(deleted.slug(), "24");
        f.home.handle(Response::Deleted(deleted, Ok(())));
        assert_eq!(f.home.shows().len(), 1);
        assert_eq!(f.list.0.borrow().contents(), ["Lost"]);
    }

    #[test]
    fn refresh_fetches_again() {
        let mut f = fixture(&[]);
        f.requests.try_iter().for_each(drop);
        f.home.event(UiEvent::Refresh);
        assert!(matches!(f.requests.try_recv(), Ok(Request::Fetch)));
    }
}
