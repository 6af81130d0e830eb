use std::sync::Arc;

use crossbeam_channel::Receiver;
use tvshows_core::{
    collection::{CollectionEvent, ShowCollection},
    show::Show,
};

use crate::widget::{Confirm, ListTarget, RowId, Template};

pub const DELETE_PROMPT: &str = "Are you sure?";

/// One rendered row of the show list.
pub struct ShowListItemView {
    show: Arc<Show>,
    row: RowId,
}

impl ShowListItemView {
    pub fn new(show: Arc<Show>, row: RowId) -> Self {
        Self { show, row }
    }

    pub fn render(&self, template: &Template) -> String {
        template.render(&self.show)
    }

    /// Ask for confirmation, then destroy the show and drop the row.  Returns
    /// whether anything happened.
    pub fn delete_model(
        &self,
        confirm: &mut dyn Confirm,
        shows: &ShowCollection,
        target: &mut dyn ListTarget,
    ) -> bool {
        if confirm.confirm(DELETE_PROMPT) {
            shows.destroy(&self.show);
            target.remove(self.row);
            true
        } else {
            false
        }
    }
}

/// The whole show list, kept in step with a `ShowCollection` through its
/// notifications.
pub struct ShowListView {
    target: Box<dyn ListTarget>,
    template: Template,
    events: Receiver<CollectionEvent>,
    items: Vec<ShowListItemView>,
    next_row: u64,
}

impl ShowListView {
    pub fn new(shows: &mut ShowCollection, target: Box<dyn ListTarget>, template: Template) -> Self {
        Self {
            target,
            template,
            events: shows.subscribe(),
            items: Vec::new(),
            next_row: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Apply all pending collection notifications.
    pub fn sync(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                CollectionEvent::Added(show) => self.add_one(show),
                CollectionEvent::Removed(show) => self.remove_one(&show),
                CollectionEvent::Reset(shows) => self.add_all(shows),
            }
            self.render();
        }
    }

    /// Delete the show at `position` (0-based) after confirmation.
    pub fn delete(
        &mut self,
        position: usize,
        confirm: &mut dyn Confirm,
        shows: &ShowCollection,
    ) -> bool {
        let Some(item) = self.items.get(position) else {
            log::warn!("no show at position {}", position + 1);
            return false;
        };
        if item.delete_model(confirm, shows, self.target.as_mut()) {
            self.items.remove(position);
            true
        } else {
            false
        }
    }

    fn add_one(&mut self, show: Arc<Show>) {
        let row = RowId(self.next_row);
        self.next_row += 1;
        let item = ShowListItemView::new(show, row);
        self.target.append(row, item.render(&self.template));
        self.items.push(item);
    }

    fn add_all(&mut self, shows: Vec<Arc<Show>>) {
        self.items.clear();
        self.target.clear();
        for show in shows {
            self.add_one(show);
        }
    }

    fn remove_one(&mut self, show: &Show) {
        if let Some(position) = self
            .items
            .iter()
            .position(|item| item.show.id() == show.id())
        {
            let item = self.items.remove(position);
            self.target.remove(item.row);
        }
    }

    fn render(&mut self) {
        self.target.refresh();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::testing::{RecordingList, ScriptedConfirm};
    use crossbeam_channel::unbounded;
    use tvshows_core::remote::{Request, Response};

    struct Fixture {
        shows: ShowCollection,
        requests: Receiver<Request>,
        list: RecordingList,
        view: ShowListView,
    }

    fn fixture() -> Fixture {
        let (send, requests) = unbounded();
        let mut shows = ShowCollection::new(send);
        let list = RecordingList::default();
        let view = ShowListView::new(
            &mut shows,
            Box::new(list.clone()),
            Template::new("{{title}}"),
        );
        Fixture {
            shows,
            requests,
            list,
            view,
        }
    }

    fn fetched(shows: &[(&str, &str)]) -> Response {
        Response::Fetched(Ok(shows
            .iter()
            .map(|(slug, title)| Show::with_slug(slug, title))
            .collect()))
    }

    #[test]
    fn reset_renders_one_row_per_show() {
        let mut f = fixture();
        f.shows.handle(fetched(&[("lost", "Lost"), ("24", "24")]));
        f.view.sync();
        assert_eq!(f.list.0.borrow().contents(), ["Lost", "24"]);
        assert_eq!(f.view.len(), 2);
        assert_eq!(f.list.0.borrow().refreshes, 1);
    }

    #[test]
    fn reset_clears_previous_rows() {
        let mut f = fixture();
        f.shows.handle(fetched(&[("lost", "Lost"), ("24", "24")]));
        f.shows.handle(fetched(&[("fringe", "Fringe")]));
        f.view.sync();
        let list = f.list.0.borrow();
        assert_eq!(list.contents(), ["Fringe"]);
        assert_eq!(list.clears, 2);
        assert_eq!(list.refreshes, 2);
    }

    #[test]
    fn add_appends_exactly_one_row() {
        let mut f = fixture();
        f.shows.handle(fetched(&[("lost", "Lost")]));
        f.view.sync();
        f.shows.create(Show::new("Fringe"));
        f.view.sync();
        assert_eq!(f.list.0.borrow().contents(), ["Lost", "Fringe"]);
        assert_eq!(f.list.0.borrow().clears, 1);
    }

    #[test]
    fn confirmed_delete_removes_row_and_entry() {
        let mut f = fixture();
        f.shows.handle(fetched(&[("lost", "Lost"), ("24", "24")]));
        f.view.sync();
        f.requests.try_iter().for_each(drop);

        let mut confirm = ScriptedConfirm::answering(&[true]);
        assert!(f.view.delete(0, &mut confirm, &f.shows));
        assert_eq!(*confirm.asked.borrow(), [DELETE_PROMPT]);
        assert_eq!(f.list.0.borrow().contents(), ["24"]);
        assert_eq!(f.view.len(), 1);

        let lost = match f.requests.try_recv().unwrap() {
            Request::Delete(show) => show,
            other => panic!("unexpected request: {:?}", other),
        };
        assert_eq!(lost.slug(), "lost");
        f.shows.handle(Response::Deleted(lost, Ok(())));
        f.view.sync();
        assert_eq!(f.shows.len(), 1);
        assert_eq!(f.list.0.borrow().contents(), ["24"]);
    }

    #[test]
    fn declined_delete_changes_nothing() {
        let mut f = fixture();
        f.shows.handle(fetched(&[("lost", "Lost")]));
        f.view.sync();
        let refreshes = f.list.0.borrow().refreshes;

        let mut confirm = ScriptedConfirm::answering(&[false]);
        assert!(!f.view.delete(0, &mut confirm, &f.shows));
        f.view.sync();
        assert_eq!(f.list.0.borrow().contents(), ["Lost"]);
        assert_eq!(f.list.0.borrow().refreshes, refreshes);
        assert_eq!(f.shows.len(), 1);
        assert!(f.requests.try_iter().all(|r| !matches!(r, Request::Delete(_))));
    }

    #[test]
    fn delete_out_of_range_does_not_prompt() {
        let mut f = fixture();
        let mut confirm = ScriptedConfirm::answering(&[true]);
        assert!(!f.view.delete(3, &mut confirm, &f.shows));
        assert!(confirm.asked.borrow().is_empty());
    }

    #[test]
    fn removal_from_elsewhere_drops_the_row() {
        let mut f = fixture();
        f.shows.handle(fetched(&[("lost", "Lost"), ("24", "24")]));
        f.view.sync();
        let lost = f.shows.get("lost").unwrap().clone();
        f.shows.handle(Response::Deleted(lost, Ok(())));
        f.view.sync();
        assert_eq!(f.list.0.borrow().contents(), ["24"]);
        assert_eq!(f.view.len(), 1);
    }

    #[test]
    fn item_renders_through_the_template() {
        let item = ShowListItemView::new(Arc::new(Show::new("Lost")), RowId(0));
        assert_eq!(item.render(&Template::new("{{id}}:{{title}}")), "lost:Lost");
    }
}
