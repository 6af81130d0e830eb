use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::{
    remote::{Request, Response},
    show::Show,
};

/// Change notifications emitted by `ShowCollection`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CollectionEvent {
    Added(Arc<Show>),
    Removed(Arc<Show>),
    Reset(Vec<Arc<Show>>),
}

/// Ordered client-side mirror of the server's show list.
///
/// Mutations that need the server are queued as `Request`s on `remote`; the
/// matching `Response`s come back through `handle`.  Every local change is
/// broadcast to the subscribers.
pub struct ShowCollection {
    shows: Vec<Arc<Show>>,
    subscribers: Vec<Sender<CollectionEvent>>,
    remote: Sender<Request>,
}

impl ShowCollection {
    pub fn new(remote: Sender<Request>) -> Self {
        Self {
            shows: Vec::new(),
            subscribers: Vec::new(),
            remote,
        }
    }

    pub fn subscribe(&mut self) -> Receiver<CollectionEvent> {
        let (send, recv) = unbounded();
        self.subscribers.push(send);
        recv
    }

    pub fn len(&self) -> usize {
        self.shows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Show>> {
        self.shows.iter().find(|show| show.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Show>> {
        self.shows.iter()
    }

    /// Ask the server for the full list.  Contents are replaced once it
    /// arrives.
    pub fn fetch(&self) {
        self.send(Request::Fetch);
    }

    /// Add `show` right away and ask the server to store it.  A show whose id
    /// is already present is not added a second time.
    pub fn create(&mut self, show: Show) -> Arc<Show> {
        let show = Arc::new(show);
        if let Some(existing) = self.get(show.id()) {
            log::debug!("{} collides with {}", show, existing);
        } else {
            self.shows.push(show.clone());
            self.emit(CollectionEvent::Added(show.clone()));
        }
        self.send(Request::Create(show.clone()));
        show
    }

    /// Ask the server to delete `show`.  The local entry goes away once the
    /// server confirms.
    pub fn destroy(&self, show: &Arc<Show>) {
        self.send(Request::Delete(show.clone()));
    }

    pub fn handle(&mut self, response: Response) {
        match response {
            Response::Fetched(Ok(shows)) => {
                log::info!("fetched {} shows", shows.len());
                self.reset(shows);
            }
            Response::Fetched(Err(err)) => {
                log::error!("failed to fetch shows: {}", err);
            }
            Response::Created(show, Ok(())) => {
                log::info!("created {}", show);
            }
            Response::Created(show, Err(err)) => {
                log::error!("failed to create {}: {}", show, err);
            }
            Response::Deleted(show, Ok(())) => {
                log::info!("deleted {}", show);
                self.remove(show.id());
            }
            Response::Deleted(show, Err(err)) => {
                log::error!("failed to delete {}: {}", show, err);
            }
        }
    }

    fn reset(&mut self, shows: Vec<Show>) {
        self.shows = shows.into_iter().map(Arc::new).collect();
        self.emit(CollectionEvent::Reset(self.shows.clone()));
    }

    fn remove(&mut self, id: &str) {
        if let Some(index) = self.shows.iter().position(|show| show.id() == id) {
            let show = self.shows.remove(index);
            self.emit(CollectionEvent::Removed(show));
        }
    }

    fn emit(&mut self, event: CollectionEvent) {
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }

    fn send(&self, request: Request) {
        if let Err(err) = self.remote.send(request) {
            log::error!("remote worker is gone, dropping {:?}", err.into_inner());
        }
    }
}
