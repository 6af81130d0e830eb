use std::sync::Arc;

use crossbeam_channel::Sender;
use threadpool::ThreadPool;

use crate::{
    actor::{Act, Actor, ActorHandle},
    error::Error,
    show::Show,
};

/// The server side of the show list.
pub trait ShowStore: Send + Sync + 'static {
    fn load_shows(&self) -> Result<Vec<Show>, Error>;

    fn create_show(&self, show: &Show) -> Result<(), Error>;

    fn delete_show(&self, slug: &str) -> Result<(), Error>;
}

#[derive(Clone, Debug)]
pub enum Request {
    Fetch,
    Create(Arc<Show>),
    Delete(Arc<Show>),
}

#[derive(Debug)]
pub enum Response {
    Fetched(Result<Vec<Show>, Error>),
    Created(Arc<Show>, Result<(), Error>),
    Deleted(Arc<Show>, Result<(), Error>),
}

impl Request {
    fn execute(self, store: &dyn ShowStore) -> Response {
        match self {
            Request::Fetch => Response::Fetched(store.load_shows()),
            Request::Create(show) => {
                let result = store.create_show(&show);
                Response::Created(show, result)
            }
            Request::Delete(show) => {
                let result = store.delete_show(show.slug());
                Response::Deleted(show, result)
            }
        }
    }
}

/// Runs collection requests against a `ShowStore` without blocking the
/// caller.  Each request is executed on a pool thread and its `Response` is
/// posted to `responses`.
pub struct RemoteWorker {
    store: Arc<dyn ShowStore>,
    pool: ThreadPool,
    responses: Sender<Response>,
}

impl RemoteWorker {
    const MAX_REQUEST_THREADS: usize = 4;

    pub fn new(store: Arc<dyn ShowStore>, responses: Sender<Response>) -> Self {
        Self {
            store,
            pool: ThreadPool::with_name("remote_request".into(), Self::MAX_REQUEST_THREADS),
            responses,
        }
    }

    pub fn spawn_with_store(
        store: Arc<dyn ShowStore>,
        responses: Sender<Response>,
    ) -> ActorHandle<Request> {
        Self::spawn_default("remote_worker", move || Self::new(store, responses))
    }
}

impl Actor for RemoteWorker {
    type Message = Request;
    type Error = Error;

    fn handle(&mut self, msg: Request) -> Result<Act, Error> {
        log::debug!("executing {:?}", msg);
        let store = self.store.clone();
        let responses = self.responses.clone();
        self.pool.execute(move || {
            let response = msg.execute(store.as_ref());
            if responses.send(response).is_err() {
                log::debug!("response dropped, receiver is gone");
            }
        });
        Ok(Act::Continue)
    }

    fn stopped(&mut self) {
        self.pool.join();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use parking_lot::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct FakeStore {
        deleted: Mutex<Vec<String>>,
    }

    impl ShowStore for FakeStore {
        fn load_shows(&self) -> Result<Vec<Show>, Error> {
            Ok(vec![Show::with_slug("lost", "Lost")])
        }

        fn create_show(&self, _show: &Show) -> Result<(), Error> {
            Err(Error::HttpStatus { code: 405 })
        }

        fn delete_show(&self, slug: &str) -> Result<(), Error> {
            self.deleted.lock().push(slug.to_string());
            Ok(())
        }
    }

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn fetch_posts_loaded_shows() {
        let (send, recv) = unbounded();
        let worker = RemoteWorker::spawn_with_store(Arc::new(FakeStore::default()), send);
        worker.send(Request::Fetch).unwrap();
        match recv.recv_timeout(TIMEOUT).unwrap() {
            Response::Fetched(Ok(shows)) => assert_eq!(shows, [Show::with_slug("lost", "Lost")]),
            other => panic!("unexpected response: {:?}", other),
        }
        worker.join();
    }

    #[test]
    fn failures_are_passed_through() {
        let (send, recv) = unbounded();
        let worker = RemoteWorker::spawn_with_store(Arc::new(FakeStore::default()), send);
        let show = Arc::new(Show::new("Fringe"));
        worker.send(Request::Create(show.clone())).unwrap();
        match recv.recv_timeout(TIMEOUT).unwrap() {
            Response::Created(created, Err(Error::HttpStatus { code: 405 })) => {
                assert_eq!(created, show)
            }
            other => panic!("unexpected response: {:?}", other),
        }
        worker.join();
    }

    #[test]
    fn delete_uses_slug_and_drains_on_join() {
        let store = Arc::new(FakeStore::default());
        let (send, recv) = unbounded();
        let worker = RemoteWorker::spawn_with_store(store.clone(), send);
        worker
            .send(Request::Delete(Arc::new(Show::new("Mr. Robot"))))
            .unwrap();
        worker.join();
        assert_eq!(*store.deleted.lock(), ["mr-robot"]);
        assert!(matches!(recv.try_recv(), Ok(Response::Deleted(_, Ok(())))));
    }
}
