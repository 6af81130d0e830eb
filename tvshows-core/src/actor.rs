use std::{
    fmt::Display,
    thread::{self, JoinHandle},
};

use crossbeam_channel::{bounded, unbounded, Receiver, SendError, Sender};

pub enum Act {
    Continue,
    Shutdown,
}

/// A message loop running on its own thread.  The loop ends when the actor
/// asks for a shutdown, when handling fails, or when every sender is gone.
pub trait Actor: Sized {
    type Message: Send + 'static;
    type Error: Display;

    fn handle(&mut self, msg: Self::Message) -> Result<Act, Self::Error>;

    /// Called once after the message loop has ended.
    fn stopped(&mut self) {}

    fn process(mut self, recv: Receiver<Self::Message>) {
        for msg in recv {
            match self.handle(msg) {
                Ok(Act::Continue) => {}
                Ok(Act::Shutdown) => {
                    break;
                }
                Err(err) => {
                    log::error!("error: {}", err);
                    break;
                }
            }
        }
        self.stopped();
    }

    fn spawn<F>(name: &str, cap: Capacity, factory: F) -> ActorHandle<Self::Message>
    where
        F: FnOnce() -> Self + Send + 'static,
    {
        let (send, recv) = cap.to_channel();
        let thread = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || {
                factory().process(recv);
            })
            .expect("Failed to spawn actor thread");
        ActorHandle {
            sender: send,
            thread,
        }
    }

    fn spawn_default<F>(name: &str, factory: F) -> ActorHandle<Self::Message>
    where
        F: FnOnce() -> Self + Send + 'static,
    {
        Self::spawn(name, Capacity::Bounded(128), factory)
    }
}

pub struct ActorHandle<M> {
    thread: JoinHandle<()>,
    sender: Sender<M>,
}

impl<M> ActorHandle<M> {
    pub fn sender(&self) -> Sender<M> {
        self.sender.clone()
    }

    pub fn send(&self, msg: M) -> Result<(), SendError<M>> {
        self.sender.send(msg)
    }

    /// Drop our sender and wait for the loop to drain.  Other clones of the
    /// sender keep the actor alive until they are dropped too.
    pub fn join(self) {
        drop(self.sender);
        let _ = self.thread.join();
    }
}

pub enum Capacity {
    Bounded(usize),
    Unbounded,
}

impl Capacity {
    pub fn to_channel<T>(&self) -> (Sender<T>, Receiver<T>) {
        match self {
            Capacity::Bounded(cap) => bounded(*cap),
            Capacity::Unbounded => unbounded(),
        }
    }
}
