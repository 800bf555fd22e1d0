//! A single-consumer task queue bound to one designated thread.
//!
//! The bridge calls this thread the "UI" thread: callbacks registered with
//! the bridge only ever run here. The queue itself is just `std::sync::mpsc`
//! plus a recorded thread identity so affinity violations fail loudly.

use std::{
    sync::mpsc::{self, Receiver, Sender, TryRecvError},
    thread::{self, ThreadId},
};

type Task = Box<dyn FnOnce() + Send + 'static>;

/// The consumer half of the queue. Lives on, and must be driven from, the
/// thread that called [`UiDispatcher::bind`].
pub struct UiDispatcher {
    ui_thread: ThreadId,
    tx: Sender<Task>,
    rx: Receiver<Task>,
}

/// A cloneable producer handle. Posting is allowed from any thread.
#[derive(Clone)]
pub struct UiPoster {
    ui_thread: ThreadId,
    tx: Sender<Task>,
}

impl UiDispatcher {
    /// Binds a new dispatcher to the calling thread, designating it the UI
    /// thread for every poster derived from this dispatcher.
    pub fn bind() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            ui_thread: thread::current().id(),
            tx,
            rx,
        }
    }

    pub fn poster(&self) -> UiPoster {
        UiPoster {
            ui_thread: self.ui_thread,
            tx: self.tx.clone(),
        }
    }

    /// Runs tasks until every [`UiPoster`] has been dropped.
    pub fn run(self) {
        self.assert_bound_thread("run");
        // Drop our own sender so disconnection is driven by the posters.
        drop(self.tx);
        while let Ok(task) = self.rx.recv() {
            task();
        }
    }

    /// Runs the tasks that are already queued, then returns. Useful when the
    /// designated thread has its own loop, and in tests.
    pub fn run_pending(&self) {
        self.assert_bound_thread("run_pending");
        loop {
            match self.rx.try_recv() {
                Ok(task) => task(),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return,
            }
        }
    }

    fn assert_bound_thread(&self, what: &str) {
        assert_eq!(
            thread::current().id(),
            self.ui_thread,
            "UiDispatcher::{what} called off the thread the dispatcher is bound to"
        );
    }
}

impl UiPoster {
    /// Enqueues `task` for the UI thread. If the dispatcher is gone the task
    /// is dropped; the notification path treats that as non-fatal.
    pub fn post(&self, task: impl FnOnce() + Send + 'static) {
        if self.tx.send(Box::new(task)).is_err() {
            log::warn!("Dropping task posted after the UI dispatcher shut down");
        }
    }

    /// Whether the calling thread is the designated UI thread.
    pub fn on_ui_thread(&self) -> bool {
        thread::current().id() == self.ui_thread
    }
}
