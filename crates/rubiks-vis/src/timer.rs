//! Single-shot timer that can be cancelled and restarted.
//!
//! Firing posts an event into the session's channel rather than running a
//! callback. Each start gets a new generation number carried by the event, and
//! [`CancellableTimer::accept`] only admits the firing of the current, still
//! pending start. A firing that raced a cancel is therefore dropped.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

#[derive(Debug)]
pub struct CancellableTimer<E> {
    events: UnboundedSender<E>,
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl<E: Send + 'static> CancellableTimer<E> {
    pub fn new(events: UnboundedSender<E>) -> Self {
        Self {
            events,
            generation: 0,
            pending: None,
        }
    }

    /// Cancel any pending firing, then post `event(generation)` after `delay`.
    /// Returns the new generation.
    pub fn start<F>(&mut self, delay: Duration, event: F) -> u64
    where
        F: FnOnce(u64) -> E + Send + 'static,
    {
        self.cancel();
        self.generation += 1;
        let generation = self.generation;
        let events = self.events.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver is gone once the session has shut down
            let _ = events.send(event(generation));
        }));
        generation
    }

    /// Drop the pending firing, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a firing with `generation` should be acted on. Accepting clears
    /// the pending slot.
    pub fn accept(&mut self, generation: u64) -> bool {
        if self.pending.is_some() && generation == self.generation {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

impl<E> Drop for CancellableTimer<E> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
