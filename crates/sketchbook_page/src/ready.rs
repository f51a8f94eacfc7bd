//! Explicit "page ready" registration.
//!
//! Scripts register with [`ReadyQueue::on_ready`] instead of listening for a
//! global event, so a test can fire the queue against any [`Document`].
use tracing::debug;

use crate::dom::Document;

type ReadyCallback = Box<dyn FnOnce(&mut Document)>;

/// Callbacks waiting for the document to become ready.
#[derive(Default)]
pub struct ReadyQueue {
    pending: Vec<ReadyCallback>,
    fired: bool,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `callback`. Once the queue has fired, it is invoked with `document` right away.
    pub fn on_ready<F>(&mut self, document: &mut Document, callback: F)
    where
        F: FnOnce(&mut Document) + 'static,
    {
        if self.fired {
            callback(document);
        } else {
            self.pending.push(Box::new(callback));
        }
    }

    /// Run every queued callback once, in registration order.
    pub fn dispatch(&mut self, document: &mut Document) -> usize {
        self.fired = true;
        let pending = std::mem::take(&mut self.pending);
        let count = pending.len();
        debug!("Page ready; running {} callbacks.", count);
        for callback in pending {
            callback(document);
        }
        count
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}
