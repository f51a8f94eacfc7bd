//! Event types and sinks for observing sketches.
//!
//! This module defines [`SketchEvent`] and a set of sinks to emit, collect or
//! forward events while driving a [`crate::sketch::Sketch`] through its
//! `*_with_events` operations.
use glam::Vec2;

use crate::sketch::Strategy;

/// Describes events emitted by sketch lifecycle callbacks.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum SketchEvent {
    /// Emitted once the surface was allocated.
    Initialized {
        strategy: Strategy,
        /// Surface width (and height) in pixels.
        width: u32,
    },

    /// Emitted after a frame was drawn.
    Rendered {
        strategy: Strategy,
        /// Number of ellipses drawn.
        primitives: usize,
        /// One-based frame counter of this sketch.
        frame: u64,
    },

    /// Emitted when an interaction reseeded the noise field.
    Reseeded { strategy: Strategy, seed: u32 },

    /// Emitted when a pointer release fell outside the surface.
    InteractionIgnored { strategy: Strategy, position: Vec2 },
}

/// A generic event sink that accepts [`SketchEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: SketchEvent);

    fn send_many<I>(&mut self, events: I)
    where
        Self: Sized,
        I: IntoIterator<Item = SketchEvent>,
    {
        for e in events {
            self.send(e);
        }
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: SketchEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(SketchEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(SketchEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(SketchEvent),
{
    #[inline]
    fn send(&mut self, event: SketchEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<SketchEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<SketchEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[SketchEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: SketchEvent) {
        self.events.push(event);
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn sinks(&self) -> &[S] {
        &self.sinks
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: SketchEvent) {
        if self.sinks.is_empty() {
            return;
        }
        let last_idx = self.sinks.len() - 1;
        for i in 0..last_idx {
            self.sinks[i].send(event.clone());
        }
        self.sinks[last_idx].send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reseeded(seed: u32) -> SketchEvent {
        SketchEvent::Reseeded {
            strategy: Strategy::NOISE_1D,
            seed,
        }
    }

    #[test]
    fn vec_sink_collects_events() {
        let mut sink = VecSink::new();
        assert!(sink.is_empty());
        sink.send_many([reseeded(1), reseeded(2)]);
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.as_slice()[1], reseeded(2));
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn multi_sink_fans_out_events() {
        let mut multi = MultiSink::with_sinks(vec![VecSink::new(), VecSink::new()]);
        multi.send(reseeded(9));
        assert_eq!(multi.sinks().len(), 2);
        assert_eq!(multi.sinks()[0].as_slice(), &[reseeded(9)]);
        assert_eq!(multi.sinks()[1].as_slice(), &[reseeded(9)]);
    }

    #[test]
    fn default_multi_sink_grows_with_push() {
        let mut multi: MultiSink<VecSink> = MultiSink::default();
        multi.send(reseeded(1));
        assert!(multi.sinks().is_empty());

        multi.push(VecSink::new());
        multi.send(reseeded(2));
        multi.push(VecSink::new());
        multi.send(reseeded(3));

        assert_eq!(multi.sinks()[0].as_slice(), &[reseeded(2), reseeded(3)]);
        assert_eq!(multi.sinks()[1].as_slice(), &[reseeded(3)]);
    }

    #[test]
    fn fn_sink_invokes_callback() {
        let mut count = 0;
        let mut sink = FnSink::new(|_event| {
            count += 1;
        });
        sink.send(reseeded(0));
        assert_eq!(count, 1);
    }
}
