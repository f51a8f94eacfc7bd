//! Deferred iframe loading on first viewport intersection.
use tracing::{debug, warn};

use crate::dom::{Document, ElementId};

/// Attribute holding the deferred source.
pub const DEFERRED_SRC: &str = "data-src";
/// Minimum visible ratio that counts as intersecting.
pub const DEFAULT_THRESHOLD: f32 = 0.01;

/// One intersection observation reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: ElementId,
    /// Visible fraction of the element in [0, 1].
    pub ratio: f32,
}

impl IntersectionEntry {
    pub fn new(target: ElementId, ratio: f32) -> Self {
        Self { target, ratio }
    }
}

/// Watches iframes with a non-empty `data-src` and loads each once.
#[derive(Debug, Clone)]
pub struct LazyLoader {
    threshold: f32,
    observed: Vec<ElementId>,
}

impl LazyLoader {
    /// Observe every `iframe` of `document` whose `data-src` is present and non-empty.
    pub fn attach(document: &Document) -> Self {
        Self::attach_with_threshold(document, DEFAULT_THRESHOLD)
    }

    pub fn attach_with_threshold(document: &Document, threshold: f32) -> Self {
        let observed: Vec<ElementId> = document
            .iter()
            .filter(|(_, e)| e.tag == "iframe")
            .filter(|(_, e)| e.attribute(DEFERRED_SRC).is_some_and(|s| !s.is_empty()))
            .map(|(id, _)| id)
            .collect();
        debug!("Observing {} deferred frames.", observed.len());
        Self {
            threshold,
            observed,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn observed(&self) -> &[ElementId] {
        &self.observed
    }

    /// Apply a batch of observations; returns the elements whose `src` was set.
    ///
    /// An element is loaded only while its `src` is missing or empty, and is
    /// no longer observed afterwards.
    pub fn handle_intersections(
        &mut self,
        document: &mut Document,
        entries: &[IntersectionEntry],
    ) -> Vec<ElementId> {
        let mut loaded = Vec::new();
        for entry in entries {
            if !self.observed.contains(&entry.target) {
                continue;
            }
            if entry.ratio <= 0.0 || entry.ratio < self.threshold {
                continue;
            }

            let element = match document.get_mut(entry.target) {
                Ok(element) => element,
                Err(err) => {
                    warn!("Dropping observation: {}.", err);
                    self.observed.retain(|id| *id != entry.target);
                    continue;
                }
            };

            if element.attribute("src").is_some_and(|s| !s.is_empty()) {
                self.observed.retain(|id| *id != entry.target);
                continue;
            }

            if let Some(src) = element.attribute(DEFERRED_SRC).map(str::to_owned) {
                debug!("Loading deferred frame {:?} from '{}'.", entry.target, src);
                element.set_attribute("src", src);
                loaded.push(entry.target);
            }
            self.observed.retain(|id| *id != entry.target);
        }
        loaded
    }
}
