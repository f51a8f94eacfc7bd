//! Lightbox gallery discovery.
//!
//! Image rows carry the `image-row` class; an extra class starting with the
//! same prefix (`image-row-cats`) splits them into separate galleries.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dom::Document;

pub const GALLERY_CLASS: &str = "image-row";

/// Options handed to every lightbox widget.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LightboxOptions {
    /// Attribute of the image holding the full-size source.
    pub source_attr: String,
    /// Overlay opacity in [0, 1].
    pub overlay_opacity: f32,
    pub show_counter: bool,
    /// Wrap from the last image to the first.
    pub looping: bool,
}

impl Default for LightboxOptions {
    fn default() -> Self {
        Self {
            source_attr: "src".to_owned(),
            overlay_opacity: 0.8,
            show_counter: false,
            looping: false,
        }
    }
}

/// Host-side lightbox constructor.
pub trait LightboxFactory {
    fn create(&mut self, selector: &str, options: &LightboxOptions);
}

/// A factory that forwards to a user-provided closure.
pub struct FnFactory<F>
where
    F: FnMut(&str, &LightboxOptions),
{
    f: F,
}

impl<F> FnFactory<F>
where
    F: FnMut(&str, &LightboxOptions),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> LightboxFactory for FnFactory<F>
where
    F: FnMut(&str, &LightboxOptions),
{
    fn create(&mut self, selector: &str, options: &LightboxOptions) {
        (self.f)(selector, options);
    }
}

/// Gallery class names in first-seen order, falling back to [`GALLERY_CLASS`].
pub fn discover_galleries(document: &Document) -> Vec<String> {
    let mut galleries: Vec<String> = Vec::new();
    for id in document.elements_by_class(GALLERY_CLASS) {
        let Ok(element) = document.get(id) else {
            continue;
        };
        let sub = element
            .classes()
            .iter()
            .find(|c| c.starts_with(GALLERY_CLASS) && c.as_str() != GALLERY_CLASS);
        if let Some(sub) = sub {
            if !galleries.contains(sub) {
                galleries.push(sub.clone());
            }
        }
    }

    if galleries.is_empty() {
        galleries.push(GALLERY_CLASS.to_owned());
    }
    galleries
}

/// Selector matching the images of one gallery.
pub fn gallery_selector(gallery: &str) -> String {
    format!(".{gallery} img")
}

/// Create one lightbox per discovered gallery; returns the selectors used.
pub fn init_galleries(
    document: &Document,
    factory: &mut dyn LightboxFactory,
    options: &LightboxOptions,
) -> Vec<String> {
    let selectors: Vec<String> = discover_galleries(document)
        .iter()
        .map(|g| gallery_selector(g))
        .collect();
    for selector in &selectors {
        factory.create(selector, options);
    }
    info!("Initialized {} lightbox galleries.", selectors.len());
    selectors
}
