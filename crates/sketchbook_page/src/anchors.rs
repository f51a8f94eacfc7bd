//! Keep internal links in the current browsing context.
use tracing::debug;

use crate::dom::Document;

/// Substring marking a link as external.
pub const EXTERNAL_MARKER: &str = "http";
pub const SAME_CONTEXT: &str = "_self";

/// Whether an `href` value points off-site. A missing `href` is internal.
pub fn is_external(href: Option<&str>) -> bool {
    href.is_some_and(|h| h.contains(EXTERNAL_MARKER))
}

/// Set `target="_self"` on every anchor that is not external; returns how many were rewritten.
///
/// External anchors keep whatever `target` they already had.
pub fn normalize_link_targets(document: &mut Document) -> usize {
    let internal: Vec<_> = document
        .iter()
        .filter(|(_, e)| e.tag == "a" && !is_external(e.attribute("href")))
        .map(|(id, _)| id)
        .collect();

    for &id in &internal {
        if let Ok(anchor) = document.get_mut(id) {
            anchor.set_attribute("target", SAME_CONTEXT);
        }
    }
    debug!("Pinned {} internal links to the current tab.", internal.len());
    internal.len()
}
