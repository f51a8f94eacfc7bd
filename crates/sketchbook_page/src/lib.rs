#![forbid(unsafe_code)]
//! sketchbook_page: page-ready glue scripts for sketchbook sites.
//!
//! Each script is a plain function over a [`dom::Document`] and is registered
//! through an explicit [`ready::ReadyQueue`] rather than a global event.
pub mod anchors;
pub mod dom;
pub mod error;
pub mod gallery;
pub mod lazy_load;
pub mod ready;

/// Convenient re-exports for common types. Import with `use sketchbook_page::prelude::*;`.
pub mod prelude {
    pub use crate::anchors::{is_external, normalize_link_targets};
    pub use crate::dom::{Document, Element, ElementId};
    pub use crate::error::{Error, Result};
    pub use crate::gallery::{
        discover_galleries, init_galleries, FnFactory, LightboxFactory, LightboxOptions,
    };
    pub use crate::lazy_load::{IntersectionEntry, LazyLoader};
    pub use crate::ready::ReadyQueue;
}
