#![forbid(unsafe_code)]
//! sketchbook: procedural point-distribution sketches over a pluggable engine.
//!
//! Modules:
//! - engine: the drawing/randomness capability trait sketches are written against
//! - canvas: a recording software engine with seeded randomness and fractal noise
//! - sketch: the nine (layout x source) strategies, seed pools and the sketch lifecycle
//! - gate: pointer-release filtering shared by every sketch
//! - picker: the RGB color-picker demo
//! - events: lifecycle events and sinks
pub mod canvas;
pub mod engine;
pub mod error;
pub mod events;
pub mod gate;
pub mod picker;
pub mod random;
pub mod sketch;

/// Convenient re-exports for common types. Import with `use sketchbook::prelude::*;`.
pub mod prelude {
    pub use crate::canvas::{Canvas, DrawCommand};
    pub use crate::engine::{Engine, Rgb};
    pub use crate::error::{Error, Result};
    pub use crate::events::{EventSink, FnSink, MultiSink, SketchEvent, VecSink};
    pub use crate::gate::inside_surface;
    pub use crate::picker::{Channel, ColorPicker};
    pub use crate::sketch::{
        gauss_1d, gauss_2d, gauss_grid, noise_1d, noise_2d, noise_grid, random_1d, random_2d,
        random_grid, Interaction, Layout, RenderSummary, SeedPool, Sketch, SketchConfig, Source,
        Strategy, BACKGROUND,
    };
}
