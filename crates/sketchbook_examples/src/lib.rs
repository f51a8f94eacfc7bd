#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, rasterize, render_canvas_to_png, RenderConfig};
