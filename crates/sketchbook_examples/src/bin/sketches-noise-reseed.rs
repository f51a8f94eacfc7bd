use glam::Vec2;
use sketchbook::prelude::*;
use sketchbook_examples::{init_tracing, render_canvas_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let width = 400;
    let mut sketch = noise_1d(Canvas::new(1), width);
    sketch.initialize();
    sketch.render()?;

    let rc = RenderConfig::new();
    let pool = sketch.seed_pool().len();
    for step in 0..pool {
        let seed = sketch.current_seed().unwrap_or_default();
        render_canvas_to_png(
            sketch.engine(),
            &rc,
            format!("sketches-noise-reseed-{step:02}-{seed}.png"),
        )?;

        // Edge clicks are ignored; only the interior one advances the pool.
        sketch.on_pointer_released(Vec2::new(0.0, 200.0))?;
        sketch.on_pointer_released(Vec2::new(200.0, 200.0))?;
    }

    Ok(())
}
