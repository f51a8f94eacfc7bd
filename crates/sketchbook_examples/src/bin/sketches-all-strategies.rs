use glam::Vec2;
use sketchbook::prelude::*;
use sketchbook_examples::{init_tracing, render_canvas_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let width = 360;
    let rc = RenderConfig::new().with_scale(2);

    for (i, strategy) in Strategy::ALL.into_iter().enumerate() {
        // Every strategy gets its own engine; nothing is shared between sketches.
        let canvas = Canvas::new(2025 + i as u64);
        let mut sketch = Sketch::try_new(canvas, strategy, SketchConfig::new(width))?;
        sketch.initialize();

        let first = sketch.render()?;
        render_canvas_to_png(
            sketch.engine(),
            &rc,
            format!("sketches-{}-initial.png", strategy.name()),
        )?;

        // Simulated click in the middle of the surface.
        let center = Vec2::splat(width as f32 / 2.0);
        if let Interaction::Redrawn { seed, summary } = sketch.on_pointer_released(center)? {
            tracing::info!(
                "{}: {} -> {} ellipses, seed {:?}",
                strategy,
                first.primitives,
                summary.primitives,
                seed
            );
        }
        render_canvas_to_png(
            sketch.engine(),
            &rc,
            format!("sketches-{}-clicked.png", strategy.name()),
        )?;
    }

    Ok(())
}
