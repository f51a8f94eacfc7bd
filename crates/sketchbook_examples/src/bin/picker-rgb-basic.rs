use sketchbook::prelude::*;
use sketchbook_examples::{init_tracing, render_canvas_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let mut picker = ColorPicker::new(Canvas::default());
    picker.initialize();
    picker.render();
    render_canvas_to_png(picker.engine(), &RenderConfig::new(), "picker-rgb-default.png")?;

    // Drag the sliders, then release to report the mix.
    picker.set_channel(Channel::Red, 30);
    picker.set_channel(Channel::Green, 160);
    picker.set_channel(Channel::Blue, 90);
    picker.render();
    picker.on_pointer_released();
    render_canvas_to_png(picker.engine(), &RenderConfig::new(), "picker-rgb-mixed.png")?;

    Ok(())
}
