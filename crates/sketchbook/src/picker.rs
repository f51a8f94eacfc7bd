//! RGB color picker demo.
//!
//! All slider state lives in the [`ColorPicker`] instance, so several pickers
//! can share a page without interfering.
use glam::Vec2;
use tracing::info;

use crate::engine::{Engine, Rgb};

pub const PICKER_SIZE: u32 = 400;

/// Color channel controlled by one slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
        }
    }
}

/// A horizontal integer slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slider {
    pub min: u8,
    pub max: u8,
    value: u8,
    /// Top-left corner of the control on the page.
    pub position: (i32, i32),
}

impl Slider {
    pub fn new(min: u8, max: u8, value: u8, position: (i32, i32)) -> Self {
        debug_assert!(min <= max, "slider min must be <= max");
        Self {
            min,
            max,
            value: value.clamp(min, max),
            position,
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Set the value, clamped into `[min, max]`.
    pub fn set_value(&mut self, value: i32) {
        self.value = value.clamp(self.min as i32, self.max as i32) as u8;
    }
}

/// Three sliders mixing a background color.
#[derive(Debug, Clone)]
pub struct ColorPicker<E: Engine> {
    engine: E,
    red: Slider,
    green: Slider,
    blue: Slider,
}

impl<E: Engine> ColorPicker<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            red: Slider::new(0, 255, 200, (6, 10)),
            green: Slider::new(0, 255, 100, (6, 50)),
            blue: Slider::new(0, 255, 200, (6, 90)),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }

    pub fn slider(&self, channel: Channel) -> &Slider {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    fn slider_mut(&mut self, channel: Channel) -> &mut Slider {
        match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
        }
    }

    /// Move a slider; out-of-range values are clamped.
    pub fn set_channel(&mut self, channel: Channel, value: i32) {
        self.slider_mut(channel).set_value(value);
    }

    pub fn color(&self) -> Rgb {
        Rgb::new(self.red.value(), self.green.value(), self.blue.value())
    }

    /// Gray level that stays readable on top of the current color.
    pub fn label_gray(&self) -> u8 {
        let sum = self.red.value() as u16 + self.green.value() as u16 + self.blue.value() as u16;
        255 - (sum / 3) as u8
    }

    pub fn initialize(&mut self) {
        self.engine.create_surface(PICKER_SIZE, PICKER_SIZE);
    }

    /// Paint the mixed color and one label per channel below its slider.
    pub fn render(&mut self) {
        self.engine.fill_background(self.color());
        self.engine.set_fill(Some(Rgb::gray(self.label_gray())));
        for channel in Channel::ALL {
            let slider = *self.slider(channel);
            let text = format!("{}: {}", channel.label(), slider.value());
            let position = Vec2::new(10.0, (slider.position.1 + 32) as f32);
            self.engine.draw_text(&text, position);
        }
    }

    /// Report the current color.
    pub fn on_pointer_released(&mut self) -> Rgb {
        let c = self.color();
        info!("color val: ({},{},{})", c.r, c.g, c.b);
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Canvas, DrawCommand};

    #[test]
    fn defaults_match_initial_mix() {
        let picker = ColorPicker::new(Canvas::default());
        assert_eq!(picker.color(), Rgb::new(200, 100, 200));
        assert_eq!(picker.slider(Channel::Green).position, (6, 50));
    }

    #[test]
    fn set_channel_clamps() {
        let mut picker = ColorPicker::new(Canvas::default());
        picker.set_channel(Channel::Red, 300);
        picker.set_channel(Channel::Blue, -5);
        assert_eq!(picker.color(), Rgb::new(255, 100, 0));
    }

    #[test]
    fn render_draws_background_and_labels() {
        let mut picker = ColorPicker::new(Canvas::default());
        picker.initialize();
        picker.set_channel(Channel::Green, 0);
        picker.render();

        let canvas = picker.engine();
        assert_eq!(canvas.surface_size(), Some((400, 400)));
        assert_eq!(canvas.background(), Some(Rgb::new(200, 0, 200)));

        let labels: Vec<(String, Vec2, Option<Rgb>)> = canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text {
                    text,
                    position,
                    fill,
                } => Some((text.clone(), *position, *fill)),
                _ => None,
            })
            .collect();
        // 255 - (200 + 0 + 200) / 3
        let gray = Some(Rgb::gray(122));
        assert_eq!(
            labels,
            vec![
                ("Red: 200".to_string(), Vec2::new(10.0, 42.0), gray),
                ("Green: 0".to_string(), Vec2::new(10.0, 82.0), gray),
                ("Blue: 200".to_string(), Vec2::new(10.0, 122.0), gray),
            ]
        );
    }

    #[test]
    fn pickers_do_not_share_state() {
        let mut a = ColorPicker::new(Canvas::default());
        let b = ColorPicker::new(Canvas::default());
        a.set_channel(Channel::Red, 1);
        assert_eq!(a.color().r, 1);
        assert_eq!(b.color().r, 200);
    }

    #[test]
    fn release_reports_color() {
        let mut picker = ColorPicker::new(Canvas::default());
        picker.set_channel(Channel::Blue, 17);
        assert_eq!(picker.on_pointer_released(), Rgb::new(200, 100, 17));
    }
}
