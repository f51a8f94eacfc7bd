//! Capability set a sketch needs from its drawing and randomness backend.
//!
//! Sketches never reach for an ambient global: every sketch owns the [`Engine`]
//! it was constructed with and only talks to the surface through this trait.
use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Drawing, styling and randomness primitives backing a sketch.
///
/// Random draws take `&mut self` because the engine owns the generator state.
pub trait Engine {
    /// Allocate (or reallocate) the drawing surface.
    fn create_surface(&mut self, width: u32, height: u32);

    /// Current surface size, `None` before [`Engine::create_surface`].
    fn surface_size(&self) -> Option<(u32, u32)>;

    /// Clear the whole surface to `color`.
    fn fill_background(&mut self, color: Rgb);

    /// Fill color for subsequent shapes and text; `None` disables filling.
    fn set_fill(&mut self, fill: Option<Rgb>);

    /// Outline color for subsequent shapes; `None` disables outlines.
    fn set_stroke(&mut self, stroke: Option<Rgb>);

    /// Draw an axis-aligned ellipse. Negative diameters are drawn by magnitude.
    fn draw_ellipse(&mut self, center: Vec2, diameter: Vec2);

    /// Draw a single line of text with its baseline starting at `position`.
    fn draw_text(&mut self, text: &str, position: Vec2);

    /// Draw from `Uniform(low, high)`.
    fn uniform_random(&mut self, low: f32, high: f32) -> f32;

    /// Draw from `Normal(mean, std_dev)`.
    fn gaussian_random(&mut self, mean: f32, std_dev: f32) -> f32;

    /// Sample the coherent noise field in [0, 1]. One-dimensional lookups pass `y = 0`.
    fn noise_at(&mut self, x: f32, y: f32) -> f32;

    /// Reseed the coherent noise field.
    fn set_noise_seed(&mut self, seed: u32);

    /// Stop the host from redrawing every frame.
    fn disable_continuous_redraw(&mut self);

    /// Ask the host for exactly one redraw.
    fn request_single_redraw(&mut self);

    /// One-dimensional noise lookup.
    fn noise_1d(&mut self, x: f32) -> f32 {
        self.noise_at(x, 0.0)
    }
}

impl<E: Engine + ?Sized> Engine for &mut E {
    fn create_surface(&mut self, width: u32, height: u32) {
        (**self).create_surface(width, height)
    }

    fn surface_size(&self) -> Option<(u32, u32)> {
        (**self).surface_size()
    }

    fn fill_background(&mut self, color: Rgb) {
        (**self).fill_background(color)
    }

    fn set_fill(&mut self, fill: Option<Rgb>) {
        (**self).set_fill(fill)
    }

    fn set_stroke(&mut self, stroke: Option<Rgb>) {
        (**self).set_stroke(stroke)
    }

    fn draw_ellipse(&mut self, center: Vec2, diameter: Vec2) {
        (**self).draw_ellipse(center, diameter)
    }

    fn draw_text(&mut self, text: &str, position: Vec2) {
        (**self).draw_text(text, position)
    }

    fn uniform_random(&mut self, low: f32, high: f32) -> f32 {
        (**self).uniform_random(low, high)
    }

    fn gaussian_random(&mut self, mean: f32, std_dev: f32) -> f32 {
        (**self).gaussian_random(mean, std_dev)
    }

    fn noise_at(&mut self, x: f32, y: f32) -> f32 {
        (**self).noise_at(x, y)
    }

    fn set_noise_seed(&mut self, seed: u32) {
        (**self).set_noise_seed(seed)
    }

    fn disable_continuous_redraw(&mut self) {
        (**self).disable_continuous_redraw()
    }

    fn request_single_redraw(&mut self) {
        (**self).request_single_redraw()
    }
}
