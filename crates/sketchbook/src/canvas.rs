//! Software [`Engine`] that records the current frame as a display list.
//!
//! A [`Canvas`] keeps only the commands issued since the last
//! [`Engine::fill_background`], which is exactly what is visible on the surface.
//! Rasterizing the list is left to the caller.
use glam::Vec2;
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::engine::{Engine, Rgb};
use crate::random::{uniform, GaussianSampler};

/// Octaves summed by the noise field.
pub const NOISE_OCTAVES: usize = 4;
/// Amplitude falloff per octave.
pub const NOISE_FALLOFF: f64 = 0.5;

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background(Rgb),
    Ellipse {
        center: Vec2,
        /// Always non-negative.
        diameter: Vec2,
        fill: Option<Rgb>,
        stroke: Option<Rgb>,
    },
    Text {
        text: String,
        position: Vec2,
        fill: Option<Rgb>,
    },
}

/// Recording engine with a seeded generator and a seeded fractal noise field.
pub struct Canvas {
    size: Option<(u32, u32)>,
    fill: Option<Rgb>,
    stroke: Option<Rgb>,
    commands: Vec<DrawCommand>,
    rng: StdRng,
    gaussian: GaussianSampler,
    noise: Fbm<Perlin>,
    noise_seed: u32,
    looping: bool,
    redraw_requests: usize,
    frames: usize,
}

impl Canvas {
    /// Create a canvas whose random draws are seeded with `seed`. The noise field starts at seed 0.
    pub fn new(seed: u64) -> Self {
        Self {
            size: None,
            fill: Some(Rgb::WHITE),
            stroke: Some(Rgb::BLACK),
            commands: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            gaussian: GaussianSampler::new(),
            noise: build_noise(0),
            noise_seed: 0,
            looping: true,
            redraw_requests: 0,
            frames: 0,
        }
    }

    /// Commands visible on the surface, oldest first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of ellipses in the current frame.
    pub fn ellipse_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Ellipse { .. }))
            .count()
    }

    /// Background of the current frame, if one was filled.
    pub fn background(&self) -> Option<Rgb> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Background(color) => Some(*color),
            _ => None,
        })
    }

    /// Number of background fills since creation.
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn noise_seed(&self) -> u32 {
        self.noise_seed
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn redraw_requests(&self) -> usize {
        self.redraw_requests
    }

    pub fn fill(&self) -> Option<Rgb> {
        self.fill
    }

    pub fn stroke(&self) -> Option<Rgb> {
        self.stroke
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(0)
    }
}

fn build_noise(seed: u32) -> Fbm<Perlin> {
    Fbm::<Perlin>::new(seed)
        .set_octaves(NOISE_OCTAVES)
        .set_persistence(NOISE_FALLOFF)
}

impl Engine for Canvas {
    fn create_surface(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            warn!("Creating an empty {}x{} surface.", width, height);
        }
        self.size = Some((width, height));
        self.commands.clear();
    }

    fn surface_size(&self) -> Option<(u32, u32)> {
        self.size
    }

    fn fill_background(&mut self, color: Rgb) {
        self.commands.clear();
        self.commands.push(DrawCommand::Background(color));
        self.frames += 1;
    }

    fn set_fill(&mut self, fill: Option<Rgb>) {
        self.fill = fill;
    }

    fn set_stroke(&mut self, stroke: Option<Rgb>) {
        self.stroke = stroke;
    }

    fn draw_ellipse(&mut self, center: Vec2, diameter: Vec2) {
        self.commands.push(DrawCommand::Ellipse {
            center,
            diameter: diameter.abs(),
            fill: self.fill,
            stroke: self.stroke,
        });
    }

    fn draw_text(&mut self, text: &str, position: Vec2) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            position,
            fill: self.fill,
        });
    }

    fn uniform_random(&mut self, low: f32, high: f32) -> f32 {
        uniform(&mut self.rng, low, high)
    }

    fn gaussian_random(&mut self, mean: f32, std_dev: f32) -> f32 {
        self.gaussian.sample(&mut self.rng, mean, std_dev)
    }

    fn noise_at(&mut self, x: f32, y: f32) -> f32 {
        let v = self.noise.get([x as f64, y as f64]);
        ((v * 0.5 + 0.5) as f32).clamp(0.0, 1.0)
    }

    fn set_noise_seed(&mut self, seed: u32) {
        debug!("Reseeding noise field with {}.", seed);
        self.noise_seed = seed;
        self.noise = build_noise(seed);
    }

    fn disable_continuous_redraw(&mut self) {
        self.looping = false;
    }

    fn request_single_redraw(&mut self) {
        self.redraw_requests += 1;
    }
}
