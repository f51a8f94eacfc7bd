//! A strategy bound to its own engine and surface.
use glam::Vec2;
use tracing::{debug, warn};

use crate::engine::{Engine, Rgb};
use crate::error::{Error, Result};
use crate::events::{EventSink, SketchEvent};
use crate::gate::inside_surface;
use crate::sketch::config::SketchConfig;
use crate::sketch::seed::SeedPool;
use crate::sketch::strategy::{
    Layout, Source, Strategy, DOT_DIAMETER, GRID_CELLS, NOISE_OFFSET_X, NOISE_OFFSET_Y,
    NOISE_STEP,
};

/// Background every distribution sketch clears to.
pub const BACKGROUND: Rgb = Rgb::new(220, 20, 120);

/// Summary of a single rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    /// Ellipses drawn in this frame.
    pub primitives: usize,
    /// One-based frame counter of the sketch.
    pub frame: u64,
}

/// Outcome of a pointer release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// The release fell outside the surface; nothing happened.
    Ignored,
    /// The sketch redrew once, after reseeding the noise field if it has one.
    Redrawn {
        seed: Option<u32>,
        summary: RenderSummary,
    },
}

/// A drawing unit for one [`Strategy`].
///
/// Frames are drawn on demand only: once by the host after [`Sketch::initialize`],
/// then once per qualifying [`Sketch::on_pointer_released`].
pub struct Sketch<E: Engine> {
    engine: E,
    strategy: Strategy,
    width: u32,
    seed_pool: SeedPool,
    seed_cursor: usize,
    initialized: bool,
    frame: u64,
}

impl<E: Engine> Sketch<E> {
    /// Bind `strategy` to `engine`, validating `config` first.
    ///
    /// Noise strategies seed the engine's noise field with the first pool entry.
    pub fn try_new(engine: E, strategy: Strategy, config: SketchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(engine, strategy, config))
    }

    /// Bind `strategy` to `engine` with a square surface of `width` pixels.
    pub fn new(engine: E, strategy: Strategy, width: u32) -> Self {
        debug_assert!(width > 0, "width must be > 0");
        Self::from_config(engine, strategy, SketchConfig::new(width))
    }

    fn from_config(mut engine: E, strategy: Strategy, config: SketchConfig) -> Self {
        let seed_pool = config
            .seed_pool
            .unwrap_or_else(|| SeedPool::for_strategy(strategy));
        if strategy.is_noise() {
            engine.set_noise_seed(seed_pool.get(0));
        }
        Self {
            engine,
            strategy,
            width: config.width,
            seed_pool,
            seed_cursor: 0,
            initialized: false,
            frame: 0,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface extent; sketches are always square.
    pub fn extent(&self) -> Vec2 {
        Vec2::splat(self.width as f32)
    }

    pub fn seed_pool(&self) -> &SeedPool {
        &self.seed_pool
    }

    /// Seed currently applied to the noise field, `None` for non-noise strategies.
    pub fn current_seed(&self) -> Option<u32> {
        self.strategy
            .is_noise()
            .then(|| self.seed_pool.get(self.seed_cursor))
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Allocate the surface and configure one-shot redraws. Repeated calls are ignored.
    pub fn initialize(&mut self) {
        self.initialize_with_events(&mut ());
    }

    pub fn initialize_with_events(&mut self, sink: &mut dyn EventSink) {
        if self.initialized {
            warn!("Sketch '{}' is already initialized.", self.strategy);
            return;
        }

        self.engine.create_surface(self.width, self.width);
        self.engine.disable_continuous_redraw();
        match self.strategy.layout {
            Layout::Single => self.engine.set_fill(None),
            Layout::Scattered => {}
            Layout::Grid => self.engine.set_stroke(None),
        }
        self.initialized = true;

        sink.send(SketchEvent::Initialized {
            strategy: self.strategy,
            width: self.width,
        });
    }

    /// Clear the surface and draw one frame.
    pub fn render(&mut self) -> Result<RenderSummary> {
        self.render_with_events(&mut ())
    }

    pub fn render_with_events(&mut self, sink: &mut dyn EventSink) -> Result<RenderSummary> {
        if !self.initialized {
            return Err(Error::NotInitialized {
                name: self.strategy.name(),
            });
        }

        self.engine.fill_background(BACKGROUND);
        let source = self.strategy.source;
        let primitives = match self.strategy.layout {
            Layout::Single => draw_single(&mut self.engine, source, self.width),
            Layout::Scattered => draw_scattered(&mut self.engine, source, self.width),
            Layout::Grid => draw_grid(&mut self.engine, source, self.width),
        };
        self.frame += 1;

        debug!(
            "Rendered frame {} of '{}' with {} ellipses.",
            self.frame, self.strategy, primitives
        );
        let summary = RenderSummary {
            primitives,
            frame: self.frame,
        };
        sink.send(SketchEvent::Rendered {
            strategy: self.strategy,
            primitives,
            frame: self.frame,
        });
        Ok(summary)
    }

    /// Handle a pointer release at `position` in surface coordinates.
    ///
    /// Releases strictly inside the surface advance the seed pool (noise
    /// strategies only) and trigger exactly one render.
    pub fn on_pointer_released(&mut self, position: Vec2) -> Result<Interaction> {
        self.on_pointer_released_with_events(position, &mut ())
    }

    pub fn on_pointer_released_with_events(
        &mut self,
        position: Vec2,
        sink: &mut dyn EventSink,
    ) -> Result<Interaction> {
        if !inside_surface(position, self.extent()) {
            sink.send(SketchEvent::InteractionIgnored {
                strategy: self.strategy,
                position,
            });
            return Ok(Interaction::Ignored);
        }

        let seed = if self.strategy.is_noise() {
            self.seed_cursor = (self.seed_cursor + 1) % self.seed_pool.len();
            let seed = self.seed_pool.get(self.seed_cursor);
            self.engine.set_noise_seed(seed);
            sink.send(SketchEvent::Reseeded {
                strategy: self.strategy,
                seed,
            });
            Some(seed)
        } else {
            None
        };

        self.engine.request_single_redraw();
        let summary = self.render_with_events(sink)?;
        Ok(Interaction::Redrawn { seed, summary })
    }
}

fn draw_single<E: Engine + ?Sized>(engine: &mut E, source: Source, width: u32) -> usize {
    let w = width as f32;
    let center = Vec2::splat(w / 2.0);
    let count = Layout::Single.primitive_count(width);
    for i in 0..count {
        let d = match source {
            Source::Uniform => engine.uniform_random(0.0, w),
            Source::Gaussian => engine.gaussian_random(0.0, w),
            Source::Noise => w * engine.noise_1d(i as f32 / NOISE_STEP),
        };
        engine.draw_ellipse(center, Vec2::splat(d));
    }
    count
}

fn draw_scattered<E: Engine + ?Sized>(engine: &mut E, source: Source, width: u32) -> usize {
    let (w, h) = (width as f32, width as f32);
    let count = Layout::Scattered.primitive_count(width);
    for i in 0..count {
        let center = match source {
            Source::Uniform => {
                let x = engine.uniform_random(0.0, w);
                let y = engine.uniform_random(0.0, h);
                Vec2::new(x, y)
            }
            Source::Gaussian => {
                let x = engine.gaussian_random(w / 2.0, w / 6.0);
                let y = engine.gaussian_random(h / 2.0, h / 6.0);
                Vec2::new(x, y)
            }
            Source::Noise => {
                let t = i as f32 / NOISE_STEP;
                let x = w * engine.noise_1d(NOISE_OFFSET_X + t);
                let y = h * engine.noise_1d(NOISE_OFFSET_Y + t);
                Vec2::new(x, y)
            }
        };
        engine.draw_ellipse(center, Vec2::splat(DOT_DIAMETER));
    }
    count
}

fn draw_grid<E: Engine + ?Sized>(engine: &mut E, source: Source, width: u32) -> usize {
    let cell = width as f32 / GRID_CELLS as f32;
    for gx in 0..GRID_CELLS {
        let x = (gx as f32 + 0.5) * cell;
        for gy in 0..GRID_CELLS {
            let y = (gy as f32 + 0.5) * cell;
            let d = match source {
                Source::Uniform => engine.uniform_random(0.2 * cell, 0.8 * cell),
                Source::Gaussian => engine.gaussian_random(0.0, cell / 3.0),
                Source::Noise => cell * engine.noise_at(x / NOISE_STEP, y / NOISE_STEP),
            };
            engine.draw_ellipse(Vec2::new(x, y), Vec2::splat(d));
        }
    }
    Layout::Grid.primitive_count(width)
}
