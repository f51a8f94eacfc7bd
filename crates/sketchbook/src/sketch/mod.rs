//! Point-distribution sketches.
//!
//! A [`Strategy`] pairs a [`Layout`] with a [`Source`]; binding it to an
//! [`crate::engine::Engine`] yields a [`Sketch`] with three callbacks:
//! [`Sketch::initialize`], [`Sketch::render`] and [`Sketch::on_pointer_released`].
pub mod config;
pub mod factory;
pub mod instance;
pub mod seed;
pub mod strategy;

pub use config::SketchConfig;
pub use factory::{
    gauss_1d, gauss_2d, gauss_grid, noise_1d, noise_2d, noise_grid, random_1d, random_2d,
    random_grid,
};
pub use instance::{Interaction, RenderSummary, Sketch, BACKGROUND};
pub use seed::{SeedPool, DEFAULT_SEEDS, NOISE_1D_SEEDS};
pub use strategy::{Layout, Source, Strategy};
