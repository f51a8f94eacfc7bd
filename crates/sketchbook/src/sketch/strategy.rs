//! Distribution strategies: a spatial layout paired with a randomness source.
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Number of lattice cells per axis for [`Layout::Grid`].
pub const GRID_CELLS: u32 = 12;
/// Diameter of the scattered dots of [`Layout::Scattered`], in pixels.
pub const DOT_DIAMETER: f32 = 16.0;
/// Noise lookups advance by `index / NOISE_STEP` per primitive.
pub const NOISE_STEP: f32 = 100.0;
/// Offset of the x-axis noise track of [`Layout::Scattered`].
pub const NOISE_OFFSET_X: f32 = 1010.0;
/// Offset of the y-axis noise track of [`Layout::Scattered`].
pub const NOISE_OFFSET_Y: f32 = 2020.0;

/// Spatial arrangement of the drawn ellipses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Layout {
    /// Concentric circles around the surface center with random diameters.
    Single,
    /// Fixed-size dots with random centers.
    Scattered,
    /// One circle per cell of a 12x12 lattice with random diameters.
    Grid,
}

impl Layout {
    /// Number of ellipses drawn per frame on a surface of `width` pixels.
    pub fn primitive_count(self, width: u32) -> usize {
        match self {
            Layout::Single => width.div_ceil(4) as usize,
            Layout::Scattered => width as usize,
            Layout::Grid => (GRID_CELLS * GRID_CELLS) as usize,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Layout::Single => "1d",
            Layout::Scattered => "2d",
            Layout::Grid => "grid",
        }
    }
}

/// Where the per-primitive values come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Source {
    Uniform,
    Gaussian,
    /// Coherent noise; the only source with reseedable state.
    Noise,
}

impl Source {
    fn prefix(self) -> &'static str {
        match self {
            Source::Uniform => "random",
            Source::Gaussian => "gauss",
            Source::Noise => "noise",
        }
    }
}

/// An immutable (layout, source) pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Strategy {
    pub layout: Layout,
    pub source: Source,
}

impl Strategy {
    pub const RANDOM_1D: Strategy = Strategy::new(Layout::Single, Source::Uniform);
    pub const GAUSS_1D: Strategy = Strategy::new(Layout::Single, Source::Gaussian);
    pub const NOISE_1D: Strategy = Strategy::new(Layout::Single, Source::Noise);
    pub const RANDOM_2D: Strategy = Strategy::new(Layout::Scattered, Source::Uniform);
    pub const GAUSS_2D: Strategy = Strategy::new(Layout::Scattered, Source::Gaussian);
    pub const NOISE_2D: Strategy = Strategy::new(Layout::Scattered, Source::Noise);
    pub const RANDOM_GRID: Strategy = Strategy::new(Layout::Grid, Source::Uniform);
    pub const GAUSS_GRID: Strategy = Strategy::new(Layout::Grid, Source::Gaussian);
    pub const NOISE_GRID: Strategy = Strategy::new(Layout::Grid, Source::Noise);

    /// All nine strategies, layout-major.
    pub const ALL: [Strategy; 9] = [
        Strategy::RANDOM_1D,
        Strategy::GAUSS_1D,
        Strategy::NOISE_1D,
        Strategy::RANDOM_2D,
        Strategy::GAUSS_2D,
        Strategy::NOISE_2D,
        Strategy::RANDOM_GRID,
        Strategy::GAUSS_GRID,
        Strategy::NOISE_GRID,
    ];

    pub const fn new(layout: Layout, source: Source) -> Self {
        Self { layout, source }
    }

    pub fn is_noise(self) -> bool {
        self.source == Source::Noise
    }

    /// Short name such as `noise1d` or `gaussgrid`.
    pub fn name(self) -> String {
        format!("{}{}", self.source.prefix(), self.layout.suffix())
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source.prefix())?;
        f.write_str(self.layout.suffix())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownStrategy { name: s.to_owned() })
    }
}
