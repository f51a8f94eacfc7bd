//! Fixed reseed values cycled through by noise sketches.
use std::sync::Arc;

use crate::sketch::strategy::{Layout, Strategy};

/// Seeds of the single-field noise sketch, applied in order.
pub const NOISE_1D_SEEDS: [u32; 12] = [
    7067, 7031, 1772, 9731, 9622, 7097, 9666, 9688, 9711, 1794, 9710, 9600,
];

/// Pool used when a noise sketch has no pool of its own.
pub const DEFAULT_SEEDS: [u32; 1] = [0];

/// An ordered, read-only list of noise seeds.
///
/// Clones share the same backing slice; the position in the cycle lives in
/// the sketch that uses the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPool {
    seeds: Arc<[u32]>,
}

impl SeedPool {
    /// Build a pool from `seeds`. An empty list falls back to [`DEFAULT_SEEDS`].
    pub fn new(seeds: impl Into<Vec<u32>>) -> Self {
        let seeds: Vec<u32> = seeds.into();
        if seeds.is_empty() {
            return Self::default();
        }
        Self {
            seeds: seeds.into(),
        }
    }

    /// The pool a strategy uses unless configured otherwise.
    pub fn for_strategy(strategy: Strategy) -> Self {
        match strategy.layout {
            Layout::Single if strategy.is_noise() => Self::new(NOISE_1D_SEEDS),
            _ => Self::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    /// Pools are never empty.
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    /// Seed at `index`, wrapping around the end of the pool.
    pub fn get(&self, index: usize) -> u32 {
        self.seeds[index % self.seeds.len()]
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.seeds
    }
}

impl Default for SeedPool {
    fn default() -> Self {
        Self {
            seeds: Arc::from(&DEFAULT_SEEDS[..]),
        }
    }
}
