//! Construction-time settings of a sketch.
use crate::error::{Error, Result};
use crate::sketch::seed::SeedPool;

/// Configuration for building a [`crate::sketch::Sketch`].
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct SketchConfig {
    /// Surface width (and height) in pixels.
    pub width: u32,
    /// Replaces the strategy's own seed pool when set.
    pub seed_pool: Option<SeedPool>,
}

impl SketchConfig {
    /// Creates a new [`SketchConfig`] for a square surface of `width` pixels.
    pub fn new(width: u32) -> Self {
        Self {
            width,
            seed_pool: None,
        }
    }

    /// Sets the seed pool override.
    pub fn with_seed_pool(mut self, seed_pool: SeedPool) -> Self {
        self.seed_pool = Some(seed_pool);
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::InvalidConfig("width must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_is_invalid() {
        let err = SketchConfig::new(0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(SketchConfig::new(1).validate().is_ok());
    }

    #[test]
    fn builder_sets_seed_pool() {
        let config = SketchConfig::new(64).with_seed_pool(SeedPool::new(vec![1, 2]));
        assert_eq!(config.seed_pool.map(|p| p.len()), Some(2));
    }
}
