//! Scalar random draws used by the software engine.
//!
//! Everything here is built on a bare [`Rng`] so that the same draws can be
//! reproduced from any seeded generator.
use rand::Rng;

/// Generate a random float in the range [0, 1].
///
/// The top 128 values of `next_u32` round up to exactly 1.0.
#[inline]
pub fn rand01(rng: &mut dyn Rng) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

/// Draw from `Uniform(low, high)`, both bounds inclusive. Reversed bounds span the same interval.
#[inline]
pub fn uniform(rng: &mut dyn Rng, low: f32, high: f32) -> f32 {
    low + rand01(rng) * (high - low)
}

/// Normal-distributed draws using the polar Box-Muller method.
///
/// Each accepted pair yields two independent values; the second one is kept
/// and returned by the next call, so a generator seeded the same way always
/// produces the same sequence.
#[derive(Debug, Clone, Default)]
pub struct GaussianSampler {
    spare: Option<f32>,
}

impl GaussianSampler {
    pub fn new() -> Self {
        Self { spare: None }
    }

    /// Discard the cached second value of the last pair.
    pub fn reset(&mut self) {
        self.spare = None;
    }

    /// Draw from `Normal(mean, std_dev)`.
    pub fn sample(&mut self, rng: &mut dyn Rng, mean: f32, std_dev: f32) -> f32 {
        if let Some(z) = self.spare.take() {
            return mean + z * std_dev;
        }

        loop {
            let x = rand01(rng) * 2.0 - 1.0;
            let y = rand01(rng) * 2.0 - 1.0;
            let s = x * x + y * y;
            if s >= 1.0 || s == 0.0 {
                continue;
            }
            let k = (-2.0 * s.ln() / s).sqrt();
            self.spare = Some(y * k);
            return mean + x * k * std_dev;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    struct FixedRng {
        value: u32,
    }

    impl rand::TryRng for FixedRng {
        type Error = core::convert::Infallible;

        fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
            Ok(self.value)
        }

        fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
            Ok(self.value as u64)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Self::Error> {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 4];
            }
            Ok(())
        }
    }

    #[test]
    fn rand01_returns_zero_for_zero_input() {
        let mut rng = FixedRng { value: 0 };
        assert_eq!(rand01(&mut rng), 0.0);
    }

    #[test]
    fn rand01_values_in_range() {
        for value in [0, 1, 1000, u32::MAX / 2, u32::MAX - 1, u32::MAX] {
            let mut rng = FixedRng { value };
            let result = rand01(&mut rng);
            assert!(
                (0.0..=1.0).contains(&result),
                "rand01({}) = {} is out of range [0,1]",
                value,
                result
            );
        }
    }

    #[test]
    fn rand01_reaches_one_for_top_values() {
        let mut rng = FixedRng { value: u32::MAX };
        assert_eq!(rand01(&mut rng), 1.0);
        let mut rng = FixedRng { value: u32::MAX };
        assert_eq!(uniform(&mut rng, 0.0, 40.0), 40.0);
    }

    #[test]
    fn uniform_maps_midpoint() {
        let mut rng = FixedRng {
            value: u32::MAX / 2,
        };
        let v = uniform(&mut rng, 10.0, 20.0);
        assert!((v - 15.0).abs() < 0.01);
    }

    #[test]
    fn uniform_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = uniform(&mut rng, 2.0, 8.0);
            assert!((2.0..=8.0).contains(&v));
        }
    }

    #[test]
    fn gaussian_moments_are_close() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut sampler = GaussianSampler::new();
        let n = 20_000;
        let draws: Vec<f32> = (0..n)
            .map(|_| sampler.sample(&mut rng, 50.0, 10.0))
            .collect();
        let mean = draws.iter().sum::<f32>() / n as f32;
        let var = draws.iter().map(|d| (d - mean).powi(2)).sum::<f32>() / n as f32;
        assert!((mean - 50.0).abs() < 0.5, "mean = {mean}");
        assert!((var.sqrt() - 10.0).abs() < 0.5, "std = {}", var.sqrt());
    }

    #[test]
    fn gaussian_is_deterministic_for_same_seed() {
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);
        let mut sa = GaussianSampler::new();
        let mut sb = GaussianSampler::new();
        for _ in 0..16 {
            assert_eq!(sa.sample(&mut a, 0.0, 1.0), sb.sample(&mut b, 0.0, 1.0));
        }
    }

    #[test]
    fn zero_std_dev_returns_mean() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut sampler = GaussianSampler::new();
        assert_eq!(sampler.sample(&mut rng, 4.0, 0.0), 4.0);
        assert_eq!(sampler.sample(&mut rng, 4.0, 0.0), 4.0);
    }
}
