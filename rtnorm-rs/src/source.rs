//! The random capability the samplers draw from.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Source of independent uniform and standard-normal variates.
///
/// Every [`rand::Rng`] is a source: uniforms come from `Rng::random` and
/// normals from the ziggurat sampler in [`rand_distr::StandardNormal`].
/// Implement it directly to drive the samplers from a scripted or
/// instrumented generator.
pub trait GaussianSource {
    /// Uniform variate in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Standard normal variate.
    fn standard_normal(&mut self) -> f64;
}

impl<R: Rng + ?Sized> GaussianSource for R {
    #[inline]
    fn uniform(&mut self) -> f64 {
        self.random::<f64>()
    }

    #[inline]
    fn standard_normal(&mut self) -> f64 {
        StandardNormal.sample(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let u = rng.uniform();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_standard_normal() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        let n = 10000;

        for _ in 0..n {
            let x = rng.standard_normal();
            sum += x;
            sum_sq += x * x;
        }

        let mean = sum / n as f64;
        let variance = sum_sq / n as f64 - mean * mean;

        assert!(mean.abs() < 0.1, "Mean should be close to 0, got {}", mean);
        assert!(
            (variance - 1.0).abs() < 0.1,
            "Variance should be close to 1, got {}",
            variance
        );
    }
}
