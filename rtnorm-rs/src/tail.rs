//! Rejection samplers for the tails and for narrow intervals.

use tracing::trace;

use crate::source::GaussianSource;

/// Standard normal truncated to `[a, b]` from a shifted exponential proposal.
///
/// The proposal has rate `a` and starts at `a`, so the acceptance ratio is
/// `exp(-(x - a)^2 / 2)`. Expected cost is small whenever `a` sits far out in
/// a tail or `[a, b]` is narrow. Requires `a < b` and `|a| <= |b|`.
pub fn exponential<G: GaussianSource + ?Sized>(rng: &mut G, a: f64, b: f64) -> f64 {
    let twoasq = 2.0 * a * a;
    if !twoasq.is_normal() {
        // rate ~ 0: the proposal degenerates to a point mass at a
        return uniform(rng, a, b);
    }

    let expab = (-a * (b - a)).exp_m1();
    loop {
        let z = (rng.uniform() * expab).ln_1p();
        let e = -rng.uniform().ln();
        if twoasq * e > z * z {
            let r = a - z / a;
            // exact in real arithmetic; rounding can land a hair past b
            if r >= a && r <= b {
                return r;
            }
        }
    }
}

/// Standard normal truncated to a bounded `[a, b]` near the mode, from a
/// uniform proposal. The acceptance ratio `exp(-x^2 / 2)` never exceeds one.
fn uniform<G: GaussianSource + ?Sized>(rng: &mut G, a: f64, b: f64) -> f64 {
    trace!(a, b, "uniform proposal for a vanishing exponential rate");
    let d = b - a;
    loop {
        let x = a + d * rng.uniform();
        let e = -rng.uniform().ln();
        if x * x <= 2.0 * e && x >= a && x <= b {
            return x;
        }
    }
}

/// Standard normal truncated to `[a, b]` by redrawing until a sample lands in
/// the interval. Only worthwhile when `[a, b]` already holds most of the mass.
pub fn gaussian<G: GaussianSource + ?Sized>(rng: &mut G, a: f64, b: f64) -> f64 {
    loop {
        let r = rng.standard_normal();
        if r >= a && r <= b {
            return r;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::density::{ln_mass, std_cdf};
    use rand::{SeedableRng, rngs::StdRng};

    fn empirical_mean(n: usize, mut draw: impl FnMut() -> f64) -> f64 {
        (0..n).map(|_| draw()).sum::<f64>() / n as f64
    }

    /// `E[X]` for a standard normal truncated to `[a, b]`.
    fn truncated_mean(a: f64, b: f64) -> f64 {
        let pdf = |x: f64| (-0.5 * x * x).exp() / (2.0 * std::f64::consts::PI).sqrt();
        (pdf(a) - pdf(b)) / ln_mass(a, b).exp()
    }

    #[test]
    fn test_exponential_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for &(a, b) in &[(4.0, 5.0), (3.6, f64::INFINITY), (10.0, 10.001), (-0.001, 0.0015)] {
            for _ in 0..10000 {
                let x = exponential(&mut rng, a, b);
                assert!(x >= a && x <= b, "{} outside [{}, {}]", x, a, b);
            }
        }
    }

    #[test]
    fn test_exponential_tail_mean() {
        let mut rng = StdRng::seed_from_u64(7);
        let (a, b) = (4.0, 5.0);
        let mean = empirical_mean(100000, || exponential(&mut rng, a, b));
        let expected = truncated_mean(a, b);
        assert!(
            (mean - expected).abs() < 0.005,
            "Mean should be close to {}, got {}",
            expected,
            mean
        );
    }

    #[test]
    fn test_exponential_tail_cdf() {
        let mut rng = StdRng::seed_from_u64(11);
        let (a, b) = (3.7, 4.5);
        let q = 3.9;
        let n = 100000;
        let below = (0..n).filter(|_| exponential(&mut rng, a, b) < q).count();
        let expected = (std_cdf(-a) - std_cdf(-q)) / (std_cdf(-a) - std_cdf(-b));
        let got = below as f64 / n as f64;
        assert!((got - expected).abs() < 0.01, "P(X < {}) = {}, expected {}", q, got, expected);
    }

    #[test]
    fn test_exponential_zero_rate() {
        let mut rng = StdRng::seed_from_u64(3);
        for &(a, b) in &[(0.0, 1e-6), (1e-200, 1e-3), (0.0, 0.002)] {
            let mean = empirical_mean(20000, || {
                let x = exponential(&mut rng, a, b);
                assert!(x >= a && x <= b, "{} outside [{}, {}]", x, a, b);
                x
            });
            // the density is nearly flat over such short intervals
            let mid = 0.5 * (a + b);
            assert!((mean - mid).abs() < 0.02 * (b - a), "mean {} far from {}", mean, mid);
        }
    }

    #[test]
    fn test_gaussian_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let (a, b) = (-2.5, 3.0);
        for _ in 0..10000 {
            let x = gaussian(&mut rng, a, b);
            assert!(x >= a && x <= b);
        }
    }

    #[test]
    fn test_gaussian_mean() {
        let mut rng = StdRng::seed_from_u64(5);
        let (a, b) = (-2.5, 3.0);
        let mean = empirical_mean(100000, || gaussian(&mut rng, a, b));
        let expected = truncated_mean(a, b);
        assert!(
            (mean - expected).abs() < 0.015,
            "Mean should be close to {}, got {}",
            expected,
            mean
        );
    }
}
