//! Standard normal density, distribution function and truncated mass.
//!
//! The truncated density `φ(x) / Z` needs `Z = Φ(b) - Φ(a)` to full relative
//! precision for intervals anywhere on the line, including ones so far out
//! in a tail that `Z` itself underflows. Everything here therefore works with
//! `ln Z`.

use std::f64::consts::FRAC_1_SQRT_2;

use crate::constants::{ALPHA, FRAC_1_SQRT_2PI};

/// Above this the survival function comes from its asymptotic series.
const SF_ASYMPTOTIC: f64 = 30.0;

/// 5-point Gauss-Legendre nodes and weights on `[-1, 1]`.
const GL_NODES: [f64; 5] = [
    -0.906_179_845_938_664,
    -0.538_469_310_105_683_1,
    0.0,
    0.538_469_310_105_683_1,
    0.906_179_845_938_664,
];
const GL_WEIGHTS: [f64; 5] = [
    0.236_926_885_056_189_1,
    0.478_628_670_499_366_5,
    0.568_888_888_888_888_9,
    0.478_628_670_499_366_5,
    0.236_926_885_056_189_1,
];

/// `φ(x) = exp(-x²/2) / sqrt(2π)`
#[inline]
pub fn std_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

/// `ln φ(x)`
#[inline]
pub fn ln_std_pdf(x: f64) -> f64 {
    -0.5 * (x * x + ALPHA)
}

/// `Φ(x) = erfc(-x / sqrt(2)) / 2`
#[inline]
pub fn std_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x * FRAC_1_SQRT_2)
}

/// `ln(1 - Φ(x))`, finite for every finite `x`.
pub fn ln_std_sf(x: f64) -> f64 {
    if x == f64::INFINITY {
        return f64::NEG_INFINITY;
    }
    if x < SF_ASYMPTOTIC {
        return (0.5 * libm::erfc(x * FRAC_1_SQRT_2)).ln();
    }
    // Mills ratio: 1 - 1/x² + 3/x⁴ - 15/x⁶ + 105/x⁸
    let r = 1.0 / (x * x);
    let series = 1.0 - r * (1.0 - 3.0 * r * (1.0 - 5.0 * r * (1.0 - 7.0 * r)));
    ln_std_pdf(x) - x.ln() + series.ln()
}

/// Intervals short enough that quadrature beats differencing `Φ`.
#[inline]
pub(crate) fn is_narrow(a: f64, b: f64) -> bool {
    let w = b - a;
    w.is_finite() && w * (a.abs().max(b.abs()) + w) <= 1.0
}

/// Point of `[a, b]` where `φ` peaks.
#[inline]
fn peak(a: f64, b: f64) -> f64 {
    0.0f64.clamp(a, b)
}

/// `∫ f(x) φ(x) / φ(c) dx` over a narrow `[a, b]`, with `c` the peak.
fn quadrature(a: f64, b: f64, f: impl Fn(f64) -> f64) -> f64 {
    let c = peak(a, b);
    let half = 0.5 * (b - a);
    let mid = 0.5 * (a + b);
    let sum: f64 = GL_NODES
        .iter()
        .zip(GL_WEIGHTS.iter())
        .map(|(&t, &w)| {
            let x = mid + half * t;
            w * f(x) * (-0.5 * (x - c) * (x + c)).exp()
        })
        .sum();
    half * sum
}

/// `ln(Φ(b) - Φ(a))` for `a < b`.
pub fn ln_mass(a: f64, b: f64) -> f64 {
    if is_narrow(a, b) {
        return ln_std_pdf(peak(a, b)) + quadrature(a, b, |_| 1.0).ln();
    }
    // fold so the interval reaches into the positive half-line
    let (a, b) = if b <= 0.0 { (-b, -a) } else { (a, b) };
    if a >= 0.0 {
        let (la, lb) = (ln_std_sf(a), ln_std_sf(b));
        la + (-(lb - la).exp()).ln_1p()
    } else {
        (-(std_cdf(a) + std_cdf(-b))).ln_1p()
    }
}

/// Mean and variance of the standard normal truncated to `[a, b]`.
pub fn moments(a: f64, b: f64) -> (f64, f64) {
    if is_narrow(a, b) {
        let mid = 0.5 * (a + b);
        let m0 = quadrature(a, b, |_| 1.0);
        let m1 = quadrature(a, b, |x| x - mid) / m0;
        let m2 = quadrature(a, b, |x| (x - mid) * (x - mid)) / m0;
        return (mid + m1, m2 - m1 * m1);
    }

    let ln_z = ln_mass(a, b);
    // φ(v) / Z and v φ(v) / Z, both zero at an infinite bound
    let ratio = |v: f64| {
        if v.is_infinite() {
            (0.0, 0.0)
        } else {
            let r = (ln_std_pdf(v) - ln_z).exp();
            (r, v * r)
        }
    };
    let (ra, va) = ratio(a);
    let (rb, vb) = ratio(b);
    let mean = ra - rb;
    (mean, 1.0 + va - vb - mean * mean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pdf() {
        assert_relative_eq!(std_pdf(0.0), 0.3989422804014327);
        assert_relative_eq!(std_pdf(1.0), 0.24197072451914337, max_relative = 1e-15);
        assert_relative_eq!(ln_std_pdf(1.5), std_pdf(1.5).ln(), max_relative = 1e-15);
    }

    #[test]
    fn test_cdf() {
        assert_relative_eq!(std_cdf(0.0), 0.5);
        assert_relative_eq!(std_cdf(1.0), 0.8413447460685429, max_relative = 1e-14);
        assert_relative_eq!(std_cdf(-3.0), 0.0013498980316301, max_relative = 1e-12);
    }

    #[test]
    fn test_sf_series_joins_erfc() {
        let x = SF_ASYMPTOTIC;
        let exact = (0.5 * libm::erfc(x * FRAC_1_SQRT_2)).ln();
        let series = ln_std_sf(x + 1e-12);
        assert_relative_eq!(series, exact, max_relative = 1e-10);
        assert!(ln_std_sf(50.0).is_finite());
        assert_eq!(ln_std_sf(f64::INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn test_mass_whole_line() {
        assert_relative_eq!(ln_mass(f64::NEG_INFINITY, f64::INFINITY), 0.0);
        assert_relative_eq!(ln_mass(0.0, f64::INFINITY).exp(), 0.5, max_relative = 1e-15);
    }

    #[test]
    fn test_mass_is_symmetric() {
        for &(a, b) in &[(-1.0, 2.0), (0.5, 6.0), (4.0, 5.0), (0.0, 1e-6), (40.0, 41.0)] {
            assert_relative_eq!(ln_mass(a, b), ln_mass(-b, -a), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_mass_against_cdf() {
        for &(a, b) in &[(-1.0, 2.0), (0.5, 6.0), (-3.0, -1.0), (1.0, 1.5)] {
            let z = std_cdf(b) - std_cdf(a);
            assert_relative_eq!(ln_mass(a, b).exp(), z, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_mass_narrow() {
        // φ is flat to first order over a tiny interval at the mode
        let w = 1e-9;
        assert_relative_eq!(ln_mass(0.0, w), (w * FRAC_1_SQRT_2PI).ln(), max_relative = 1e-12);
        // narrow and far in the tail: Z underflows, ln Z does not
        let l = ln_mass(40.0, 40.001);
        assert!(l.is_finite());
        assert!(l < -700.0);
    }

    #[test]
    fn test_moments_half_normal() {
        let (mean, var) = moments(0.0, f64::INFINITY);
        let expected = (2.0 / std::f64::consts::PI).sqrt();
        assert_relative_eq!(mean, expected, max_relative = 1e-14);
        assert_relative_eq!(var, 1.0 - 2.0 / std::f64::consts::PI, max_relative = 1e-13);
    }

    #[test]
    fn test_moments_symmetric_interval() {
        let (mean, var) = moments(-1.0, 1.0);
        assert_relative_eq!(mean, 0.0, epsilon = 1e-15);
        // 1 - 2 φ(1) / (Φ(1) - Φ(-1))
        assert_relative_eq!(var, 0.2911250947727931, max_relative = 1e-12);
    }

    #[test]
    fn test_moments_narrow() {
        let (mean, var) = moments(0.0, 1e-6);
        assert_relative_eq!(mean, 5e-7, max_relative = 1e-6);
        assert_relative_eq!(var, 1e-12 / 12.0, max_relative = 1e-6);
    }

    #[test]
    fn test_moments_deep_tail() {
        // mean of a tail beyond a is a + 1/a to leading order
        let (mean, var) = moments(20.0, f64::INFINITY);
        assert_relative_eq!(mean, 20.0 + 1.0 / 20.0, max_relative = 1e-4);
        assert!(var > 0.0 && var < 1.0 / 400.0);
    }
}
