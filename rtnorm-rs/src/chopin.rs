//! Chopin's table-driven sampler for the bulk of the density.
//!
//! N. Chopin, "Fast simulation of truncated Gaussian distributions",
//! Stat Comput (2011) 21:275-288.
//!
//! Stripes `ka..=kb` have equal area, so drawing a stripe uniformly and then
//! a point uniformly under its upper bound samples the union of rectangles.
//! Most draws land under the lower envelope `yl(k)` and are accepted without
//! evaluating the density. Stripe `N` stands for the tail beyond `xmax`,
//! sampled with an exponential proposal.

use crate::{constants::ALPHA, source::GaussianSource, table::Table};

/// `y < φ(x)`, written without the exponential.
#[inline]
fn under_density(x: f64, y: f64) -> bool {
    x * x + 2.0 * y.ln() + ALPHA < 0.0
}

/// Offset past `lbound` of a standard normal conditioned on `x > lbound`.
///
/// The tail holds exactly one stripe's worth of mass, so it must yield a
/// variate every time it is chosen. Only the test against `b` may send the
/// caller back to pick another stripe.
#[inline]
fn right_tail<G: GaussianSource + ?Sized>(rng: &mut G, lbound: f64) -> f64 {
    // Retry here, not in the stripe loop: one attempt per pick starves the tail
    loop {
        let z = -rng.uniform().ln() / lbound;
        let e = -rng.uniform().ln();
        if z * z <= 2.0 * e {
            return z;
        }
    }
}

/// Standard normal truncated to `[a, b]`, where `ka` and `kb` are the stripes
/// holding `a` and `b` (`kb == N` when `b >= xmax`) and `kb - ka >= kmin`.
pub fn sample<G: GaussianSource + ?Sized>(
    table: &Table,
    rng: &mut G,
    a: f64,
    b: f64,
    ka: usize,
    kb: usize,
) -> f64 {
    let n = table.n();
    let span = (kb - ka + 1) as f64;
    let upper_edge = b < table.xmax();

    loop {
        let k = (rng.uniform() * span).floor() as usize + ka;

        if k == n {
            let lbound = table.xmax();
            let z = right_tail(rng, lbound);
            if z < b - lbound {
                return lbound + z;
            }
        } else if k <= ka + 1 || (k >= kb - 1 && upper_edge) {
            // The two stripes at either end may poke outside [a, b]
            let sim = table.left(k) + table.width(k) * rng.uniform();
            if sim >= a && sim <= b {
                let simy = table.yu(k) * rng.uniform();
                if simy < table.yl(k) || under_density(sim, simy) {
                    return sim;
                }
            }
        } else {
            // Interior stripes lie inside [a, b]
            let u = rng.uniform();
            let yu = table.yu(k);
            let simy = yu * u;
            let d = table.width(k);
            let ylk = table.yl(k);
            if simy < ylk {
                // That's what happens most of the time
                return table.left(k) + u * d * yu / ylk;
            }
            let sim = table.left(k) + d * rng.uniform();
            if under_density(sim, simy) {
                return sim;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{density::std_cdf, dispatch::sample_standard};
    use rand::{SeedableRng, rngs::StdRng};

    fn draw(a: f64, b: f64, n: usize, seed: u64) -> Vec<f64> {
        let table = Table::standard();
        let ka = table.cell(a);
        let kb = if b >= table.xmax() { table.n() } else { table.cell(b) };
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n).map(|_| sample(table, &mut rng, a, b, ka, kb)).collect()
    }

    /// Largest gap between the empirical and exact CDF at a few quantiles.
    fn cdf_error(xs: &[f64], a: f64, b: f64, probes: &[f64]) -> f64 {
        let z = std_cdf(b) - std_cdf(a);
        probes
            .iter()
            .map(|&q| {
                let got = xs.iter().filter(|&&x| x < q).count() as f64 / xs.len() as f64;
                (got - (std_cdf(q) - std_cdf(a)) / z).abs()
            })
            .fold(0.0, f64::max)
    }

    #[test]
    fn test_under_density() {
        let phi = |x: f64| (-0.5 * x * x).exp() / (2.0 * std::f64::consts::PI).sqrt();
        for &x in &[-1.5, 0.0, 0.7, 3.0] {
            assert!(under_density(x, phi(x) * 0.999));
            assert!(!under_density(x, phi(x) * 1.001));
        }
    }

    #[test]
    fn test_stays_in_bounds() {
        for &(a, b) in &[(-1.0, 2.0), (-0.2, 0.3), (1.0, 3.0), (3.0, 3.48)] {
            for x in draw(a, b, 20000, 42) {
                assert!(x >= a && x <= b, "{} outside [{}, {}]", x, a, b);
            }
        }
    }

    #[test]
    fn test_matches_cdf_inside_table() {
        let (a, b) = (-1.0, 2.0);
        let xs = draw(a, b, 200000, 1);
        let err = cdf_error(&xs, a, b, &[-0.5, 0.0, 0.5, 1.0, 1.5]);
        assert!(err < 0.006, "CDF error {}", err);
    }

    #[test]
    fn test_matches_cdf_with_right_tail() {
        // b past xmax brings in the exponential tail stripe
        let (a, b) = (2.5, 7.0);
        let xs = draw(a, b, 200000, 2);
        let xmax = Table::standard().xmax();
        let beyond = xs.iter().filter(|&&x| x > xmax).count() as f64 / xs.len() as f64;
        let expected = (std_cdf(b) - std_cdf(xmax)) / (std_cdf(b) - std_cdf(a));
        assert!(
            (beyond - expected).abs() < 0.0015,
            "tail share {}, expected {}",
            beyond,
            expected
        );
        let err = cdf_error(&xs, a, b, &[2.6, 2.8, 3.0, 3.4, 3.6]);
        assert!(err < 0.006, "CDF error {}", err);
    }

    #[test]
    fn test_reaches_stripe_holding_b() {
        let t = Table::standard();
        let h = 1.0 / t.invh();
        let n = 100000;
        let mut checked = 0;
        for j in (1700..2300).step_by(61) {
            let xj = t.left(j);
            // b late in the quantization bucket that holds x[j], whose
            // left edge lies in stripe j - 1
            let edge = (t.quantize(xj) as f64 + 1.0 - t.i0() as f64) / t.invh();
            let b = edge - 1e-12;
            if b - xj < 0.3 * h {
                continue;
            }
            let a = t.left(j - 8);
            let expected = (std_cdf(b) - std_cdf(xj)) / (std_cdf(b) - std_cdf(a));
            let tol = 5.0 * (expected * (1.0 - expected) / n as f64).sqrt();

            let mut rng = StdRng::seed_from_u64(j as u64);
            let direct = (0..n)
                .filter(|_| sample_standard(t, &mut rng, a, b) >= xj)
                .count() as f64
                / n as f64;
            assert!(
                (direct - expected).abs() < tol,
                "[{}, {}]: share above x[{}] is {}, expected {}",
                a,
                b,
                j,
                direct,
                expected
            );

            // the mirrored interval reaches the same stripe after folding
            let mirrored = (0..n)
                .filter(|_| sample_standard(t, &mut rng, -b, -a) <= -xj)
                .count() as f64
                / n as f64;
            assert!(
                (mirrored - expected).abs() < tol,
                "[{}, {}]: share below {} is {}, expected {}",
                -b,
                -a,
                -xj,
                mirrored,
                expected
            );
            checked += 1;
        }
        assert!(checked >= 3, "only {} stripes checked", checked);
    }

    #[test]
    fn test_unbounded_right() {
        let (a, b) = (0.5, f64::INFINITY);
        let xs = draw(a, b, 100000, 3);
        assert!(xs.iter().all(|&x| x >= a && x.is_finite()));
        let err = cdf_error(&xs, a, b, &[0.75, 1.0, 2.0, 3.0]);
        assert!(err < 0.008, "CDF error {}", err);
    }
}
