//! Choice of sampler for a standardized interval.

use tracing::trace;

use crate::{chopin, source::GaussianSource, table::Table, tail};

/// Sampler regime for an interval with `|a| <= |b|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// `a > xmax`: shifted exponential proposal.
    RightTail,
    /// `a < xmin`: the interval covers most of the mass, so plain normal
    /// draws are redrawn until one lands inside.
    LeftTail,
    /// Both bounds inside the table but fewer than `kmin` stripes apart:
    /// shifted exponential proposal.
    Narrow,
    /// Chopin's table loop over stripes `ka..=kb`.
    Bulk { ka: usize, kb: usize },
}

/// Where an interval is sent, after folding it so that `|a| <= |b|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dispatch {
    pub region: Region,
    /// The interval was mirrored to `(-b, -a)`; the sample must be negated.
    pub folded: bool,
    pub a: f64,
    pub b: f64,
}

impl Dispatch {
    /// Classify standardized bounds `a < b`.
    pub fn new(table: &Table, a: f64, b: f64) -> Self {
        let folded = a.abs() > b.abs();
        let (a, b) = if folded { (-b, -a) } else { (a, b) };
        Self {
            region: classify(table, a, b),
            folded,
            a,
            b,
        }
    }

    /// Draw one standardized variate.
    pub fn sample<G: GaussianSource + ?Sized>(&self, table: &Table, rng: &mut G) -> f64 {
        let (a, b) = (self.a, self.b);
        let r = match self.region {
            Region::RightTail | Region::Narrow => tail::exponential(rng, a, b),
            Region::LeftTail => tail::gaussian(rng, a, b),
            Region::Bulk { ka, kb } => chopin::sample(table, rng, a, b, ka, kb),
        };
        if self.folded { -r } else { r }
    }
}

/// Regime for `a < b` with `|a| <= |b|`.
pub fn classify(table: &Table, a: f64, b: f64) -> Region {
    if a > table.xmax() {
        Region::RightTail
    } else if a < table.xmin() {
        Region::LeftTail
    } else {
        let ka = table.cell(a);
        let kb = if b >= table.xmax() {
            table.n()
        } else {
            table.cell(b)
        };
        if kb.abs_diff(ka) < table.kmin() {
            Region::Narrow
        } else {
            Region::Bulk { ka, kb }
        }
    }
}

/// Standard normal truncated to `[a, b]`, for standardized `a < b`.
pub fn sample_standard<G: GaussianSource + ?Sized>(
    table: &Table,
    rng: &mut G,
    a: f64,
    b: f64,
) -> f64 {
    let dispatch = Dispatch::new(table, a, b);
    trace!(region = ?dispatch.region, folded = dispatch.folded, a, b, "dispatch");
    dispatch.sample(table, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    /// Counts the normal draws of an inner generator.
    struct Counting {
        rng: StdRng,
        normals: usize,
        uniforms: usize,
    }

    impl Counting {
        fn new(seed: u64) -> Self {
            Self {
                rng: StdRng::seed_from_u64(seed),
                normals: 0,
                uniforms: 0,
            }
        }
    }

    impl GaussianSource for Counting {
        fn uniform(&mut self) -> f64 {
            self.uniforms += 1;
            self.rng.uniform()
        }

        fn standard_normal(&mut self) -> f64 {
            self.normals += 1;
            self.rng.standard_normal()
        }
    }

    #[test]
    fn test_right_tail() {
        let t = Table::standard();
        assert_eq!(classify(t, 4.0, 5.0), Region::RightTail);
        assert_eq!(classify(t, t.xmax() + 1e-9, f64::INFINITY), Region::RightTail);
    }

    #[test]
    fn test_left_tail() {
        let t = Table::standard();
        assert_eq!(classify(t, -2.5, 3.0), Region::LeftTail);
        assert_eq!(classify(t, t.xmin() - 1e-9, 10.0), Region::LeftTail);
        let d = Dispatch::new(t, f64::NEG_INFINITY, f64::INFINITY);
        assert_eq!(d.region, Region::LeftTail);
        assert!(!d.folded);
    }

    #[test]
    fn test_bulk() {
        let t = Table::standard();
        let eps = 1e-6;
        match classify(t, t.xmin() + eps, t.xmax() - eps) {
            Region::Bulk { ka, kb } => {
                assert_eq!(ka, 0);
                assert_eq!(kb, t.n() - 1);
            }
            other => panic!("expected bulk, got {:?}", other),
        }
        assert_eq!(
            classify(t, 1.0, t.xmax()),
            Region::Bulk {
                ka: t.cell(1.0),
                kb: t.n()
            }
        );
    }

    #[test]
    fn test_narrow() {
        let t = Table::standard();
        assert_eq!(classify(t, 0.0, 1e-6), Region::Narrow);
        assert_eq!(classify(t, 1.5, 1.501), Region::Narrow);
        // a few stripes apart is already enough for the table
        assert!(matches!(classify(t, 0.0, 0.01), Region::Bulk { .. }));
    }

    #[test]
    fn test_fold() {
        let t = Table::standard();
        // wholly left of xmin: mirrored into the right tail
        let d = Dispatch::new(t, -6.0, -4.0);
        assert!(d.folded);
        assert_eq!((d.a, d.b), (4.0, 6.0));
        assert_eq!(d.region, Region::RightTail);

        // mirrored onto a stretch the table covers
        let d = Dispatch::new(t, -10.0, -3.0);
        assert!(d.folded);
        assert!(matches!(d.region, Region::Bulk { kb, .. } if kb == t.n()));

        // ties do not fold
        assert!(!Dispatch::new(t, -1.0, 1.0).folded);
    }

    #[test]
    fn test_folded_samples_are_negated() {
        let t = Table::standard();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..1000 {
            let x = sample_standard(t, &mut rng, -6.0, -4.0);
            assert!((-6.0..=-4.0).contains(&x), "{}", x);
        }
    }

    #[test]
    fn test_left_tail_uses_normal_draws() {
        let t = Table::standard();
        let mut rng = Counting::new(1);
        let x = sample_standard(t, &mut rng, -2.5, 3.0);
        assert!((-2.5..=3.0).contains(&x));
        assert!(rng.normals >= 1);
        assert_eq!(rng.uniforms, 0);
    }

    #[test]
    fn test_table_and_tails_use_uniform_draws() {
        let t = Table::standard();
        for &(a, b) in &[(4.0, 5.0), (-1.0, 2.0), (0.0, 1e-6)] {
            let mut rng = Counting::new(2);
            let x = sample_standard(t, &mut rng, a, b);
            assert!(x >= a && x <= b);
            assert_eq!(rng.normals, 0);
            assert!(rng.uniforms >= 2);
        }
    }
}
