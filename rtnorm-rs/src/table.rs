//! Read-only view over the stripe table.
//!
//! The standard-normal density on `[XMIN, XMAX]` is covered by `N` stripes of
//! equal area. Stripe `k` spans `[x[k], x[k + 1])` and is bounded above by
//! `yu[k]`. Because the density is monotone away from the mode, the upper
//! bound of the neighbour on the side facing the mode bounds stripe `k`
//! from below.

use crate::{
    constants::{FRAC_1_SQRT_2PI, KMIN},
    error::{Result, RtnormError},
    tables,
};

/// Stripe table and the constants derived from it.
#[derive(Debug, Clone, Copy)]
pub struct Table {
    x: &'static [f64],
    yu: &'static [f64],
    ncell: &'static [u16],
    invh: f64,
    i0: usize,
    n: usize,
    mode_cell: usize,
    xmin: f64,
    xmax: f64,
    yl_first: f64,
    yl_last: f64,
    kmin: usize,
}

static STANDARD: Table = Table {
    x: &tables::X,
    yu: &tables::YU,
    ncell: &tables::NCELL,
    invh: tables::INVH,
    i0: tables::I0,
    n: tables::N,
    mode_cell: tables::MODE_CELL,
    xmin: tables::XMIN,
    xmax: tables::XMAX,
    yl_first: tables::YL_FIRST,
    yl_last: tables::YL_LAST,
    kmin: KMIN,
};

impl Table {
    /// The table for the standard normal density.
    #[inline]
    pub fn standard() -> &'static Table {
        &STANDARD
    }

    /// Cell index of the right tail beyond `xmax`.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    #[inline]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    #[inline]
    pub fn kmin(&self) -> usize {
        self.kmin
    }

    /// Inverse of the quantization step.
    #[inline]
    pub fn invh(&self) -> f64 {
        self.invh
    }

    /// Quantization offset applied before indexing `ncell`.
    #[inline]
    pub fn i0(&self) -> usize {
        self.i0
    }

    /// Stripe boundaries `x[0..=N]`.
    #[inline]
    pub fn boundaries(&self) -> &'static [f64] {
        self.x
    }

    /// Left edge of stripe `k`.
    #[inline]
    pub fn left(&self, k: usize) -> f64 {
        self.x[k]
    }

    #[inline]
    pub fn width(&self, k: usize) -> f64 {
        self.x[k + 1] - self.x[k]
    }

    /// Density upper bound of stripe `k`.
    #[inline]
    pub fn yu(&self, k: usize) -> f64 {
        self.yu[k]
    }

    /// Density lower bound of stripe `k`.
    #[inline]
    pub fn yl(&self, k: usize) -> f64 {
        if k == 0 {
            self.yl_first
        } else if k == self.n - 1 {
            self.yl_last
        } else if k < self.mode_cell {
            self.yu[k - 1]
        } else {
            self.yu[k + 1]
        }
    }

    /// `I0 + floor(v * INVH)`, clamped to the `ncell` range.
    #[inline]
    pub fn quantize(&self, v: f64) -> usize {
        let i = self.i0 as f64 + (v * self.invh).floor();
        // float-to-int casts saturate, so only the upper end needs the clamp
        (i as usize).min(self.ncell.len() - 1)
    }

    /// Stripe holding `v`, for `xmin <= v < xmax`.
    ///
    /// `ncell` names the stripe at the left edge of the bucket holding `v`.
    /// When a boundary falls inside that bucket at or below `v`, the lookup
    /// is stepped forward past it.
    #[inline]
    pub fn cell(&self, v: f64) -> usize {
        let mut k = self.ncell[self.quantize(v)] as usize;
        while k + 1 < self.n && self.x[k + 1] <= v {
            k += 1;
        }
        k
    }

    /// Check the structural invariants the samplers rely on.
    pub fn validate(&self) -> Result<()> {
        let fail = |index, reason| Err(RtnormError::TableInvariant { index, reason });

        if self.x.len() != self.n + 1 {
            return fail(self.x.len(), "boundary count is not N + 1");
        }
        if self.yu.len() != self.n {
            return fail(self.yu.len(), "upper bound count is not N");
        }
        if self.x[0] != self.xmin || self.x[self.n] != self.xmax {
            return fail(0, "xmin/xmax disagree with the boundaries");
        }
        if self.x[self.mode_cell] != 0.0 {
            return fail(self.mode_cell, "mode cell does not start at zero");
        }
        if let Some(k) = self.x.windows(2).position(|w| w[0] >= w[1]) {
            return fail(k, "boundaries not strictly increasing");
        }

        let h = 1.0 / self.invh;
        for k in 0..self.n {
            let yu = self.yu[k];
            if !(yu > 0.0 && yu <= FRAC_1_SQRT_2PI) {
                return fail(k, "upper bound outside (0, 1/sqrt(2pi)]");
            }
            if self.yl(k) > yu {
                return fail(k, "lower envelope exceeds upper bound");
            }
            // narrowest stripes touch the mode; the bucket lookup depends on it
            if self.width(k) < h * (1.0 - 1e-9) {
                return fail(k, "stripe narrower than the quantization step");
            }
        }

        let last = self.i0 as f64 + (self.xmax * self.invh).floor();
        if self.ncell.len() != last as usize + 1 {
            return fail(self.ncell.len(), "ncell does not cover [xmin, xmax]");
        }
        for (i, w) in self.ncell.windows(2).enumerate() {
            if w[0] > w[1] {
                return fail(i, "ncell not monotone");
            }
        }
        for (i, &k) in self.ncell.iter().enumerate() {
            let k = k as usize;
            if k >= self.n {
                return fail(i, "ncell points past the last stripe");
            }
            let v = (i as f64 - self.i0 as f64) / self.invh;
            if v >= self.xmin && !(self.x[k] <= v && v < self.x[k + 1]) {
                return fail(i, "ncell does not contain its bucket edge");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_table_is_valid() {
        assert_eq!(Table::standard().validate(), Ok(()));
    }

    #[test]
    fn test_published_design_values() {
        let t = Table::standard();
        assert_eq!(t.n(), 4001);
        assert_eq!(t.i0(), 3271);
        assert_eq!(t.kmin(), 5);
        assert_relative_eq!(t.xmin(), -2.00443204036, epsilon = 1e-9);
        assert_relative_eq!(t.xmax(), 3.48672170399, epsilon = 1e-8);
        assert_relative_eq!(t.yl(0), 0.053513975472, epsilon = 1e-11);
        assert_relative_eq!(t.yl(t.n() - 1), 0.000914116389555, epsilon = 1e-11);
    }

    #[test]
    fn test_i0_is_derived_from_first_boundary() {
        let t = Table::standard();
        assert_eq!(t.i0() as f64, -(t.xmin() * t.invh()).floor());
    }

    #[test]
    fn test_equal_area_stripes() {
        let t = Table::standard();
        let area = FRAC_1_SQRT_2PI / t.invh();
        for k in 0..t.n() {
            assert_relative_eq!(t.width(k) * t.yu(k), area, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_yl_faces_the_mode() {
        let t = Table::standard();
        // left of the mode the density rises, so the left neighbour bounds below
        assert_eq!(t.yl(1), t.yu(0));
        assert_eq!(t.yl(1953), t.yu(1952));
        // right of the mode it falls, so the right neighbour bounds below
        assert_eq!(t.yl(1954), t.yu(1955));
        assert_eq!(t.yl(3999), t.yu(4000));
        // both stripes at the mode peak at phi(0)
        assert_eq!(t.yu(1953), t.yu(1954));
    }

    #[test]
    fn test_cell_lookup() {
        let t = Table::standard();
        assert_eq!(t.cell(0.0), 1954);
        assert_eq!(t.cell(t.xmin()), 0);
        assert_eq!(t.cell(t.xmax() - 1e-9), t.n() - 1);

        for &v in &[-1.7, -0.3, 0.25, 1.0, 2.9] {
            let k = t.cell(v);
            assert!(t.left(k) <= v && v < t.left(k + 1), "cell {} misses {}", k, v);
        }
    }

    #[test]
    fn test_cell_steps_past_boundary_inside_bucket() {
        let t = Table::standard();
        for j in 1..t.n() {
            let xj = t.left(j);
            assert_eq!(t.cell(xj), j, "boundary {}", j);
            // last point of the bucket holding x[j]
            let edge = (t.quantize(xj) as f64 + 1.0 - t.i0() as f64) / t.invh();
            let v = (edge - 1e-12).min(t.left(j + 1) - 1e-12);
            if v > xj {
                assert_eq!(t.cell(v), j, "{} in stripe {}", v, j);
            }
        }
    }

    #[test]
    fn test_quantize_clamps() {
        let t = Table::standard();
        assert_eq!(t.quantize(-1e9), 0);
        assert_eq!(t.quantize(1e9), t.ncell.len() - 1);
    }
}
