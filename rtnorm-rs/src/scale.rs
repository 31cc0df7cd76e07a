//! Affine map between the caller's normal and the standard normal.

use crate::error::{Result, RtnormError};

/// Location and scale of the untruncated normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaling {
    mu: f64,
    sigma: f64,
}

impl Scaling {
    pub const IDENTITY: Scaling = Scaling { mu: 0.0, sigma: 1.0 };

    pub fn new(mu: f64, sigma: f64) -> Result<Self> {
        if !mu.is_finite() {
            return Err(RtnormError::NonFiniteParameter {
                name: "mu",
                value: mu,
            });
        }
        if !(sigma > 0.0 && sigma.is_finite()) {
            return Err(RtnormError::InvalidScale { sigma });
        }
        Ok(Self { mu, sigma })
    }

    #[inline]
    pub fn mu(&self) -> f64 {
        self.mu
    }

    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// True for `N(0, 1)`, where both directions are the identity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.mu == 0.0 && self.sigma == 1.0
    }

    /// `(v - mu) / sigma`
    #[inline]
    pub fn standardize(&self, v: f64) -> f64 {
        if self.is_identity() {
            v
        } else {
            (v - self.mu) / self.sigma
        }
    }

    /// `r * sigma + mu`
    #[inline]
    pub fn restore(&self, r: f64) -> f64 {
        if self.is_identity() {
            r
        } else {
            r * self.sigma + self.mu
        }
    }

    /// Standardize an interval, rejecting it unless `a < b` on both scales.
    pub fn standardize_interval(&self, a: f64, b: f64) -> Result<(f64, f64)> {
        let (sa, sb) = (self.standardize(a), self.standardize(b));
        // written as a negation so NaN bounds are rejected too
        if !(a < b && sa < sb) {
            return Err(RtnormError::InvalidInterval { a, b });
        }
        Ok((sa, sb))
    }
}

impl Default for Scaling {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_passthrough() {
        let s = Scaling::default();
        assert!(s.is_identity());
        assert_eq!(s.standardize(1.25), 1.25);
        assert_eq!(s.restore(-3.5), -3.5);
    }

    #[test]
    fn test_round_trip() {
        let s = Scaling::new(2.0, 3.0).unwrap();
        let (a, b) = s.standardize_interval(1.0, 9.0).unwrap();
        assert_relative_eq!(a, -1.0 / 3.0);
        assert_relative_eq!(b, 7.0 / 3.0);
        assert_relative_eq!(s.restore(a), 1.0);
        assert_relative_eq!(s.restore(b), 9.0);
    }

    #[test]
    fn test_rejects_bad_sigma() {
        for sigma in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Scaling::new(0.0, sigma),
                Err(RtnormError::InvalidScale { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_bad_mu() {
        assert_eq!(
            Scaling::new(f64::NEG_INFINITY, 1.0),
            Err(RtnormError::NonFiniteParameter {
                name: "mu",
                value: f64::NEG_INFINITY
            })
        );
    }

    #[test]
    fn test_rejects_empty_interval() {
        let s = Scaling::IDENTITY;
        assert_eq!(
            s.standardize_interval(1.0, 1.0),
            Err(RtnormError::InvalidInterval { a: 1.0, b: 1.0 })
        );
        assert!(s.standardize_interval(2.0, 1.0).is_err());
        assert!(s.standardize_interval(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_rejects_interval_collapsed_by_scaling() {
        // distinct bounds that both underflow to zero once standardized
        let s = Scaling::new(0.0, 1e300).unwrap();
        assert!(s.standardize_interval(1e-300, 2e-300).is_err());
    }

    #[test]
    fn test_infinite_bounds() {
        let s = Scaling::new(1.0, 2.0).unwrap();
        let (a, b) = s.standardize_interval(f64::NEG_INFINITY, f64::INFINITY).unwrap();
        assert_eq!(a, f64::NEG_INFINITY);
        assert_eq!(b, f64::INFINITY);
    }
}
