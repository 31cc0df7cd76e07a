//! Error type for truncated-normal sampling.

use thiserror::Error;

/// Errors reported before any variate is drawn.
///
/// Sampling itself cannot fail once the parameters are accepted: every
/// rejection loop terminates with probability one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RtnormError {
    /// The lower bound is not strictly below the upper bound, or a bound is NaN.
    #[error("B must be greater than A: got a = {a}, b = {b}")]
    InvalidInterval {
        /// Lower truncation bound
        a: f64,
        /// Upper truncation bound
        b: f64,
    },

    /// The standard deviation is not a finite positive number.
    #[error("sigma must be finite and positive, got {sigma}")]
    InvalidScale {
        /// Offending standard deviation
        sigma: f64,
    },

    /// A location parameter is NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFiniteParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// The stripe table breaks one of its structural invariants.
    #[error("stripe table invariant violated at index {index}: {reason}")]
    TableInvariant {
        /// Cell or bucket index where the check failed
        index: usize,
        /// Which invariant failed
        reason: &'static str,
    },
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, RtnormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_message_names_bounds() {
        let err = RtnormError::InvalidInterval { a: 2.0, b: 1.0 };
        let msg = err.to_string();
        assert!(msg.contains("a = 2"), "{}", msg);
        assert!(msg.contains("b = 1"), "{}", msg);
    }

    #[test]
    fn test_scale_message() {
        let err = RtnormError::InvalidScale { sigma: -1.0 };
        assert_eq!(err.to_string(), "sigma must be finite and positive, got -1");
    }
}
