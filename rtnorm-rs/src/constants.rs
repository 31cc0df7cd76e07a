//! Design constants for the truncated-normal sampler

/// If the bounds fall fewer than this many stripes apart, the table loop
/// would waste draws and the exponential proposal is used instead.
pub const KMIN: usize = 5;

/// `ln(2π)`, so that `x² + 2 ln(y) + ALPHA < 0` is `y < φ(x)`.
pub const ALPHA: f64 = 1.8378770664093453;

/// `1 / sqrt(2π)`, the standard normal density at the mode.
pub const FRAC_1_SQRT_2PI: f64 = 0.3989422804014327;
