//! Numeric sanitising helpers.
//!
//! Every analytics operation is total: absent or garbage numbers degrade to
//! zero and divisions by zero yield zero. These helpers keep that policy in one
//! place.

/// Returns `x` if it is finite, otherwise `0.0`.
pub fn finite_or_zero(x: f64) -> f64 {
    if x.is_finite() { x } else { 0.0 }
}

/// Returns `x` clamped to `[0, +inf)`; NaN and infinities become `0.0`.
pub fn clamp_non_negative(x: f64) -> f64 {
    let x = finite_or_zero(x);
    if x > 0.0 { x } else { 0.0 }
}

/// Like [`clamp_non_negative`], but `+inf` (an overflowed product or sum)
/// saturates at `f64::MAX` instead of collapsing to zero.
pub fn saturating_non_negative(x: f64) -> f64 {
    if x.is_nan() || x <= 0.0 {
        return 0.0;
    }
    x.min(f64::MAX)
}

/// Sum of two non-negative values, saturating at `f64::MAX`.
pub fn saturating_add(a: f64, b: f64) -> f64 {
    saturating_non_negative(saturating_non_negative(a) + saturating_non_negative(b))
}

/// `numerator / denominator`, or `0.0` when the denominator is zero or either
/// side (or the quotient) is not finite.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if !numerator.is_finite() || !denominator.is_finite() || denominator == 0.0 {
        return 0.0;
    }
    finite_or_zero(numerator / denominator)
}
