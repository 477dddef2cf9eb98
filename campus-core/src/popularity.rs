//! Sigmoid popularity curve shared by the analysers and recommenders.

/// Slope of the logistic curve around its midpoint.
pub const POPULARITY_STEEPNESS: f64 = 10.0;

/// Fill ratio at which popularity is exactly one half.
pub const POPULARITY_MIDPOINT: f64 = 0.5;

/// Map a registration fill ratio onto `0.0..=1.0`.
///
/// The curve is centred on half occupancy and saturates towards zero for
/// empty activities and one for full ones, so a few extra registrations
/// matter most for activities in the middle of the range.
///
/// # Examples
///
/// ```
/// use campus_core::popularity_from_ratio;
///
/// assert_eq!(popularity_from_ratio(0.5), 0.5);
/// assert!(popularity_from_ratio(0.9) > popularity_from_ratio(0.6));
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the logistic curve is defined over floating-point ratios"
)]
pub fn popularity_from_ratio(ratio: f64) -> f64 {
    1.0 / (1.0 + (-POPULARITY_STEEPNESS * (ratio - POPULARITY_MIDPOINT)).exp())
}
