//! Centralized configuration values shared across the radar mesh pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

/// Numerical tolerance used by geometry assertions and comparisons.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Number of corner vertices a host quad must supply.
///
/// # Examples
/// ```
/// use config::constants::QUAD_CORNER_COUNT;
/// assert_eq!(QUAD_CORNER_COUNT, 4);
/// ```
pub const QUAD_CORNER_COUNT: usize = 4;

/// Maximum value of one 8-bit color channel, widened for integer blending.
///
/// # Examples
/// ```
/// use config::constants::COLOR_CHANNEL_MAX;
/// assert_eq!(COLOR_CHANNEL_MAX, 255);
/// ```
pub const COLOR_CHANNEL_MAX: u16 = 255;

/// Angular reference of the chart, in degrees. Angle zero points "up"
/// (12 o'clock) and positive start angles proceed clockwise from there.
///
/// # Examples
/// ```
/// use config::constants::UP_REFERENCE_DEGREES;
/// assert_eq!(UP_REFERENCE_DEGREES, 90.0);
/// ```
pub const UP_REFERENCE_DEGREES: f64 = 90.0;

/// Degrees in one full turn around the chart center.
///
/// # Examples
/// ```
/// use config::constants::FULL_TURN_DEGREES;
/// assert_eq!(FULL_TURN_DEGREES, 360.0);
/// ```
pub const FULL_TURN_DEGREES: f64 = 360.0;

/// Default chart start angle, in degrees.
///
/// # Examples
/// ```
/// use config::constants::{start_angle_in_range, DEFAULT_START_ANGLE_DEGREES};
/// assert!(start_angle_in_range(DEFAULT_START_ANGLE_DEGREES));
/// ```
pub const DEFAULT_START_ANGLE_DEGREES: f64 = 0.0;

/// Default outer ring extent. The outer ring is fully drawn by default.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_OUTER_RATIO;
/// assert_eq!(DEFAULT_OUTER_RATIO, 1.0);
/// ```
pub const DEFAULT_OUTER_RATIO: f64 = 1.0;

/// Default inner ring extent. The inner ring is collapsed by default.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_INNER_RATIO;
/// assert_eq!(DEFAULT_INNER_RATIO, 0.0);
/// ```
pub const DEFAULT_INNER_RATIO: f64 = 0.0;

/// Returns true when a start angle lies within the recognized range of
/// `[0, 360]` degrees.
///
/// # Examples
/// ```
/// use config::constants::start_angle_in_range;
/// assert!(start_angle_in_range(45.0));
/// assert!(!start_angle_in_range(361.0));
/// ```
pub fn start_angle_in_range(degrees: f64) -> bool {
    (0.0..=FULL_TURN_DEGREES).contains(&degrees)
}

/// Returns true when a ring ratio lies within the recognized range `[0, 1]`.
///
/// # Examples
/// ```
/// use config::constants::ratio_in_range;
/// assert!(ratio_in_range(0.5));
/// assert!(!ratio_in_range(-0.1));
/// ```
pub fn ratio_in_range(ratio: f64) -> bool {
    (0.0..=1.0).contains(&ratio)
}

/// Returns true when a value is zero within [`EPSILON_TOLERANCE`].
///
/// # Examples
/// ```
/// use config::constants::approx_zero;
/// assert!(approx_zero(1.0e-12));
/// assert!(!approx_zero(0.1));
/// ```
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON_TOLERANCE
}

#[cfg(test)]
mod tests;
