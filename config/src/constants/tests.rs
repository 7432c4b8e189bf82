//! Tests for the centralized configuration constants.

use super::*;

/// Ensures the default chart parameters fall inside their recognized ranges.
///
/// # Examples
/// ```
/// use config::constants::{ratio_in_range, DEFAULT_OUTER_RATIO};
/// assert!(ratio_in_range(DEFAULT_OUTER_RATIO));
/// ```
#[test]
fn default_constants_are_valid() {
    assert!(start_angle_in_range(DEFAULT_START_ANGLE_DEGREES));
    assert!(ratio_in_range(DEFAULT_OUTER_RATIO));
    assert!(ratio_in_range(DEFAULT_INNER_RATIO));
}

/// Validates the range helpers reject out-of-range values.
///
/// # Examples
/// ```
/// use config::constants::start_angle_in_range;
/// assert!(!start_angle_in_range(-1.0));
/// ```
#[test]
fn range_helpers_reject_invalid_inputs() {
    assert!(!start_angle_in_range(-0.5));
    assert!(!start_angle_in_range(FULL_TURN_DEGREES + 0.5));
    assert!(!ratio_in_range(-0.5));
    assert!(!ratio_in_range(1.5));
}
