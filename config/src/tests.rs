//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON_TOLERANCE > 0.0, "EPSILON_TOLERANCE must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(
        EPSILON_TOLERANCE < 1e-6,
        "EPSILON_TOLERANCE should be small for precision"
    );
}

// =============================================================================
// ANGLE CONVENTION TESTS
// =============================================================================

#[test]
fn test_up_reference_is_twelve_o_clock() {
    // Angle zero points up; 90 degrees in standard math orientation.
    assert_eq!(UP_REFERENCE_DEGREES, 90.0);
}

#[test]
fn test_full_turn_is_360_degrees() {
    assert_eq!(FULL_TURN_DEGREES, 360.0);
}

#[test]
fn test_start_angle_range_endpoints() {
    assert!(start_angle_in_range(0.0));
    assert!(start_angle_in_range(FULL_TURN_DEGREES));
}

// =============================================================================
// RATIO TESTS
// =============================================================================

#[test]
fn test_ratio_range_endpoints() {
    assert!(ratio_in_range(0.0));
    assert!(ratio_in_range(1.0));
}

#[test]
fn test_default_outer_ratio_fully_drawn() {
    assert_eq!(DEFAULT_OUTER_RATIO, 1.0);
}

#[test]
fn test_default_inner_ratio_collapsed() {
    assert_eq!(DEFAULT_INNER_RATIO, 0.0);
}

// =============================================================================
// APPROX_ZERO TESTS
// =============================================================================

#[test]
fn test_approx_zero_exact_zero() {
    assert!(approx_zero(0.0));
}

#[test]
fn test_approx_zero_within_epsilon() {
    let small = EPSILON_TOLERANCE / 2.0;
    assert!(approx_zero(small));
    assert!(approx_zero(-small));
}

#[test]
fn test_approx_zero_outside_epsilon() {
    let large = EPSILON_TOLERANCE * 2.0;
    assert!(!approx_zero(large));
    assert!(!approx_zero(-large));
}

// =============================================================================
// HOST CONTRACT TESTS
// =============================================================================

#[test]
fn test_quad_corner_count_is_four() {
    assert_eq!(QUAD_CORNER_COUNT, 4);
}

#[test]
fn test_color_channel_max_is_8_bit() {
    assert_eq!(COLOR_CHANNEL_MAX, u16::from(u8::MAX));
}
