//! # Mesh Errors
//!
//! Error types for radar chart generation.
//!
//! ## Error Policy
//!
//! - Configuration ranges are enforced at construction and at every setter,
//!   so generation itself never fails
//! - Missing axis parameters are "nothing to draw", never an error
//! - A malformed quad is host misuse and is rejected at the conversion
//!   boundary

use config::constants::QUAD_CORNER_COUNT;
use thiserror::Error;

/// Errors that can occur at the host boundary of the radar mesh library.
#[derive(Debug, Error, PartialEq)]
pub enum RadarMeshError {
    /// The host supplied a corner slice that is not exactly one quad.
    #[error("Malformed quad: expected {expected} corner vertices, got {actual}")]
    MalformedQuad {
        /// Number of corners a quad must have.
        expected: usize,
        /// Number of vertices the host actually supplied.
        actual: usize,
    },

    /// Start angle outside the recognized `[0, 360]` degree range.
    #[error("Start angle out of range: {value} (expected 0 to 360 degrees)")]
    StartAngleOutOfRange {
        /// The rejected angle, in degrees.
        value: f64,
    },

    /// Ring ratio outside the recognized `[0, 1]` range.
    #[error("{ring} ratio out of range: {value} (expected 0 to 1)")]
    RatioOutOfRange {
        /// Which ring the ratio belongs to ("outer" or "inner").
        ring: &'static str,
        /// The rejected ratio.
        value: f64,
    },
}

impl RadarMeshError {
    /// Creates a malformed quad error for a host slice of the given length.
    pub fn malformed_quad(actual: usize) -> Self {
        Self::MalformedQuad {
            expected: QUAD_CORNER_COUNT,
            actual,
        }
    }

    /// Creates a start angle range error.
    pub fn start_angle_out_of_range(value: f64) -> Self {
        Self::StartAngleOutOfRange { value }
    }

    /// Creates a ring ratio range error.
    pub fn ratio_out_of_range(ring: &'static str, value: f64) -> Self {
        Self::RatioOutOfRange { ring, value }
    }
}
