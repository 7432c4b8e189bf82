//! # Config Crate
//!
//! Centralized configuration constants for the radar mesh pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON_TOLERANCE, DEFAULT_START_ANGLE_DEGREES};
//!
//! // Use EPSILON_TOLERANCE for floating-point comparisons
//! let value: f64 = 0.0000000001; // 1e-10, smaller than EPSILON_TOLERANCE (1e-9)
//! let is_zero = value.abs() < EPSILON_TOLERANCE;
//! assert!(is_zero);
//!
//! // Defaults match the host component's serialized defaults
//! assert_eq!(DEFAULT_START_ANGLE_DEGREES, 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host Compatible**: Defaults match the UI host component behavior
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
