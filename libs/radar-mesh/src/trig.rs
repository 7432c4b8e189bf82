//! # Trigonometry Cache
//!
//! Per-axis sine/cosine tables shared by both ring topologies. The tables
//! depend only on the start angle and the axis count, so they are rebuilt
//! lazily and only when one of the two changes.

use config::constants::UP_REFERENCE_DEGREES;
use std::f64::consts::PI;

/// Cached per-axis trigonometry.
///
/// Valid only while the start angle and axis count match what the cache was
/// built from; [`TrigCache::is_valid`] makes that check explicit. Entirely
/// derived state, never persisted.
///
/// # Example
///
/// ```rust
/// use radar_mesh::trig::TrigCache;
///
/// let mut cache = TrigCache::new();
/// cache.ensure(0.0, 4);
/// // Axis 0 points straight up under the 12 o'clock convention.
/// assert!((cache.sin(0) - 1.0).abs() < 1e-9);
/// assert!(cache.cos(0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TrigCache {
    start_angle_degrees: f64,
    sines: Vec<f64>,
    cosines: Vec<f64>,
    rebuilds: usize,
}

impl TrigCache {
    /// Creates an empty cache. Valid for the default angle with zero axes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the tables were built for exactly this start angle
    /// and axis count.
    pub fn is_valid(&self, start_angle_degrees: f64, axis_count: usize) -> bool {
        self.start_angle_degrees == start_angle_degrees && self.sines.len() == axis_count
    }

    /// Rebuilds the tables if the start angle or the axis count changed;
    /// otherwise a no-op.
    pub fn ensure(&mut self, start_angle_degrees: f64, axis_count: usize) {
        if self.is_valid(start_angle_degrees, axis_count) {
            return;
        }
        self.rebuild(start_angle_degrees, axis_count);
    }

    /// Sine for the given axis. The cache must have been built for at least
    /// `axis + 1` axes.
    #[inline]
    pub fn sin(&self, axis: usize) -> f64 {
        self.sines[axis]
    }

    /// Cosine for the given axis.
    #[inline]
    pub fn cos(&self, axis: usize) -> f64 {
        self.cosines[axis]
    }

    /// Number of axes the tables were built for.
    #[inline]
    pub fn axis_count(&self) -> usize {
        self.sines.len()
    }

    /// Number of table rebuilds since creation. Lets callers observe cache
    /// hits and invalidation.
    #[inline]
    pub fn rebuild_count(&self) -> usize {
        self.rebuilds
    }

    fn rebuild(&mut self, start_angle_degrees: f64, axis_count: usize) {
        self.sines.clear();
        self.cosines.clear();
        self.start_angle_degrees = start_angle_degrees;
        self.rebuilds += 1;

        // No axes to place; skipping the build avoids the zero divisor in
        // the angular step.
        if axis_count == 0 {
            return;
        }

        // Angle zero points up and positive start angles proceed clockwise,
        // so does the per-axis step.
        let start_radians = (UP_REFERENCE_DEGREES - start_angle_degrees).to_radians();
        let step_radians = -2.0 * PI / axis_count as f64;

        for axis in 0..axis_count {
            let radians = start_radians + axis as f64 * step_radians;
            self.sines.push(radians.sin());
            self.cosines.push(radians.cos());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_four_axes_proceed_clockwise_from_up() {
        let mut cache = TrigCache::new();
        cache.ensure(0.0, 4);

        // cos/sin of PI/2, 0, -PI/2, -PI.
        let expected = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];
        for (axis, (sin, cos)) in expected.iter().enumerate() {
            assert_abs_diff_eq!(cache.sin(axis), *sin, epsilon = 1e-12);
            assert_abs_diff_eq!(cache.cos(axis), *cos, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_start_angle_rotates_axis_zero() {
        let mut cache = TrigCache::new();
        // 90 degrees clockwise from up points along +X.
        cache.ensure(90.0, 4);
        assert_abs_diff_eq!(cache.sin(0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(cache.cos(0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ensure_is_a_no_op_for_unchanged_inputs() {
        let mut cache = TrigCache::new();
        cache.ensure(45.0, 6);
        assert_eq!(cache.rebuild_count(), 1);
        cache.ensure(45.0, 6);
        cache.ensure(45.0, 6);
        assert_eq!(cache.rebuild_count(), 1);
    }

    #[test]
    fn test_changing_angle_forces_rebuild() {
        let mut cache = TrigCache::new();
        cache.ensure(0.0, 3);
        cache.ensure(10.0, 3);
        assert_eq!(cache.rebuild_count(), 2);
    }

    #[test]
    fn test_changing_axis_count_forces_rebuild() {
        let mut cache = TrigCache::new();
        cache.ensure(0.0, 3);
        cache.ensure(0.0, 5);
        assert_eq!(cache.rebuild_count(), 2);
        assert_eq!(cache.axis_count(), 5);
    }

    #[test]
    fn test_zero_axes_leaves_tables_empty() {
        let mut cache = TrigCache::new();
        cache.ensure(30.0, 0);
        assert_eq!(cache.axis_count(), 0);
        assert!(cache.is_valid(30.0, 0));
    }

    #[test]
    fn test_fresh_cache_is_valid_for_zero_axes() {
        let cache = TrigCache::new();
        assert!(cache.is_valid(0.0, 0));
        assert!(!cache.is_valid(0.0, 4));
    }

    #[test]
    fn test_values_are_finite() {
        let mut cache = TrigCache::new();
        cache.ensure(123.4, 7);
        for axis in 0..7 {
            assert!(cache.sin(axis).is_finite());
            assert!(cache.cos(axis).is_finite());
        }
    }
}
