//! # Dual Ring Topology
//!
//! Outer and inner rings with independent tints and extents. Each angular
//! wedge contributes up to two triangles, forming a filled annulus-like band
//! when both extents are nonzero and degenerating to a fan from near-center
//! when only one is.

use super::{BuildContext, ScratchBuffers};
use crate::color::Rgba;
use crate::error::RadarMeshError;
use crate::stream::VertexStream;
use config::constants::{ratio_in_range, DEFAULT_INNER_RATIO, DEFAULT_OUTER_RATIO};
use serde::{Deserialize, Serialize};

/// Parameters of the dual ring shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DualRingStyle {
    /// Tint of the outer ring vertices.
    pub outer_color: Rgba,
    /// How far the outer ring extends along each axis, in `[0, 1]`.
    /// Exactly zero disables the outer triangle strip.
    pub outer_ratio: f64,
    /// Tint of the inner ring vertices.
    pub inner_color: Rgba,
    /// How far the inner ring extends along each axis, in `[0, 1]`.
    /// Exactly zero disables the inner triangle strip.
    pub inner_ratio: f64,
}

impl DualRingStyle {
    /// Validates both ring extents.
    ///
    /// # Errors
    ///
    /// Returns [`RadarMeshError::RatioOutOfRange`] for an extent outside
    /// `[0, 1]`.
    pub fn validate(&self) -> Result<(), RadarMeshError> {
        if !ratio_in_range(self.outer_ratio) {
            return Err(RadarMeshError::ratio_out_of_range("outer", self.outer_ratio));
        }
        if !ratio_in_range(self.inner_ratio) {
            return Err(RadarMeshError::ratio_out_of_range("inner", self.inner_ratio));
        }
        Ok(())
    }
}

impl Default for DualRingStyle {
    fn default() -> Self {
        Self {
            outer_color: Rgba::WHITE,
            outer_ratio: DEFAULT_OUTER_RATIO,
            inner_color: Rgba::TRANSPARENT,
            inner_ratio: DEFAULT_INNER_RATIO,
        }
    }
}

/// Builds the dual ring triangle stream for the current axes.
pub(crate) fn build(
    style: &DualRingStyle,
    ctx: &BuildContext<'_>,
    scratch: &mut ScratchBuffers,
    stream: &mut VertexStream,
) {
    let outer_color = ctx.base_color.multiply(style.outer_color);
    let inner_color = ctx.base_color.multiply(style.inner_color);

    for (axis, &magnitude) in ctx.axes.iter().enumerate() {
        let cosine = ctx.trig.cos(axis);
        let sine = ctx.trig.sin(axis);
        scratch.outer.push(ctx.frame.axis_vertex(
            cosine,
            sine,
            magnitude * style.outer_ratio,
            outer_color,
        ));
        scratch.inner.push(ctx.frame.axis_vertex(
            cosine,
            sine,
            magnitude * style.inner_ratio,
            inner_color,
        ));
    }

    // Close the rings by repeating axis 0, so wedge i can reference i + 1
    // without wrapping.
    if !scratch.outer.is_empty() {
        scratch.outer.push(scratch.outer[0]);
        scratch.inner.push(scratch.inner[0]);
    }

    let axis_count = ctx.axes.len();
    if style.outer_ratio != 0.0 {
        for axis in 0..axis_count {
            stream.push_triangle(
                scratch.inner[axis],
                scratch.outer[axis],
                scratch.outer[axis + 1],
            );
        }
    }
    if style.inner_ratio != 0.0 {
        for axis in 0..axis_count {
            stream.push_triangle(
                scratch.outer[axis + 1],
                scratch.inner[axis + 1],
                scratch.inner[axis],
            );
        }
    }

    scratch.clear();
}
