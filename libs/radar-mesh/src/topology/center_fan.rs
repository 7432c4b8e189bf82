//! # Center Fan Topology
//!
//! A single shared center vertex with an outer ring: one triangle per axis,
//! fanning out from the centroid. Axis magnitudes are used directly as the
//! radial scale; there are no ring extents.

use super::{BuildContext, ScratchBuffers};
use crate::color::Rgba;
use crate::stream::VertexStream;
use serde::{Deserialize, Serialize};

/// Parameters of the center fan shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenterFanStyle {
    /// Tint of the outer ring vertices.
    pub outer_color: Rgba,
    /// Tint of the shared center vertex.
    pub center_color: Rgba,
}

impl Default for CenterFanStyle {
    fn default() -> Self {
        Self {
            outer_color: Rgba::WHITE,
            center_color: Rgba::WHITE,
        }
    }
}

/// Builds the center fan triangle stream for the current axes.
pub(crate) fn build(
    style: &CenterFanStyle,
    ctx: &BuildContext<'_>,
    scratch: &mut ScratchBuffers,
    stream: &mut VertexStream,
) {
    let outer_color = ctx.base_color.multiply(style.outer_color);
    let center = ctx
        .frame
        .center_vertex(ctx.base_color.multiply(style.center_color));

    for (axis, &magnitude) in ctx.axes.iter().enumerate() {
        scratch.outer.push(ctx.frame.axis_vertex(
            ctx.trig.cos(axis),
            ctx.trig.sin(axis),
            magnitude,
            outer_color,
        ));
    }

    // Close the ring by repeating axis 0.
    if !scratch.outer.is_empty() {
        scratch.outer.push(scratch.outer[0]);
    }

    for axis in 0..ctx.axes.len() {
        stream.push_triangle(center, scratch.outer[axis], scratch.outer[axis + 1]);
    }

    scratch.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_is_white() {
        let style = CenterFanStyle::default();
        assert_eq!(style.outer_color, Rgba::WHITE);
        assert_eq!(style.center_color, Rgba::WHITE);
    }
}
