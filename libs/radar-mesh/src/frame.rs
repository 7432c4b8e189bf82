//! # Quad Frame
//!
//! Chart center and basis vectors derived from the host quad. Both ring
//! topologies synthesize their vertices through this one frame so position
//! and UV stay in lockstep.

use crate::color::Rgba;
use crate::vertex::{Quad, UiVertex};
use glam::{DVec2, DVec3};

/// The chart's coordinate frame inside a quad.
///
/// The two opposing corners 0 and 2 define the center by midpoint; the
/// basis vectors are the quad's half-extents along X and Y (and U/V in
/// texture space), scaling a unit circle to the quad's actual size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadFrame {
    center_position: DVec3,
    center_uv: DVec2,
    x_unit: DVec3,
    y_unit: DVec3,
    u_unit: DVec2,
    v_unit: DVec2,
}

impl QuadFrame {
    /// Derives the frame from a quad's opposing corners.
    pub fn from_quad(quad: &Quad) -> Self {
        let first = quad.corner(0);
        let opposite = quad.corner(2);

        let center_position = (first.position + opposite.position) / 2.0;
        let center_uv = (first.uv + opposite.uv) / 2.0;

        Self {
            center_position,
            center_uv,
            x_unit: DVec3::X * (center_position.x - first.position.x),
            y_unit: DVec3::Y * (center_position.y - first.position.y),
            u_unit: DVec2::X * (center_uv.x - first.uv.x),
            v_unit: DVec2::Y * (center_uv.y - first.uv.y),
        }
    }

    /// Synthesizes the vertex for one chart axis.
    ///
    /// `cosine`/`sine` come from the trig cache; `radial_scale` is the axis
    /// magnitude already scaled by the ring's extent.
    pub fn axis_vertex(&self, cosine: f64, sine: f64, radial_scale: f64, color: Rgba) -> UiVertex {
        UiVertex {
            position: self.center_position
                + (self.x_unit * cosine + self.y_unit * sine) * radial_scale,
            uv: self.center_uv + (self.u_unit * cosine + self.v_unit * sine) * radial_scale,
            color,
        }
    }

    /// The vertex at the chart center.
    pub fn center_vertex(&self, color: Rgba) -> UiVertex {
        UiVertex {
            position: self.center_position,
            uv: self.center_uv,
            color,
        }
    }

    /// Chart center in position space.
    #[inline]
    pub fn center_position(&self) -> DVec3 {
        self.center_position
    }

    /// Chart center in texture space.
    #[inline]
    pub fn center_uv(&self) -> DVec2 {
        self.center_uv
    }
}
