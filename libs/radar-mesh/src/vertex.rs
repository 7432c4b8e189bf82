//! # Quad Input
//!
//! The host-supplied vertex and quad types. A quad is exactly four corner
//! vertices in drawing order; corners 0 and 2 are opposite and define the
//! chart center by midpoint.

use crate::color::Rgba;
use crate::error::RadarMeshError;
use config::constants::QUAD_CORNER_COUNT;
use glam::{DVec2, DVec3};

/// One vertex of the host's UI geometry.
///
/// All geometry calculations use f64 internally; the host converts to f32
/// at its GPU boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiVertex {
    /// Position in the host's canvas space.
    pub position: DVec3,
    /// Texture coordinate.
    pub uv: DVec2,
    /// Vertex color.
    pub color: Rgba,
}

impl UiVertex {
    /// Creates a vertex from its parts.
    pub const fn new(position: DVec3, uv: DVec2, color: Rgba) -> Self {
        Self { position, uv, color }
    }
}

/// The four corner vertices of a host quad, in drawing order.
///
/// The four-corner invariant is enforced by construction; a host slice of
/// any other length is rejected by [`Quad::from_vertices`].
///
/// # Example
///
/// ```rust
/// use glam::{DVec2, DVec3};
/// use radar_mesh::{Quad, Rgba, UiVertex};
///
/// let corner = |x: f64, y: f64, u: f64, v: f64| {
///     UiVertex::new(DVec3::new(x, y, 0.0), DVec2::new(u, v), Rgba::WHITE)
/// };
/// let quad = Quad::new([
///     corner(-1.0, -1.0, 0.0, 0.0),
///     corner(-1.0, 1.0, 0.0, 1.0),
///     corner(1.0, 1.0, 1.0, 1.0),
///     corner(1.0, -1.0, 1.0, 0.0),
/// ]);
/// assert_eq!(quad.corner(0).uv, DVec2::new(0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    corners: [UiVertex; QUAD_CORNER_COUNT],
}

impl Quad {
    /// Creates a quad from its four corners.
    pub const fn new(corners: [UiVertex; QUAD_CORNER_COUNT]) -> Self {
        Self { corners }
    }

    /// Converts a host vertex slice into a quad.
    ///
    /// # Errors
    ///
    /// Returns [`RadarMeshError::MalformedQuad`] unless the slice holds
    /// exactly four vertices. This indicates host misuse, not a data error.
    pub fn from_vertices(vertices: &[UiVertex]) -> Result<Self, RadarMeshError> {
        let corners: [UiVertex; QUAD_CORNER_COUNT] = vertices
            .try_into()
            .map_err(|_| RadarMeshError::malformed_quad(vertices.len()))?;
        Ok(Self { corners })
    }

    /// Returns the corner at `index` (0..4, drawing order).
    #[inline]
    pub fn corner(&self, index: usize) -> &UiVertex {
        &self.corners[index]
    }

    /// Returns all four corners.
    #[inline]
    pub fn corners(&self) -> &[UiVertex; QUAD_CORNER_COUNT] {
        &self.corners
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(x: f64, y: f64) -> UiVertex {
        UiVertex::new(DVec3::new(x, y, 0.0), DVec2::new(0.0, 0.0), Rgba::WHITE)
    }

    #[test]
    fn test_from_vertices_accepts_four_corners() {
        let corners = [vertex(0.0, 0.0), vertex(0.0, 1.0), vertex(1.0, 1.0), vertex(1.0, 0.0)];
        let quad = Quad::from_vertices(&corners).unwrap();
        assert_eq!(quad.corner(2).position, DVec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_from_vertices_rejects_short_slice() {
        let corners = [vertex(0.0, 0.0), vertex(0.0, 1.0), vertex(1.0, 1.0)];
        assert_eq!(
            Quad::from_vertices(&corners).unwrap_err(),
            RadarMeshError::MalformedQuad { expected: 4, actual: 3 }
        );
    }

    #[test]
    fn test_from_vertices_rejects_long_slice() {
        let corners = [vertex(0.0, 0.0); 6];
        assert_eq!(
            Quad::from_vertices(&corners).unwrap_err(),
            RadarMeshError::MalformedQuad { expected: 4, actual: 6 }
        );
    }
}
