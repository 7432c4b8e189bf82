//! # Radar Mesh
//!
//! Host-agnostic radar/spider chart geometry for UI quads. A host rendering
//! framework supplies the four corner vertices of a flat quad; this crate
//! replaces them with a fan of triangles whose outer rim follows a set of
//! per-axis magnitude values.
//!
//! ## Architecture
//!
//! ```text
//! Host quad (4 corners) → radar-mesh (VertexStream) → host mesh hook
//! ```
//!
//! ## Algorithms
//!
//! All generation is pure, synchronous, and bounded by the axis count:
//! - **Trig cache**: per-axis sine/cosine tables, rebuilt only when the
//!   start angle or axis count changes
//! - **Dual ring**: independent outer/inner rings, two triangle strips
//! - **Center fan**: shared center vertex, plain triangle fan
//! - **Color multiply**: 8-bit truncating multiply blend for vertex tints
//!
//! ## Usage
//!
//! ```rust
//! use glam::{DVec2, DVec3};
//! use radar_mesh::{ChartConfig, Quad, RadarChart, Rgba, UiVertex};
//!
//! let corner = |x: f64, y: f64, u: f64, v: f64| {
//!     UiVertex::new(DVec3::new(x, y, 0.0), DVec2::new(u, v), Rgba::WHITE)
//! };
//! let quad = Quad::new([
//!     corner(-1.0, -1.0, 0.0, 0.0),
//!     corner(-1.0, 1.0, 0.0, 1.0),
//!     corner(1.0, 1.0, 1.0, 1.0),
//!     corner(1.0, -1.0, 1.0, 0.0),
//! ]);
//!
//! let mut chart = RadarChart::new(ChartConfig::default())?;
//! let stream = chart.generate(&quad, Some(&[1.0, 0.8, 0.6, 0.9, 0.7]));
//! assert_eq!(stream.triangle_count(), 5);
//! # Ok::<(), radar_mesh::RadarMeshError>(())
//! ```

pub mod chart;
pub mod color;
pub mod error;
pub mod frame;
pub mod stream;
pub mod topology;
pub mod trig;
pub mod vertex;

pub use chart::{ChartConfig, RadarChart};
pub use color::Rgba;
pub use error::RadarMeshError;
pub use frame::QuadFrame;
pub use stream::VertexStream;
pub use topology::{CenterFanStyle, DualRingStyle, RingTopology};
pub use vertex::{Quad, UiVertex};
