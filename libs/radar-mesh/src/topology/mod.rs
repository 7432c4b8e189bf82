//! # Ring Topologies
//!
//! The two chart shapes behind one dispatch point: a dual ring with
//! independent outer/inner extents, and a center fan with a single shared
//! center vertex. Both share the trig cache, the quad frame, and the color
//! multiply; only the per-axis point synthesis and the triangulation differ.

pub mod center_fan;
pub mod dual_ring;

pub use center_fan::CenterFanStyle;
pub use dual_ring::DualRingStyle;

use crate::color::Rgba;
use crate::error::RadarMeshError;
use crate::frame::QuadFrame;
use crate::trig::TrigCache;
use crate::vertex::UiVertex;
use serde::{Deserialize, Serialize};

/// Which shape the chart builds from the axis magnitudes.
///
/// Data enum with one build routine per variant; the generator dispatches
/// with a match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RingTopology {
    /// Independent outer and inner rings (annulus-like wedges).
    DualRing(DualRingStyle),
    /// A single tinted center point with an outer ring (plain triangle fan).
    CenterFan(CenterFanStyle),
}

impl RingTopology {
    /// Validates the variant's parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns [`RadarMeshError::RatioOutOfRange`] when a dual ring extent
    /// lies outside `[0, 1]`. The center fan has no ranged parameters.
    pub fn validate(&self) -> Result<(), RadarMeshError> {
        match self {
            RingTopology::DualRing(style) => style.validate(),
            RingTopology::CenterFan(_) => Ok(()),
        }
    }
}

impl Default for RingTopology {
    fn default() -> Self {
        RingTopology::DualRing(DualRingStyle::default())
    }
}

/// Shared inputs of one build pass.
pub(crate) struct BuildContext<'a> {
    /// Chart frame derived from the host quad.
    pub frame: &'a QuadFrame,
    /// Trig tables already ensured for the current angle and axis count.
    pub trig: &'a TrigCache,
    /// Per-axis magnitudes.
    pub axes: &'a [f64],
    /// Base color of the host quad, multiplied into every tint.
    pub base_color: Rgba,
}

/// Per-generator scratch space for the synthesized ring points.
///
/// Reused across calls for allocation efficiency; ownership is confined to
/// one generation call at a time through `&mut self` on the generator, and
/// every build routine clears it before returning.
#[derive(Debug, Default)]
pub(crate) struct ScratchBuffers {
    pub outer: Vec<UiVertex>,
    pub inner: Vec<UiVertex>,
}

impl ScratchBuffers {
    pub fn clear(&mut self) {
        self.outer.clear();
        self.inner.clear();
    }
}
