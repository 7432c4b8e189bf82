//! # Radar Chart Generator
//!
//! The public entry point: owns the chart configuration, the trig cache,
//! and the scratch buffers, and turns a host quad plus per-axis magnitudes
//! into a replacement triangle stream.

use crate::error::RadarMeshError;
use crate::frame::QuadFrame;
use crate::stream::VertexStream;
use crate::topology::{center_fan, dual_ring, BuildContext, RingTopology, ScratchBuffers};
use crate::trig::TrigCache;
use crate::vertex::Quad;
use config::constants::{start_angle_in_range, DEFAULT_START_ANGLE_DEGREES};
use serde::{Deserialize, Serialize};

/// Chart configuration: where axis 0 points and which shape to build.
///
/// # Example
///
/// ```rust
/// use radar_mesh::{ChartConfig, RingTopology};
///
/// let config = ChartConfig::new(90.0, RingTopology::default()).unwrap();
/// assert_eq!(config.start_angle_degrees, 90.0);
/// assert!(ChartConfig::new(400.0, RingTopology::default()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Direction of axis 0 in degrees, clockwise from 12 o'clock, in
    /// `[0, 360]`.
    pub start_angle_degrees: f64,
    /// Shape of the generated polygon.
    pub topology: RingTopology,
}

impl ChartConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RadarMeshError::StartAngleOutOfRange`] or
    /// [`RadarMeshError::RatioOutOfRange`] when a field lies outside its
    /// recognized range.
    pub fn new(start_angle_degrees: f64, topology: RingTopology) -> Result<Self, RadarMeshError> {
        let config = Self {
            start_angle_degrees,
            topology,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks every field against its recognized range.
    ///
    /// # Errors
    ///
    /// Same as [`ChartConfig::new`].
    pub fn validate(&self) -> Result<(), RadarMeshError> {
        if !start_angle_in_range(self.start_angle_degrees) {
            return Err(RadarMeshError::start_angle_out_of_range(
                self.start_angle_degrees,
            ));
        }
        self.topology.validate()
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            start_angle_degrees: DEFAULT_START_ANGLE_DEGREES,
            topology: RingTopology::default(),
        }
    }
}

/// Generates radar chart geometry from host quads.
///
/// Owns the trigonometry cache and the ring scratch buffers, so repeated
/// generation reuses allocations. Single-threaded by design: `&mut self`
/// confines the scratch space to one generation call at a time.
///
/// # Example
///
/// ```rust
/// use glam::{DVec2, DVec3};
/// use radar_mesh::{ChartConfig, Quad, RadarChart, Rgba, UiVertex};
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
///
/// let mut chart = RadarChart::new(ChartConfig::default()).unwrap();
/// let stream = chart.generate(&quad, Some(&[1.0, 0.5, 0.75]));
/// assert_eq!(stream.triangle_count(), 3);
/// ```
#[derive(Debug, Default)]
pub struct RadarChart {
    config: ChartConfig,
    trig: TrigCache,
    scratch: ScratchBuffers,
}

impl RadarChart {
    /// Creates a generator with a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a range error when the configuration is invalid; see
    /// [`ChartConfig::validate`].
    pub fn new(config: ChartConfig) -> Result<Self, RadarMeshError> {
        config.validate()?;
        Ok(Self {
            config,
            trig: TrigCache::new(),
            scratch: ScratchBuffers::default(),
        })
    }

    /// The current configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Points axis 0 in a new direction.
    ///
    /// The trig cache is not touched here; the next generation call
    /// notices the change and rebuilds lazily.
    ///
    /// # Errors
    ///
    /// Returns [`RadarMeshError::StartAngleOutOfRange`] for an angle
    /// outside `[0, 360]` degrees; the configuration is left unchanged.
    pub fn set_start_angle_degrees(&mut self, degrees: f64) -> Result<(), RadarMeshError> {
        if !start_angle_in_range(degrees) {
            return Err(RadarMeshError::start_angle_out_of_range(degrees));
        }
        self.config.start_angle_degrees = degrees;
        Ok(())
    }

    /// Switches the chart shape.
    ///
    /// # Errors
    ///
    /// Returns [`RadarMeshError::RatioOutOfRange`] for a dual ring extent
    /// outside `[0, 1]`; the configuration is left unchanged.
    pub fn set_topology(&mut self, topology: RingTopology) -> Result<(), RadarMeshError> {
        topology.validate()?;
        self.config.topology = topology;
        Ok(())
    }

    /// Generates the replacement triangle stream for one quad.
    ///
    /// With no axis parameters assigned (`None`), the quad passes through
    /// unchanged as its own two triangles. An empty axis slice produces an
    /// empty stream.
    pub fn generate(&mut self, quad: &Quad, axes: Option<&[f64]>) -> VertexStream {
        let mut stream = VertexStream::new();
        self.generate_into(&mut stream, quad, axes);
        stream
    }

    /// In-place form of [`RadarChart::generate`]: clears `stream` and fills
    /// it with the replacement geometry, mirroring a host's
    /// modify-the-stream hook.
    pub fn generate_into(&mut self, stream: &mut VertexStream, quad: &Quad, axes: Option<&[f64]>) {
        stream.clear();
        match axes {
            None => stream.push_quad(quad),
            Some(axes) => self.build(stream, quad, axes),
        }
    }

    fn build(&mut self, stream: &mut VertexStream, quad: &Quad, axes: &[f64]) {
        self.trig.ensure(self.config.start_angle_degrees, axes.len());

        let frame = QuadFrame::from_quad(quad);
        let ctx = BuildContext {
            frame: &frame,
            trig: &self.trig,
            axes,
            base_color: quad.corner(0).color,
        };

        match &self.config.topology {
            RingTopology::DualRing(style) => {
                dual_ring::build(style, &ctx, &mut self.scratch, stream);
            }
            RingTopology::CenterFan(style) => {
                center_fan::build(style, &ctx, &mut self.scratch, stream);
            }
        }
    }
}
