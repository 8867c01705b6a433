//! Generation settings and fixed shape constants.

/// Default number of samples per circular or elliptic ring.
pub const DEFAULT_VERTEX_COUNT: u32 = 40;

/// Vertices emitted by a cuboid (4 corners for each of the 6 faces).
pub const CUBOID_VERTEX_COUNT: u32 = 24;

/// Apex plus the four base extremes of a cone.
pub const CONE_EXTRA_VERTICES: u32 = 5;

/// Generator lines joining the cone apex to its base.
pub const CONE_GENERATOR_LINES: u32 = 4;

/// Vertical side lines drawn below an unbound cylinder rim.
pub const UNBOUND_CYLINDER_SIDE_LINES: u32 = 8;

/// Angle between consecutive unbound cylinder side lines.
pub const UNBOUND_CYLINDER_SIDE_STEP_DEGREES: f32 = 45.0;

/// How far the unbound cylinder side lines drop below the rim.
///
/// Fixed in world units; it only hints that the cylinder keeps going.
pub const UNBOUND_CYLINDER_DROP: f32 = 5.0;

/// Settings read by [`WireframeGenerator`](crate::WireframeGenerator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WireframeConfig {
    /// Samples per ring. Zero rings produce no geometry.
    pub vertex_count: u32,
}

impl WireframeConfig {
    /// Create a config with the default ring resolution.
    pub fn new() -> Self {
        Self {
            vertex_count: DEFAULT_VERTEX_COUNT,
        }
    }

    /// Set the ring resolution.
    pub fn with_vertex_count(mut self, vertex_count: u32) -> Self {
        self.vertex_count = vertex_count;
        self
    }
}

impl Default for WireframeConfig {
    fn default() -> Self {
        Self::new()
    }
}
