//! Tagged description of a wireframe primitive.

use crate::config::{
    CONE_EXTRA_VERTICES, CONE_GENERATOR_LINES, CUBOID_VERTEX_COUNT, UNBOUND_CYLINDER_SIDE_LINES,
};
use crate::generator::WireframeGenerator;
use crate::math::Vec3;

/// A primitive shape and its dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WireframeShape {
    /// Axis-aligned box centered at the origin.
    Cuboid { width: f32, height: f32, depth: f32 },
    /// Three great circles.
    Sphere { radius: f32 },
    /// Base ring at `y = -height`, apex at `y = height`.
    Cone { radius: f32, height: f32 },
    /// Rim ring with side lines suggesting infinite extent downward.
    UnboundCylinder { radius: f32 },
    /// Two hemispherical ends `height` apart.
    Capsule { radius: f32, height: f32 },
}

impl WireframeShape {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cuboid { .. } => "cuboid",
            Self::Sphere { .. } => "sphere",
            Self::Cone { .. } => "cone",
            Self::UnboundCylinder { .. } => "unbound_cylinder",
            Self::Capsule { .. } => "capsule",
        }
    }

    /// Number of rings the shape is built from.
    pub fn ring_count(&self) -> u32 {
        match self {
            Self::Cuboid { .. } => 0,
            Self::Sphere { .. } => 3,
            Self::Cone { .. } | Self::UnboundCylinder { .. } => 1,
            Self::Capsule { .. } => 4,
        }
    }

    /// Vertices appended for the given ring resolution.
    pub fn vertex_count(&self, resolution: u32) -> u64 {
        let rings = self.ring_count() as u64 * resolution as u64;
        let extra = match self {
            Self::Cuboid { .. } => CUBOID_VERTEX_COUNT,
            Self::Cone { .. } => CONE_EXTRA_VERTICES,
            Self::UnboundCylinder { .. } => 2 * UNBOUND_CYLINDER_SIDE_LINES,
            Self::Sphere { .. } | Self::Capsule { .. } => 0,
        };
        rings + extra as u64
    }

    /// Line segments appended for the given ring resolution.
    pub fn line_count(&self, resolution: u32) -> u64 {
        let rings = self.ring_count() as u64 * resolution as u64;
        let extra = match self {
            Self::Cuboid { .. } => CUBOID_VERTEX_COUNT,
            Self::Cone { .. } => CONE_GENERATOR_LINES,
            Self::UnboundCylinder { .. } => UNBOUND_CYLINDER_SIDE_LINES,
            Self::Sphere { .. } | Self::Capsule { .. } => 0,
        };
        rings + extra as u64
    }

    /// Indices appended for the given ring resolution (two per line).
    pub fn index_count(&self, resolution: u32) -> u64 {
        2 * self.line_count(resolution)
    }

    /// Append this shape through `generator` starting at `vertex_begin`.
    pub fn append_to(
        &self,
        generator: &WireframeGenerator,
        vertex_begin: u32,
        positions: &mut Vec<Vec3>,
        indices: &mut Vec<u32>,
    ) {
        match *self {
            Self::Cuboid {
                width,
                height,
                depth,
            } => generator.cuboid(width, height, depth, vertex_begin, positions, indices),
            Self::Sphere { radius } => generator.sphere(radius, vertex_begin, positions, indices),
            Self::Cone { radius, height } => {
                generator.cone(radius, height, vertex_begin, positions, indices)
            }
            Self::UnboundCylinder { radius } => {
                generator.unbound_cylinder(radius, vertex_begin, positions, indices)
            }
            Self::Capsule { radius, height } => {
                generator.capsule(radius, height, vertex_begin, positions, indices)
            }
        }
    }
}
