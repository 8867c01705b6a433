//! Shape builders for wireframe debug primitives.
//!
//! Every builder appends to caller-owned position and index buffers.
//! `vertex_begin` must equal `positions.len()` at call time; every index
//! emitted lies in `vertex_begin..vertex_begin + emitted_vertex_count`.
//! Shapes are centered at the origin, the caller applies world transforms.

use crate::config::{
    UNBOUND_CYLINDER_DROP, UNBOUND_CYLINDER_SIDE_LINES, UNBOUND_CYLINDER_SIDE_STEP_DEGREES,
    WireframeConfig,
};
use crate::math::{Vec3, degree_to_radian};
use crate::ring::{Axis, circle_ring, elliptic_ring};

/// Generates wireframe line geometry for the supported primitives.
///
/// Holds the ring resolution used by every curved shape. Changing it with
/// [`set_vertex_count`](Self::set_vertex_count) affects later calls only.
///
/// # Panics
///
/// The builders do not check `vertex_begin`. In debug builds they panic on
/// `u32` overflow when `vertex_begin` plus the shape's vertex count exceeds
/// `u32::MAX`; use [`WireframeMesh`](crate::WireframeMesh) for checked packing.
#[derive(Debug, Clone, Default)]
pub struct WireframeGenerator {
    config: WireframeConfig,
}

impl WireframeGenerator {
    /// Create a generator from a config.
    pub fn new(config: WireframeConfig) -> Self {
        warn_if_degenerate(config.vertex_count);
        Self { config }
    }

    /// The active config.
    pub fn config(&self) -> &WireframeConfig {
        &self.config
    }

    /// Samples per ring.
    pub fn vertex_count(&self) -> u32 {
        self.config.vertex_count
    }

    /// Change the ring resolution for subsequent shapes.
    pub fn set_vertex_count(&mut self, vertex_count: u32) {
        warn_if_degenerate(vertex_count);
        self.config.vertex_count = vertex_count;
    }

    /// Append a cuboid: 24 vertices (4 per face) and 24 lines.
    ///
    /// Faces are emitted up, down, left, right, front, back. Each face lists
    /// its own 4 corners, so edges shared by two faces are drawn twice.
    pub fn cuboid(
        &self,
        width: f32,
        height: f32,
        depth: f32,
        vertex_begin: u32,
        positions: &mut Vec<Vec3>,
        indices: &mut Vec<u32>,
    ) {
        log::trace!("wireframe cuboid {width}x{height}x{depth} at vertex {vertex_begin}");

        let hw = width / 2.0;
        let hh = height / 2.0;
        let hd = depth / 2.0;

        #[rustfmt::skip]
        let faces = [
            // Up
            [Vec3::new(-hw, hh, -hd), Vec3::new(hw, hh, -hd), Vec3::new(hw, hh, hd), Vec3::new(-hw, hh, hd)],
            // Down
            [Vec3::new(-hw, -hh, -hd), Vec3::new(hw, -hh, -hd), Vec3::new(hw, -hh, hd), Vec3::new(-hw, -hh, hd)],
            // Left
            [Vec3::new(-hw, hh, -hd), Vec3::new(-hw, hh, hd), Vec3::new(-hw, -hh, hd), Vec3::new(-hw, -hh, -hd)],
            // Right
            [Vec3::new(hw, hh, -hd), Vec3::new(hw, hh, hd), Vec3::new(hw, -hh, hd), Vec3::new(hw, -hh, -hd)],
            // Front
            [Vec3::new(-hw, hh, hd), Vec3::new(hw, hh, hd), Vec3::new(hw, -hh, hd), Vec3::new(-hw, -hh, hd)],
            // Back
            [Vec3::new(-hw, hh, -hd), Vec3::new(hw, hh, -hd), Vec3::new(hw, -hh, -hd), Vec3::new(-hw, -hh, -hd)],
        ];

        for (face, corners) in faces.iter().enumerate() {
            positions.extend_from_slice(corners);

            let base = vertex_begin + 4 * face as u32;
            for k in 0..4 {
                indices.push(base + k);
                indices.push(base + (k + 1) % 4);
            }
        }
    }

    /// Append a sphere as three great circles (X, Y, then Z axis).
    pub fn sphere(
        &self,
        radius: f32,
        vertex_begin: u32,
        positions: &mut Vec<Vec3>,
        indices: &mut Vec<u32>,
    ) {
        log::trace!("wireframe sphere r={radius} at vertex {vertex_begin}");

        let vertex_count = self.vertex_count();
        let shift = Vec3::zeros();
        for (ring, axis) in Axis::ALL.into_iter().enumerate() {
            circle_ring(
                radius,
                axis,
                shift,
                vertex_begin + vertex_count * ring as u32,
                vertex_count,
                positions,
                indices,
            );
        }
    }

    /// Append a cone with its apex at `(0, height, 0)` and its base ring at
    /// `y = -height`, plus four generator lines from the apex to the base.
    pub fn cone(
        &self,
        radius: f32,
        height: f32,
        vertex_begin: u32,
        positions: &mut Vec<Vec3>,
        indices: &mut Vec<u32>,
    ) {
        log::trace!("wireframe cone r={radius} h={height} at vertex {vertex_begin}");

        let vertex_count = self.vertex_count();
        let shift = Vec3::new(0.0, -height, 0.0);
        circle_ring(
            radius,
            Axis::Y,
            shift,
            vertex_begin,
            vertex_count,
            positions,
            indices,
        );

        positions.push(Vec3::new(0.0, height, 0.0));
        positions.push(Vec3::new(-radius, -height, 0.0));
        positions.push(Vec3::new(radius, -height, 0.0));
        positions.push(Vec3::new(0.0, -height, radius));
        positions.push(Vec3::new(0.0, -height, -radius));

        let apex = vertex_begin + vertex_count;
        for extreme in 1..=4 {
            indices.push(apex);
            indices.push(apex + extreme);
        }
    }

    /// Append an unbound cylinder: one rim ring at `y = 0` and eight side
    /// lines dropping [`UNBOUND_CYLINDER_DROP`] units below it.
    pub fn unbound_cylinder(
        &self,
        radius: f32,
        vertex_begin: u32,
        positions: &mut Vec<Vec3>,
        indices: &mut Vec<u32>,
    ) {
        log::trace!("wireframe unbound cylinder r={radius} at vertex {vertex_begin}");

        let vertex_count = self.vertex_count();
        circle_ring(
            radius,
            Axis::Y,
            Vec3::zeros(),
            vertex_begin,
            vertex_count,
            positions,
            indices,
        );

        let index_begin = vertex_begin + vertex_count;
        for i in 0..UNBOUND_CYLINDER_SIDE_LINES {
            let radian = degree_to_radian(UNBOUND_CYLINDER_SIDE_STEP_DEGREES * i as f32);
            let (sin, cos) = radian.sin_cos();
            positions.push(Vec3::new(radius * cos, 0.0, radius * sin));
            positions.push(Vec3::new(radius * cos, -UNBOUND_CYLINDER_DROP, radius * sin));

            indices.push(index_begin + 2 * i);
            indices.push(index_begin + 2 * i + 1);
        }
    }

    /// Append a capsule centered at the origin.
    ///
    /// `height` is the distance between the centers of the two hemispherical
    /// ends. Emits four rings in order: top equator, bottom equator, the XY
    /// side silhouette, then the YZ side silhouette.
    pub fn capsule(
        &self,
        radius: f32,
        height: f32,
        vertex_begin: u32,
        positions: &mut Vec<Vec3>,
        indices: &mut Vec<u32>,
    ) {
        log::trace!("wireframe capsule r={radius} h={height} at vertex {vertex_begin}");

        let vertex_count = self.vertex_count();
        let half_height = height / 2.0;

        circle_ring(
            radius,
            Axis::Y,
            Vec3::new(0.0, half_height, 0.0),
            vertex_begin,
            vertex_count,
            positions,
            indices,
        );
        circle_ring(
            radius,
            Axis::Y,
            Vec3::new(0.0, -half_height, 0.0),
            vertex_begin + vertex_count,
            vertex_count,
            positions,
            indices,
        );
        elliptic_ring(
            radius,
            half_height,
            Axis::Z,
            vertex_begin + vertex_count * 2,
            vertex_count,
            positions,
            indices,
        );
        elliptic_ring(
            radius,
            half_height,
            Axis::X,
            vertex_begin + vertex_count * 3,
            vertex_count,
            positions,
            indices,
        );
    }
}

fn warn_if_degenerate(vertex_count: u32) {
    if vertex_count == 0 {
        log::warn!("Wireframe ring resolution is 0; curved shapes will emit no ring geometry");
    }
}
