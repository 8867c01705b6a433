//! Closed ring samplers shared by every shape builder.
//!
//! A ring is `vertex_count` samples spaced evenly around a closed curve
//! plus the same number of index pairs joining each sample to the next,
//! the last one wrapping back to `vertex_begin`.

use std::f32::consts::TAU;

use crate::error::WireframeError;
use crate::math::Vec3;

/// Principal axis a ring is perpendicular to.
///
/// Callers that store axes as integers go through [`Axis::index`] and
/// `TryFrom<u8>`: `0 = X`, `1 = Y`, `2 = Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Ring lies in the YZ plane.
    X,
    /// Ring lies in the XZ plane.
    Y,
    /// Ring lies in the XY plane.
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Numeric axis index.
    pub fn index(self) -> u8 {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

impl TryFrom<u8> for Axis {
    type Error = WireframeError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::X),
            1 => Ok(Self::Y),
            2 => Ok(Self::Z),
            other => Err(WireframeError::InvalidAxis(other)),
        }
    }
}

/// Angle of sample `i` out of `vertex_count`.
#[inline]
fn sample_angle(i: u32, count_reciprocal: f32) -> f32 {
    i as f32 * count_reciprocal * TAU
}

/// Push the pair joining sample `i` to its successor on the loop.
#[inline]
fn push_loop_pair(i: u32, vertex_begin: u32, vertex_count: u32, indices: &mut Vec<u32>) {
    let global_index = vertex_begin + i;
    if i + 1 < vertex_count {
        indices.push(global_index);
        indices.push(global_index + 1);
    } else {
        indices.push(global_index);
        indices.push(vertex_begin);
    }
}

/// Append a circle of `radius` centered at `shift`, perpendicular to `axis`.
///
/// Emits exactly `vertex_count` positions and `vertex_count` index pairs.
/// A zero `vertex_count` emits nothing.
///
/// # Panics
///
/// In debug builds, panics on `u32` overflow if `vertex_begin + vertex_count`
/// exceeds `u32::MAX`.
pub fn circle_ring(
    radius: f32,
    axis: Axis,
    shift: Vec3,
    vertex_begin: u32,
    vertex_count: u32,
    positions: &mut Vec<Vec3>,
    indices: &mut Vec<u32>,
) {
    let count_reciprocal = 1.0 / vertex_count as f32;
    for i in 0..vertex_count {
        let (sin, cos) = sample_angle(i, count_reciprocal).sin_cos();

        let position = match axis {
            Axis::X => Vec3::new(shift.x, radius * cos + shift.y, radius * sin + shift.z),
            Axis::Y => Vec3::new(radius * cos + shift.x, shift.y, radius * sin + shift.z),
            Axis::Z => Vec3::new(radius * cos + shift.x, radius * sin + shift.y, shift.z),
        };
        positions.push(position);

        push_loop_pair(i, vertex_begin, vertex_count, indices);
    }
}

/// Append a two-lobed ring: a circle of `radius` whose first half of the
/// samples is raised by `height` and whose second half is lowered by it.
///
/// The offset switches to `-height` at sample `vertex_count / 2` (integer
/// division, so odd counts put the extra sample in the lowered half).
/// Used for the side silhouettes of a capsule.
///
/// # Panics
///
/// Same overflow contract as [`circle_ring`].
pub fn elliptic_ring(
    radius: f32,
    height: f32,
    axis: Axis,
    vertex_begin: u32,
    vertex_count: u32,
    positions: &mut Vec<Vec3>,
    indices: &mut Vec<u32>,
) {
    let count_reciprocal = 1.0 / vertex_count as f32;
    let flip_at = vertex_count / 2;
    for i in 0..vertex_count {
        let (sin, cos) = sample_angle(i, count_reciprocal).sin_cos();
        let offset = if i < flip_at { height } else { -height };

        let position = match axis {
            Axis::X => Vec3::new(0.0, radius * sin + offset, radius * cos),
            Axis::Y => Vec3::new(radius * cos, offset, radius * sin),
            Axis::Z => Vec3::new(radius * cos, radius * sin + offset, 0.0),
        };
        positions.push(position);

        push_loop_pair(i, vertex_begin, vertex_count, indices);
    }
}
