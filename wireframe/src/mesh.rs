//! Owned line-list buffers that pack several shapes together.
//!
//! [`WireframeMesh`] tracks `vertex_begin` itself, so shapes appended one
//! after another never overlap. The raw buffers stay accessible for
//! upload; GPU resources are the caller's business.

use crate::error::{WireframeError, WireframeResult};
use crate::generator::WireframeGenerator;
use crate::math::Vec3;
use crate::shape::WireframeShape;

/// Where one appended shape landed in the shared buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ShapeRange {
    /// First vertex of the shape.
    pub vertex_begin: u32,
    /// Vertices the shape appended.
    pub vertex_count: u32,
    /// First index slot of the shape.
    pub index_begin: u32,
    /// Indices the shape appended.
    pub index_count: u32,
}

impl ShapeRange {
    /// One past the last vertex of the shape.
    pub fn vertex_end(&self) -> u32 {
        self.vertex_begin + self.vertex_count
    }

    /// One past the last index slot of the shape.
    pub fn index_end(&self) -> u32 {
        self.index_begin + self.index_count
    }
}

/// Positions plus line-pair indices for any number of wireframe shapes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WireframeMesh {
    positions: Vec<Vec3>,
    indices: Vec<u32>,
}

impl WireframeMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mesh with room for the given element counts.
    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    /// Append `shape` right after the existing vertices.
    pub fn push(
        &mut self,
        generator: &WireframeGenerator,
        shape: &WireframeShape,
    ) -> WireframeResult<ShapeRange> {
        let vertex_begin = self.next_vertex()?;
        self.push_at(generator, shape, vertex_begin)
    }

    /// Append `shape` at an explicit `vertex_begin`.
    ///
    /// Fails unless `vertex_begin` equals the current vertex count, or when
    /// the shape's indices would not fit in `u32`.
    pub fn push_at(
        &mut self,
        generator: &WireframeGenerator,
        shape: &WireframeShape,
        vertex_begin: u32,
    ) -> WireframeResult<ShapeRange> {
        let expected = self.next_vertex()?;
        if vertex_begin != expected {
            return Err(WireframeError::VertexBeginMismatch {
                expected,
                actual: vertex_begin,
            });
        }

        let resolution = generator.vertex_count();
        let vertex_count = shape.vertex_count(resolution);
        let index_count = shape.index_count(resolution);
        let overflow = WireframeError::IndexOverflow {
            vertex_begin: vertex_begin as u64,
            vertex_count,
        };
        if vertex_begin as u64 + vertex_count > u32::MAX as u64 {
            return Err(overflow);
        }
        let index_begin = u32::try_from(self.indices.len()).map_err(|_| overflow.clone())?;
        if index_begin as u64 + index_count > u32::MAX as u64 {
            return Err(overflow);
        }

        self.positions.reserve(vertex_count as usize);
        self.indices.reserve(index_count as usize);
        shape.append_to(generator, vertex_begin, &mut self.positions, &mut self.indices);

        let range = ShapeRange {
            vertex_begin,
            vertex_count: vertex_count as u32,
            index_begin,
            index_count: index_count as u32,
        };
        debug_assert_eq!(self.positions.len(), range.vertex_end() as usize);
        debug_assert_eq!(self.indices.len(), range.index_end() as usize);

        log::trace!(
            "Packed {} into vertices {}..{}",
            shape.name(),
            range.vertex_begin,
            range.vertex_end()
        );
        Ok(range)
    }

    /// Append every shape in order, returning their ranges.
    pub fn extend<'a>(
        &mut self,
        generator: &WireframeGenerator,
        shapes: impl IntoIterator<Item = &'a WireframeShape>,
    ) -> WireframeResult<Vec<ShapeRange>> {
        shapes
            .into_iter()
            .map(|shape| self.push(generator, shape))
            .collect()
    }

    /// Append another mesh, rebasing its indices past the existing vertices.
    ///
    /// Returns the range the appended data occupies.
    pub fn append(&mut self, other: &WireframeMesh) -> WireframeResult<ShapeRange> {
        other.validate()?;
        let vertex_begin = self.next_vertex()?;
        let overflow = WireframeError::IndexOverflow {
            vertex_begin: vertex_begin as u64,
            vertex_count: other.positions.len() as u64,
        };
        let vertex_count = u32::try_from(other.positions.len()).map_err(|_| overflow.clone())?;
        let index_count = u32::try_from(other.indices.len()).map_err(|_| overflow.clone())?;
        let index_begin = u32::try_from(self.indices.len()).map_err(|_| overflow.clone())?;
        if vertex_begin.checked_add(vertex_count).is_none()
            || index_begin.checked_add(index_count).is_none()
        {
            return Err(overflow);
        }

        self.positions.extend_from_slice(&other.positions);
        self.indices
            .extend(other.indices.iter().map(|&index| index + vertex_begin));

        Ok(ShapeRange {
            vertex_begin,
            vertex_count,
            index_begin,
            index_count,
        })
    }

    fn next_vertex(&self) -> WireframeResult<u32> {
        u32::try_from(self.positions.len()).map_err(|_| WireframeError::IndexOverflow {
            vertex_begin: self.positions.len() as u64,
            vertex_count: 0,
        })
    }

    /// Vertex positions.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Line-pair indices.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Mutable access to both buffers for the raw builder functions.
    ///
    /// The caller takes over the `vertex_begin` contract.
    pub fn buffers_mut(&mut self) -> (&mut Vec<Vec3>, &mut Vec<u32>) {
        (&mut self.positions, &mut self.indices)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of indices.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of line segments.
    pub fn line_count(&self) -> usize {
        self.indices.len() / 2
    }

    /// Check if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.indices.is_empty()
    }

    /// Iterate over line segments as index pairs.
    pub fn lines(&self) -> impl Iterator<Item = [u32; 2]> + '_ {
        self.indices.chunks_exact(2).map(|pair| [pair[0], pair[1]])
    }

    /// Iterate over line segments as position pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.lines().filter_map(|[a, b]| {
            let start = self.positions.get(a as usize)?;
            let end = self.positions.get(b as usize)?;
            Some((*start, *end))
        })
    }

    /// Raw position bytes, three `f32` per vertex.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Raw `u32` index bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Check that indices come in pairs and all reference existing vertices.
    pub fn validate(&self) -> WireframeResult<()> {
        if self.indices.len() % 2 != 0 {
            return Err(WireframeError::UnpairedIndex(self.indices.len()));
        }
        let vertex_count = self.positions.len();
        match self
            .indices
            .iter()
            .enumerate()
            .find(|&(_, &index)| index as usize >= vertex_count)
        {
            Some((slot, &index)) => Err(WireframeError::IndexOutOfRange {
                slot,
                index,
                vertex_count,
            }),
            None => Ok(()),
        }
    }

    /// Remove all data, keeping allocations.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.indices.clear();
    }

    /// Split into the position and index buffers.
    pub fn into_buffers(self) -> (Vec<Vec3>, Vec<u32>) {
        (self.positions, self.indices)
    }
}
