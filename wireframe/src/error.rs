//! Wireframe error types.

use thiserror::Error;

/// Errors reported by the checked wireframe APIs.
///
/// The raw shape builders never fail; these come from axis conversion and
/// from [`WireframeMesh`](crate::WireframeMesh) buffer bookkeeping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireframeError {
    /// Axis index outside `0..=2`.
    #[error("invalid axis index {0}, expected 0 (X), 1 (Y) or 2 (Z)")]
    InvalidAxis(u8),

    /// Appending the shape would push an index past `u32::MAX`.
    #[error("index overflow: {vertex_count} vertices starting at {vertex_begin} exceed u32 range")]
    IndexOverflow {
        /// First vertex index the shape would use.
        vertex_begin: u64,
        /// Number of vertices the shape emits.
        vertex_count: u64,
    },

    /// A caller-supplied start index does not match the position buffer length.
    #[error("vertex begin mismatch: buffer holds {expected} positions, got vertex_begin {actual}")]
    VertexBeginMismatch {
        /// Current position buffer length.
        expected: u32,
        /// The start index that was passed in.
        actual: u32,
    },

    /// An index references a vertex outside the position buffer.
    #[error("index {index} at slot {slot} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        /// Position of the offending entry in the index buffer.
        slot: usize,
        /// The offending index value.
        index: u32,
        /// Position buffer length.
        vertex_count: usize,
    },

    /// The index buffer holds an unpaired trailing index.
    #[error("index buffer length {0} is odd, lines must be index pairs")]
    UnpairedIndex(usize),
}

/// Result alias for wireframe operations.
pub type WireframeResult<T> = Result<T, WireframeError>;
