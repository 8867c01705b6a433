//! Wireframe line geometry for debug shapes in RedLilium Engine.
//!
//! Produces positions and line-pair indices approximating common 3D
//! primitives (cuboid, sphere, cone, unbound cylinder, capsule) for gizmo
//! and debug rendering. Output is appended to caller-owned buffers, so
//! many shapes can share one vertex/index buffer.
//!
//! # Architecture
//!
//! - [`circle_ring`] / [`elliptic_ring`] - Closed ring samplers
//! - [`WireframeGenerator`] - Shape builders sharing one ring resolution
//! - [`WireframeShape`] - Tagged shape description with exact element counts
//! - [`WireframeMesh`] - Owned buffers with automatic `vertex_begin` bookkeeping
//! - [`WireframeCollector`] - Thread-safe accumulator for many producers
//!
//! # Usage
//!
//! ```
//! use redlilium_wireframe::{WireframeConfig, WireframeGenerator, WireframeMesh, WireframeShape};
//!
//! let generator = WireframeGenerator::new(WireframeConfig::new().with_vertex_count(16));
//! let mut mesh = WireframeMesh::new();
//! let sphere = mesh.push(&generator, &WireframeShape::Sphere { radius: 1.0 }).unwrap();
//! let cone = mesh
//!     .push(&generator, &WireframeShape::Cone { radius: 0.5, height: 1.0 })
//!     .unwrap();
//!
//! assert_eq!(sphere.vertex_count, 48);
//! assert_eq!(cone.vertex_begin, 48);
//! assert!(mesh.validate().is_ok());
//!
//! // Raw builders take the start index explicitly.
//! let mut positions = Vec::new();
//! let mut indices = Vec::new();
//! generator.cuboid(1.0, 2.0, 3.0, 0, &mut positions, &mut indices);
//! assert_eq!(positions.len(), 24);
//! ```

mod collector;
mod config;
mod error;
mod generator;
pub mod math;
mod mesh;
mod ring;
mod shape;

pub use collector::{WireframeBatch, WireframeCollector};
pub use config::{
    CONE_EXTRA_VERTICES, CONE_GENERATOR_LINES, CUBOID_VERTEX_COUNT, DEFAULT_VERTEX_COUNT,
    UNBOUND_CYLINDER_DROP, UNBOUND_CYLINDER_SIDE_LINES, UNBOUND_CYLINDER_SIDE_STEP_DEGREES,
    WireframeConfig,
};
pub use error::{WireframeError, WireframeResult};
pub use generator::WireframeGenerator;
pub use math::Vec3;
pub use mesh::{ShapeRange, WireframeMesh};
pub use ring::{Axis, circle_ring, elliptic_ring};
pub use shape::WireframeShape;
