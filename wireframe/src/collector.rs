use parking_lot::Mutex;

use crate::config::WireframeConfig;
use crate::error::WireframeResult;
use crate::generator::WireframeGenerator;
use crate::mesh::{ShapeRange, WireframeMesh};
use crate::shape::WireframeShape;

struct CollectorState {
    generator: WireframeGenerator,
    mesh: WireframeMesh,
}

/// Thread-safe wireframe accumulator.
///
/// Shapes pushed from any thread land in one shared [`WireframeMesh`].
/// The lock is held for the whole append, so each shape's `vertex_begin`
/// range is reserved and filled atomically.
///
/// For many shapes from one system, open a [`WireframeBatch`] with
/// [`batch`](Self::batch): it builds locally and merges once on drop.
pub struct WireframeCollector {
    state: Mutex<CollectorState>,
}

impl WireframeCollector {
    /// Create a collector with the given config.
    pub fn new(config: WireframeConfig) -> Self {
        Self {
            state: Mutex::new(CollectorState {
                generator: WireframeGenerator::new(config),
                mesh: WireframeMesh::new(),
            }),
        }
    }

    /// Current ring resolution.
    pub fn vertex_count(&self) -> u32 {
        self.state.lock().generator.vertex_count()
    }

    /// Change the ring resolution for shapes pushed afterwards.
    pub fn set_vertex_count(&self, vertex_count: u32) {
        self.state.lock().generator.set_vertex_count(vertex_count);
    }

    /// Append one shape to the shared mesh.
    pub fn push(&self, shape: &WireframeShape) -> WireframeResult<ShapeRange> {
        let mut state = self.state.lock();
        let CollectorState { generator, mesh } = &mut *state;
        mesh.push(generator, shape)
    }

    /// Open a local batch that merges into this collector on drop.
    pub fn batch(&self) -> WireframeBatch<'_> {
        let generator = self.state.lock().generator.clone();
        WireframeBatch {
            collector: self,
            generator,
            mesh: WireframeMesh::new(),
        }
    }

    /// Take the accumulated mesh, leaving an empty one behind.
    pub fn take(&self) -> WireframeMesh {
        let mesh = std::mem::take(&mut self.state.lock().mesh);
        log::debug!(
            "Wireframe collector flushed {} vertices, {} lines",
            mesh.vertex_count(),
            mesh.line_count()
        );
        mesh
    }

    fn merge(&self, batch: &WireframeMesh) -> WireframeResult<ShapeRange> {
        self.state.lock().mesh.append(batch)
    }
}

impl Default for WireframeCollector {
    fn default() -> Self {
        Self::new(WireframeConfig::default())
    }
}

/// A short-lived local batch of shapes.
///
/// Ranges returned by [`push`](Self::push) are local to the batch; the
/// whole batch is rebased when it merges into the collector, either through
/// [`finish`](Self::finish) or on [`Drop`]. Each push uses the collector's
/// ring resolution at the time of the push.
pub struct WireframeBatch<'a> {
    collector: &'a WireframeCollector,
    generator: WireframeGenerator,
    mesh: WireframeMesh,
}

impl WireframeBatch<'_> {
    /// Append one shape to the batch.
    pub fn push(&mut self, shape: &WireframeShape) -> WireframeResult<ShapeRange> {
        let vertex_count = self.collector.vertex_count();
        if self.generator.vertex_count() != vertex_count {
            self.generator.set_vertex_count(vertex_count);
        }
        self.mesh.push(&self.generator, shape)
    }

    /// Merge the batch into the collector now.
    ///
    /// Returns the range the batch occupies in the shared mesh. On error
    /// nothing is merged.
    pub fn finish(mut self) -> WireframeResult<ShapeRange> {
        let mesh = std::mem::take(&mut self.mesh);
        self.collector.merge(&mesh)
    }

    /// Number of vertices collected so far.
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }
}

impl Drop for WireframeBatch<'_> {
    fn drop(&mut self) {
        let mesh = std::mem::take(&mut self.mesh);
        if mesh.is_empty() {
            return;
        }
        if let Err(err) = self.collector.merge(&mesh) {
            log::warn!("Discarding wireframe batch: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    fn collector(n: u32) -> WireframeCollector {
        WireframeCollector::new(WireframeConfig::new().with_vertex_count(n))
    }

    #[test]
    fn test_push_and_take() {
        let collector = collector(8);
        collector.push(&WireframeShape::Sphere { radius: 1.0 }).unwrap();
        let range = collector
            .push(&WireframeShape::Cone {
                radius: 1.0,
                height: 1.0,
            })
            .unwrap();
        assert_eq!(range.vertex_begin, 24);

        let mesh = collector.take();
        assert_eq!(mesh.vertex_count(), 24 + 13);
        assert!(mesh.validate().is_ok());
        assert!(collector.take().is_empty());
    }

    #[test]
    fn test_batch_merges_on_drop() {
        let collector = collector(4);
        collector.push(&WireframeShape::Sphere { radius: 1.0 }).unwrap();
        {
            let mut batch = collector.batch();
            let local = batch
                .push(&WireframeShape::UnboundCylinder { radius: 1.0 })
                .unwrap();
            assert_eq!(local.vertex_begin, 0);
            assert_eq!(batch.vertex_count(), 20);
        }

        let mesh = collector.take();
        assert_eq!(mesh.vertex_count(), 12 + 20);
        assert_eq!(mesh.indices()[24], 12);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_batch_reads_resolution_per_push() {
        let collector = collector(8);
        let mut batch = collector.batch();
        collector.set_vertex_count(4);
        let range = batch.push(&WireframeShape::Sphere { radius: 1.0 }).unwrap();
        assert_eq!(range.vertex_count, 12);

        collector.set_vertex_count(6);
        let range = batch.push(&WireframeShape::Sphere { radius: 1.0 }).unwrap();
        assert_eq!(range.vertex_begin, 12);
        assert_eq!(range.vertex_count, 18);
    }

    #[test]
    fn test_batch_finish_reports_range() {
        let collector = collector(4);
        collector.push(&WireframeShape::Sphere { radius: 1.0 }).unwrap();

        let mut batch = collector.batch();
        batch
            .push(&WireframeShape::Cone {
                radius: 1.0,
                height: 1.0,
            })
            .unwrap();
        let range = batch.finish().unwrap();
        assert_eq!(range.vertex_begin, 12);
        assert_eq!(range.vertex_count, 9);
        assert_eq!(range.index_begin, 24);

        // Finishing leaves nothing for Drop to merge a second time.
        let mesh = collector.take();
        assert_eq!(mesh.vertex_count(), 12 + 9);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_set_vertex_count() {
        let collector = collector(4);
        collector.set_vertex_count(6);
        assert_eq!(collector.vertex_count(), 6);
        let range = collector.push(&WireframeShape::Sphere { radius: 1.0 }).unwrap();
        assert_eq!(range.vertex_count, 18);
    }

    #[test]
    fn test_concurrent_pushes() {
        let collector = Arc::new(collector(8));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let collector = Arc::clone(&collector);
                thread::spawn(move || {
                    for _ in 0..10 {
                        collector
                            .push(&WireframeShape::Capsule {
                                radius: 1.0,
                                height: i as f32,
                            })
                            .unwrap();
                    }
                    let mut batch = collector.batch();
                    batch
                        .push(&WireframeShape::Cuboid {
                            width: 1.0,
                            height: 1.0,
                            depth: 1.0,
                        })
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mesh = collector.take();
        assert_eq!(mesh.vertex_count(), 4 * (10 * 32 + 24));
        assert_eq!(mesh.line_count(), 4 * (10 * 32 + 24));
        assert!(mesh.validate().is_ok());
    }
}
