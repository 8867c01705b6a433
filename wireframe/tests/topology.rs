//! Topology and buffer-packing tests across ring resolutions.
//!
//! Shapes are checked through the raw builder API, the same way a debug
//! renderer would pack them into one shared line-list buffer.

use rstest::rstest;

use redlilium_wireframe::{
    Axis, Vec3, WireframeConfig, WireframeGenerator, WireframeShape, circle_ring, elliptic_ring,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn generator(resolution: u32) -> WireframeGenerator {
    init_logger();
    WireframeGenerator::new(WireframeConfig::new().with_vertex_count(resolution))
}

/// Follow the ring's pairs from `begin` and check it visits every vertex once.
fn assert_single_cycle(indices: &[u32], begin: u32, count: u32) {
    assert_eq!(indices.len(), 2 * count as usize);

    let mut degree = vec![0u32; count as usize];
    for &index in indices {
        assert!((begin..begin + count).contains(&index), "index {index} escapes ring");
        degree[(index - begin) as usize] += 1;
    }
    if count > 1 {
        assert!(degree.iter().all(|&d| d == 2));
    }

    let mut current = begin;
    for pair in indices.chunks_exact(2) {
        assert_eq!(pair[0], current);
        current = pair[1];
    }
    assert_eq!(current, begin);
}

fn all_shapes() -> Vec<WireframeShape> {
    vec![
        WireframeShape::Cuboid {
            width: 2.0,
            height: 1.0,
            depth: 0.5,
        },
        WireframeShape::Sphere { radius: 1.5 },
        WireframeShape::Cone {
            radius: 1.0,
            height: 2.0,
        },
        WireframeShape::UnboundCylinder { radius: 0.75 },
        WireframeShape::Capsule {
            radius: 0.5,
            height: 3.0,
        },
    ]
}

#[rstest]
#[case::single(1)]
#[case::pair(2)]
#[case::odd(5)]
#[case::eight(8)]
#[case::default(40)]
#[case::odd_large(41)]
fn test_circle_ring_is_closed_cycle(#[case] resolution: u32) {
    for axis in Axis::ALL {
        let mut positions = Vec::new();
        let mut indices = Vec::new();
        circle_ring(1.0, axis, Vec3::zeros(), 17, resolution, &mut positions, &mut indices);

        assert_eq!(positions.len(), resolution as usize);
        assert_single_cycle(&indices, 17, resolution);
    }
}

#[rstest]
#[case::pair(2)]
#[case::odd(7)]
#[case::default(40)]
fn test_elliptic_ring_is_closed_cycle(#[case] resolution: u32) {
    let mut positions = Vec::new();
    let mut indices = Vec::new();
    elliptic_ring(1.0, 2.0, Axis::Z, 3, resolution, &mut positions, &mut indices);

    assert_eq!(positions.len(), resolution as usize);
    assert_single_cycle(&indices, 3, resolution);

    let flip = (resolution / 2) as usize;
    for (i, p) in positions.iter().enumerate() {
        let lobe_center = if i < flip { 2.0 } else { -2.0 };
        let d = ((p.x * p.x) + (p.y - lobe_center).powi(2)).sqrt();
        assert!((d - 1.0).abs() < 1e-5);
    }
}

#[rstest]
#[case(0.0)]
#[case(1.0)]
#[case(12.5)]
fn test_sphere_vertices_on_radius(#[case] radius: f32) {
    let g = generator(40);
    let mut positions = Vec::new();
    let mut indices = Vec::new();
    g.sphere(radius, 0, &mut positions, &mut indices);

    assert_eq!(positions.len(), 120);
    for p in &positions {
        assert!((p.norm() - radius).abs() < 1e-4 * radius.max(1.0));
    }
    for ring in 0..3 {
        let begin = 40 * ring;
        assert_single_cycle(&indices[2 * begin as usize..2 * (begin + 40) as usize], begin, 40);
    }
}

#[test]
fn test_capsule_reference_layout() {
    let g = generator(8);
    let mut positions = Vec::new();
    let mut indices = Vec::new();
    g.capsule(1.0, 2.0, 0, &mut positions, &mut indices);

    assert_eq!(positions.len(), 32);
    assert_eq!(indices.len() / 2, 32);
    assert!(positions[0..8].iter().all(|p| p.y == 1.0));
    assert!(positions[8..16].iter().all(|p| p.y == -1.0));
}

#[test]
fn test_cone_apex_in_every_generator_line() {
    let g = generator(40);
    let mut positions = vec![Vec3::zeros(); 10];
    let mut indices = Vec::new();
    g.cone(2.0, 4.0, 10, &mut positions, &mut indices);

    let apex = 10 + 40;
    assert_eq!(positions[apex as usize], Vec3::new(0.0, 4.0, 0.0));
    let generators = &indices[80..];
    assert_eq!(generators.len(), 8);
    assert!(generators.chunks_exact(2).all(|pair| pair[0] == apex));
}

#[rstest]
#[case::zero(0)]
#[case::tiny(3)]
#[case::default(40)]
fn test_packed_shapes_never_overlap(#[case] resolution: u32) {
    let g = generator(resolution);
    let mut positions = Vec::new();
    let mut indices = Vec::new();

    for shape in all_shapes().iter().chain(all_shapes().iter().rev()) {
        let vertex_begin = positions.len() as u32;
        let index_begin = indices.len();
        shape.append_to(&g, vertex_begin, &mut positions, &mut indices);

        let vertex_end = positions.len() as u32;
        assert_eq!((vertex_end - vertex_begin) as u64, shape.vertex_count(resolution));
        assert_eq!((indices.len() - index_begin) as u64, shape.index_count(resolution));
        assert!(
            indices[index_begin..]
                .iter()
                .all(|index| (vertex_begin..vertex_end).contains(index)),
            "{} leaked outside its range",
            shape.name()
        );
    }
    assert_eq!(indices.len() % 2, 0);
}

#[test]
fn test_degenerate_dimensions_do_not_panic() {
    let g = generator(6);
    let mut positions = Vec::new();
    let mut indices = Vec::new();
    g.cuboid(-1.0, 0.0, -0.0, 0, &mut positions, &mut indices);
    g.sphere(0.0, 24, &mut positions, &mut indices);
    g.cone(-1.0, 0.0, 42, &mut positions, &mut indices);
    g.unbound_cylinder(0.0, 53, &mut positions, &mut indices);
    g.capsule(0.0, -2.0, 75, &mut positions, &mut indices);

    assert_eq!(positions.len(), 99);
    assert!(indices.iter().all(|&i| (i as usize) < positions.len()));
}
