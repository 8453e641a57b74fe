use super::*;
use approx::assert_relative_eq;
use glam::Vec3;

fn unit_square() -> [DVec3; 4] {
    [
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
    ]
}

#[test]
fn test_face_normal_is_normalized() {
    let n = face_normal(DVec3::new(3.0, 0.0, 0.0), DVec3::new(0.0, 5.0, 0.0));
    assert_relative_eq!(n.z, 1.0);
    assert_eq!(n.x, 0.0);
    assert_eq!(n.y, 0.0);
}

#[test]
fn test_face_normal_of_collinear_edges_is_zero() {
    let n = face_normal(DVec3::X, DVec3::X * 2.0);
    assert_eq!(n, DVec3::ZERO);
    let n = face_normal(DVec3::ZERO, DVec3::Y);
    assert_eq!(n, DVec3::ZERO);
}

#[test]
fn test_quad_layout() {
    let mesh = PreparedGeometry::Quad(unit_square()).tessellate().unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.indices(), &[0, 1, 2, 0, 2, 3]);
    for i in 0..4 {
        assert_eq!(mesh.normal(i), Vec3::Z);
    }
}

/// Normals follow the winding instead of being fixed to +Z.
#[test]
fn test_quad_normal_follows_winding() {
    let mut corners = unit_square();
    corners.reverse();
    let mesh = PreparedGeometry::Quad(corners).tessellate().unwrap();
    assert_eq!(mesh.normal(0), Vec3::NEG_Z);
}

#[test]
fn test_quad_in_tilted_plane() {
    let corners = [
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(0.0, 1.0, 1.0),
        DVec3::new(0.0, 0.0, 1.0),
    ];
    let mesh = PreparedGeometry::Quad(corners).tessellate().unwrap();
    assert_eq!(mesh.normal(0), Vec3::X);
}

#[test]
fn test_degenerate_quad_has_zero_normals() {
    let corners = [DVec3::ZERO, DVec3::ZERO, DVec3::Y, DVec3::Y];
    let mesh = PreparedGeometry::Quad(corners).tessellate().unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangle_count(), 2);
    assert!(mesh.normals().iter().all(|&c| c == 0.0));
}

#[test]
fn test_fan_layout() {
    let rim = vec![
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(-1.0, 0.0, 0.0),
        DVec3::new(0.0, -1.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
    ];
    let mesh = PreparedGeometry::Fan {
        center: DVec3::ZERO,
        rim,
        closed: true,
    }
    .tessellate()
    .unwrap();

    assert_eq!(mesh.vertex_count(), 6);
    assert_eq!(mesh.triangle_count(), 4);
    assert_eq!(mesh.indices(), &[0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5]);
    for i in 0..mesh.vertex_count() {
        assert_relative_eq!(mesh.normal(i).z, 1.0);
    }
}

#[test]
fn test_fan_with_short_rim_has_no_triangles() {
    let mesh = PreparedGeometry::Fan {
        center: DVec3::ZERO,
        rim: vec![DVec3::X],
        closed: false,
    }
    .tessellate()
    .unwrap();
    assert_eq!(mesh.vertex_count(), 2);
    assert_eq!(mesh.triangle_count(), 0);
    assert_eq!(mesh.normal(0), Vec3::ZERO);
}

#[test]
fn test_faces_offset_indices_per_quad() {
    let top = unit_square();
    let bottom = top.map(|c| c - DVec3::Z);
    let mesh = PreparedGeometry::Faces(vec![top, bottom]).tessellate().unwrap();
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.triangle(2), [4, 5, 6]);
    assert_eq!(mesh.triangle(3), [4, 6, 7]);
}

#[test]
fn test_tessellation_is_deterministic() {
    let prepared = PreparedGeometry::Quad(unit_square());
    assert_eq!(prepared.tessellate().unwrap(), prepared.tessellate().unwrap());
}

#[test]
fn test_quad_outline_closes_loop() {
    let edges = PreparedGeometry::Quad(unit_square()).outline();
    assert_eq!(edges.len(), 4);
    for (i, edge) in edges.iter().enumerate() {
        assert_eq!(edge[1], edges[(i + 1) % 4][0]);
    }
}

#[test]
fn test_degenerate_quad_outline_drops_zero_length_sides() {
    let corners = [DVec3::ZERO, DVec3::ZERO, DVec3::Y, DVec3::Y];
    let edges = PreparedGeometry::Quad(corners).outline();
    assert_eq!(edges, vec![[DVec3::ZERO, DVec3::Y], [DVec3::Y, DVec3::ZERO]]);
}

#[test]
fn test_fan_outline_for_disc_and_sector() {
    let rim = vec![DVec3::X, DVec3::Y, DVec3::NEG_X];
    let disc = PreparedGeometry::Fan {
        center: DVec3::ZERO,
        rim: rim.clone(),
        closed: true,
    };
    assert_eq!(disc.outline(), vec![[DVec3::X, DVec3::Y], [DVec3::Y, DVec3::NEG_X]]);

    let sector = PreparedGeometry::Fan {
        center: DVec3::ZERO,
        rim,
        closed: false,
    };
    let edges = sector.outline();
    assert_eq!(edges.len(), 4);
    assert_eq!(edges[2], [DVec3::ZERO, DVec3::X]);
    assert_eq!(edges[3], [DVec3::NEG_X, DVec3::ZERO]);
}

#[test]
fn test_faces_outline_lists_shared_edges_once() {
    let top = unit_square();
    let bottom = top.map(|c| c - DVec3::Z);
    let edges = PreparedGeometry::Faces(vec![top, bottom, top]).outline();
    assert_eq!(edges.len(), 8);
}
