//! Two-triangle quad strategy.

use glam::DVec3;

use super::face_normal;
use crate::mesh::MeshBuilder;

/// Appends four vertices and two triangles for a planar quad.
///
/// The normal comes from the edges `v0→v1` and `v1→v2` and is shared by all
/// four vertices.
pub(super) fn append_quad(builder: &mut MeshBuilder, corners: &[DVec3; 4]) {
    let normal = face_normal(corners[1] - corners[0], corners[2] - corners[1]);
    if normal == DVec3::ZERO {
        log::trace!("degenerate quad {:?}, using zero normal", corners);
    }

    let [a, b, c, d] = (*corners).map(|corner| builder.add_vertex(corner, normal));
    builder.add_triangle(a, b, c);
    builder.add_triangle(a, c, d);
}
