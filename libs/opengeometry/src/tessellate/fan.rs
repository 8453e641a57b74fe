//! Triangle fan strategy for discs and sectors.

use glam::DVec3;

use super::face_normal;
use crate::error::GeometryResult;
use crate::mesh::{Mesh, MeshBuilder};

/// Center vertex first, then the rim; one triangle `(0, i, i+1)` per pair of
/// consecutive rim points.
pub(super) fn tessellate_fan(center: DVec3, rim: &[DVec3]) -> GeometryResult<Mesh> {
    let normal = match rim {
        [first, second, ..] => face_normal(*first - center, *second - center),
        _ => DVec3::ZERO,
    };

    let slices = rim.len().saturating_sub(1);
    let mut builder = MeshBuilder::with_capacity(rim.len() + 1, slices);
    let apex = builder.add_vertex(center, normal);
    for &point in rim {
        builder.add_vertex(point, normal);
    }
    for i in 1..=slices as u32 {
        builder.add_triangle(apex, i, i + 1);
    }

    builder.build()
}
