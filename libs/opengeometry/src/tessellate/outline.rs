//! Edge extraction for line rendering.

use glam::DVec3;

fn push_segment(segments: &mut Vec<[DVec3; 2]>, a: DVec3, b: DVec3) {
    if a != b {
        segments.push([a, b]);
    }
}

/// Sides of a polygon, closing back to the first point.
pub(super) fn closed_loop(points: &[DVec3]) -> Vec<[DVec3; 2]> {
    let mut segments = Vec::with_capacity(points.len());
    for (i, &point) in points.iter().enumerate() {
        push_segment(&mut segments, point, points[(i + 1) % points.len()]);
    }
    segments
}

/// Rim arc; an open sector also gets the radii to its two ends.
pub(super) fn fan_outline(center: DVec3, rim: &[DVec3], closed: bool) -> Vec<[DVec3; 2]> {
    let mut segments = Vec::with_capacity(rim.len() + 1);
    for pair in rim.windows(2) {
        push_segment(&mut segments, pair[0], pair[1]);
    }
    if let (false, Some(&first), Some(&last)) = (closed, rim.first(), rim.last()) {
        push_segment(&mut segments, center, first);
        push_segment(&mut segments, last, center);
    }
    segments
}

/// Every distinct edge of a set of faces, in order of first appearance.
pub(super) fn face_edges(faces: &[[DVec3; 4]]) -> Vec<[DVec3; 2]> {
    let mut segments: Vec<[DVec3; 2]> = Vec::new();
    for [a, b] in faces.iter().flat_map(|face| closed_loop(face)) {
        let seen = segments
            .iter()
            .any(|&[p, q]| (p == a && q == b) || (p == b && q == a));
        if !seen {
            segments.push([a, b]);
        }
    }
    segments
}
