//! # Mesh Data Structure
//!
//! Immutable triangle mesh holding the three flat GPU buffers, plus the
//! builder the tessellators use to assemble one.

use glam::{DVec3, Vec3};

use crate::error::{GeometryError, GeometryResult};

/// An immutable triangle mesh.
///
/// Buffers are stored flat and in `f32`, exactly as they are handed to a
/// graphics API, so exporting them is a borrow and never a copy:
///
/// - `vertices`: `[x, y, z, x, y, z, ...]`
/// - `indices`: `[i0, i1, i2, i0, i1, i2, ...]`
/// - `normals`: `[nx, ny, nz, ...]`, one per vertex, same order as `vertices`
///
/// Every `Mesh` satisfies `normals.len() == vertices.len()`,
/// `indices.len() % 3 == 0` and `index < vertex_count` for every index.
/// There is no API that mutates a mesh after construction.
///
/// # Example
///
/// ```rust
/// use opengeometry::Mesh;
///
/// let mesh = Mesh::from_buffers(
///     vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
///     vec![0, 1, 2],
///     vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
/// )
/// .unwrap();
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<f32>,
    indices: Vec<u32>,
    normals: Vec<f32>,
}

impl Mesh {
    /// Builds a mesh from flat buffers, checking every buffer invariant.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidMesh`] when the buffers are not
    /// multiples of three, the normal count differs from the vertex count,
    /// a position or normal component is not finite, or an index points past
    /// the last vertex.
    pub fn from_buffers(
        vertices: Vec<f32>,
        indices: Vec<u32>,
        normals: Vec<f32>,
    ) -> GeometryResult<Self> {
        if vertices.len() % 3 != 0 {
            return Err(GeometryError::invalid_mesh(format!(
                "vertex buffer length {} is not a multiple of 3",
                vertices.len()
            )));
        }
        if normals.len() != vertices.len() {
            return Err(GeometryError::invalid_mesh(format!(
                "normal buffer length {} does not match vertex buffer length {}",
                normals.len(),
                vertices.len()
            )));
        }
        if indices.len() % 3 != 0 {
            return Err(GeometryError::invalid_mesh(format!(
                "index buffer length {} is not a multiple of 3",
                indices.len()
            )));
        }

        if let Some(bad) = vertices.iter().chain(&normals).find(|v| !v.is_finite()) {
            return Err(GeometryError::invalid_mesh(format!(
                "non-finite component {bad} in vertex or normal buffer"
            )));
        }

        let vertex_count = vertices.len() / 3;
        if let Some(&bad) = indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(GeometryError::invalid_mesh(format!(
                "index {bad} out of range for {vertex_count} vertices"
            )));
        }

        Ok(Self {
            vertices,
            indices,
            normals,
        })
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Flat vertex positions, 3 components per vertex.
    #[inline]
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// Flat triangle indices, 3 per triangle.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Flat vertex normals, 3 components per vertex.
    #[inline]
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    /// Returns the position of vertex `index`.
    ///
    /// Panics if `index >= vertex_count()`.
    #[inline]
    pub fn position(&self, index: usize) -> Vec3 {
        Vec3::from_slice(&self.vertices[index * 3..index * 3 + 3])
    }

    /// Returns the normal of vertex `index`.
    ///
    /// Panics if `index >= vertex_count()`.
    #[inline]
    pub fn normal(&self, index: usize) -> Vec3 {
        Vec3::from_slice(&self.normals[index * 3..index * 3 + 3])
    }

    /// Returns triangle `index` as three vertex indices.
    ///
    /// Panics if `index >= triangle_count()`.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        let i = index * 3;
        [self.indices[i], self.indices[i + 1], self.indices[i + 2]]
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners; both are zero for an empty mesh.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        if self.is_empty() {
            return (Vec3::ZERO, Vec3::ZERO);
        }

        let first = self.position(0);
        (1..self.vertex_count())
            .map(|i| self.position(i))
            .fold((first, first), |(min, max), v| (min.min(v), max.max(v)))
    }
}

/// Incremental mesh assembly in `f64`.
///
/// Positions and normals are converted to `f32` once, in
/// [`MeshBuilder::build`].
#[derive(Debug, Default)]
pub struct MeshBuilder {
    positions: Vec<DVec3>,
    normals: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
}

impl MeshBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices added so far.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Adds a vertex with its normal and returns its index.
    pub fn add_vertex(&mut self, position: DVec3, normal: DVec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Flattens the collected data into an immutable [`Mesh`].
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidMesh`] if a triangle references a
    /// vertex that was never added.
    pub fn build(self) -> GeometryResult<Mesh> {
        Mesh::from_buffers(
            flatten(&self.positions),
            self.triangles.into_iter().flatten().collect(),
            flatten(&self.normals),
        )
    }
}

fn flatten(points: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(points.len() * 3);
    for p in points {
        result.extend_from_slice(&p.as_vec3().to_array());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_builder() -> MeshBuilder {
        let mut builder = MeshBuilder::new();
        builder.add_vertex(DVec3::ZERO, DVec3::Z);
        builder.add_vertex(DVec3::X, DVec3::Z);
        builder.add_vertex(DVec3::Y, DVec3::Z);
        builder.add_triangle(0, 1, 2);
        builder
    }

    #[test]
    fn test_builder_add_vertex_returns_index() {
        let mut builder = MeshBuilder::new();
        assert_eq!(builder.add_vertex(DVec3::ZERO, DVec3::Z), 0);
        assert_eq!(builder.add_vertex(DVec3::X, DVec3::Z), 1);
        assert_eq!(builder.vertex_count(), 2);
    }

    #[test]
    fn test_builder_flattens_to_f32() {
        let mesh = triangle_builder().build().unwrap();
        assert_eq!(mesh.vertices(), &[0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(mesh.indices(), &[0, 1, 2]);
        assert_eq!(mesh.normals(), &[0.0f32, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(mesh.triangle(0), [0, 1, 2]);
        assert_eq!(mesh.normal(2), Vec3::Z);
    }

    #[test]
    fn test_builder_rejects_dangling_index() {
        let mut builder = MeshBuilder::new();
        builder.add_vertex(DVec3::ZERO, DVec3::Z);
        builder.add_triangle(0, 1, 2);
        assert!(matches!(builder.build(), Err(GeometryError::InvalidMesh { .. })));
    }

    #[test]
    fn test_from_buffers_rejects_mismatched_normals() {
        let result = Mesh::from_buffers(vec![0.0; 9], vec![0, 1, 2], vec![0.0; 6]);
        assert!(matches!(result, Err(GeometryError::InvalidMesh { .. })));
    }

    #[test]
    fn test_from_buffers_rejects_partial_triangle() {
        let result = Mesh::from_buffers(vec![0.0; 9], vec![0, 1], vec![0.0; 9]);
        assert!(matches!(result, Err(GeometryError::InvalidMesh { .. })));
    }

    #[test]
    fn test_from_buffers_rejects_partial_vertex() {
        let result = Mesh::from_buffers(vec![0.0; 8], vec![], vec![0.0; 8]);
        assert!(matches!(result, Err(GeometryError::InvalidMesh { .. })));
    }

    #[test]
    fn test_from_buffers_rejects_non_finite_values() {
        let mut vertices = vec![0.0f32; 9];
        vertices[3] = f32::INFINITY;
        let result = Mesh::from_buffers(vertices, vec![0, 1, 2], vec![0.0; 9]);
        assert!(matches!(result, Err(GeometryError::InvalidMesh { .. })));

        let mut normals = vec![0.0f32; 9];
        normals[8] = f32::NAN;
        let result = Mesh::from_buffers(vec![0.0; 9], vec![0, 1, 2], normals);
        assert!(matches!(result, Err(GeometryError::InvalidMesh { .. })));
    }

    /// Coordinates beyond `f32::MAX` overflow when the builder narrows them.
    #[test]
    fn test_builder_rejects_coordinates_outside_f32() {
        let mut builder = MeshBuilder::new();
        builder.add_vertex(DVec3::new(1.0e39, 0.0, 0.0), DVec3::Z);
        assert!(matches!(builder.build(), Err(GeometryError::InvalidMesh { .. })));
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = MeshBuilder::new().build().unwrap();
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
        assert_eq!(mesh.bounding_box(), (Vec3::ZERO, Vec3::ZERO));
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut builder = MeshBuilder::new();
        builder.add_vertex(DVec3::new(-1.0, -2.0, -3.0), DVec3::Z);
        builder.add_vertex(DVec3::new(4.0, 5.0, 6.0), DVec3::Z);
        let (min, max) = builder.build().unwrap().bounding_box();
        assert_eq!(min, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Mesh>();
    }
}
