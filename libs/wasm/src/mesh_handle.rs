//! # Mesh Handle
//!
//! WASM-friendly wrapper around an engine [`Mesh`] whose buffers can be
//! handed to JavaScript.
//!
//! Each buffer getter copies into a fresh typed array owned by JavaScript,
//! so the arrays stay valid after `free()`. This differs from the C getters,
//! which lend pointers into the mesh itself.

use opengeometry::Mesh;
use wasm_bindgen::prelude::*;

/// A tessellated mesh, owned by JavaScript until `free()` is called.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const rect = new Primitive("r1");
/// rect.set_rectangle(0, 0, 0, 2, 4);
/// rect.generate_geometry();
/// const mesh = rect.to_mesh();
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
/// mesh.free();
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    mesh: Mesh,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        u32::try_from(self.mesh.vertex_count()).unwrap_or(u32::MAX)
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        u32::try_from(self.mesh.triangle_count()).unwrap_or(u32::MAX)
    }

    /// Returns a copy of the vertex positions as a Float32Array.
    ///
    /// Format: [x, y, z, x, y, z, ...]
    #[wasm_bindgen]
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.mesh.vertices())
    }

    /// Returns a copy of the triangle indices as a Uint32Array.
    ///
    /// Format: [i0, i1, i2, i0, i1, i2, ...]
    #[wasm_bindgen]
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(self.mesh.indices())
    }

    /// Returns a copy of the vertex normals as a Float32Array, one per
    /// vertex.
    #[wasm_bindgen]
    pub fn normals(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.mesh.normals())
    }

    /// Returns true if the mesh has no vertices.
    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.mesh.is_empty()
    }
}

impl MeshHandle {
    /// Wraps an engine mesh.
    pub fn from_mesh(mesh: Mesh) -> Self {
        Self { mesh }
    }

    /// The wrapped mesh, for host-side callers.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }
}
