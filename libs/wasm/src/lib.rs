//! WASM-facing entry points for the OpenGeometry engine.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Every exported method has a `*_internal` twin returning
//! [`WasmError`], which native tests call to avoid depending on a JS host.
//!
//! ```
//! use opengeometry_wasm::WasmPrimitive;
//!
//! let mut rect = WasmPrimitive::new("r1");
//! rect.set_config_json_internal(
//!     r#"{"kind":"rectangle","center":[0,0,0],"width":2,"height":4}"#,
//! )
//! .unwrap();
//! rect.generate_geometry_internal().unwrap();
//! let mesh = rect.to_mesh_internal().unwrap();
//! assert_eq!(mesh.mesh().vertex_count(), 4);
//! ```

mod mesh_handle;

pub use mesh_handle::MeshHandle;

use glam::DVec3;
use opengeometry::{GeometryError, Primitive, PrimitiveState, Shape};
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Errors raised by the JavaScript-facing API.
#[derive(Debug, Error)]
pub enum WasmError {
    /// A shape description was not valid JSON for any known kind.
    #[error("invalid shape json: {0}")]
    Json(#[from] serde_json::Error),
    /// The engine rejected the call.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl From<WasmError> for JsValue {
    fn from(err: WasmError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "opengeometry";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the crate version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_owned()
}

/// A primitive driven from JavaScript.
///
/// Exported to JavaScript as `Primitive`. Errors surface as thrown `Error`
/// objects carrying the engine's message.
#[wasm_bindgen(js_name = Primitive)]
#[derive(Debug, Clone)]
pub struct WasmPrimitive {
    inner: Primitive,
}

#[wasm_bindgen(js_class = Primitive)]
impl WasmPrimitive {
    /// Creates an unconfigured primitive.
    #[wasm_bindgen(constructor)]
    pub fn new(id: &str) -> WasmPrimitive {
        WasmPrimitive {
            inner: Primitive::new(id),
        }
    }

    /// Diagnostic identity supplied at construction.
    #[wasm_bindgen(getter)]
    pub fn id(&self) -> String {
        self.inner.id().to_owned()
    }

    /// Lifecycle state: `"unconfigured"`, `"configured"` or
    /// `"geometry_generated"`.
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        match self.inner.state() {
            PrimitiveState::Unconfigured => "unconfigured",
            PrimitiveState::Configured => "configured",
            PrimitiveState::GeometryGenerated => "geometry_generated",
        }
        .to_owned()
    }

    /// Configures an XY-plane rectangle.
    pub fn set_rectangle(
        &mut self,
        x: f64,
        y: f64,
        z: f64,
        width: f64,
        height: f64,
    ) -> Result<(), JsValue> {
        self.inner
            .set_rectangle(DVec3::new(x, y, z), width, height)
            .map_err(|err| WasmError::from(err).into())
    }

    /// Configures an XY-plane disc sector; `segments == 0` uses the default.
    #[allow(clippy::too_many_arguments)]
    pub fn set_circle(
        &mut self,
        x: f64,
        y: f64,
        z: f64,
        radius: f64,
        segments: u32,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<(), JsValue> {
        self.inner
            .set_circle(DVec3::new(x, y, z), radius, segments, start_angle, end_angle)
            .map_err(|err| WasmError::from(err).into())
    }

    /// Configures an axis-aligned box.
    pub fn set_cuboid(
        &mut self,
        x: f64,
        y: f64,
        z: f64,
        width: f64,
        height: f64,
        depth: f64,
    ) -> Result<(), JsValue> {
        self.inner
            .set_cuboid(DVec3::new(x, y, z), width, height, depth)
            .map_err(|err| WasmError::from(err).into())
    }

    /// Configures the primitive from a tagged shape, e.g.
    /// `{"kind":"circle","center":[0,0,0],"radius":1}`.
    pub fn set_config_json(&mut self, json: &str) -> Result<(), JsValue> {
        Ok(self.set_config_json_internal(json)?)
    }

    /// Current configuration as tagged JSON, or `undefined` if unconfigured.
    pub fn config_json(&self) -> Result<Option<String>, JsValue> {
        Ok(self.config_json_internal()?)
    }

    /// Prepares the configured geometry.
    pub fn generate_geometry(&mut self) -> Result<(), JsValue> {
        Ok(self.generate_geometry_internal()?)
    }

    /// Tessellates the generated geometry into a new mesh.
    pub fn to_mesh(&self) -> Result<MeshHandle, JsValue> {
        Ok(self.to_mesh_internal()?)
    }

    /// Edges of the generated geometry for line rendering, as segment
    /// endpoints `[x0, y0, z0, x1, y1, z1, ...]`.
    ///
    /// Suits `THREE.LineSegments` directly.
    pub fn outline(&self) -> Result<js_sys::Float32Array, JsValue> {
        let flat = self.outline_internal()?;
        Ok(js_sys::Float32Array::from(&flat[..]))
    }
}

impl WasmPrimitive {
    /// Host-only twin of [`WasmPrimitive::set_config_json`].
    pub fn set_config_json_internal(&mut self, json: &str) -> Result<(), WasmError> {
        let shape: Shape = serde_json::from_str(json)?;
        log::debug!("primitive '{}' configured from json as {}", self.inner.id(), shape.kind_name());
        self.inner.set_shape(shape)?;
        Ok(())
    }

    /// Host-only twin of [`WasmPrimitive::config_json`].
    pub fn config_json_internal(&self) -> Result<Option<String>, WasmError> {
        self.inner
            .shape()
            .map(serde_json::to_string)
            .transpose()
            .map_err(WasmError::from)
    }

    /// Host-only twin of [`WasmPrimitive::generate_geometry`].
    pub fn generate_geometry_internal(&mut self) -> Result<(), WasmError> {
        Ok(self.inner.generate_geometry()?)
    }

    /// Host-only twin of [`WasmPrimitive::to_mesh`].
    pub fn to_mesh_internal(&self) -> Result<MeshHandle, WasmError> {
        Ok(MeshHandle::from_mesh(self.inner.to_mesh()?))
    }

    /// Host-only twin of [`WasmPrimitive::outline`].
    pub fn outline_internal(&self) -> Result<Vec<f32>, WasmError> {
        let segments = self.inner.outline()?;
        Ok(segments
            .iter()
            .flatten()
            .flat_map(|point| point.as_vec3().to_array())
            .collect())
    }

    /// The wrapped engine primitive.
    pub fn primitive(&self) -> &Primitive {
        &self.inner
    }
}
