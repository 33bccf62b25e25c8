//! WASM bindings for smith-core
//!
//! Exposes the chart engine to the JavaScript rendering and readout
//! layers. Bindings only marshal values; all math stays in smith-core.

use wasm_bindgen::prelude::*;

mod chart;
mod geometry;
mod trace;

pub use chart::WasmSmithChart;
pub use trace::WasmReflectionTrace;

/// Get the library version
#[wasm_bindgen]
pub fn version() -> String {
    "0.1.0".to_string()
}
