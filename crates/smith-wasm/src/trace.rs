//! WASM bindings for measured reflection sweeps

use js_sys::Float64Array;
use num_complex::Complex64;
use smith_core::ReflectionTrace;
use wasm_bindgen::prelude::*;

use crate::chart::WasmSmithChart;

/// A one-port reflection sweep for WASM
#[wasm_bindgen]
pub struct WasmReflectionTrace {
    inner: ReflectionTrace,
}

#[wasm_bindgen]
impl WasmReflectionTrace {
    /// Build a trace from a frequency array and interleaved [re, im] pairs
    ///
    /// The JS touchstone loader produces exactly this layout.
    #[wasm_bindgen(constructor)]
    pub fn new(f: Float64Array, gamma_interleaved: Float64Array) -> Result<WasmReflectionTrace, JsValue> {
        let f: Vec<f64> = f.to_vec();
        let flat: Vec<f64> = gamma_interleaved.to_vec();
        if flat.len() % 2 != 0 {
            return Err(JsValue::from_str(
                "reflection data must be interleaved [re, im] pairs",
            ));
        }
        let gamma: Vec<Complex64> = flat
            .chunks_exact(2)
            .map(|p| Complex64::new(p[0], p[1]))
            .collect();

        let inner = ReflectionTrace::from_vecs(f, gamma)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmReflectionTrace { inner })
    }

    /// Number of frequency points
    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Frequency array in Hz
    #[wasm_bindgen(getter)]
    pub fn f(&self) -> Float64Array {
        Float64Array::from(self.inner.f().as_slice().unwrap_or(&[]))
    }

    /// Reflection magnitude per point
    #[wasm_bindgen(js_name = getMagnitude)]
    pub fn get_magnitude(&self) -> Float64Array {
        let mag = self.inner.magnitude();
        Float64Array::from(mag.as_slice().unwrap_or(&[]))
    }

    /// Reflection phase in degrees per point
    #[wasm_bindgen(js_name = getPhaseDeg)]
    pub fn get_phase_deg(&self) -> Float64Array {
        let phase = self.inner.phase_deg();
        Float64Array::from(phase.as_slice().unwrap_or(&[]))
    }

    /// SWR per point
    #[wasm_bindgen(js_name = getSwr)]
    pub fn get_swr(&self) -> Float64Array {
        let swr = self.inner.swr();
        Float64Array::from(swr.as_slice().unwrap_or(&[]))
    }

    /// Return loss in dB per point
    #[wasm_bindgen(js_name = getReturnLossDb)]
    pub fn get_return_loss_db(&self) -> Float64Array {
        let rl = self.inner.return_loss_db();
        Float64Array::from(rl.as_slice().unwrap_or(&[]))
    }

    /// Mismatch loss in dB per point
    #[wasm_bindgen(js_name = getMismatchLossDb)]
    pub fn get_mismatch_loss_db(&self) -> Float64Array {
        let ml = self.inner.mismatch_loss_db();
        Float64Array::from(ml.as_slice().unwrap_or(&[]))
    }

    /// Physical impedance per point, interleaved [re, im]
    ///
    /// Singular samples are encoded as NaN pairs; the JS side checks
    /// Number.isNaN before drawing a readout.
    #[wasm_bindgen(js_name = getImpedance)]
    pub fn get_impedance(&self, chart: &WasmSmithChart) -> Float64Array {
        flatten_optional(self.inner.impedance(chart.as_inner()))
    }

    /// Physical admittance per point, interleaved [re, im]; NaN when singular
    #[wasm_bindgen(js_name = getAdmittance)]
    pub fn get_admittance(&self, chart: &WasmSmithChart) -> Float64Array {
        flatten_optional(self.inner.admittance(chart.as_inner()))
    }

    /// Index of the sample nearest a reflection-plane probe point
    #[wasm_bindgen(js_name = nearestIndex)]
    pub fn nearest_index(&self, re: f64, im: f64) -> Option<usize> {
        self.inner.nearest_index(Complex64::new(re, im))
    }
}

fn flatten_optional(values: Vec<Option<Complex64>>) -> Float64Array {
    let mut flat = Vec::with_capacity(values.len() * 2);
    for v in values {
        match v {
            Some(z) => {
                flat.push(z.re);
                flat.push(z.im);
            }
            None => {
                flat.push(f64::NAN);
                flat.push(f64::NAN);
            }
        }
    }
    Float64Array::from(flat.as_slice())
}
