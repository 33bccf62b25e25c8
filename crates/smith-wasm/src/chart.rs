//! WASM bindings for the SmithChart context and scalar readouts

use js_sys::Float64Array;
use num_complex::Complex64;
use smith_core::math::{conversions, metrics};
use smith_core::SmithChart;
use wasm_bindgen::prelude::*;

/// Encode an optional complex value as a Float64Array
///
/// `[re, im]` for a value; an empty array encodes "no value" (singular
/// transform), which the JS side treats as "do not draw."
fn complex_opt_to_array(value: Option<Complex64>) -> Float64Array {
    match value {
        Some(z) => Float64Array::from([z.re, z.im].as_slice()),
        None => Float64Array::new_with_length(0),
    }
}

/// Smith-chart engine context for WASM
#[wasm_bindgen]
pub struct WasmSmithChart {
    inner: SmithChart,
}

impl WasmSmithChart {
    /// Borrow the wrapped engine context (crate-internal)
    pub(crate) fn as_inner(&self) -> &SmithChart {
        &self.inner
    }
}

#[wasm_bindgen]
impl WasmSmithChart {
    /// Create a chart context with a reference impedance in ohms
    #[wasm_bindgen(constructor)]
    pub fn new(z0: f64) -> Result<WasmSmithChart, JsValue> {
        let inner = SmithChart::new(z0).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmSmithChart { inner })
    }

    /// Standard 50 ohm chart
    #[wasm_bindgen(js_name = standard)]
    pub fn standard() -> WasmSmithChart {
        WasmSmithChart {
            inner: SmithChart::default(),
        }
    }

    /// Reference impedance in ohms
    #[wasm_bindgen(getter)]
    pub fn z0(&self) -> f64 {
        self.inner.z0()
    }

    /// Normalized impedance as [re, im]; empty when singular
    #[wasm_bindgen(js_name = reflectionToImpedance)]
    pub fn reflection_to_impedance(&self, re: f64, im: f64) -> Float64Array {
        complex_opt_to_array(self.inner.reflection_to_impedance(Complex64::new(re, im)))
    }

    /// Reflection coefficient for a normalized impedance as [re, im]
    #[wasm_bindgen(js_name = impedanceToReflection)]
    pub fn impedance_to_reflection(&self, re: f64, im: f64) -> Float64Array {
        complex_opt_to_array(self.inner.impedance_to_reflection(Complex64::new(re, im)))
    }

    /// Normalized admittance as [re, im]; empty when singular
    #[wasm_bindgen(js_name = reflectionToAdmittance)]
    pub fn reflection_to_admittance(&self, re: f64, im: f64) -> Float64Array {
        complex_opt_to_array(self.inner.reflection_to_admittance(Complex64::new(re, im)))
    }

    /// Reflection coefficient for a normalized admittance as [re, im]
    #[wasm_bindgen(js_name = admittanceToReflection)]
    pub fn admittance_to_reflection(&self, re: f64, im: f64) -> Float64Array {
        complex_opt_to_array(self.inner.admittance_to_reflection(Complex64::new(re, im)))
    }

    /// Physical impedance in ohms as [re, im]; empty when singular
    #[wasm_bindgen(js_name = impedanceAt)]
    pub fn impedance_at(&self, re: f64, im: f64) -> Float64Array {
        complex_opt_to_array(self.inner.impedance_at(Complex64::new(re, im)))
    }

    /// Physical admittance in siemens as [re, im]; empty when singular
    #[wasm_bindgen(js_name = admittanceAt)]
    pub fn admittance_at(&self, re: f64, im: f64) -> Float64Array {
        complex_opt_to_array(self.inner.admittance_at(Complex64::new(re, im)))
    }

    /// Quality factor; undefined on the reactance axis
    #[wasm_bindgen(js_name = qFactor)]
    pub fn q_factor(&self, re: f64, im: f64) -> Option<f64> {
        self.inner.q_factor(Complex64::new(re, im))
    }
}

// ---------------------------------------------------------------------------
// Scalar readouts (independent of z0)
// ---------------------------------------------------------------------------

/// SWR at a reflection-plane point
#[wasm_bindgen]
pub fn swr(re: f64, im: f64) -> f64 {
    metrics::swr(Complex64::new(re, im))
}

/// SWR in dB
#[wasm_bindgen(js_name = dbS)]
pub fn db_s(re: f64, im: f64) -> f64 {
    metrics::db_s(Complex64::new(re, im))
}

/// Return loss in dB
#[wasm_bindgen(js_name = returnLossDb)]
pub fn return_loss_db(re: f64, im: f64) -> f64 {
    metrics::return_loss_db(Complex64::new(re, im))
}

/// Mismatch loss in dB
#[wasm_bindgen(js_name = mismatchLossDb)]
pub fn mismatch_loss_db(re: f64, im: f64) -> f64 {
    metrics::mismatch_loss_db(Complex64::new(re, im))
}

/// Fraction of power reflected
#[wasm_bindgen(js_name = reflectionPower)]
pub fn reflection_power(re: f64, im: f64) -> f64 {
    metrics::reflection_power(Complex64::new(re, im))
}

/// Fraction of power transmitted
#[wasm_bindgen(js_name = transmissionPower)]
pub fn transmission_power(re: f64, im: f64) -> f64 {
    metrics::transmission_power(Complex64::new(re, im))
}

/// Complex transmission coefficient as [re, im]
#[wasm_bindgen(js_name = transmissionCoefficient)]
pub fn transmission_coefficient(re: f64, im: f64) -> Float64Array {
    let t = metrics::transmission_coefficient(Complex64::new(re, im));
    Float64Array::from([t.re, t.im].as_slice())
}

/// Normalized standing-wave voltage peak
#[wasm_bindgen(js_name = standingWavePeak)]
pub fn standing_wave_peak(re: f64, im: f64) -> f64 {
    metrics::standing_wave_peak(Complex64::new(re, im))
}

/// Standing-wave loss coefficient
#[wasm_bindgen(js_name = standingWaveLossCoefficient)]
pub fn standing_wave_loss_coefficient(re: f64, im: f64) -> f64 {
    metrics::standing_wave_loss_coefficient(Complex64::new(re, im))
}

/// Reflection magnitude for an SWR value
#[wasm_bindgen(js_name = swrToReflectionMagnitude)]
pub fn swr_to_reflection_magnitude(swr: f64) -> f64 {
    metrics::swr_to_reflection_magnitude(swr)
}

/// SWR for a dBS value
#[wasm_bindgen(js_name = swrFromDbS)]
pub fn swr_from_db_s(dbs: f64) -> f64 {
    metrics::swr_from_db_s(dbs)
}

/// Reflection magnitude for a return loss
#[wasm_bindgen(js_name = reflectionMagnitudeFromReturnLoss)]
pub fn reflection_magnitude_from_return_loss(rl: f64) -> f64 {
    metrics::reflection_magnitude_from_return_loss(rl)
}

/// Reflection magnitude for a mismatch loss
#[wasm_bindgen(js_name = reflectionMagnitudeFromMismatchLoss)]
pub fn reflection_magnitude_from_mismatch_loss(ml: f64) -> f64 {
    metrics::reflection_magnitude_from_mismatch_loss(ml)
}

/// Format a complex value as "a ± jb" with fixed decimals
#[wasm_bindgen(js_name = formatComplex)]
pub fn format_complex(re: f64, im: f64, decimals: usize) -> String {
    conversions::format_complex(Complex64::new(re, im), decimals)
}

/// Free-space wavelength in meters for a frequency in Hz
#[wasm_bindgen(js_name = frequencyToWavelength)]
pub fn frequency_to_wavelength(f: f64) -> Option<f64> {
    conversions::frequency_to_wavelength(f)
}

/// Frequency in Hz for a free-space wavelength in meters
#[wasm_bindgen(js_name = wavelengthToFrequency)]
pub fn wavelength_to_frequency(lambda: f64) -> Option<f64> {
    conversions::wavelength_to_frequency(lambda)
}

/// Capacitance in farads realizing a capacitive reactance at `f` Hz
#[wasm_bindgen(js_name = reactanceToCapacitance)]
pub fn reactance_to_capacitance(x: f64, f: f64) -> Option<f64> {
    conversions::reactance_to_capacitance(x, f)
}

/// Reactance of a capacitance at `f` Hz
#[wasm_bindgen(js_name = capacitanceToReactance)]
pub fn capacitance_to_reactance(c: f64, f: f64) -> Option<f64> {
    conversions::capacitance_to_reactance(c, f)
}

/// Inductance in henries realizing an inductive reactance at `f` Hz
#[wasm_bindgen(js_name = reactanceToInductance)]
pub fn reactance_to_inductance(x: f64, f: f64) -> Option<f64> {
    conversions::reactance_to_inductance(x, f)
}

/// Reactance of an inductance at `f` Hz
#[wasm_bindgen(js_name = inductanceToReactance)]
pub fn inductance_to_reactance(l: f64, f: f64) -> Option<f64> {
    conversions::inductance_to_reactance(l, f)
}
