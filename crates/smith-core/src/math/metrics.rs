//! Scalar metrics derived from a reflection coefficient
//!
//! Every metric here is a pure function of Γ (or of a scalar) and has a
//! companion inverse, so a readout layer can move between any pair of
//! representations. Metrics that diverge at the chart boundary |Γ| = 1
//! return an explicit `f64::INFINITY` there rather than a
//! noise-amplified quotient.

use num_complex::Complex64;

use crate::constants::EPSILON;

/// Standing wave ratio, (1 + |Γ|) / (1 - |Γ|)
///
/// Returns `f64::INFINITY` at and beyond the chart boundary.
pub fn swr(gamma: Complex64) -> f64 {
    let mag = gamma.norm();
    if mag >= 1.0 - EPSILON {
        return f64::INFINITY;
    }
    (1.0 + mag) / (1.0 - mag)
}

/// Reflection-coefficient magnitude for a given SWR, (swr - 1) / (swr + 1)
pub fn swr_to_reflection_magnitude(swr: f64) -> f64 {
    (swr - 1.0) / (swr + 1.0)
}

/// SWR expressed in dB, 20*log10(swr)
pub fn db_s(gamma: Complex64) -> f64 {
    20.0 * swr(gamma).log10()
}

/// SWR for a dBS value, 10^(dbs/20)
pub fn swr_from_db_s(dbs: f64) -> f64 {
    10.0_f64.powf(dbs / 20.0)
}

/// Return loss in dB, -20*log10(|Γ|)
///
/// Grows without bound toward the chart center (Γ = 0 yields +Infinity).
pub fn return_loss_db(gamma: Complex64) -> f64 {
    -20.0 * gamma.norm().log10()
}

/// Reflection-coefficient magnitude for a return loss, 10^(-rl/20)
pub fn reflection_magnitude_from_return_loss(rl: f64) -> f64 {
    10.0_f64.powf(-rl / 20.0)
}

/// Mismatch loss in dB, -10*log10(1 - |Γ|²)
///
/// Returns `f64::INFINITY` at and beyond the chart boundary.
pub fn mismatch_loss_db(gamma: Complex64) -> f64 {
    let mag = gamma.norm();
    if mag >= 1.0 - EPSILON {
        return f64::INFINITY;
    }
    -10.0 * (1.0 - mag * mag).log10()
}

/// Reflection-coefficient magnitude for a mismatch loss, sqrt(1 - 10^(-ml/10))
pub fn reflection_magnitude_from_mismatch_loss(ml: f64) -> f64 {
    (1.0 - 10.0_f64.powf(-ml / 10.0)).sqrt()
}

/// Fraction of incident power reflected, |Γ|²
pub fn reflection_power(gamma: Complex64) -> f64 {
    gamma.norm_sqr()
}

/// Fraction of incident power transmitted, 1 - |Γ|²
pub fn transmission_power(gamma: Complex64) -> f64 {
    1.0 - gamma.norm_sqr()
}

/// Complex voltage transmission coefficient, Γ + 1
///
/// Its magnitude is the voltage transmission coefficient.
pub fn transmission_coefficient(gamma: Complex64) -> Complex64 {
    gamma + 1.0
}

/// Normalized standing-wave voltage peak, sqrt(swr)
pub fn standing_wave_peak(gamma: Complex64) -> f64 {
    swr(gamma).sqrt()
}

/// Standing-wave loss coefficient, (1 + |Γ|²) / (1 - |Γ|²)
///
/// Returns `f64::INFINITY` at and beyond the chart boundary.
pub fn standing_wave_loss_coefficient(gamma: Complex64) -> f64 {
    let p = gamma.norm_sqr();
    if p >= 1.0 - EPSILON {
        return f64::INFINITY;
    }
    (1.0 + p) / (1.0 - p)
}

/// Reflection-coefficient magnitude for a standing-wave loss coefficient,
/// sqrt((swlc - 1) / (swlc + 1))
pub fn swlc_to_reflection_magnitude(swlc: f64) -> f64 {
    ((swlc - 1.0) / (swlc + 1.0)).sqrt()
}
