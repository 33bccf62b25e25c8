//! Bilinear reflection-coefficient transforms
//!
//! Conversions between the reflection-coefficient plane and the
//! impedance/admittance planes. Each transform reports `None` when its
//! denominator magnitude falls below the singularity tolerance instead
//! of propagating Infinity or NaN.

use num_complex::Complex64;

use super::core::SmithChart;
use crate::constants::EPSILON;

impl SmithChart {
    /// Normalized impedance for a reflection coefficient
    ///
    /// z = (1 + Γ) / (1 - Γ). Returns `None` as Γ approaches +1
    /// (open circuit), where the impedance diverges.
    pub fn reflection_to_impedance(&self, gamma: Complex64) -> Option<Complex64> {
        let d = (1.0 - gamma.re).powi(2) + gamma.im * gamma.im;
        if d.abs() < EPSILON {
            return None;
        }
        let re = (1.0 - gamma.re * gamma.re - gamma.im * gamma.im) / d;
        let im = 2.0 * gamma.im / d;
        Some(Complex64::new(re, im))
    }

    /// Reflection coefficient for a normalized impedance
    ///
    /// Γ = (z - 1) / (z + 1). Returns `None` as z approaches -1, which
    /// is non-physical for passive loads but still guarded.
    pub fn impedance_to_reflection(&self, z: Complex64) -> Option<Complex64> {
        let d = (z.re + 1.0).powi(2) + z.im * z.im;
        if d.abs() < EPSILON {
            return None;
        }
        let re = (z.re * z.re + z.im * z.im - 1.0) / d;
        let im = 2.0 * z.im / d;
        Some(Complex64::new(re, im))
    }

    /// Normalized admittance for a reflection coefficient
    ///
    /// y = (1 - Γ) / (1 + Γ). Returns `None` as Γ approaches -1
    /// (short circuit), where the admittance diverges.
    pub fn reflection_to_admittance(&self, gamma: Complex64) -> Option<Complex64> {
        let d = (1.0 + gamma.re).powi(2) + gamma.im * gamma.im;
        if d.abs() < EPSILON {
            return None;
        }
        let re = (1.0 - gamma.re * gamma.re - gamma.im * gamma.im) / d;
        let im = -2.0 * gamma.im / d;
        Some(Complex64::new(re, im))
    }

    /// Reflection coefficient for a normalized admittance
    ///
    /// Γ = (1 - y) / (1 + y). Returns `None` as y approaches -1.
    pub fn admittance_to_reflection(&self, y: Complex64) -> Option<Complex64> {
        let d = (y.re + 1.0).powi(2) + y.im * y.im;
        if d.abs() < EPSILON {
            return None;
        }
        let re = (1.0 - y.re * y.re - y.im * y.im) / d;
        let im = -2.0 * y.im / d;
        Some(Complex64::new(re, im))
    }

    /// Physical impedance in ohms at a reflection-plane point
    pub fn impedance_at(&self, gamma: Complex64) -> Option<Complex64> {
        self.reflection_to_impedance(gamma)
            .map(|z| self.denormalize(z))
    }

    /// Physical admittance in siemens at a reflection-plane point
    pub fn admittance_at(&self, gamma: Complex64) -> Option<Complex64> {
        self.reflection_to_admittance(gamma)
            .map(|y| self.denormalize_admittance(y))
    }

    /// Quality factor |x/r| at a reflection-plane point
    ///
    /// Undefined both where the impedance transform is singular and on
    /// the reactance axis (r = 0), reported as `None` in either case.
    pub fn q_factor(&self, gamma: Complex64) -> Option<f64> {
        let z = self.reflection_to_impedance(gamma)?;
        if z.re.abs() < EPSILON {
            return None;
        }
        Some((z.im / z.re).abs())
    }
}
