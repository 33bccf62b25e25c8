//! Core SmithChart struct and constructors
//!
//! The context is a single immutable reference impedance; every method
//! is pure and the type is freely shareable across threads.

use num_complex::Complex64;

use crate::constants::DEFAULT_Z0;
use crate::error::ChartError;

/// Smith-chart engine context
///
/// Holds the reference impedance that normalizes every impedance and
/// admittance transform. Construct with [`SmithChart::new`] or use
/// `Default` for the standard 50 ohm system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmithChart {
    z0: f64,
}

impl Default for SmithChart {
    fn default() -> Self {
        Self { z0: DEFAULT_Z0 }
    }
}

impl SmithChart {
    /// Create a chart context with the given reference impedance in ohms
    ///
    /// Returns an error unless `z0` is positive and finite.
    pub fn new(z0: f64) -> Result<Self, ChartError> {
        if !z0.is_finite() || z0 <= 0.0 {
            return Err(ChartError::InvalidReferenceImpedance(z0));
        }
        Ok(Self { z0 })
    }

    /// Reference impedance in ohms
    #[inline]
    pub fn z0(&self) -> f64 {
        self.z0
    }

    /// Normalize a physical impedance by the reference impedance
    #[inline]
    pub fn normalize(&self, z: Complex64) -> Complex64 {
        z / self.z0
    }

    /// Scale a normalized impedance back to ohms
    #[inline]
    pub fn denormalize(&self, z: Complex64) -> Complex64 {
        z * self.z0
    }

    /// Scale a normalized admittance back to siemens
    ///
    /// Admittance denormalizes by the reciprocal of z0. Display unit
    /// scaling (e.g. to mS) is a presentation concern left to callers.
    #[inline]
    pub fn denormalize_admittance(&self, y: Complex64) -> Complex64 {
        y / self.z0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_50_ohm() {
        let chart = SmithChart::default();
        assert_eq!(chart.z0(), 50.0);
    }

    #[test]
    fn test_new_rejects_nonpositive_z0() {
        assert!(SmithChart::new(0.0).is_err());
        assert!(SmithChart::new(-50.0).is_err());
        assert!(SmithChart::new(f64::NAN).is_err());
        assert!(SmithChart::new(f64::INFINITY).is_err());
        assert!(SmithChart::new(75.0).is_ok());
    }

    #[test]
    fn test_normalize_denormalize_roundtrip() {
        let chart = SmithChart::new(50.0).unwrap();
        let z = Complex64::new(25.0, -30.0);
        let zn = chart.normalize(z);
        assert_relative_eq!(zn.re, 0.5, epsilon = 1e-12);
        assert_relative_eq!(zn.im, -0.6, epsilon = 1e-12);

        let back = chart.denormalize(zn);
        assert_relative_eq!(back.re, z.re, epsilon = 1e-12);
        assert_relative_eq!(back.im, z.im, epsilon = 1e-12);
    }

    #[test]
    fn test_denormalize_admittance() {
        let chart = SmithChart::default();
        // Normalized y = 1 corresponds to 1/50 = 0.02 S
        let y = chart.denormalize_admittance(Complex64::new(1.0, 0.0));
        assert_relative_eq!(y.re, 0.02, epsilon = 1e-12);
        assert_relative_eq!(y.im, 0.0, epsilon = 1e-12);
    }
}
