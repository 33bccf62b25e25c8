//! Measured one-port reflection sweeps
//!
//! A [`ReflectionTrace`] pairs a frequency vector with the sampled
//! reflection coefficients handed in by the data-loading collaborator,
//! and exposes the per-point quantities the overlay and readout layers
//! consume. All derived arrays are computed on demand; the trace itself
//! is immutable.

use ndarray::Array1;
use num_complex::Complex64;

use crate::chart::SmithChart;
use crate::error::ChartError;
use crate::math::metrics;

/// A frequency-indexed sweep of one-port reflection coefficients
#[derive(Debug, Clone)]
pub struct ReflectionTrace {
    /// Frequency vector in Hz
    f: Array1<f64>,
    /// Reflection coefficient per frequency point
    gamma: Array1<Complex64>,
}

impl ReflectionTrace {
    /// Create a trace from matching frequency and reflection vectors
    pub fn new(f: Array1<f64>, gamma: Array1<Complex64>) -> Result<Self, ChartError> {
        if f.len() != gamma.len() {
            return Err(ChartError::TraceLengthMismatch {
                freqs: f.len(),
                points: gamma.len(),
            });
        }
        Ok(Self { f, gamma })
    }

    /// Create a trace from plain vectors
    pub fn from_vecs(f: Vec<f64>, gamma: Vec<Complex64>) -> Result<Self, ChartError> {
        Self::new(Array1::from_vec(f), Array1::from_vec(gamma))
    }

    /// Number of frequency points
    #[inline]
    pub fn len(&self) -> usize {
        self.f.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.f.is_empty()
    }

    /// Frequency vector in Hz
    #[inline]
    pub fn f(&self) -> &Array1<f64> {
        &self.f
    }

    /// Reflection coefficients
    #[inline]
    pub fn gamma(&self) -> &Array1<Complex64> {
        &self.gamma
    }

    /// Reflection magnitude per point
    pub fn magnitude(&self) -> Array1<f64> {
        self.gamma.mapv(|g| g.norm())
    }

    /// Reflection phase in degrees per point
    pub fn phase_deg(&self) -> Array1<f64> {
        self.gamma.mapv(|g| g.arg() * 180.0 / std::f64::consts::PI)
    }

    /// SWR per point
    pub fn swr(&self) -> Array1<f64> {
        self.gamma.mapv(metrics::swr)
    }

    /// Return loss in dB per point
    pub fn return_loss_db(&self) -> Array1<f64> {
        self.gamma.mapv(metrics::return_loss_db)
    }

    /// Mismatch loss in dB per point
    pub fn mismatch_loss_db(&self) -> Array1<f64> {
        self.gamma.mapv(metrics::mismatch_loss_db)
    }

    /// Physical impedance per point; singular samples stay `None`
    pub fn impedance(&self, chart: &SmithChart) -> Vec<Option<Complex64>> {
        self.gamma.iter().map(|&g| chart.impedance_at(g)).collect()
    }

    /// Physical admittance per point; singular samples stay `None`
    pub fn admittance(&self, chart: &SmithChart) -> Vec<Option<Complex64>> {
        self.gamma.iter().map(|&g| chart.admittance_at(g)).collect()
    }

    /// Index of the sample nearest a reflection-plane probe point
    ///
    /// Euclidean distance in the reflection plane; the rendering layer
    /// feeds this its cursor position to snap markers to the trace.
    /// `None` for an empty trace.
    pub fn nearest_index(&self, probe: Complex64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &g) in self.gamma.iter().enumerate() {
            let d = (g - probe).norm_sqr();
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn short_to_open_trace() -> ReflectionTrace {
        // Three samples walking the resistance axis: short, match, open
        ReflectionTrace::from_vecs(
            vec![1e9, 2e9, 3e9],
            vec![
                Complex64::new(-0.5, 0.0),
                Complex64::new(0.0, 0.0),
                Complex64::new(1.0, 0.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_length_mismatch_is_error() {
        let res = ReflectionTrace::from_vecs(vec![1e9, 2e9], vec![Complex64::new(0.0, 0.0)]);
        assert!(matches!(
            res,
            Err(ChartError::TraceLengthMismatch {
                freqs: 2,
                points: 1
            })
        ));
    }

    #[test]
    fn test_derived_arrays() {
        let trace = short_to_open_trace();
        assert_eq!(trace.len(), 3);

        let swr = trace.swr();
        assert_relative_eq!(swr[0], 3.0, epsilon = 1e-12);
        assert_relative_eq!(swr[1], 1.0, epsilon = 1e-12);
        assert!(swr[2].is_infinite());

        let mag = trace.magnitude();
        assert_relative_eq!(mag[0], 0.5, epsilon = 1e-12);

        let phase = trace.phase_deg();
        assert_relative_eq!(phase[0], 180.0, epsilon = 1e-12);
    }

    #[test]
    fn test_impedance_preserves_singular_points() {
        let trace = short_to_open_trace();
        let chart = SmithChart::default();
        let z = trace.impedance(&chart);

        // Γ = -0.5 -> z = 1/3 normalized -> 50/3 ohms
        assert_relative_eq!(z[0].unwrap().re, 50.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(z[1].unwrap().re, 50.0, epsilon = 1e-9);
        assert!(z[2].is_none());
    }

    #[test]
    fn test_nearest_index() {
        let trace = short_to_open_trace();
        assert_eq!(trace.nearest_index(Complex64::new(-0.4, 0.1)), Some(0));
        assert_eq!(trace.nearest_index(Complex64::new(0.9, 0.0)), Some(2));

        let empty = ReflectionTrace::from_vecs(vec![], vec![]).unwrap();
        assert_eq!(empty.nearest_index(Complex64::new(0.0, 0.0)), None);
    }
}
