//! Unit conversion functions
//!
//! dB/angle helpers shared by the metrics, frequency/wavelength and
//! reactance/element conversions used by marker readouts, and fixed
//! "a ± jb" complex formatting.

use num_complex::Complex64;
use std::f64::consts::PI;

use crate::constants::SPEED_OF_LIGHT;

/// Convert magnitude to dB (20*log10(mag))
pub fn magnitude_to_db(mag: f64) -> f64 {
    20.0 * mag.log10()
}

/// Convert dB to magnitude (10^(dB/20))
pub fn db_to_magnitude(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Convert radians to degrees
pub fn radian_to_degree(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Convert degrees to radians
pub fn degree_to_radian(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Free-space wavelength in meters for a frequency in Hz
///
/// Returns `None` for non-positive frequency.
pub fn frequency_to_wavelength(f: f64) -> Option<f64> {
    if f <= 0.0 {
        return None;
    }
    Some(SPEED_OF_LIGHT / f)
}

/// Frequency in Hz for a free-space wavelength in meters
///
/// Returns `None` for non-positive wavelength.
pub fn wavelength_to_frequency(lambda: f64) -> Option<f64> {
    if lambda <= 0.0 {
        return None;
    }
    Some(SPEED_OF_LIGHT / lambda)
}

/// Capacitance in farads realizing a capacitive reactance at frequency `f`
///
/// C = 1 / (2*pi*f*|x|). Capacitive reactance is negative, so `None` for
/// `x >= 0` or non-positive frequency.
pub fn reactance_to_capacitance(x: f64, f: f64) -> Option<f64> {
    if x >= 0.0 || f <= 0.0 {
        return None;
    }
    Some(1.0 / (2.0 * PI * f * x.abs()))
}

/// Reactance of a capacitance at frequency `f`, -1 / (2*pi*f*C)
///
/// Returns `None` for non-positive capacitance or frequency.
pub fn capacitance_to_reactance(c: f64, f: f64) -> Option<f64> {
    if c <= 0.0 || f <= 0.0 {
        return None;
    }
    Some(-1.0 / (2.0 * PI * f * c))
}

/// Inductance in henries realizing an inductive reactance at frequency `f`
///
/// L = x / (2*pi*f). Inductive reactance is positive, so `None` for
/// `x <= 0` or non-positive frequency.
pub fn reactance_to_inductance(x: f64, f: f64) -> Option<f64> {
    if x <= 0.0 || f <= 0.0 {
        return None;
    }
    Some(x / (2.0 * PI * f))
}

/// Reactance of an inductance at frequency `f`, 2*pi*f*L
///
/// Returns `None` for non-positive inductance or frequency.
pub fn inductance_to_reactance(l: f64, f: f64) -> Option<f64> {
    if l <= 0.0 || f <= 0.0 {
        return None;
    }
    Some(2.0 * PI * f * l)
}

/// Format a complex value as "a + jb" / "a - jb" with fixed decimals
pub fn format_complex(z: Complex64, decimals: usize) -> String {
    let sign = if z.im.is_sign_negative() { '-' } else { '+' };
    format!(
        "{:.prec$} {} j{:.prec$}",
        z.re,
        sign,
        z.im.abs(),
        prec = decimals
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_magnitude_db_roundtrip() {
        assert_relative_eq!(magnitude_to_db(10.0), 20.0, epsilon = 1e-10);
        assert_relative_eq!(db_to_magnitude(20.0), 10.0, epsilon = 1e-10);
        assert_relative_eq!(db_to_magnitude(magnitude_to_db(0.35)), 0.35, epsilon = 1e-10);
    }

    #[test]
    fn test_angle_roundtrip() {
        assert_relative_eq!(radian_to_degree(PI), 180.0, epsilon = 1e-10);
        assert_relative_eq!(degree_to_radian(90.0), PI / 2.0, epsilon = 1e-10);
    }

    #[test]
    fn test_frequency_wavelength() {
        // 1 GHz ~ 0.2998 m
        let lambda = frequency_to_wavelength(1e9).unwrap();
        assert_relative_eq!(lambda, 0.299792458, epsilon = 1e-9);
        let f = wavelength_to_frequency(lambda).unwrap();
        assert_relative_eq!(f, 1e9, epsilon = 1e-3);

        assert!(frequency_to_wavelength(0.0).is_none());
        assert!(wavelength_to_frequency(-1.0).is_none());
    }

    #[test]
    fn test_capacitance_conversions() {
        // 10 pF at 1 GHz -> X = -15.915...
        let x = capacitance_to_reactance(10e-12, 1e9).unwrap();
        assert_relative_eq!(x, -15.915494309189533, epsilon = 1e-9);

        let c = reactance_to_capacitance(x, 1e9).unwrap();
        assert_relative_eq!(c, 10e-12, epsilon = 1e-20);

        // Capacitance is undefined for inductive (positive) reactance
        assert!(reactance_to_capacitance(15.9, 1e9).is_none());
        assert!(reactance_to_capacitance(-15.9, 0.0).is_none());
    }

    #[test]
    fn test_inductance_conversions() {
        // 10 nH at 1 GHz -> X = 62.83...
        let x = inductance_to_reactance(10e-9, 1e9).unwrap();
        assert_relative_eq!(x, 62.83185307179586, epsilon = 1e-9);

        let l = reactance_to_inductance(x, 1e9).unwrap();
        assert_relative_eq!(l, 10e-9, epsilon = 1e-18);

        // Inductance is undefined for capacitive (negative) reactance
        assert!(reactance_to_inductance(-62.8, 1e9).is_none());
        assert!(reactance_to_inductance(62.8, -1e9).is_none());
    }

    #[test]
    fn test_format_complex() {
        assert_eq!(format_complex(Complex64::new(1.5, 2.25), 2), "1.50 + j2.25");
        assert_eq!(format_complex(Complex64::new(50.0, -25.0), 1), "50.0 - j25.0");
        assert_eq!(format_complex(Complex64::new(0.0, 0.0), 0), "0 + j0");
    }
}
