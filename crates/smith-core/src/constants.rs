//! Numerical constants for chart calculations
//!
//! Provides the singularity tolerance and physical constants used
//! throughout the library.

/// Tolerance for detecting near-singular bilinear transforms.
/// A transform whose denominator magnitude falls below this value
/// reports "no value" instead of dividing.
pub const EPSILON: f64 = 1e-10;

/// Default reference impedance in ohms.
pub const DEFAULT_Z0: f64 = 50.0;

/// Speed of light in vacuum, m/s.
/// Used for frequency/wavelength conversion.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
