//! Mathematical functions module
//!
//! Scalar line metrics derived from a reflection coefficient, plus the
//! unit conversions shared by readout layers.

pub mod conversions;
pub mod metrics;

pub use conversions::*;
pub use metrics::*;
