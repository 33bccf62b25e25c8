//! Error types for the chart engine
//!
//! Domain violations are reported through [`ChartError`]. Near-singular
//! bilinear transforms are not errors; they return `None` instead.

use std::fmt;

use thiserror::Error;

/// Identifies which gridline circle family rejected a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleFamily {
    Resistance,
    Reactance,
    Conductance,
    Susceptance,
    ConstQ,
}

impl fmt::Display for CircleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CircleFamily::Resistance => "resistance",
            CircleFamily::Reactance => "reactance",
            CircleFamily::Conductance => "conductance",
            CircleFamily::Susceptance => "susceptance",
            CircleFamily::ConstQ => "constant-Q",
        };
        f.write_str(name)
    }
}

/// Chart engine errors
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("reference impedance must be a positive finite value, got {0}")]
    InvalidReferenceImpedance(f64),

    #[error("{family} circle is degenerate at parameter {parameter}")]
    DegenerateCircle {
        family: CircleFamily,
        parameter: f64,
    },

    #[error("circles are concentric and have no intersection chord")]
    ConcentricCircles,

    #[error("circles do not intersect")]
    NonIntersectingCircles,

    #[error("trace length mismatch: {freqs} frequency points vs {points} reflection samples")]
    TraceLengthMismatch { freqs: usize, points: usize },
}
