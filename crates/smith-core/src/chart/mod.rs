//! Chart engine context
//!
//! Provides the [`SmithChart`] context struct and the reflection-plane
//! transforms that depend on the reference impedance.

mod core;
mod transforms;

pub use self::core::SmithChart;
