//! Circle geometry in the reflection-coefficient plane
//!
//! The chart grid is drawn from five parametric circle families; this
//! module generates them in normalized coordinates (chart boundary =
//! unit circle) and provides the intersection and membership primitives
//! used to clip and label them.

mod circle;
mod intersect;

pub use circle::{
    conductance_circle, const_q_circle, reactance_circle, resistance_circle, sample,
    susceptance_circle, Circle, Point,
};
pub use intersect::{intersect, point_in_circle, tangent_angle_deg};
