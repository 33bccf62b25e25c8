//! Circle-circle intersection, membership, and tangent angles

use super::circle::{Circle, Point};
use crate::constants::EPSILON;
use crate::error::ChartError;
use crate::math::conversions::radian_to_degree;

/// Both intersection points of two circles
///
/// Chord construction: the angle at the first center between the
/// center line and either intersection point follows from the law of
/// cosines; the two points are the first radius rotated by ±that angle.
/// Tangent circles yield the same point twice. Concentric or disjoint
/// pairs are domain errors, never NaN-valued points.
pub fn intersect(c1: &Circle, c2: &Circle) -> Result<[Point; 2], ChartError> {
    let dx = c2.center.x - c1.center.x;
    let dy = c2.center.y - c1.center.y;
    let dl = (dx * dx + dy * dy).sqrt();
    if dl < EPSILON {
        return Err(ChartError::ConcentricCircles);
    }

    let cos_a = (dl * dl + c1.radius * c1.radius - c2.radius * c2.radius)
        / (2.0 * dl * c1.radius);
    if !cos_a.is_finite() || cos_a.abs() > 1.0 {
        return Err(ChartError::NonIntersectingCircles);
    }
    let sin_a = (1.0 - cos_a * cos_a).sqrt();

    // Unit vector from c1 toward c2, rotated by +A and -A
    let ux = dx / dl;
    let uy = dy / dl;
    let r = c1.radius;
    let p1 = Point::new(
        c1.center.x + r * (ux * cos_a - uy * sin_a),
        c1.center.y + r * (ux * sin_a + uy * cos_a),
    );
    let p2 = Point::new(
        c1.center.x + r * (ux * cos_a + uy * sin_a),
        c1.center.y + r * (uy * cos_a - ux * sin_a),
    );
    Ok([p1, p2])
}

/// Whether a point lies inside or on a circle
pub fn point_in_circle(p: Point, c: &Circle) -> bool {
    let dx = p.x - c.center.x;
    let dy = p.y - c.center.y;
    dx * dx + dy * dy <= c.radius * c.radius
}

/// Tangent angle in degrees at a point on a circle
///
/// Orients tick labels along gridline arcs. The vertical-tangent case
/// (point level with the center) is reported as ±90 by the sign of the
/// horizontal offset instead of dividing by zero.
pub fn tangent_angle_deg(c: &Circle, p: Point) -> f64 {
    let num = c.center.x - p.x;
    let den = p.y - c.center.y;
    if den.abs() < EPSILON {
        return if num < 0.0 { -90.0 } else { 90.0 };
    }
    radian_to_degree((num / den).atan())
}
