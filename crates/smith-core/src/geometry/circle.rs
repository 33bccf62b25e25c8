//! Circle and point values plus the gridline circle generators

use std::f64::consts::PI;

use crate::constants::EPSILON;
use crate::error::{ChartError, CircleFamily};

/// A location in the normalized reflection-coefficient plane
///
/// Purely geometric; carries no arithmetic beyond construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A circle in the normalized reflection-coefficient plane
///
/// Every circle the generators construct has a non-negative radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// Constant-resistance circle for normalized resistance `n`
///
/// Center (n/(n+1), 0), radius 1/(n+1). `n = 0` is the chart boundary
/// itself (the unit circle); `n = -1` is degenerate.
pub fn resistance_circle(n: f64) -> Result<Circle, ChartError> {
    if (n + 1.0).abs() < EPSILON {
        return Err(ChartError::DegenerateCircle {
            family: CircleFamily::Resistance,
            parameter: n,
        });
    }
    Ok(Circle::new(
        Point::new(n / (n + 1.0), 0.0),
        (1.0 / (n + 1.0)).abs(),
    ))
}

/// Constant-reactance circle for normalized reactance `n`
///
/// Center (1, 1/n), radius |1/n|. `n = 0` is the resistance axis, a
/// straight line this formula cannot produce.
pub fn reactance_circle(n: f64) -> Result<Circle, ChartError> {
    if n.abs() < EPSILON {
        return Err(ChartError::DegenerateCircle {
            family: CircleFamily::Reactance,
            parameter: n,
        });
    }
    Ok(Circle::new(Point::new(1.0, 1.0 / n), (1.0 / n).abs()))
}

/// Constant-conductance circle for normalized conductance `n`
///
/// Mirror image of the resistance family: center (-n/(n+1), 0),
/// radius 1/(n+1). `n = -1` is degenerate.
pub fn conductance_circle(n: f64) -> Result<Circle, ChartError> {
    if (n + 1.0).abs() < EPSILON {
        return Err(ChartError::DegenerateCircle {
            family: CircleFamily::Conductance,
            parameter: n,
        });
    }
    Ok(Circle::new(
        Point::new(-n / (n + 1.0), 0.0),
        (1.0 / (n + 1.0)).abs(),
    ))
}

/// Constant-susceptance circle for normalized susceptance `n`
///
/// Center (-1, -1/n), radius |1/n|. `n = 0` is degenerate.
pub fn susceptance_circle(n: f64) -> Result<Circle, ChartError> {
    if n.abs() < EPSILON {
        return Err(ChartError::DegenerateCircle {
            family: CircleFamily::Susceptance,
            parameter: n,
        });
    }
    Ok(Circle::new(Point::new(-1.0, -1.0 / n), (1.0 / n).abs()))
}

/// Constant-Q circle for quality factor `q`
///
/// Center (0, 1/q), radius sqrt(1 + 1/q²). `q = 0` is degenerate; the
/// sign of `q` selects the upper or lower arc family.
pub fn const_q_circle(q: f64) -> Result<Circle, ChartError> {
    if q.abs() < EPSILON {
        return Err(ChartError::DegenerateCircle {
            family: CircleFamily::ConstQ,
            parameter: q,
        });
    }
    let inv = 1.0 / q;
    Ok(Circle::new(
        Point::new(0.0, inv),
        (1.0 + inv * inv).sqrt(),
    ))
}

/// Sample `npoints` evenly spaced points along a circle
///
/// Parametric sweep starting at angle 0, counter-clockwise. Rendering
/// layers clip the resulting polyline to the chart boundary.
pub fn sample(circle: &Circle, npoints: usize) -> Vec<Point> {
    (0..npoints)
        .map(|i| {
            let theta = 2.0 * PI * i as f64 / npoints as f64;
            Point::new(
                circle.center.x + circle.radius * theta.cos(),
                circle.center.y + circle.radius * theta.sin(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_from_pair() {
        let p: Point = (0.25, -0.5).into();
        assert_eq!(p, Point::new(0.25, -0.5));
    }

    #[test]
    fn test_resistance_circle_unity() {
        let c = resistance_circle(1.0).unwrap();
        assert_relative_eq!(c.center.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(c.center.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(c.radius, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_resistance_circle_zero_is_unit_circle() {
        let c = resistance_circle(0.0).unwrap();
        assert_relative_eq!(c.center.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(c.radius, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_resistance_circle_degenerate() {
        assert!(matches!(
            resistance_circle(-1.0),
            Err(ChartError::DegenerateCircle {
                family: CircleFamily::Resistance,
                ..
            })
        ));
    }

    #[test]
    fn test_reactance_circle_unity() {
        let c = reactance_circle(1.0).unwrap();
        assert_relative_eq!(c.center.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(c.center.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(c.radius, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reactance_circle_negative_parameter() {
        // Capacitive arcs hang below the resistance axis
        let c = reactance_circle(-2.0).unwrap();
        assert_relative_eq!(c.center.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(c.center.y, -0.5, epsilon = 1e-12);
        assert_relative_eq!(c.radius, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_reactance_circle_degenerate() {
        assert!(reactance_circle(0.0).is_err());
    }

    #[test]
    fn test_conductance_circle_mirrors_resistance() {
        let g = conductance_circle(1.0).unwrap();
        let r = resistance_circle(1.0).unwrap();
        assert_relative_eq!(g.center.x, -r.center.x, epsilon = 1e-12);
        assert_relative_eq!(g.radius, r.radius, epsilon = 1e-12);
        assert!(conductance_circle(-1.0).is_err());
    }

    #[test]
    fn test_susceptance_circle() {
        let c = susceptance_circle(2.0).unwrap();
        assert_relative_eq!(c.center.x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(c.center.y, -0.5, epsilon = 1e-12);
        assert_relative_eq!(c.radius, 0.5, epsilon = 1e-12);
        assert!(susceptance_circle(0.0).is_err());
    }

    #[test]
    fn test_const_q_circle() {
        let c = const_q_circle(1.0).unwrap();
        assert_relative_eq!(c.center.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(c.center.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(c.radius, 2.0_f64.sqrt(), epsilon = 1e-12);

        // Negative q mirrors below the axis
        let c = const_q_circle(-1.0).unwrap();
        assert_relative_eq!(c.center.y, -1.0, epsilon = 1e-12);
        assert!(const_q_circle(0.0).is_err());
    }

    #[test]
    fn test_radius_never_negative() {
        for n in [-5.0, -2.0, -1.5, -0.5, 0.0, 0.5, 3.0, 100.0] {
            if let Ok(c) = resistance_circle(n) {
                assert!(c.radius >= 0.0);
            }
            if let Ok(c) = reactance_circle(n) {
                assert!(c.radius >= 0.0);
            }
        }
    }

    #[test]
    fn test_sample_lies_on_circle() {
        let c = resistance_circle(1.0).unwrap();
        let pts = sample(&c, 16);
        assert_eq!(pts.len(), 16);
        for p in pts {
            let d = ((p.x - c.center.x).powi(2) + (p.y - c.center.y).powi(2)).sqrt();
            assert_relative_eq!(d, c.radius, epsilon = 1e-12);
        }
    }
}
