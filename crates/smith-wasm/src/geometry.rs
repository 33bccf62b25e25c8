//! WASM bindings for gridline circle geometry

use js_sys::Float64Array;
use smith_core::geometry::{self, Circle, Point};
use wasm_bindgen::prelude::*;

/// Encode a circle as [cx, cy, r]
fn circle_to_array(c: Circle) -> Float64Array {
    Float64Array::from([c.center.x, c.center.y, c.radius].as_slice())
}

/// Constant-resistance circle as [cx, cy, r]
#[wasm_bindgen(js_name = resistanceCircle)]
pub fn resistance_circle(n: f64) -> Result<Float64Array, JsValue> {
    geometry::resistance_circle(n)
        .map(circle_to_array)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Constant-reactance circle as [cx, cy, r]
#[wasm_bindgen(js_name = reactanceCircle)]
pub fn reactance_circle(n: f64) -> Result<Float64Array, JsValue> {
    geometry::reactance_circle(n)
        .map(circle_to_array)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Constant-conductance circle as [cx, cy, r]
#[wasm_bindgen(js_name = conductanceCircle)]
pub fn conductance_circle(n: f64) -> Result<Float64Array, JsValue> {
    geometry::conductance_circle(n)
        .map(circle_to_array)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Constant-susceptance circle as [cx, cy, r]
#[wasm_bindgen(js_name = susceptanceCircle)]
pub fn susceptance_circle(n: f64) -> Result<Float64Array, JsValue> {
    geometry::susceptance_circle(n)
        .map(circle_to_array)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Constant-Q circle as [cx, cy, r]
#[wasm_bindgen(js_name = constQCircle)]
pub fn const_q_circle(q: f64) -> Result<Float64Array, JsValue> {
    geometry::const_q_circle(q)
        .map(circle_to_array)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Both intersection points of two circles as [x1, y1, x2, y2]
#[wasm_bindgen]
pub fn intersect(
    cx1: f64,
    cy1: f64,
    r1: f64,
    cx2: f64,
    cy2: f64,
    r2: f64,
) -> Result<Float64Array, JsValue> {
    let a = Circle::new(Point::new(cx1, cy1), r1);
    let b = Circle::new(Point::new(cx2, cy2), r2);
    let [p1, p2] = geometry::intersect(&a, &b).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(Float64Array::from([p1.x, p1.y, p2.x, p2.y].as_slice()))
}

/// Whether a point lies inside or on a circle
#[wasm_bindgen(js_name = pointInCircle)]
pub fn point_in_circle(px: f64, py: f64, cx: f64, cy: f64, r: f64) -> bool {
    geometry::point_in_circle(Point::new(px, py), &Circle::new(Point::new(cx, cy), r))
}

/// Tangent angle in degrees at a point on a circle
#[wasm_bindgen(js_name = tangentAngleDeg)]
pub fn tangent_angle_deg(cx: f64, cy: f64, r: f64, px: f64, py: f64) -> f64 {
    geometry::tangent_angle_deg(&Circle::new(Point::new(cx, cy), r), Point::new(px, py))
}

/// Evenly spaced points along a circle, interleaved [x0, y0, x1, y1, ...]
#[wasm_bindgen(js_name = sampleCircle)]
pub fn sample_circle(cx: f64, cy: f64, r: f64, npoints: usize) -> Float64Array {
    let pts = geometry::sample(&Circle::new(Point::new(cx, cy), r), npoints);
    let mut flat = Vec::with_capacity(pts.len() * 2);
    for p in pts {
        flat.push(p.x);
        flat.push(p.y);
    }
    Float64Array::from(flat.as_slice())
}
