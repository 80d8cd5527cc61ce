//! Vector and scalar helpers used by the editor and the exporter.
//!
//! All functions are total: none of them panic or return errors.

use glam::DVec3;
use shared::Vector3;

pub fn to_dvec3(v: Vector3) -> DVec3 {
    DVec3::new(v.x, v.y, v.z)
}

pub fn from_dvec3(v: DVec3) -> Vector3 {
    Vector3::new(v.x, v.y, v.z)
}

pub fn add(a: Vector3, b: Vector3) -> Vector3 {
    from_dvec3(to_dvec3(a) + to_dvec3(b))
}

pub fn subtract(a: Vector3, b: Vector3) -> Vector3 {
    from_dvec3(to_dvec3(a) - to_dvec3(b))
}

pub fn multiply(v: Vector3, scalar: f64) -> Vector3 {
    from_dvec3(to_dvec3(v) * scalar)
}

pub fn dot(a: Vector3, b: Vector3) -> f64 {
    to_dvec3(a).dot(to_dvec3(b))
}

/// Right-handed cross product
pub fn cross(a: Vector3, b: Vector3) -> Vector3 {
    from_dvec3(to_dvec3(a).cross(to_dvec3(b)))
}

pub fn length(v: Vector3) -> f64 {
    to_dvec3(v).length()
}

/// Unit vector in the direction of `v`, or the zero vector when `|v| == 0`.
///
/// Callers that need a direction must check for the zero result.
pub fn normalize(v: Vector3) -> Vector3 {
    from_dvec3(to_dvec3(v).normalize_or_zero())
}

pub fn distance(a: Vector3, b: Vector3) -> f64 {
    to_dvec3(a).distance(to_dvec3(b))
}

/// Limit `value` to `[min, max]`. `max` wins if the bounds are inverted.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Linear interpolation; `t` outside [0, 1] extrapolates
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

pub fn rad_to_deg(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Round half toward positive infinity, the editor's rounding rule
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to `places` decimal digits (half-up)
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    round_half_up(value * factor) / factor
}

/// Round to the nearest multiple of `grid_size`.
///
/// A non-positive or non-finite grid size disables snapping and returns
/// `value` unchanged.
pub fn snap_to_grid(value: f64, grid_size: f64) -> f64 {
    if !(grid_size > 0.0) || !grid_size.is_finite() {
        return value;
    }
    round_half_up(value / grid_size) * grid_size
}

/// Component-wise [`snap_to_grid`]
pub fn snap_vector(v: Vector3, grid_size: f64) -> Vector3 {
    Vector3::new(
        snap_to_grid(v.x, grid_size),
        snap_to_grid(v.y, grid_size),
        snap_to_grid(v.z, grid_size),
    )
}
