//! Pure geometry for drag, resize and rotate gestures.
//!
//! Every function takes the values captured at gesture start plus the
//! current pointer, so repeated moves never accumulate rounding drift.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use crate::camera::{Point, Viewport};

/// New percent position after dragging by `delta` screen pixels.
#[must_use]
pub fn drag(orig: Point, delta: Point, viewport: &Viewport) -> Point {
    let shift = viewport.local_to_percent(delta);
    Point::new(orig.x + shift.x, orig.y + shift.y)
}

/// New width after dragging the resize handle horizontally by `dx` pixels.
#[must_use]
pub fn resize(orig_width: f64, dx: f64, min_width: f64) -> f64 {
    (orig_width + dx).max(min_width)
}

/// Angle of `p` around `center`, in degrees.
#[must_use]
pub fn angle_deg(center: Point, p: Point) -> f64 {
    (p.y - center.y).atan2(p.x - center.x).to_degrees()
}

/// New rotation after the pointer swept from `start` to `current` around
/// `center`.
#[must_use]
pub fn rotate(orig_rotation: f64, center: Point, start: Point, current: Point) -> f64 {
    orig_rotation + (angle_deg(center, current) - angle_deg(center, start))
}

/// Express `p` in the unrotated frame of an element centered at `center`.
#[must_use]
pub fn to_local_frame(p: Point, center: Point, rotation_deg: f64) -> Point {
    let (sin, cos) = (-rotation_deg.to_radians()).sin_cos();
    let d = p.sub(center);
    Point::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
}

/// Inverse of [`to_local_frame`].
#[must_use]
pub fn from_local_frame(local: Point, center: Point, rotation_deg: f64) -> Point {
    let (sin, cos) = rotation_deg.to_radians().sin_cos();
    Point::new(
        center.x + local.x * cos - local.y * sin,
        center.y + local.x * sin + local.y * cos,
    )
}
