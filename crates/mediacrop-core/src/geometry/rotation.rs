//! Rotated bounding boxes.

use crate::Size;

/// Convert degrees to radians.
#[inline]
pub fn radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Compute the axis-aligned bounding box of a rotated rectangle.
///
/// ```text
/// bbox_w = |cos θ · w| + |sin θ · h|
/// bbox_h = |sin θ · w| + |cos θ · h|
/// ```
///
/// Unlike pixel-buffer rotation, nothing is rounded here: the box is used for
/// sub-pixel geometry. A rotation of 0 returns the input unchanged.
pub fn rotate_size(width: f64, height: f64, rotation: f64) -> Size {
    let rot = radians(rotation);
    let (sin, cos) = rot.sin_cos();

    Size {
        width: (cos * width).abs() + (sin * height).abs(),
        height: (sin * width).abs() + (cos * height).abs(),
    }
}
