//! Translation limits that keep the zoomed media covering the overlay.

use super::rotate_size;
use crate::{Point, Size};

/// Clamp `value` into `[min, max]`.
///
/// Evaluated as `min(max(value, min), max)`. Unlike [`f64::clamp`] this never
/// panics: when `min > max` the result is `max`.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Restrict a translation along one axis.
///
/// The largest allowed offset is `(media_extent * zoom) / 2 - crop_extent / 2`.
/// When the zoomed media is smaller than the overlay along this axis that limit
/// is negative and the position resolves to `0.0` (media centered).
pub fn restrict_position_coord(
    position: f64,
    media_extent: f64,
    crop_extent: f64,
    zoom: f64,
) -> f64 {
    let max_position = (media_extent * zoom) / 2.0 - crop_extent / 2.0;
    if max_position < 0.0 {
        return 0.0;
    }
    clamp(position, -max_position, max_position)
}

/// Restrict a translation on both axes independently.
///
/// The media size is first expanded to its rotated bounding box.
pub fn restrict_position(
    position: Point,
    media_size: Size,
    crop_size: Size,
    zoom: f64,
    rotation: f64,
) -> Point {
    let Size {
        width: w,
        height: h,
    } = rotate_size(media_size.width, media_size.height, rotation);

    Point {
        x: restrict_position_coord(position.x, w, crop_size.width, zoom),
        y: restrict_position_coord(position.y, h, crop_size.height, zoom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_inside() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
    }

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_clamp_inverted_bounds_returns_max() {
        assert_eq!(clamp(3.0, 5.0, -5.0), -5.0);
    }

    #[test]
    fn test_coord_within_limit_unchanged() {
        // 800 * 1.0 / 2 - 300 / 2 = 250
        assert_eq!(restrict_position_coord(100.0, 800.0, 300.0, 1.0), 100.0);
        assert_eq!(restrict_position_coord(-250.0, 800.0, 300.0, 1.0), -250.0);
    }

    #[test]
    fn test_coord_clamped_to_limit() {
        assert_eq!(restrict_position_coord(400.0, 800.0, 300.0, 1.0), 250.0);
        assert_eq!(restrict_position_coord(-400.0, 800.0, 300.0, 1.0), -250.0);
    }

    #[test]
    fn test_coord_zoom_extends_limit() {
        // 800 * 2 / 2 - 150 = 650
        assert_eq!(restrict_position_coord(1000.0, 800.0, 300.0, 2.0), 650.0);
    }

    #[test]
    fn test_coord_exact_cover_pins_to_zero() {
        assert_eq!(restrict_position_coord(40.0, 500.0, 500.0, 1.0), 0.0);
    }

    #[test]
    fn test_coord_undersized_media_centers() {
        // Zoomed media (200) smaller than the overlay (500)
        assert_eq!(restrict_position_coord(40.0, 200.0, 500.0, 1.0), 0.0);
        assert_eq!(restrict_position_coord(-40.0, 200.0, 500.0, 1.0), 0.0);
    }

    #[test]
    fn test_restrict_position_axes_independent() {
        let zoom = 500.0 / 450.0;
        let restricted = restrict_position(
            Point::new(1000.0, 10.0),
            Size::new(800.0, 450.0),
            Size::new(300.0, 500.0),
            zoom,
            0.0,
        );
        let max_x = 800.0 * zoom / 2.0 - 150.0;
        assert!((restricted.x - max_x).abs() < 1e-9);
        // Height exactly covers the overlay: no vertical freedom
        assert!(restricted.y.abs() < 1e-9);
    }

    #[test]
    fn test_restrict_position_rotated_swaps_limits() {
        let restricted = restrict_position(
            Point::new(1000.0, 1000.0),
            Size::new(800.0, 400.0),
            Size::new(200.0, 200.0),
            1.0,
            90.0,
        );
        assert!((restricted.x - 100.0).abs() < 1e-9);
        assert!((restricted.y - 300.0).abs() < 1e-9);
    }
}
