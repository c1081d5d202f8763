//! Derivation of the visible region of the original media.
//!
//! # Algorithm
//!
//! 1. Expand rendered and natural sizes to their rotated bounding boxes
//! 2. Offsets in percent: `((bbox - crop / zoom) / 2 - offset / zoom) / bbox * 100`
//! 3. Extents in percent: `(crop / bbox) * 100 / zoom`
//! 4. Convert extents to natural pixels, clamped to the natural bounding box
//! 5. Re-derive one pixel extent from the other and `aspect`, so independent
//!    rounding on each axis cannot skew the requested aspect ratio
//! 6. Convert offsets to natural pixels, clamped so the rectangle stays inside
//!    the natural bounding box
//!
//! All percentage values are left unrounded; pixel values are rounded.

use super::{clamp, rotate_size};
use crate::{CropArea, CropResult, MediaGeometry, Point, Size};

/// Clamp into `[0, max]`.
#[inline]
fn limit_area(max: f64, value: f64) -> f64 {
    clamp(value, 0.0, max)
}

/// Compute the cropped area for the current translation and zoom.
///
/// # Arguments
///
/// * `crop` - Translation of the media relative to the overlay center
/// * `media` - Rendered (pre-zoom) and natural media dimensions
/// * `crop_size` - Overlay size
/// * `aspect` - Requested width/height ratio of the pixel rectangle
/// * `zoom` - Current zoom factor
/// * `rotation` - Rotation in degrees
///
/// # Returns
///
/// A [`CropResult`] with no drag direction set.
pub fn compute_cropped_area(
    crop: Point,
    media: &MediaGeometry,
    crop_size: Size,
    aspect: f64,
    zoom: f64,
    rotation: f64,
) -> CropResult {
    let media_bbox = rotate_size(media.width, media.height, rotation);
    let natural_bbox = rotate_size(media.natural_width, media.natural_height, rotation);

    let percentages = CropArea {
        x: limit_area(
            100.0,
            (((media_bbox.width - crop_size.width / zoom) / 2.0 - crop.x / zoom)
                / media_bbox.width)
                * 100.0,
        ),
        y: limit_area(
            100.0,
            (((media_bbox.height - crop_size.height / zoom) / 2.0 - crop.y / zoom)
                / media_bbox.height)
                * 100.0,
        ),
        width: limit_area(100.0, ((crop_size.width / media_bbox.width) * 100.0) / zoom),
        height: limit_area(
            100.0,
            ((crop_size.height / media_bbox.height) * 100.0) / zoom,
        ),
    };

    let width_in_pixels = limit_area(
        natural_bbox.width,
        (percentages.width * natural_bbox.width) / 100.0,
    )
    .round();
    let height_in_pixels = limit_area(
        natural_bbox.height,
        (percentages.height * natural_bbox.height) / 100.0,
    )
    .round();

    // At cover zoom a wide source fills the overlay vertically, so the pixel
    // height is exact and the width follows from the aspect (and vice versa).
    let is_wider_than_tall = natural_bbox.width >= natural_bbox.height * aspect;
    let (width, height) = if is_wider_than_tall {
        ((height_in_pixels * aspect).round(), height_in_pixels)
    } else {
        (width_in_pixels, (width_in_pixels / aspect).round())
    };

    let pixels = CropArea {
        x: limit_area(
            natural_bbox.width - width,
            (percentages.x * natural_bbox.width) / 100.0,
        )
        .round(),
        y: limit_area(
            natural_bbox.height - height,
            (percentages.y * natural_bbox.height) / 100.0,
        )
        .round(),
        width,
        height,
    };

    CropResult {
        cropped_area_percentages: percentages,
        cropped_area_pixels: pixels,
        direction: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hd_media() -> MediaGeometry {
        MediaGeometry::new(Size::new(800.0, 450.0), Size::new(1920.0, 1080.0))
    }

    fn overlay() -> Size {
        Size::new(300.0, 500.0)
    }

    fn cover_zoom() -> f64 {
        500.0 / 450.0
    }

    #[test]
    fn test_centered_at_cover_zoom() {
        let result = compute_cropped_area(
            Point::default(),
            &hd_media(),
            overlay(),
            0.6,
            cover_zoom(),
            0.0,
        );

        let pct = result.cropped_area_percentages;
        assert!((pct.height - 100.0).abs() < 1e-9);
        assert!((pct.width - 33.75).abs() < 1e-9);
        assert!((pct.x - 33.125).abs() < 1e-9);
        assert!(pct.y.abs() < 1e-9);

        let px = result.cropped_area_pixels;
        assert_eq!(px.height, 1080.0);
        assert_eq!(px.width, 648.0);
        assert_eq!(px.x, 636.0);
        assert_eq!(px.y, 0.0);
        assert_eq!(result.direction, None);
    }

    #[test]
    fn test_centered_crop_is_symmetric() {
        let result = compute_cropped_area(
            Point::default(),
            &hd_media(),
            overlay(),
            0.6,
            cover_zoom(),
            0.0,
        );
        let px = result.cropped_area_pixels;
        let right_margin = 1920.0 - (px.x + px.width);
        assert!((px.x - right_margin).abs() <= 1.0);
    }

    #[test]
    fn test_translate_right_shows_left_edge() {
        // Max translation along x at cover zoom
        let zoom = cover_zoom();
        let max_x = 800.0 * zoom / 2.0 - 150.0;
        let result = compute_cropped_area(
            Point::new(max_x, 0.0),
            &hd_media(),
            overlay(),
            0.6,
            zoom,
            0.0,
        );
        assert!(result.cropped_area_percentages.x.abs() < 1e-9);
        assert_eq!(result.cropped_area_pixels.x, 0.0);
    }

    #[test]
    fn test_translate_left_shows_right_edge() {
        let zoom = cover_zoom();
        let max_x = 800.0 * zoom / 2.0 - 150.0;
        let result = compute_cropped_area(
            Point::new(-max_x, 0.0),
            &hd_media(),
            overlay(),
            0.6,
            zoom,
            0.0,
        );
        let px = result.cropped_area_pixels;
        assert_eq!(px.x + px.width, 1920.0);
    }

    #[test]
    fn test_zoom_in_shrinks_crop() {
        let zoom = cover_zoom() * 2.0;
        let result = compute_cropped_area(Point::default(), &hd_media(), overlay(), 0.6, zoom, 0.0);
        let px = result.cropped_area_pixels;
        assert_eq!(px.height, 540.0);
        assert_eq!(px.width, 324.0);
        // Centered: (1080 - 540) / 2
        assert_eq!(px.y, 270.0);
    }

    #[test]
    fn test_tall_media_trusts_width() {
        // Portrait source in a landscape overlay: width is the cover axis
        let media = MediaGeometry::new(Size::new(450.0, 800.0), Size::new(1080.0, 1920.0));
        let crop = Size::new(500.0, 300.0);
        let zoom = 500.0 / 450.0;
        let aspect = crop.aspect();
        let result = compute_cropped_area(Point::default(), &media, crop, aspect, zoom, 0.0);

        let px = result.cropped_area_pixels;
        assert_eq!(px.width, 1080.0);
        assert_eq!(px.height, (1080.0 / aspect).round());
    }

    #[test]
    fn test_percentages_clamped_to_100() {
        // Zoom below cover: the overlay is larger than the media
        let result = compute_cropped_area(
            Point::default(),
            &hd_media(),
            overlay(),
            0.6,
            0.5,
            0.0,
        );
        let pct = result.cropped_area_percentages;
        assert!(pct.width <= 100.0);
        assert!(pct.height <= 100.0);
        assert!(pct.x >= 0.0);
        assert!(pct.y >= 0.0);
    }

    #[test]
    fn test_identical_inputs_identical_output() {
        let a = compute_cropped_area(Point::new(12.5, -3.0), &hd_media(), overlay(), 0.6, 1.7, 0.0);
        let b = compute_cropped_area(Point::new(12.5, -3.0), &hd_media(), overlay(), 0.6, 1.7, 0.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rotation_uses_swapped_bbox() {
        // Rotated bbox is 450 x 800, cover zoom is max(500 / 800, 300 / 450)
        let zoom = 300.0 / 450.0;
        let result = compute_cropped_area(
            Point::default(),
            &hd_media(),
            Size::new(300.0, 500.0),
            0.6,
            zoom,
            90.0,
        );
        // Rotated natural bbox is 1080 x 1920, so width is the cover axis
        let px = result.cropped_area_pixels;
        assert_eq!(px.width, 1080.0);
        assert_eq!(px.height, 1800.0);
        assert_eq!(px.y, 60.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::geometry::restrict_position;
    use proptest::prelude::*;

    /// Strategy for natural media sizes.
    fn natural_strategy() -> impl Strategy<Value = (f64, f64)> {
        (200u32..=4000, 200u32..=4000).prop_map(|(w, h)| (w as f64, h as f64))
    }

    /// Strategy for overlay sizes.
    fn overlay_strategy() -> impl Strategy<Value = (f64, f64)> {
        (100.0f64..=600.0, 100.0f64..=900.0)
    }

    proptest! {
        /// Property: pixel rectangle stays inside the natural media.
        #[test]
        fn prop_pixels_within_bounds(
            (nat_w, nat_h) in natural_strategy(),
            (crop_w, crop_h) in overlay_strategy(),
            extra_zoom in 1.0f64..4.0,
            tx in -3000.0f64..3000.0,
            ty in -3000.0f64..3000.0,
        ) {
            // Rendered size fits the container width, as the object-fit does
            let rendered = Size::new(crop_w, crop_w * nat_h / nat_w);
            let media = MediaGeometry::new(rendered, Size::new(nat_w, nat_h));
            let crop = Size::new(crop_w, crop_h);
            let zoom = (crop_w / rendered.width).max(crop_h / rendered.height) * extra_zoom;
            let position = restrict_position(Point::new(tx, ty), rendered, crop, zoom, 0.0);

            let result = compute_cropped_area(position, &media, crop, crop.aspect(), zoom, 0.0);
            let px = result.cropped_area_pixels;

            prop_assert!(px.x >= 0.0 && px.y >= 0.0);
            prop_assert!(px.x + px.width <= nat_w + 1.0, "x {} + w {} > {}", px.x, px.width, nat_w);
            prop_assert!(px.y + px.height <= nat_h + 1.0, "y {} + h {} > {}", px.y, px.height, nat_h);
        }

        /// Property: the pixel rectangle keeps the requested aspect within rounding.
        #[test]
        fn prop_pixels_match_aspect(
            (nat_w, nat_h) in natural_strategy(),
            (crop_w, crop_h) in overlay_strategy(),
            extra_zoom in 1.0f64..4.0,
        ) {
            let rendered = Size::new(crop_w, crop_w * nat_h / nat_w);
            let media = MediaGeometry::new(rendered, Size::new(nat_w, nat_h));
            let crop = Size::new(crop_w, crop_h);
            let aspect = crop.aspect();
            let zoom = (crop_w / rendered.width).max(crop_h / rendered.height) * extra_zoom;

            let px = compute_cropped_area(Point::default(), &media, crop, aspect, zoom, 0.0)
                .cropped_area_pixels;

            prop_assume!(px.width >= 1.0 && px.height >= 1.0);
            // One extent is derived from the other, so they agree within one pixel
            let derived_w = (px.height * aspect).round();
            let derived_h = (px.width / aspect).round();
            prop_assert!(
                (px.width - derived_w).abs() <= 1.0 || (px.height - derived_h).abs() <= 1.0,
                "{}x{} does not match aspect {}",
                px.width,
                px.height,
                aspect
            );
        }

        /// Property: the computation is deterministic.
        #[test]
        fn prop_is_deterministic(
            (nat_w, nat_h) in natural_strategy(),
            (crop_w, crop_h) in overlay_strategy(),
            zoom in 0.5f64..4.0,
            tx in -500.0f64..500.0,
            ty in -500.0f64..500.0,
        ) {
            let rendered = Size::new(crop_w, crop_w * nat_h / nat_w);
            let media = MediaGeometry::new(rendered, Size::new(nat_w, nat_h));
            let crop = Size::new(crop_w, crop_h);

            let a = compute_cropped_area(Point::new(tx, ty), &media, crop, crop.aspect(), zoom, 0.0);
            let b = compute_cropped_area(Point::new(tx, ty), &media, crop, crop.aspect(), zoom, 0.0);
            prop_assert_eq!(a, b);
        }
    }
}
