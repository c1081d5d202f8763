//! WASM bindings for the pure geometry kernel.
//!
//! These are stateless helpers for hosts that keep their own pan/zoom state
//! and only need the math.

use mediacrop_core::{geometry, MediaGeometry, Point, Size};
use wasm_bindgen::prelude::*;

use crate::types::JsCropResult;

/// Clamp one translation coordinate so the zoomed media still covers the crop.
///
/// Returns 0 when the media is smaller than the crop along this axis.
#[wasm_bindgen]
pub fn restrict_position_coord(
    position: f64,
    media_extent: f64,
    crop_extent: f64,
    zoom: f64,
) -> f64 {
    geometry::restrict_position_coord(position, media_extent, crop_extent, zoom)
}

/// Width of the axis-aligned bounding box of a rotated rectangle.
#[wasm_bindgen]
pub fn rotated_width(width: f64, height: f64, rotation: f64) -> f64 {
    geometry::rotate_size(width, height, rotation).width
}

/// Height of the axis-aligned bounding box of a rotated rectangle.
#[wasm_bindgen]
pub fn rotated_height(width: f64, height: f64, rotation: f64) -> f64 {
    geometry::rotate_size(width, height, rotation).height
}

/// Compute the visible region of the original media.
///
/// # Arguments
///
/// * `crop_x`, `crop_y` - Translation of the media relative to the crop center
/// * `media_width`, `media_height` - On-screen media size before zoom
/// * `natural_width`, `natural_height` - Intrinsic media resolution
/// * `crop_width`, `crop_height` - Overlay size
/// * `aspect` - Width:height ratio of the crop
/// * `zoom` - Current zoom factor
/// * `rotation` - Media rotation in degrees
///
/// # Example (TypeScript)
///
/// ```typescript
/// const crop = compute_cropped_area(0, 0, 800, 450, 1920, 1080, 300, 500, 0.6, 1.11, 0);
/// console.log(crop.pixels.width, crop.pixels.height);
/// ```
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn compute_cropped_area(
    crop_x: f64,
    crop_y: f64,
    media_width: f64,
    media_height: f64,
    natural_width: f64,
    natural_height: f64,
    crop_width: f64,
    crop_height: f64,
    aspect: f64,
    zoom: f64,
    rotation: f64,
) -> JsCropResult {
    let media = MediaGeometry::new(
        Size::new(media_width, media_height),
        Size::new(natural_width, natural_height),
    );
    let result = geometry::compute_cropped_area(
        Point::new(crop_x, crop_y),
        &media,
        Size::new(crop_width, crop_height),
        aspect,
        zoom,
        rotation,
    );
    JsCropResult::from_result(result)
}
