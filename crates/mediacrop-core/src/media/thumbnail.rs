//! Thumbnail rendering from decoded video frames.

use image::imageops::{self, FilterType};
use image::RgbImage;

use super::request::PixelCrop;
use super::MediaProcessingError;

/// Crop a frame and scale it to `width`, preserving the cropped aspect.
///
/// The crop is clamped to the frame; `None` keeps the full frame. The output
/// height is at least one pixel.
pub fn render_thumbnail(
    frame: &RgbImage,
    crop: Option<&PixelCrop>,
    width: u32,
) -> Result<RgbImage, MediaProcessingError> {
    let (frame_w, frame_h) = frame.dimensions();
    if frame_w == 0 || frame_h == 0 {
        return Err(MediaProcessingError::InvalidRequest(
            "frame has no pixels".into(),
        ));
    }
    if width == 0 {
        return Err(MediaProcessingError::InvalidRequest(
            "thumbnail width must be positive".into(),
        ));
    }

    let region = match crop {
        Some(c) => c.clamp_to(frame_w, frame_h).ok_or_else(|| {
            MediaProcessingError::InvalidRequest(format!(
                "crop {}x{}+{}+{} lies outside {}x{} frame",
                c.width, c.height, c.x, c.y, frame_w, frame_h
            ))
        })?,
        None => PixelCrop::new(0, 0, frame_w, frame_h),
    };

    let cropped = imageops::crop_imm(frame, region.x, region.y, region.width, region.height)
        .to_image();
    let height = ((width as f64 * region.height as f64) / region.width as f64)
        .round()
        .max(1.0) as u32;

    Ok(imageops::resize(&cropped, width, height, FilterType::Triangle))
}
