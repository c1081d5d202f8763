//! WASM bindings for the media-processing helpers.
//!
//! The browser cannot run ffmpeg itself, but it can plan the encode (for an
//! ffmpeg.wasm worker or a server round trip) and render thumbnails from frames
//! it has already decoded.

use mediacrop_core::media::ffmpeg::{BoomerangCommand, EncodeProfile};
use mediacrop_core::media::{self, normalize_source_path, BoomerangRequest};
use mediacrop_core::{CropResult, MediaProcessingError, PixelCrop};
use wasm_bindgen::prelude::*;

use crate::types::{JsCropResult, JsFrame};

/// Format seconds as `HH:MM:SS.mmm`.
#[wasm_bindgen]
pub fn format_time(seconds: f64) -> String {
    media::format_time(seconds)
}

/// Thumbnail sample positions in milliseconds.
///
/// # Arguments
///
/// * `total_secs` - Clip duration in seconds
/// * `interval_ms` - Spacing between samples
/// * `lead_ms` - How far before each sample point the frame is taken
#[wasm_bindgen]
pub fn thumbnail_sample_times_ms(total_secs: f64, interval_ms: u32, lead_ms: u32) -> Vec<f64> {
    media::thumbnail_sample_times(total_secs, u64::from(interval_ms), u64::from(lead_ms))
        .into_iter()
        .map(|t| t.as_secs_f64() * 1000.0)
        .collect()
}

/// Plan the ffmpeg arguments for a boomerang clip.
///
/// # Arguments
///
/// * `source` - Input path or `file://` URL
/// * `output` - Output path
/// * `start_secs` - Start position in the source
/// * `duration_secs` - Length of the forward segment
/// * `crop` - Crop to apply, or `undefined` for the full frame
/// * `legacy` - Target older decoders (720px, MPEG-4 Part 2)
///
/// # Returns
///
/// The argument list without the `ffmpeg` program name.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const args = boomerang_args(uri, "out.mp4", 3.5, 2, session.cropped_area(), false);
/// await ffmpeg.exec(args);
/// ```
#[wasm_bindgen]
pub fn boomerang_args(
    source: &str,
    output: &str,
    start_secs: f64,
    duration_secs: f64,
    crop: Option<JsCropResult>,
    legacy: bool,
) -> Result<Vec<String>, JsValue> {
    plan_boomerang(
        source,
        output,
        start_secs,
        duration_secs,
        crop.map(JsCropResult::to_result).as_ref(),
        legacy,
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Crop a decoded frame and scale it to `width`.
///
/// # Errors
///
/// Returns an error if the frame buffer does not match its dimensions, the
/// width is zero, or the crop lies outside the frame.
#[wasm_bindgen]
pub fn render_thumbnail(
    frame: &JsFrame,
    crop: Option<JsCropResult>,
    width: u32,
) -> Result<JsFrame, JsValue> {
    render_frame(frame, crop.map(JsCropResult::to_result).as_ref(), width)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn plan_boomerang(
    source: &str,
    output: &str,
    start_secs: f64,
    duration_secs: f64,
    crop: Option<&CropResult>,
    legacy: bool,
) -> Result<Vec<String>, MediaProcessingError> {
    if !start_secs.is_finite() || start_secs < 0.0 {
        return Err(MediaProcessingError::InvalidRequest(format!(
            "start position {} is not a valid time",
            start_secs
        )));
    }
    if !duration_secs.is_finite() || duration_secs <= 0.0 {
        return Err(MediaProcessingError::InvalidRequest(format!(
            "duration {} must be positive",
            duration_secs
        )));
    }

    let request = BoomerangRequest {
        source: normalize_source_path(source),
        start_time: media::format_time(start_secs),
        crop: crop.and_then(PixelCrop::from_result),
        duration_secs,
    };
    let profile = if legacy {
        EncodeProfile::Legacy
    } else {
        EncodeProfile::Standard
    };
    Ok(BoomerangCommand::new(request, output)
        .profile(profile)
        .build_args())
}

fn render_frame(
    frame: &JsFrame,
    crop: Option<&CropResult>,
    width: u32,
) -> Result<JsFrame, MediaProcessingError> {
    let image = frame.to_image().ok_or_else(|| {
        MediaProcessingError::InvalidRequest(format!(
            "pixel buffer of {} bytes does not match {}x{} RGB frame",
            frame.byte_length(),
            frame.width(),
            frame.height()
        ))
    })?;
    let region = crop.and_then(PixelCrop::from_result);
    let thumbnail = media::render_thumbnail(&image, region.as_ref(), width)?;
    Ok(JsFrame::from_image(thumbnail))
}
