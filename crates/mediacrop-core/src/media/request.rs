//! Requests handed to the media processor.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::CropResult;

/// Integer crop rectangle in natural pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelCrop {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelCrop {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Take the pixel rectangle from a crop result.
    ///
    /// Returns `None` for an empty rectangle, which processors treat as
    /// "use the full frame".
    pub fn from_result(result: &CropResult) -> Option<Self> {
        let px = result.cropped_area_pixels;
        let crop = Self {
            x: px.x.max(0.0).round() as u32,
            y: px.y.max(0.0).round() as u32,
            width: px.width.max(0.0).round() as u32,
            height: px.height.max(0.0).round() as u32,
        };
        (crop.width > 0 && crop.height > 0).then_some(crop)
    }

    /// Shrink the rectangle so it fits inside a `width` x `height` frame.
    ///
    /// Returns `None` if nothing of the rectangle remains.
    pub fn clamp_to(&self, width: u32, height: u32) -> Option<Self> {
        let x = self.x.min(width);
        let y = self.y.min(height);
        let w = self.width.min(width - x);
        let h = self.height.min(height - y);
        (w > 0 && h > 0).then_some(Self::new(x, y, w, h))
    }
}

/// Strip a `file://` scheme, leaving a plain filesystem path.
pub fn normalize_source_path(source: &str) -> PathBuf {
    PathBuf::from(source.strip_prefix("file://").unwrap_or(source))
}

/// Parameters for a boomerang clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoomerangRequest {
    pub source: PathBuf,
    /// Start position formatted as `HH:MM:SS.mmm`
    pub start_time: String,
    /// Crop rectangle, or `None` for the full frame
    pub crop: Option<PixelCrop>,
    /// Length of the forward segment
    pub duration_secs: f64,
}

/// Parameters for a thumbnail strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThumbnailRequest {
    pub source: PathBuf,
    pub total_duration_secs: f64,
    /// Crop rectangle, or `None` for the full frame
    pub crop: Option<PixelCrop>,
    /// Length of the window the thumbnails are picked for
    pub sample_window_secs: f64,
}
