//! Media-processing collaborator interface.
//!
//! The cropper itself never touches media files. Once a crop is chosen it is
//! handed, as an integer pixel rectangle, to a [`MediaProcessor`] that cuts,
//! reverses and re-encodes video or extracts thumbnails.
//!
//! This module provides:
//! - The [`MediaProcessor`] trait and its error type
//! - Request types built from a [`CropResult`](crate::CropResult)
//! - `HH:MM:SS.mmm` time formatting and thumbnail sampling
//! - An ffmpeg argument planner for boomerang clips
//! - Thumbnail rendering from decoded frames
//! - The [`VideoEditor`] facade tying these together

mod editor;
pub mod ffmpeg;
mod request;
mod thumbnail;
mod time;

pub use editor::VideoEditor;
pub use request::{normalize_source_path, BoomerangRequest, PixelCrop, ThumbnailRequest};
pub use thumbnail::render_thumbnail;
pub use time::{format_time, thumbnail_sample_times};

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Error types for media-processing operations.
#[derive(Debug, Error)]
pub enum MediaProcessingError {
    /// The native pipeline reported a failure.
    #[error("Media processing failed: {message}")]
    Failed {
        message: String,
        logs: Option<String>,
    },

    /// The operation was cancelled before completing.
    #[error("Media processing cancelled")]
    Cancelled,

    /// The source path is empty or unusable.
    #[error("Invalid source: {0}")]
    InvalidSource(String),

    /// Request parameters are out of range.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// No frame could be decoded at the given timestamp.
    #[error("Failed to retrieve frame at {at_ms} ms")]
    FrameUnavailable { at_ms: u64 },

    /// Editor configuration is unusable.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Image encoding or buffer error.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl MediaProcessingError {
    /// Create a pipeline failure error.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
            logs: None,
        }
    }

    /// Create a pipeline failure error carrying the processor's log output.
    pub fn failed_with_logs(message: impl Into<String>, logs: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
            logs: Some(logs.into()),
        }
    }
}

/// Native pipeline that produces boomerang clips and thumbnails.
///
/// Implementations are free to run asynchronously internally; from the
/// editor's point of view each call completes with an output path or an error.
pub trait MediaProcessor {
    /// Cut, reverse and concatenate a clip. Returns the output file path.
    fn make_boomerang(&self, request: &BoomerangRequest) -> Result<PathBuf, MediaProcessingError>;

    /// Extract thumbnails across the whole source. Returns their file paths.
    fn create_thumbnails(
        &self,
        request: &ThumbnailRequest,
    ) -> Result<Vec<PathBuf>, MediaProcessingError>;
}
