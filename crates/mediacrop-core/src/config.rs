//! Cropper and editor configuration.
//!
//! Both structs deserialize with per-field defaults, so callers only pass the
//! values they want to override.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a configuration value is out of range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A value that must be finite and strictly positive was not.
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    /// A value that must be finite was NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    /// The zoom ceiling would sit below the cover zoom.
    #[error("max_zoom_factor must be at least 1.0, got {0}")]
    ZoomCeilingTooLow(f64),
}

fn ensure_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

/// Configuration for the interactive cropping session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CropperConfig {
    /// Target width:height ratio of the overlay
    pub overlay_aspect: f64,
    /// Largest zoom allowed, as a multiple of the cover zoom
    pub max_zoom_factor: f64,
    /// Media rotation in degrees
    pub rotation: f64,
}

impl Default for CropperConfig {
    fn default() -> Self {
        Self {
            overlay_aspect: 0.6,
            max_zoom_factor: 5.0,
            rotation: 0.0,
        }
    }
}

impl CropperConfig {
    /// Check that all values are usable by the geometry kernel.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("overlay_aspect", self.overlay_aspect)?;
        ensure_positive("max_zoom_factor", self.max_zoom_factor)?;
        if self.max_zoom_factor < 1.0 {
            return Err(ConfigError::ZoomCeilingTooLow(self.max_zoom_factor));
        }
        if !self.rotation.is_finite() {
            return Err(ConfigError::NotFinite {
                field: "rotation",
                value: self.rotation,
            });
        }
        Ok(())
    }
}

/// Configuration for boomerang and thumbnail generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Length of the forward segment of a boomerang
    pub boomerang_duration_ms: u64,
    /// Spacing between thumbnail samples
    pub thumbnail_interval_ms: u64,
    /// How far before each sample point the frame is taken
    pub thumbnail_lead_ms: u64,
    /// Output width of each thumbnail in pixels
    pub thumbnail_width: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            boomerang_duration_ms: 2000,
            thumbnail_interval_ms: 1500,
            thumbnail_lead_ms: 500,
            thumbnail_width: 80,
        }
    }
}

impl EditorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("boomerang_duration_ms", self.boomerang_duration_ms as f64)?;
        ensure_positive("thumbnail_interval_ms", self.thumbnail_interval_ms as f64)?;
        ensure_positive("thumbnail_width", self.thumbnail_width as f64)?;
        Ok(())
    }

    /// Boomerang forward segment in seconds.
    pub fn boomerang_duration_secs(&self) -> f64 {
        self.boomerang_duration_ms as f64 / 1000.0
    }
}
