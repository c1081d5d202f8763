//! Zoom and translation state, and the initial cover-zoom resolver.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Point, Size};

/// Current zoom with its lower (cover) and upper bounds.
///
/// The zoom is never set below the floor, so the media always fills the
/// overlay once the floor has been seeded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleState {
    zoom: f64,
    min_zoom: f64,
    max_zoom_factor: f64,
}

impl Default for ScaleState {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl ScaleState {
    /// Unseeded state with zoom 1 and the given ceiling multiplier.
    pub fn new(max_zoom_factor: f64) -> Self {
        Self {
            zoom: 1.0,
            min_zoom: 1.0,
            max_zoom_factor,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Cover zoom: the smallest zoom at which the media fills the overlay.
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    pub fn max_zoom(&self) -> f64 {
        self.min_zoom * self.max_zoom_factor
    }

    /// Reset both the zoom and its floor to the cover zoom.
    pub fn seed(&mut self, cover_zoom: f64) {
        self.zoom = cover_zoom;
        self.min_zoom = cover_zoom;
    }

    /// Set the zoom, clamped to `[min_zoom, max_zoom]`.
    ///
    /// Returns the zoom actually applied.
    pub fn set_zoom(&mut self, zoom: f64) -> f64 {
        self.zoom = zoom.max(self.min_zoom).min(self.max_zoom());
        self.zoom
    }
}

/// Offset of the media center from the overlay center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslateState {
    pub position: Point,
}

impl TranslateState {
    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }
}

/// Minimum zoom at which `media` covers `overlay` on both axes.
///
/// Returns `None` while any dimension is still unmeasured.
pub fn cover_zoom(overlay: Size, media: Size) -> Option<f64> {
    if !overlay.is_measured() || !media.is_measured() {
        return None;
    }
    let height_zoom_limit = overlay.height / media.height;
    let width_zoom_limit = overlay.width / media.width;
    Some(height_zoom_limit.max(width_zoom_limit))
}

/// Seeds [`ScaleState`] with the cover zoom as measurements arrive.
///
/// Safe to call on every layout pass: unmeasured inputs leave the state
/// untouched, and inputs identical to the last seeded pair are ignored so a
/// user-chosen zoom survives redundant layout callbacks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InitialScaleResolver {
    last_inputs: Option<(Size, Size)>,
}

impl InitialScaleResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `scale` if the inputs are measured and changed.
    ///
    /// Returns true if the scale was reseeded.
    pub fn resolve(&mut self, overlay: Size, media: Size, scale: &mut ScaleState) -> bool {
        if self.last_inputs == Some((overlay, media)) {
            return false;
        }
        let Some(zoom) = cover_zoom(overlay, media) else {
            return false;
        };
        debug!(zoom, "seeding cover zoom");
        scale.seed(zoom);
        self.last_inputs = Some((overlay, media));
        true
    }
}
