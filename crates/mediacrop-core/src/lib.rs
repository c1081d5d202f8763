//! Mediacrop Core - Pan/zoom crop geometry
//!
//! This crate provides the geometry engine behind an interactive media cropper:
//! a media element (image or video frame) is panned and zoomed behind a
//! fixed-size overlay, and at any instant the visible region of the original,
//! full-resolution media can be derived as percentages and as pixels.
//!
//! # Module Structure
//!
//! - `geometry` - Pure kernel functions (rotation bounds, clamping, position
//!   restriction, cropped-area computation)
//! - `layout` - Measured sizes, object-fit and overlay derivation
//! - `scale` - Zoom and translation state, initial cover-zoom resolver
//! - `pan` - Drag state machine that keeps the media covering the overlay
//! - `reporter` - Crop derivation from the live session state
//! - `session` - Interactive cropping session wiring everything together
//! - `media` - Collaborator interface for boomerang/thumbnail generation
//! - `config` - Cropper and editor configuration

pub mod config;
pub mod geometry;
pub mod layout;
pub mod media;
pub mod pan;
pub mod reporter;
pub mod scale;
pub mod session;

pub use config::{ConfigError, CropperConfig, EditorConfig};
pub use geometry::{
    clamp, compute_cropped_area, restrict_position, restrict_position_coord, rotate_size,
};
pub use layout::{ContainerLayout, LayoutState, ObjectFit};
pub use media::{MediaProcessingError, MediaProcessor, PixelCrop, VideoEditor};
pub use pan::{PanBounds, PanController, PanPhase};
pub use reporter::report_cropped_area;
pub use scale::{InitialScaleResolver, ScaleState, TranslateState};
pub use session::{CropListener, CropSession, DragHandler};

use serde::{Deserialize, Serialize};

/// Width and height in layout units or pixels.
///
/// Zero is used as the "not yet measured" sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both dimensions have been measured (non-zero).
    pub fn is_measured(&self) -> bool {
        self.width != 0.0 && self.height != 0.0
    }

    /// Width divided by height.
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }
}

/// Translation offset relative to the overlay center.
///
/// `(0, 0)` means the media is centered under the overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rendered and intrinsic dimensions of a media element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaGeometry {
    /// On-screen width before zoom is applied
    pub width: f64,
    /// On-screen height before zoom is applied
    pub height: f64,
    /// Intrinsic source width in pixels
    pub natural_width: f64,
    /// Intrinsic source height in pixels
    pub natural_height: f64,
}

impl MediaGeometry {
    pub fn new(rendered: Size, natural: Size) -> Self {
        Self {
            width: rendered.width,
            height: rendered.height,
            natural_width: natural.width,
            natural_height: natural.height,
        }
    }

    pub fn rendered(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn natural(&self) -> Size {
        Size::new(self.natural_width, self.natural_height)
    }
}

/// Axis-aligned rectangle: offset of the top-left corner plus extent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CropArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Axis a drag predominantly moved along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragAxis {
    X,
    Y,
}

impl DragAxis {
    /// Lowercase axis name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            DragAxis::X => "x",
            DragAxis::Y => "y",
        }
    }
}

/// Snapshot of the visible region of the original media.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropResult {
    /// Visible region in percent (0 to 100) of the media bounding box
    pub cropped_area_percentages: CropArea,
    /// Visible region in natural pixels
    pub cropped_area_pixels: CropArea,
    /// Dominant axis of the most recent drag, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<DragAxis>,
}

impl CropResult {
    /// Return a copy tagged with the given drag direction.
    pub fn with_direction(self, direction: Option<DragAxis>) -> Self {
        Self { direction, ..self }
    }
}
