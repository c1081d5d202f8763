//! Reads the live session state and derives the current crop.

use crate::geometry::compute_cropped_area;
use crate::layout::LayoutState;
use crate::scale::{ScaleState, TranslateState};
use crate::CropResult;

/// Compute the crop for the current translation and zoom.
///
/// The aspect is taken from the overlay, so the pixel rectangle always has the
/// overlay's proportions. Callers must only invoke this once
/// [`LayoutState::is_ready`] holds.
pub fn report_cropped_area(
    layout: &LayoutState,
    scale: &ScaleState,
    translate: &TranslateState,
    rotation: f64,
) -> CropResult {
    compute_cropped_area(
        translate.position,
        &layout.media_geometry(),
        layout.overlay_size(),
        layout.overlay_aspect(),
        scale.zoom(),
        rotation,
    )
}
