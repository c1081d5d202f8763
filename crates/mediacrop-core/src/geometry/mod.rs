//! Pure geometry kernel for the cropper.
//!
//! Every function in this module is stateless and side-effect free, so it can
//! be called from a tight input-sampling loop.
//!
//! # Coordinate System
//!
//! - Translations are offsets of the media center from the overlay center
//! - Positive x moves the media right, positive y moves it down
//! - Rotation angles are in degrees
//! - Percentages are in the range 0 to 100 of the rotated media bounding box
//!
//! # Preconditions
//!
//! Sizes, zoom and aspect must be non-zero. Callers gate on layout measurement
//! (see `session::CropSession`) instead of the kernel signaling errors.

mod crop_area;
mod restrict;
mod rotation;

pub use crop_area::compute_cropped_area;
pub use restrict::{clamp, restrict_position, restrict_position_coord};
pub use rotation::{radians, rotate_size};
