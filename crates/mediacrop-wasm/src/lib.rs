//! Mediacrop WASM - WebAssembly bindings for Mediacrop
//!
//! This crate provides WASM bindings to expose the mediacrop-core cropping
//! session and its helpers to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `session` - Interactive pan/zoom cropping session
//! - `geometry` - Stateless geometry kernel (restriction, rotation, crop area)
//! - `media` - Time formatting, ffmpeg planning and thumbnail rendering
//! - `types` - WASM-compatible wrapper types for crop results and frames
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCropSession } from '@mediacrop/wasm';
//!
//! // Load and instantiate the module (generated by wasm-bindgen)
//! await init();
//!
//! const session = new JsCropSession();
//! session.set_listener((crop) => upload(crop.croppedAreaPixels));
//! ```

use wasm_bindgen::prelude::*;

mod geometry;
mod media;
mod session;
mod types;

// Re-export public types
pub use geometry::{compute_cropped_area, restrict_position_coord, rotated_height, rotated_width};
pub use media::{boomerang_args, format_time, render_thumbnail, thumbnail_sample_times_ms};
pub use session::JsCropSession;
pub use types::{JsCropArea, JsCropResult, JsFrame};

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
