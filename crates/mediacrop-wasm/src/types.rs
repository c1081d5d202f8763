//! WASM-compatible wrapper types for crop results and video frames.
//!
//! This module provides JavaScript-friendly types that wrap the core mediacrop
//! types, handling the conversion between Rust and JavaScript data representations.

use image::RgbImage;
use mediacrop_core::{CropArea, CropResult};
use wasm_bindgen::prelude::*;

/// An axis-aligned rectangle exposed to JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsCropArea {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[wasm_bindgen]
impl JsCropArea {
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl From<CropArea> for JsCropArea {
    fn from(area: CropArea) -> Self {
        Self {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height,
        }
    }
}

/// Visible region of the original media, in percent and in pixels.
///
/// Use `toJSON()` to get the plain `{ croppedAreaPercentages, croppedAreaPixels,
/// direction }` object that the listener callback also receives.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsCropResult {
    inner: CropResult,
}

#[wasm_bindgen]
impl JsCropResult {
    /// Visible region as percentages (0 to 100) of the media bounding box
    #[wasm_bindgen(getter)]
    pub fn percentages(&self) -> JsCropArea {
        self.inner.cropped_area_percentages.into()
    }

    /// Visible region in natural pixels
    #[wasm_bindgen(getter)]
    pub fn pixels(&self) -> JsCropArea {
        self.inner.cropped_area_pixels.into()
    }

    /// `"x"`, `"y"` or `undefined`
    #[wasm_bindgen(getter)]
    pub fn direction(&self) -> Option<String> {
        self.inner.direction.map(|axis| axis.as_str().to_string())
    }

    /// Serialize to a plain JavaScript object.
    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize crop result: {}", e)))
    }
}

impl JsCropResult {
    pub(crate) fn from_result(inner: CropResult) -> Self {
        Self { inner }
    }

    pub(crate) fn to_result(self) -> CropResult {
        self.inner
    }
}

/// A decoded RGB video frame.
///
/// The pixel data is stored in WASM memory. `pixels()` copies it out to a
/// JavaScript `Uint8Array`.
#[wasm_bindgen]
pub struct JsFrame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsFrame {
    /// Create a frame from dimensions and RGB pixel data (3 bytes per pixel,
    /// row-major order).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsFrame {
        JsFrame {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as a Uint8Array copy.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {}
}

impl JsFrame {
    pub(crate) fn from_image(image: RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            pixels: image.into_raw(),
        }
    }

    /// Borrow the frame as an `RgbImage`.
    ///
    /// Returns `None` when the buffer length does not match the dimensions.
    pub(crate) fn to_image(&self) -> Option<RgbImage> {
        RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }
}
