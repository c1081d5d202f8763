//! WASM bindings for the interactive cropping session.
//!
//! The host view forwards its measurement and gesture events to a
//! `JsCropSession`, reads back the zoom and translation to position the media
//! element, and receives the crop through a listener at the end of each drag.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const session = new JsCropSession({ overlayAspect: 0.6 });
//! session.set_listener((crop) => console.log(crop.croppedAreaPixels));
//!
//! video.onloadedmetadata = () =>
//!   session.set_natural_size(video.videoWidth, video.videoHeight);
//! new ResizeObserver(([entry]) => {
//!   const r = entry.contentRect;
//!   session.set_container_layout(r.x, r.y, r.width, r.height);
//! }).observe(container);
//!
//! // pointer handlers
//! session.drag_start();
//! session.drag_delta(dx, dy);
//! session.drag_end();
//!
//! video.style.transform =
//!   `translate(${session.translate_x}px, ${session.translate_y}px) scale(${session.zoom})`;
//! ```

use mediacrop_core::{
    ContainerLayout, CropSession, CropperConfig, DragHandler, Point, ScaleState, Size,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::types::JsCropResult;

/// Plain-object view of the session state, for debugging and devtools.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionSnapshot {
    ready: bool,
    dragging: bool,
    scale: ScaleState,
    translation: Point,
    overlay: Size,
    media: Size,
    natural: Size,
}

/// An interactive pan/zoom cropping session.
#[wasm_bindgen]
pub struct JsCropSession {
    inner: CropSession,
}

#[wasm_bindgen]
impl JsCropSession {
    /// Create a session.
    ///
    /// # Arguments
    /// * `config` - Optional `{ overlayAspect, maxZoomFactor, rotation }` object;
    ///   missing fields take their defaults
    ///
    /// # Errors
    /// Returns an error if the config cannot be deserialized or is invalid
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsCropSession, JsValue> {
        let config: CropperConfig = if config.is_undefined() || config.is_null() {
            CropperConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid cropper config: {}", e)))?
        };
        Self::from_config(config).map_err(|e| JsValue::from_str(&e))
    }

    /// Register the callback invoked with the crop at the end of every drag.
    ///
    /// The callback receives `{ croppedAreaPercentages, croppedAreaPixels,
    /// direction }`. Exceptions it throws are logged, not propagated.
    pub fn set_listener(&mut self, callback: js_sys::Function) {
        self.inner.set_listener(move |result| {
            let value = match serde_wasm_bindgen::to_value(result) {
                Ok(value) => value,
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to serialize crop result: {}", e).into(),
                    );
                    return;
                }
            };
            if let Err(err) = callback.call1(&JsValue::NULL, &value) {
                web_sys::console::error_2(&"Crop listener threw:".into(), &err);
            }
        });
    }

    pub fn clear_listener(&mut self) {
        self.inner.clear_listener();
    }

    /// Report the media's intrinsic resolution.
    pub fn set_natural_size(&mut self, width: f64, height: f64) {
        self.inner.on_natural_size(Size::new(width, height));
    }

    /// Report a container layout pass.
    pub fn set_container_layout(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.inner
            .on_container_layout(ContainerLayout::new(x, y, width, height));
    }

    /// Report the laid-out size of the media element.
    pub fn set_media_layout(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.inner
            .on_media_layout(ContainerLayout::new(x, y, width, height));
    }

    /// Begin a drag. Returns false while the layout is still being measured.
    pub fn drag_start(&mut self) -> bool {
        self.inner.on_drag_start()
    }

    /// Cumulative pointer movement since `drag_start`.
    pub fn drag_delta(&mut self, dx: f64, dy: f64) {
        self.inner.on_drag_delta(Point::new(dx, dy));
    }

    /// Finish the drag and notify the listener.
    pub fn drag_end(&mut self) {
        self.inner.on_drag_end();
    }

    /// Apply an external zoom value. Returns the zoom actually applied.
    pub fn set_zoom(&mut self, zoom: f64) -> Option<f64> {
        self.inner.set_zoom(zoom)
    }

    /// The current crop, or `undefined` before the layout is ready.
    pub fn cropped_area(&self) -> Option<JsCropResult> {
        self.inner.cropped_area().map(JsCropResult::from_result)
    }

    #[wasm_bindgen(getter)]
    pub fn is_ready(&self) -> bool {
        self.inner.is_ready()
    }

    #[wasm_bindgen(getter)]
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging()
    }

    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> f64 {
        self.inner.zoom()
    }

    #[wasm_bindgen(getter)]
    pub fn min_zoom(&self) -> f64 {
        self.inner.scale().min_zoom()
    }

    #[wasm_bindgen(getter)]
    pub fn max_zoom(&self) -> f64 {
        self.inner.scale().max_zoom()
    }

    #[wasm_bindgen(getter)]
    pub fn translate_x(&self) -> f64 {
        self.inner.translation().x
    }

    #[wasm_bindgen(getter)]
    pub fn translate_y(&self) -> f64 {
        self.inner.translation().y
    }

    #[wasm_bindgen(getter)]
    pub fn overlay_width(&self) -> f64 {
        self.inner.overlay_size().width
    }

    #[wasm_bindgen(getter)]
    pub fn overlay_height(&self) -> f64 {
        self.inner.overlay_size().height
    }

    #[wasm_bindgen(getter)]
    pub fn media_width(&self) -> f64 {
        self.inner.media_size().width
    }

    #[wasm_bindgen(getter)]
    pub fn media_height(&self) -> f64 {
        self.inner.media_size().height
    }

    /// Dominant axis of the current or last drag: `"x"`, `"y"` or `undefined`.
    #[wasm_bindgen(getter)]
    pub fn direction(&self) -> Option<String> {
        self.inner.direction().map(|axis| axis.as_str().to_string())
    }

    /// Session state as a plain object.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.to_snapshot())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize snapshot: {}", e)))
    }
}

impl JsCropSession {
    /// Build a session from an already-parsed config.
    pub(crate) fn from_config(config: CropperConfig) -> Result<Self, String> {
        CropSession::new(config)
            .map(|inner| Self { inner })
            .map_err(|e| format!("Invalid cropper config: {}", e))
    }

    fn to_snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            ready: self.inner.is_ready(),
            dragging: self.inner.is_dragging(),
            scale: *self.inner.scale(),
            translation: self.inner.translation(),
            overlay: self.inner.overlay_size(),
            media: self.inner.media_size(),
            natural: self.inner.layout().natural_size(),
        }
    }
}
