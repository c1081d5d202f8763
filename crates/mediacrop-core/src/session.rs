//! Interactive cropping session.
//!
//! A [`CropSession`] owns the layout, scale and translation state of one
//! editing session and drives them from three input streams:
//!
//! - measurement events (natural size, container layout, media layout)
//! - drag events (start, cumulative delta, end)
//! - an external zoom value
//!
//! Drag input is ignored until the layout is ready (natural, media and overlay
//! sizes measured), which keeps every zero-sized denominator out of the
//! geometry kernel.
//!
//! # Example
//!
//! ```ignore
//! let mut session = CropSession::new(CropperConfig::default())?;
//! session.set_listener(|result| println!("{:?}", result.cropped_area_pixels));
//! session.on_natural_size(Size::new(1920.0, 1080.0));
//! session.on_container_layout(ContainerLayout::new(0.0, 0.0, 300.0, 500.0));
//!
//! session.on_drag_start();
//! session.on_drag_delta(Point::new(24.0, 0.0));
//! session.on_drag_end(); // listener fires
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::config::{ConfigError, CropperConfig};
use crate::geometry::{restrict_position, rotate_size};
use crate::layout::{ContainerLayout, LayoutState};
use crate::pan::{PanBounds, PanController};
use crate::reporter::report_cropped_area;
use crate::scale::{InitialScaleResolver, ScaleState, TranslateState};
use crate::{CropResult, DragAxis, Point, Size};

/// Receiver for discrete drag signals and the cumulative delta stream.
///
/// Decouples gesture recognition from the session, so any toolkit that can
/// report drags can drive a cropper.
pub trait DragHandler {
    /// A drag began. Returns false if the handler ignored it.
    fn on_drag_start(&mut self) -> bool;

    /// Cumulative translation since the drag started.
    fn on_drag_delta(&mut self, delta: Point);

    /// The drag finished.
    fn on_drag_end(&mut self);
}

/// Callback receiving the crop result at the end of every drag.
pub type CropListener = Box<dyn FnMut(&CropResult)>;

pub struct CropSession {
    config: CropperConfig,
    layout: LayoutState,
    scale: ScaleState,
    translate: TranslateState,
    resolver: InitialScaleResolver,
    pan: PanController,
    listener: Option<CropListener>,
}

impl fmt::Debug for CropSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CropSession")
            .field("config", &self.config)
            .field("layout", &self.layout)
            .field("scale", &self.scale)
            .field("translate", &self.translate)
            .field("pan", &self.pan)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl CropSession {
    /// Create an empty session. Fails if the configuration is unusable.
    pub fn new(config: CropperConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            layout: LayoutState::new(config.overlay_aspect),
            scale: ScaleState::new(config.max_zoom_factor),
            translate: TranslateState::default(),
            resolver: InitialScaleResolver::new(),
            pan: PanController::new(),
            listener: None,
            config,
        })
    }

    /// Register the callback invoked on drag end, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl FnMut(&CropResult) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn config(&self) -> &CropperConfig {
        &self.config
    }

    pub fn layout(&self) -> &LayoutState {
        &self.layout
    }

    pub fn scale(&self) -> &ScaleState {
        &self.scale
    }

    pub fn zoom(&self) -> f64 {
        self.scale.zoom()
    }

    pub fn translation(&self) -> Point {
        self.translate.position
    }

    pub fn overlay_size(&self) -> Size {
        self.layout.overlay_size()
    }

    pub fn media_size(&self) -> Size {
        self.layout.media_size()
    }

    pub fn direction(&self) -> Option<DragAxis> {
        self.pan.direction()
    }

    pub fn is_dragging(&self) -> bool {
        self.pan.is_dragging()
    }

    /// All sizes needed by the geometry have been measured.
    pub fn is_ready(&self) -> bool {
        self.layout.is_ready()
    }

    /// Media decoding reported its intrinsic resolution.
    pub fn on_natural_size(&mut self, natural: Size) {
        if self.layout.set_natural_size(natural) {
            self.relayout();
        }
    }

    /// The container view was laid out.
    pub fn on_container_layout(&mut self, layout: ContainerLayout) {
        if self.layout.set_container(layout) {
            self.relayout();
        }
    }

    /// The media element itself was laid out.
    pub fn on_media_layout(&mut self, layout: ContainerLayout) {
        if self.layout.set_media_layout(layout) {
            self.relayout();
        }
    }

    fn relayout(&mut self) {
        // The floor must cover the overlay with the rotated bounding box
        let media = self.layout.media_size();
        let rotated = rotate_size(media.width, media.height, self.config.rotation);
        let reseeded = self
            .resolver
            .resolve(self.layout.overlay_size(), rotated, &mut self.scale);
        if reseeded {
            self.restrict_translation();
        }
    }

    fn bounds(&self) -> PanBounds {
        PanBounds {
            media: self.layout.media_size(),
            crop: self.layout.overlay_size(),
            zoom: self.scale.zoom(),
            rotation: self.config.rotation,
        }
    }

    fn restrict_translation(&mut self) {
        if !self.is_ready() {
            return;
        }
        let bounds = self.bounds();
        self.translate.position = restrict_position(
            self.translate.position,
            bounds.media,
            bounds.crop,
            bounds.zoom,
            bounds.rotation,
        );
    }

    /// Apply an external zoom value, clamped to the allowed range.
    ///
    /// Returns the zoom applied, or `None` before the layout is ready.
    pub fn set_zoom(&mut self, zoom: f64) -> Option<f64> {
        if !self.is_ready() || !zoom.is_finite() {
            return None;
        }
        let applied = self.scale.set_zoom(zoom);
        self.restrict_translation();
        trace!(requested = zoom, applied, "zoom");
        Some(applied)
    }

    /// Current crop, or `None` before the layout is ready.
    pub fn cropped_area(&self) -> Option<CropResult> {
        if !self.is_ready() {
            return None;
        }
        Some(report_cropped_area(
            &self.layout,
            &self.scale,
            &self.translate,
            self.config.rotation,
        ))
    }

    fn deliver(&mut self, direction: Option<DragAxis>) {
        let Some(result) = self.cropped_area() else {
            return;
        };
        let result = result.with_direction(direction);
        debug!(
            x = result.cropped_area_pixels.x,
            y = result.cropped_area_pixels.y,
            width = result.cropped_area_pixels.width,
            height = result.cropped_area_pixels.height,
            "crop area changed"
        );
        if let Some(listener) = self.listener.as_mut() {
            listener(&result);
        }
    }
}

impl DragHandler for CropSession {
    fn on_drag_start(&mut self) -> bool {
        if !self.is_ready() {
            debug!("drag ignored until layout is measured");
            return false;
        }
        self.pan.start(&self.translate);
        true
    }

    fn on_drag_delta(&mut self, delta: Point) {
        let bounds = self.bounds();
        self.pan.update(delta, &mut self.translate, &bounds);
    }

    fn on_drag_end(&mut self) {
        if let Some(direction) = self.pan.end() {
            self.deliver(direction);
        }
    }
}
