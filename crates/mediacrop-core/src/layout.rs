//! Measured sizes and the derived media/overlay layout.
//!
//! Measurements arrive incrementally: the media's natural size once decoding
//! finishes, the container size once the view is laid out. Each setter
//! recomputes the derived sizes when enough inputs are known and reports
//! whether anything changed, so repeated identical measurements are no-ops.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{MediaGeometry, Size};

/// A layout rectangle reported by the rendering layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerLayout {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerLayout {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    fn has_positive_size(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Which container axis the rendered media is fitted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectFit {
    /// Media width equals container width
    HorizontalCover,
    /// Media height equals container height
    VerticalCover,
}

impl ObjectFit {
    /// Classify by comparing media and container aspect ratios.
    pub fn classify(container: Size, natural: Size) -> Self {
        if natural.aspect() < container.aspect() {
            ObjectFit::HorizontalCover
        } else {
            ObjectFit::VerticalCover
        }
    }

    /// Rendered (pre-zoom) media size for this fit.
    pub fn rendered_size(self, container: Size, natural: Size) -> Size {
        let media_aspect = natural.aspect();
        match self {
            ObjectFit::HorizontalCover => {
                Size::new(container.width, container.width / media_aspect)
            }
            ObjectFit::VerticalCover => {
                Size::new(container.height * media_aspect, container.height)
            }
        }
    }
}

/// Derive the overlay from a container size and a target width:height ratio.
///
/// ```text
/// aspect_diff   = width / height
/// resize_factor = aspect_diff / ratio
/// overlay.h     = height * resize_factor
/// overlay.w     = width * (ratio / aspect_diff) * resize_factor
/// ```
pub fn overlay_for_container(container: Size, ratio: f64) -> Size {
    let aspect_diff = container.width / container.height;
    let resize_factor = aspect_diff / ratio;

    Size {
        width: container.width * (ratio / aspect_diff) * resize_factor,
        height: container.height * resize_factor,
    }
}

/// All measured and derived sizes for a cropping session.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState {
    overlay_aspect: f64,
    natural: Size,
    container: ContainerLayout,
    fitted: Size,
    measured_media: Option<ContainerLayout>,
    overlay: Size,
}

impl LayoutState {
    /// Create an empty layout for the given overlay aspect ratio.
    pub fn new(overlay_aspect: f64) -> Self {
        Self {
            overlay_aspect,
            natural: Size::default(),
            container: ContainerLayout::default(),
            fitted: Size::default(),
            measured_media: None,
            overlay: Size::default(),
        }
    }

    /// Record the media's intrinsic resolution.
    ///
    /// Returns true if the rendered media size changed as a result.
    pub fn set_natural_size(&mut self, natural: Size) -> bool {
        if self.natural == natural {
            return false;
        }
        debug!(width = natural.width, height = natural.height, "natural media size");
        self.natural = natural;
        self.refit()
    }

    /// Record a container layout pass.
    ///
    /// Measurements with a non-positive width or height are ignored. Returns
    /// true if the overlay or rendered media size changed.
    pub fn set_container(&mut self, layout: ContainerLayout) -> bool {
        if !layout.has_positive_size() {
            trace!(?layout, "ignoring container layout without area");
            return false;
        }
        if self.container == layout {
            return false;
        }
        self.container = layout;

        let overlay = overlay_for_container(layout.size(), self.overlay_aspect);
        let overlay_changed = overlay != self.overlay;
        if overlay_changed {
            debug!(width = overlay.width, height = overlay.height, "overlay resized");
            self.overlay = overlay;
        }
        let media_changed = self.refit();
        overlay_changed || media_changed
    }

    /// Record the laid-out size of the media element itself.
    ///
    /// This supersedes the object-fit result once it reports a positive size.
    /// Returns true if the effective media size changed.
    pub fn set_media_layout(&mut self, layout: ContainerLayout) -> bool {
        if !layout.has_positive_size() {
            return false;
        }
        let before = self.media_size();
        self.measured_media = Some(layout);
        self.media_size() != before
    }

    fn refit(&mut self) -> bool {
        if self.natural.width == 0.0 || self.container.width == 0.0 {
            return false;
        }
        let container = self.container.size();
        let fit = ObjectFit::classify(container, self.natural);
        let fitted = fit.rendered_size(container, self.natural);
        if fitted == self.fitted {
            return false;
        }
        debug!(?fit, width = fitted.width, height = fitted.height, "media fitted to container");
        self.fitted = fitted;
        self.measured_media.is_none()
    }

    /// Intrinsic media resolution (zero until decoded).
    pub fn natural_size(&self) -> Size {
        self.natural
    }

    pub fn container(&self) -> ContainerLayout {
        self.container
    }

    /// Object-fit size of the media inside the container.
    pub fn fitted_size(&self) -> Size {
        self.fitted
    }

    /// On-screen media size used by the geometry.
    pub fn media_size(&self) -> Size {
        match self.measured_media {
            Some(layout) => layout.size(),
            None => self.fitted,
        }
    }

    pub fn overlay_size(&self) -> Size {
        self.overlay
    }

    /// Width:height ratio of the overlay, used as the crop aspect.
    pub fn overlay_aspect(&self) -> f64 {
        self.overlay.aspect()
    }

    /// Natural, media and overlay sizes have all been measured.
    pub fn is_ready(&self) -> bool {
        self.natural.is_measured() && self.media_size().is_measured() && self.overlay.is_measured()
    }

    /// Rendered plus natural geometry for the crop computation.
    pub fn media_geometry(&self) -> MediaGeometry {
        MediaGeometry::new(self.media_size(), self.natural)
    }
}
