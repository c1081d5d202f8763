//! Drag handling that keeps the zoomed media covering the overlay.
//!
//! The controller is a two-state machine:
//!
//! ```text
//! Idle --start--> Dragging { origin } --end--> Idle
//! ```
//!
//! Deltas are cumulative since drag start. Each one produces a candidate
//! position `origin + delta` which is restricted and written straight into the
//! translation state. There is no queue: a later delta simply supersedes an
//! earlier one.

use tracing::trace;

use crate::geometry::restrict_position;
use crate::scale::TranslateState;
use crate::{DragAxis, Point, Size};

/// Phase of the drag gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum PanPhase {
    #[default]
    Idle,
    /// Translation captured at drag start
    Dragging { origin: Point },
}

/// Everything the restriction needs besides the candidate position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanBounds {
    pub media: Size,
    pub crop: Size,
    pub zoom: f64,
    pub rotation: f64,
}

/// Drag state machine with dominant-axis classification.
#[derive(Debug, Clone, Default)]
pub struct PanController {
    phase: PanPhase,
    direction: Option<DragAxis>,
}

impl PanController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> PanPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, PanPhase::Dragging { .. })
    }

    /// Dominant axis of the current or most recent drag.
    pub fn direction(&self) -> Option<DragAxis> {
        self.direction
    }

    /// Begin a drag from the current translation.
    pub fn start(&mut self, translate: &TranslateState) {
        self.phase = PanPhase::Dragging {
            origin: translate.position,
        };
        self.direction = None;
    }

    /// Apply a cumulative drag delta.
    ///
    /// Returns the restricted position written into `translate`, or `None`
    /// when no drag is in progress.
    pub fn update(
        &mut self,
        delta: Point,
        translate: &mut TranslateState,
        bounds: &PanBounds,
    ) -> Option<Point> {
        let PanPhase::Dragging { origin } = self.phase else {
            return None;
        };

        let requested = Point::new(origin.x + delta.x, origin.y + delta.y);
        let restricted = restrict_position(
            requested,
            bounds.media,
            bounds.crop,
            bounds.zoom,
            bounds.rotation,
        );

        let previous = translate.position;
        let moved_x = restricted.x != previous.x;
        let moved_y = restricted.y != previous.y;
        match (moved_x, moved_y) {
            (true, false) => self.direction = Some(DragAxis::X),
            (false, true) => self.direction = Some(DragAxis::Y),
            // Diagonal or fully clamped: keep the last classification
            _ => {}
        }

        trace!(x = restricted.x, y = restricted.y, direction = ?self.direction, "pan");
        translate.position = restricted;
        Some(restricted)
    }

    /// Finish the drag.
    ///
    /// Returns the drag direction if a drag was in progress.
    pub fn end(&mut self) -> Option<Option<DragAxis>> {
        if !self.is_dragging() {
            return None;
        }
        self.phase = PanPhase::Idle;
        Some(self.direction)
    }
}
