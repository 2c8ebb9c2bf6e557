//! Ghost preview state and snap-target negotiation

use tracing::debug;

use crate::input::SnapZone;
use crate::math::{Rect, Size};
use crate::window::{WindowId, WindowState};
use super::candidate_for;

/// Snap preview owned by the desktop
///
/// Tracks at most one target window. The preview rect is kept while hidden
/// so the host can animate the overlay out from where it was.
#[derive(Clone, Debug, Default)]
pub struct GhostSnap {
    target: Option<WindowId>,
    candidate: Option<Rect>,
    preview: Rect,
    visible: bool,
}

impl GhostSnap {
    /// Create a hidden ghost
    pub fn new() -> Self {
        Self::default()
    }

    /// Window currently negotiating a snap
    #[inline]
    pub fn target(&self) -> Option<WindowId> {
        self.target
    }

    /// Geometry that would be committed on release
    #[inline]
    pub fn candidate(&self) -> Option<Rect> {
        self.candidate
    }

    /// Preview overlay rect
    #[inline]
    pub fn preview(&self) -> Rect {
        self.preview
    }

    /// Whether the overlay is shown
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Update the preview for a drag in progress
    ///
    /// `start` is the window state at pointer-down; the preview collapses to
    /// it when the pointer leaves every zone.
    pub fn on_dragging(&mut self, window_id: WindowId, start: &WindowState, zone: SnapZone, area: Size) {
        match self.target {
            Some(target) if target != window_id => return,
            _ => self.target = Some(window_id),
        }

        if zone == SnapZone::None {
            if self.candidate.take().is_some() {
                self.preview = start.rect();
                self.visible = false;
            }
            return;
        }

        match candidate_for(zone, area, start.min_size) {
            Some(rect) => {
                if self.candidate != Some(rect) {
                    debug!(window_id, ?zone, "snap candidate");
                }
                self.candidate = Some(rect);
                self.preview = rect;
                self.visible = true;
            }
            None => {
                self.candidate = None;
                self.visible = false;
            }
        }
    }

    /// Finish the drag, returning the geometry to commit if a candidate is armed
    pub fn on_drag_end(&mut self, window_id: WindowId) -> Option<Rect> {
        if self.target != Some(window_id) {
            return None;
        }
        self.target = None;
        self.visible = false;
        self.candidate.take()
    }

    /// Hide the preview and forget the target without committing
    pub fn cancel(&mut self) {
        self.target = None;
        self.candidate = None;
        self.visible = false;
    }
}
