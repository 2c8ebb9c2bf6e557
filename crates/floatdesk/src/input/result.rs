//! What a pointer event did to the desktop

use serde::Serialize;

use crate::math::Vec2;
use crate::window::WindowId;

/// Outcome of routing one pointer event
///
/// Serialized with a `type` tag so the host can branch on it, e.g.
/// `{"type":"forward","windowId":3,"local":{"x":12.0,"y":40.0}}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum InputResult {
    /// No window took the event
    Unhandled,
    /// A drag or resize session started, moved or ended
    Gesture { window_id: WindowId },
    /// The close button was pressed
    Closed { window_id: WindowId },
    /// The fullscreen button was pressed
    Fullscreen { window_id: WindowId, fullscreen: bool },
    /// Press on window content, in window-local coordinates
    Forward { window_id: WindowId, local: Vec2 },
}

impl InputResult {
    /// Check if a window consumed the event
    #[inline]
    pub fn is_handled(&self) -> bool {
        !matches!(self, InputResult::Unhandled)
    }

    /// Check if the press belongs to window content
    #[inline]
    pub fn is_forward(&self) -> bool {
        matches!(self, InputResult::Forward { .. })
    }

    /// Window the event was routed to
    pub fn window_id(&self) -> Option<WindowId> {
        match *self {
            InputResult::Unhandled => None,
            InputResult::Gesture { window_id }
            | InputResult::Closed { window_id }
            | InputResult::Fullscreen { window_id, .. }
            | InputResult::Forward { window_id, .. } => Some(window_id),
        }
    }
}
