//! Gesture session snapshot

use crate::math::Vec2;
use crate::window::{ResizeHandle, WindowId, WindowState};

/// Identifier of a pointer (mouse = 0, touches use their identifier)
pub type PointerId = u32;

/// What the active gesture does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    /// Moving a window by its title bar
    Drag,
    /// Resizing a window from an edge or corner
    Resize(ResizeHandle),
}

/// A drag or resize gesture, created on pointer-down and dropped on release
///
/// Holds value copies of the window state and pointer position at
/// pointer-down; every move is computed against these snapshots.
#[derive(Clone, Copy, Debug)]
pub struct GestureSession {
    /// Pointer that owns the gesture
    pub pointer_id: PointerId,
    /// Window being manipulated
    pub window_id: WindowId,
    /// Drag or resize
    pub kind: GestureKind,
    /// Window state at pointer-down
    pub start_state: WindowState,
    /// Pointer position at pointer-down (desktop-local)
    pub start_pointer: Vec2,
}

impl GestureSession {
    /// Start a drag session
    pub fn drag(pointer_id: PointerId, window_id: WindowId, start_state: WindowState, start_pointer: Vec2) -> Self {
        Self {
            pointer_id,
            window_id,
            kind: GestureKind::Drag,
            start_state,
            start_pointer,
        }
    }

    /// Start a resize session
    pub fn resize(
        pointer_id: PointerId,
        window_id: WindowId,
        handle: ResizeHandle,
        start_state: WindowState,
        start_pointer: Vec2,
    ) -> Self {
        Self {
            pointer_id,
            window_id,
            kind: GestureKind::Resize(handle),
            start_state,
            start_pointer,
        }
    }

    /// Check if this is a drag session
    #[inline]
    pub fn is_drag(&self) -> bool {
        matches!(self.kind, GestureKind::Drag)
    }

    /// Pointer movement since pointer-down
    #[inline]
    pub fn delta(&self, pointer: Vec2) -> Vec2 {
        pointer - self.start_pointer
    }
}
