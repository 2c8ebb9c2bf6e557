//! Pointer routing and gesture sessions

use tracing::{debug, trace};

use crate::input::{GestureKind, GestureSession, InputResult, PointerId};
use crate::math::Vec2;
use crate::window::{ResizeHandle, WindowId, WindowRegion};
use super::DesktopEngine;

impl DesktopEngine {
    /// Store a viewport-space pointer position as desktop-local pointer state
    pub fn update_pointer_position(&mut self, x: f32, y: f32) {
        let local = self.area.to_local(Vec2::new(x, y));
        self.pointer.update(local, self.area.size);
    }

    /// Start a drag on a window for a host doing its own hit testing
    pub fn start_drag(&mut self, id: WindowId, pointer_id: PointerId, x: f32, y: f32) -> bool {
        if self.input.is_active() {
            return false;
        }
        self.update_pointer_position(x, y);
        self.begin_drag(id, pointer_id)
    }

    /// Start a resize on a window from a compass direction
    ///
    /// Unknown directions are ignored.
    pub fn start_resize(
        &mut self,
        id: WindowId,
        direction: &str,
        pointer_id: PointerId,
        x: f32,
        y: f32,
    ) -> bool {
        let handle = match ResizeHandle::from_direction(direction) {
            Some(h) => h,
            None => return false,
        };
        if self.input.is_active() {
            return false;
        }
        self.update_pointer_position(x, y);
        self.begin_resize(id, handle, pointer_id)
    }

    /// Handle pointer down
    ///
    /// Ignored while another gesture is active.
    pub fn handle_pointer_down(&mut self, pointer_id: PointerId, x: f32, y: f32, now_ms: f64) -> InputResult {
        if self.input.is_active() {
            return InputResult::Unhandled;
        }
        self.update_pointer_position(x, y);

        let local = self.area.to_local(Vec2::new(x, y));
        let (window_id, region) = match self.windows.region_at(local) {
            Some(hit) => hit,
            None => {
                self.lose_focus();
                return InputResult::Unhandled;
            }
        };

        match region {
            WindowRegion::CloseButton => {
                self.close(window_id, now_ms);
                InputResult::Closed { window_id }
            }
            WindowRegion::FullscreenButton => {
                self.move_to_top(window_id);
                match self.toggle_fullscreen(window_id) {
                    Some(fullscreen) => InputResult::Fullscreen { window_id, fullscreen },
                    None => InputResult::Unhandled,
                }
            }
            WindowRegion::TitleBar => {
                if self.begin_drag(window_id, pointer_id) {
                    InputResult::Gesture { window_id }
                } else {
                    InputResult::Unhandled
                }
            }
            WindowRegion::Resize(handle) => {
                if self.begin_resize(window_id, handle, pointer_id) {
                    InputResult::Gesture { window_id }
                } else {
                    InputResult::Unhandled
                }
            }
            WindowRegion::Content => self.handle_content_click(window_id, local),
        }
    }

    /// Focus the window and forward the press in window-local coordinates
    fn handle_content_click(&mut self, window_id: WindowId, local: Vec2) -> InputResult {
        self.move_to_top(window_id);
        let window = match self.windows.get(window_id) {
            Some(w) => w,
            None => return InputResult::Unhandled,
        };
        InputResult::Forward {
            window_id,
            local: local - window.window_state().position,
        }
    }

    /// Handle pointer move
    ///
    /// The pointer state is updated before the active session reads it.
    /// Moves from pointers other than the session owner are ignored.
    pub fn handle_pointer_move(&mut self, pointer_id: PointerId, x: f32, y: f32) -> InputResult {
        if !self.input.accepts(pointer_id) {
            return InputResult::Unhandled;
        }
        self.update_pointer_position(x, y);

        let session = match self.input.session() {
            Some(s) => *s,
            None => return InputResult::Unhandled,
        };
        let delta = session.delta(self.pointer.position());
        let desktop = self.area.size;

        let window = match self.windows.get_mut(session.window_id) {
            Some(w) => w,
            None => {
                self.input.end();
                self.ghost.cancel();
                return InputResult::Unhandled;
            }
        };

        match session.kind {
            GestureKind::Drag => {
                window.drag_to(&session.start_state, delta, desktop);
                self.on_dragging(&session);
            }
            GestureKind::Resize(_) => {
                window.resize_to(&session.start_state, delta, desktop);
            }
        }
        InputResult::Gesture {
            window_id: session.window_id,
        }
    }

    /// Handle pointer up from the session owner
    pub fn handle_pointer_up(&mut self, pointer_id: PointerId) -> InputResult {
        match self.input.session() {
            Some(session) if session.pointer_id == pointer_id => {
                let window_id = session.window_id;
                self.end_gesture();
                InputResult::Gesture { window_id }
            }
            _ => InputResult::Unhandled,
        }
    }

    /// Input focus lost: end any gesture so it can't stay stuck
    pub fn handle_blur(&mut self) {
        if self.input.is_active() {
            trace!("blur ends gesture");
            self.end_gesture();
        }
    }

    fn begin_drag(&mut self, id: WindowId, pointer_id: PointerId) -> bool {
        if !self.windows.move_to_top(id) {
            return false;
        }
        let start = match self.windows.get_mut(id).and_then(|w| w.begin_drag()) {
            Some(s) => s,
            None => return false,
        };
        debug!(id, pointer_id, "drag started");
        self.input
            .begin(GestureSession::drag(pointer_id, id, start, self.pointer.position()))
    }

    fn begin_resize(&mut self, id: WindowId, handle: ResizeHandle, pointer_id: PointerId) -> bool {
        if !self.windows.move_to_top(id) {
            return false;
        }
        let start = match self.windows.get_mut(id).and_then(|w| w.begin_resize(handle)) {
            Some(s) => s,
            None => return false,
        };
        debug!(id, pointer_id, handle = handle.as_str(), "resize started");
        self.input.begin(GestureSession::resize(
            pointer_id,
            id,
            handle,
            start,
            self.pointer.position(),
        ))
    }

    fn end_gesture(&mut self) {
        let session = match self.input.end() {
            Some(s) => s,
            None => return,
        };
        if let Some(window) = self.windows.get_mut(session.window_id) {
            window.end_gesture();
        }
        if session.is_drag() {
            self.on_drag_end(session.window_id);
        }
    }
}
