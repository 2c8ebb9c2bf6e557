//! Input router holding the single active gesture session

use super::{GestureSession, PointerId};

/// Input router managing the active gesture
///
/// Only one session exists at a time. While one is active, pointer
/// events from any other pointer are ignored.
pub struct InputRouter {
    session: Option<GestureSession>,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Get the active session
    #[inline]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Check if a gesture is in progress
    #[inline]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Whether events from `pointer_id` should reach the session
    ///
    /// True when idle (any pointer may start a gesture) or when the pointer
    /// owns the active session.
    #[inline]
    pub fn accepts(&self, pointer_id: PointerId) -> bool {
        match &self.session {
            Some(session) => session.pointer_id == pointer_id,
            None => true,
        }
    }

    /// Begin a session; refused while another is active
    pub fn begin(&mut self, session: GestureSession) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(session);
        true
    }

    /// End the current session, returning it
    pub fn end(&mut self) -> Option<GestureSession> {
        self.session.take()
    }
}
