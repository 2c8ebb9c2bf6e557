//! Window lifecycle and operations

use tracing::debug;

use crate::window::placement::initial_placement;
use crate::window::{Content, Window, WindowId, WindowOptions, WindowState, WindowStatePatch};
use super::DesktopEngine;

impl DesktopEngine {
    /// Open a window of `window_type`, placing it by cascade from the
    /// frontmost window of the same type
    ///
    /// The window joins the top of the stack at once; it becomes visible
    /// after the open delay.
    pub fn open(
        &mut self,
        window_type: &str,
        content: Option<Content>,
        options: WindowOptions,
        now_ms: f64,
    ) -> WindowId {
        let mut state = WindowState::from_options(&options.normalized());
        let reference = self.windows.top_window(Some(window_type)).map(|w| w.window_state());
        let (position, size) = initial_placement(
            &state,
            reference.as_ref(),
            self.area.size,
            self.config.cascade_offset,
        );
        state.position = position;
        state.size = size;

        let id = self.windows.allocate_id();
        let mut window = Window::new(id, window_type, state, &self.config);
        if let Some(content) = content {
            window.load_content(content);
        }
        window.open(now_ms);
        self.windows.insert(window);

        debug!(
            id,
            window_type,
            x = position.x,
            y = position.y,
            width = size.width,
            height = size.height,
            cascaded = reference.is_some(),
            "window opened"
        );
        id
    }

    /// Close a window
    ///
    /// Closing an unknown or already-closing window is a no-op.
    pub fn close(&mut self, id: WindowId, now_ms: f64) -> bool {
        self.close_with(id, now_ms, |_| {})
    }

    /// Close a window, invoking `on_closed` once after teardown
    pub fn close_with(
        &mut self,
        id: WindowId,
        now_ms: f64,
        on_closed: impl FnOnce(WindowId) + 'static,
    ) -> bool {
        let mut window = match self.windows.remove(id) {
            Some(w) => w,
            None => return false,
        };

        if self.input.session().map(|s| s.window_id) == Some(id) {
            self.input.end();
        }
        if self.ghost.target() == Some(id) {
            self.ghost.cancel();
        }

        window.close(now_ms, on_closed);
        debug!(id, "window closing");
        self.closing.push(window);
        true
    }

    /// Frontmost window, optionally restricted to a type
    pub fn get_top_window(&self, window_type: Option<&str>) -> Option<&Window> {
        self.windows.top_window(window_type)
    }

    /// Bring a window to the front
    pub fn move_to_top(&mut self, id: WindowId) -> bool {
        self.windows.move_to_top(id)
    }

    /// Clear the frontstage marker from every window
    pub fn lose_focus(&mut self) {
        self.windows.lose_focus();
    }

    /// Get a live window
    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(id)
    }

    /// Copy of a live window's state
    pub fn window_state(&self, id: WindowId) -> Option<WindowState> {
        self.windows.get(id).map(|w| w.window_state())
    }

    /// Apply a partial state update to a window, re-clamped to the desktop
    pub fn set_window_state(&mut self, id: WindowId, patch: WindowStatePatch) -> bool {
        let desktop = self.area.size;
        match self.windows.get_mut(id) {
            Some(window) => {
                window.set_window_state_and_update(patch, desktop);
                true
            }
            None => false,
        }
    }

    /// Replace a window's content payload
    pub fn load_content(&mut self, id: WindowId, content: impl Into<Content>) -> bool {
        match self.windows.get_mut(id) {
            Some(window) => {
                window.load_content(content);
                true
            }
            None => false,
        }
    }

    /// Register a teardown action on a window
    pub fn add_cleanup_action(&mut self, id: WindowId, action: impl FnOnce() + 'static) -> bool {
        match self.windows.get_mut(id) {
            Some(window) => {
                window.add_cleanup_action(action);
                true
            }
            None => false,
        }
    }

    /// Toggle fullscreen on a window, returning the new flag
    pub fn toggle_fullscreen(&mut self, id: WindowId) -> Option<bool> {
        let desktop = self.area.size;
        let window = self.windows.get_mut(id)?;
        let fullscreen = window.toggle_fullscreen(desktop);
        debug!(id, fullscreen, "fullscreen toggled");
        Some(fullscreen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Rect, Size, Vec2};

    fn engine() -> DesktopEngine {
        let mut engine = DesktopEngine::new();
        engine.init(0.0, 0.0, 1200.0, 800.0);
        engine
    }

    #[test]
    fn test_open_default_placement() {
        let mut engine = engine();
        let id = engine.open("terminal", None, WindowOptions::default(), 0.0);

        let s = engine.window_state(id).unwrap();
        assert!((s.size.width - 906.6667).abs() < 0.01);
        assert!((s.size.height - 680.0).abs() < 0.001);
        assert!((s.position.x - 146.6667).abs() < 0.01);
        assert!((s.position.y - 40.0).abs() < 0.001);
        assert!(engine.window(id).unwrap().is_frontstage());
    }

    #[test]
    fn test_open_cascades_same_type_only() {
        let mut engine = engine();
        let options = WindowOptions {
            init_perc: Size::new(0.5, 0.5),
            ..Default::default()
        };
        let a = engine.open("terminal", None, options, 0.0);
        let _other = engine.open("browser", None, WindowOptions::default(), 0.0);
        let b = engine.open("terminal", None, options, 0.0);

        let pa = engine.window_state(a).unwrap().position;
        let pb = engine.window_state(b).unwrap().position;
        assert!((pb.x - (pa.x + 20.0)).abs() < 0.001);
        assert!((pb.y - (pa.y + 20.0)).abs() < 0.001);
    }

    #[test]
    fn test_open_with_content() {
        let mut engine = engine();
        let id = engine.open("viewer", Some(Content::from("about:blank")), WindowOptions::default(), 0.0);
        assert_eq!(engine.window(id).unwrap().content(), Some(&Content::from("about:blank")));
        assert!(engine.load_content(id, "https://example.org/"));
        assert!(!engine.load_content(999, "x"));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut engine = engine();
        let id = engine.open("t", None, WindowOptions::default(), 0.0);

        assert!(engine.close(id, 10.0));
        assert!(!engine.close(id, 20.0));
        assert!(engine.window(id).is_none());
        assert!(engine.get_top_window(None).is_none());
    }

    #[test]
    fn test_set_window_state_clamps() {
        let mut engine = engine();
        let id = engine.open("t", None, WindowOptions::default(), 0.0);

        assert!(engine.set_window_state(
            id,
            WindowStatePatch::geometry(Rect::new(5000.0, -50.0, 10.0, 10.0))
        ));
        let s = engine.window_state(id).unwrap();
        assert_eq!(s.size, Size::new(300.0, 200.0));
        assert_eq!(s.position, Vec2::new(1160.0, 0.0));
        assert!(!engine.set_window_state(42, WindowStatePatch::default()));
    }

    #[test]
    fn test_toggle_fullscreen() {
        let mut engine = engine();
        let id = engine.open("t", None, WindowOptions::default(), 0.0);
        let before = engine.window(id).unwrap().rect();

        assert_eq!(engine.toggle_fullscreen(id), Some(true));
        assert_eq!(engine.window(id).unwrap().rect(), Rect::new(0.0, 0.0, 1200.0, 800.0));
        assert_eq!(engine.toggle_fullscreen(id), Some(false));
        assert_eq!(engine.window(id).unwrap().rect(), before);
        assert_eq!(engine.toggle_fullscreen(99), None);
    }
}
