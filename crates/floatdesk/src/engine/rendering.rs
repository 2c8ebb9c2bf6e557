//! View projections applied by the host each frame

use serde::Serialize;

use crate::math::Rect;
use crate::window::{Window, WindowId};
use super::DesktopEngine;

/// What the host needs to position and style one window
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowView {
    pub id: WindowId,
    pub window_type: String,
    pub rect: Rect,
    pub z_index: u32,
    /// Frontmost-window marker
    pub frontstage: bool,
    /// "open" visual state
    pub open: bool,
    /// A drag or resize is in progress
    pub moving: bool,
    pub fullscreen: bool,
    /// Playing the exit transition
    pub closing: bool,
}

/// Snap preview overlay
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GhostView {
    pub visible: bool,
    pub rect: Rect,
}

impl DesktopEngine {
    /// Views for every window, live windows in z-order followed by windows
    /// still playing their close transition
    pub fn window_views(&self) -> Vec<WindowView> {
        self.windows
            .windows_by_z()
            .into_iter()
            .chain(self.closing.iter())
            .map(window_view)
            .collect()
    }

    /// View of the snap preview overlay
    pub fn ghost_view(&self) -> GhostView {
        GhostView {
            visible: self.ghost.is_visible(),
            rect: self.ghost.preview(),
        }
    }
}

fn window_view(w: &Window) -> WindowView {
    WindowView {
        id: w.id,
        window_type: w.window_type().to_string(),
        rect: w.rect(),
        z_index: w.z_index(),
        frontstage: w.is_frontstage(),
        open: w.is_open(),
        moving: w.mode().is_gesture(),
        fullscreen: w.is_fullscreen(),
        closing: w.mode().is_closing(),
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::DesktopEngine;
    use crate::window::WindowOptions;

    #[test]
    fn test_window_views_in_z_order() {
        let mut engine = DesktopEngine::new();
        engine.init(0.0, 0.0, 1200.0, 800.0);
        let a = engine.open("a", None, WindowOptions::default(), 0.0);
        let b = engine.open("b", None, WindowOptions::default(), 0.0);
        engine.move_to_top(a);

        let views = engine.window_views();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].id, b);
        assert_eq!(views[1].id, a);
        assert_eq!(views[1].z_index, 1);
        assert!(views[1].frontstage);
        assert!(!views[0].frontstage);
    }

    #[test]
    fn test_closing_window_stays_in_views_until_detached() {
        let mut engine = DesktopEngine::new();
        engine.init(0.0, 0.0, 1200.0, 800.0);
        let id = engine.open("a", None, WindowOptions::default(), 0.0);
        engine.close(id, 0.0);

        let views = engine.window_views();
        assert_eq!(views.len(), 1);
        assert!(views[0].closing);
        assert!(!views[0].open);

        engine.tick(1000.0);
        assert!(engine.window_views().is_empty());
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let mut engine = DesktopEngine::new();
        engine.init(0.0, 0.0, 1200.0, 800.0);
        engine.open("term", None, WindowOptions::default(), 0.0);

        let json = serde_json::to_string(&engine.window_views()).unwrap();
        assert!(json.contains("\"windowType\":\"term\""));
        assert!(json.contains("\"zIndex\":0"));

        let ghost = serde_json::to_string(&engine.ghost_view()).unwrap();
        assert!(ghost.contains("\"visible\":false"));
    }
}
