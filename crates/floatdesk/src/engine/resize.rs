//! Desktop area changes

use tracing::debug;

use crate::area::DesktopArea;
use crate::math::{Size, Vec2};
use super::DesktopEngine;

impl DesktopEngine {
    /// Resize the desktop area and rescale every live window
    ///
    /// The old size is captured before the new one is stored so each window
    /// can scale its position from old to new.
    pub fn resize(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let old = self.area.size;
        self.area = DesktopArea::new(Vec2::new(x, y), Size::new(width, height));
        let new = self.area.size;

        if old == new {
            return;
        }
        debug!(
            old_width = old.width,
            old_height = old.height,
            width = new.width,
            height = new.height,
            windows = self.windows.count(),
            "desktop resized"
        );
        for window in self.windows.windows_mut() {
            window.desktop_size_change(old, new);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::DesktopEngine;
    use crate::math::{Rect, Vec2};
    use crate::window::{WindowOptions, WindowStatePatch};

    #[test]
    fn test_resize_rescales_all_windows() {
        let mut engine = DesktopEngine::new();
        engine.init(0.0, 0.0, 1000.0, 800.0);
        let a = engine.open("t", None, WindowOptions::default(), 0.0);
        let b = engine.open("u", None, WindowOptions::default(), 0.0);
        engine.set_window_state(a, WindowStatePatch::geometry(Rect::new(100.0, 100.0, 400.0, 300.0)));
        engine.set_window_state(b, WindowStatePatch::geometry(Rect::new(500.0, 400.0, 400.0, 300.0)));

        engine.resize(0.0, 0.0, 500.0, 400.0);

        assert_eq!(engine.window_state(a).unwrap().position, Vec2::new(50.0, 50.0));
        assert_eq!(engine.window_state(b).unwrap().position, Vec2::new(250.0, 200.0));
    }

    #[test]
    fn test_resize_to_zero_keeps_windows_finite() {
        let mut engine = DesktopEngine::new();
        engine.init(0.0, 0.0, 1000.0, 800.0);
        let id = engine.open("t", None, WindowOptions::default(), 0.0);

        engine.resize(0.0, 0.0, 0.0, f32::NAN);
        assert!(engine.window_state(id).unwrap().position.is_finite());

        engine.resize(0.0, 0.0, 1000.0, 800.0);
        assert!(engine.window_state(id).unwrap().position.is_finite());
    }
}
