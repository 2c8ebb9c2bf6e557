//! Ghost preview negotiation during drags

use tracing::debug;

use crate::input::GestureSession;
use crate::window::{WindowId, WindowStatePatch};
use super::DesktopEngine;

impl DesktopEngine {
    /// Refresh the snap preview for a drag in progress
    pub(crate) fn on_dragging(&mut self, session: &GestureSession) {
        self.ghost.on_dragging(
            session.window_id,
            &session.start_state,
            self.pointer.zone(),
            self.area.size,
        );
    }

    /// Commit the armed snap candidate, if any, to the dragged window
    pub(crate) fn on_drag_end(&mut self, window_id: WindowId) {
        let rect = match self.ghost.on_drag_end(window_id) {
            Some(r) => r,
            None => return,
        };
        let desktop = self.area.size;
        if let Some(window) = self.windows.get_mut(window_id) {
            window.set_window_state_and_update(WindowStatePatch::geometry(rect), desktop);
            debug!(
                window_id,
                x = rect.x,
                y = rect.y,
                width = rect.width,
                height = rect.height,
                "snap committed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::DesktopEngine;
    use crate::math::{Rect, Size};
    use crate::window::{WindowOptions, WindowStatePatch};

    fn setup(min_width: f32) -> (DesktopEngine, u64) {
        let mut engine = DesktopEngine::new();
        engine.init(0.0, 0.0, 1200.0, 800.0);
        let options = WindowOptions {
            min_size: Size::new(min_width, 200.0),
            ..Default::default()
        };
        let id = engine.open("t", None, options, 0.0);
        engine.set_window_state(
            id,
            WindowStatePatch::geometry(Rect::new(300.0, 200.0, min_width.max(400.0), 300.0)),
        );
        (engine, id)
    }

    #[test]
    fn test_drag_to_left_edge_snaps_half() {
        let (mut engine, id) = setup(300.0);
        engine.handle_pointer_down(0, 400.0, 210.0, 0.0);
        engine.handle_pointer_move(0, 5.0, 300.0);
        assert!(engine.ghost().is_visible());

        engine.handle_pointer_up(0);
        assert_eq!(engine.window(id).unwrap().rect(), Rect::new(0.0, 0.0, 600.0, 800.0));
        assert!(!engine.ghost().is_visible());
    }

    #[test]
    fn test_wide_window_snaps_full() {
        let (mut engine, id) = setup(700.0);
        engine.handle_pointer_down(0, 400.0, 210.0, 0.0);
        engine.handle_pointer_move(0, 5.0, 300.0);
        engine.handle_pointer_up(0);

        assert_eq!(engine.window(id).unwrap().rect(), Rect::new(0.0, 0.0, 1200.0, 800.0));
    }

    #[test]
    fn test_leaving_zone_cancels_snap() {
        let (mut engine, id) = setup(300.0);
        engine.handle_pointer_down(0, 400.0, 210.0, 0.0);
        engine.handle_pointer_move(0, 1195.0, 300.0);
        engine.handle_pointer_move(0, 600.0, 300.0);
        assert_eq!(engine.ghost().preview(), Rect::new(300.0, 200.0, 400.0, 300.0));
        engine.handle_pointer_up(0);

        let rect = engine.window(id).unwrap().rect();
        assert!((rect.x - 500.0).abs() < 0.001);
        assert!((rect.y - 290.0).abs() < 0.001);
        assert!((rect.width - 400.0).abs() < 0.001);
    }

    #[test]
    fn test_blur_commits_armed_snap() {
        let (mut engine, id) = setup(300.0);
        engine.handle_pointer_down(0, 400.0, 210.0, 0.0);
        engine.handle_pointer_move(0, 600.0, 0.0);
        engine.handle_blur();

        assert_eq!(engine.window(id).unwrap().rect(), Rect::new(0.0, 0.0, 1200.0, 800.0));
    }
}
