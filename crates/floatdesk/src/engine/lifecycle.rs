//! Deferred open/close timers

use tracing::debug;

use crate::transition::TransitionOutcome;
use crate::window::WindowId;
use super::DesktopEngine;

impl DesktopEngine {
    /// Fire due open/close timers
    ///
    /// Returns true if any window changed visual state. Windows whose close
    /// delay elapsed run their cleanup, are dropped, and their ids are queued
    /// for [`DesktopEngine::take_detached`].
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let mut changed = false;

        for window in self.windows.windows_mut() {
            if window.tick(now_ms) == TransitionOutcome::Opened {
                changed = true;
            }
        }

        let mut still_closing = Vec::with_capacity(self.closing.len());
        for mut window in self.closing.drain(..) {
            match window.tick(now_ms) {
                TransitionOutcome::Closed => {
                    debug!(id = window.id, "window detached");
                    self.detached.push(window.id);
                    changed = true;
                }
                _ => still_closing.push(window),
            }
        }
        self.closing = still_closing;

        changed
    }

    /// Check if any open or close timer is pending
    pub fn has_pending_transitions(&self) -> bool {
        !self.closing.is_empty() || self.windows.windows_by_z().iter().any(|w| w.is_transitioning())
    }

    /// Ids of windows torn down since the last call
    pub fn take_detached(&mut self) -> Vec<WindowId> {
        std::mem::take(&mut self.detached)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::engine::DesktopEngine;
    use crate::window::WindowOptions;

    #[test]
    fn test_open_becomes_visible_after_delay() {
        let mut engine = DesktopEngine::new();
        engine.init(0.0, 0.0, 1200.0, 800.0);
        let id = engine.open("t", None, WindowOptions::default(), 1000.0);

        assert!(!engine.window(id).unwrap().is_open());
        assert!(engine.has_pending_transitions());
        assert!(!engine.tick(1050.0));
        assert!(engine.tick(1100.0));
        assert!(engine.window(id).unwrap().is_open());
        assert!(!engine.has_pending_transitions());
    }

    #[test]
    fn test_close_detaches_after_delay() {
        let mut engine = DesktopEngine::new();
        engine.init(0.0, 0.0, 1200.0, 800.0);
        let id = engine.open("t", None, WindowOptions::default(), 0.0);
        engine.tick(100.0);

        let cleaned = Rc::new(Cell::new(0));
        let c = cleaned.clone();
        engine.add_cleanup_action(id, move || c.set(c.get() + 1));
        let closed = Rc::new(Cell::new(None));
        let cl = closed.clone();
        engine.close_with(id, 200.0, move |wid| cl.set(Some(wid)));

        assert!(!engine.tick(300.0));
        assert!(engine.take_detached().is_empty());
        assert!(engine.tick(450.0));

        assert_eq!(cleaned.get(), 1);
        assert_eq!(closed.get(), Some(id));
        assert_eq!(engine.take_detached(), vec![id]);
        assert!(engine.take_detached().is_empty());
        assert!(!engine.has_pending_transitions());
    }
}
