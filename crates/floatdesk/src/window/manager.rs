//! Window manager for z-order, focus and hit testing

use std::collections::HashMap;
use crate::math::{Rect, Vec2, FRAME_STYLE};
use super::{ResizeHandle, Window, WindowId, WindowRegion};

/// Window manager holding the live windows and their stacking order
pub struct WindowManager {
    /// All windows by ID
    windows: HashMap<WindowId, Window>,
    /// Stacking order (frontmost at end)
    order: Vec<WindowId>,
    /// Next window ID
    next_id: WindowId,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    /// Create a new window manager
    pub fn new() -> Self {
        Self {
            windows: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
        }
    }

    /// Reserve the next window ID
    pub fn allocate_id(&mut self) -> WindowId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a window on top of the stack
    pub fn insert(&mut self, window: Window) {
        let id = window.id;
        self.windows.insert(id, window);
        self.order.retain(|&wid| wid != id);
        self.order.push(id);
        self.mark_front();
    }

    /// Remove a window from the stack
    ///
    /// Removing an absent window is a no-op.
    pub fn remove(&mut self, id: WindowId) -> Option<Window> {
        let window = self.windows.remove(&id)?;
        self.order.retain(|&wid| wid != id);
        self.restack();
        Some(window)
    }

    /// Get a window by ID
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    /// Get a mutable window by ID
    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.get_mut(&id)
    }

    /// Check if a window is live
    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    /// Bring a window to the front and give it the frontstage marker
    pub fn move_to_top(&mut self, id: WindowId) -> bool {
        if !self.windows.contains_key(&id) {
            return false;
        }
        self.order.retain(|&wid| wid != id);
        self.order.push(id);
        self.mark_front();
        true
    }

    /// Strip the frontstage marker from every window, keeping the order
    pub fn lose_focus(&mut self) {
        for window in self.windows.values_mut() {
            window.frontstage = false;
        }
    }

    /// Frontmost window, optionally restricted to a type tag
    pub fn top_window(&self, window_type: Option<&str>) -> Option<&Window> {
        self.order
            .iter()
            .rev()
            .filter_map(|id| self.windows.get(id))
            .find(|w| window_type.map_or(true, |t| w.window_type() == t))
    }

    /// Stacking order, back to front
    pub fn order(&self) -> &[WindowId] {
        &self.order
    }

    /// Get windows in z-order (back to front)
    pub fn windows_by_z(&self) -> Vec<&Window> {
        self.order.iter().filter_map(|id| self.windows.get(id)).collect()
    }

    /// Mutable access to every window in z-order
    pub fn windows_mut(&mut self) -> impl Iterator<Item = &mut Window> {
        let order = &self.order;
        let mut windows: Vec<&mut Window> = self.windows.values_mut().collect();
        windows.sort_by_key(|w| order.iter().position(|&id| id == w.id));
        windows.into_iter()
    }

    /// Get the number of windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// Find which region of which window is at a desktop-local position
    pub fn region_at(&self, pos: Vec2) -> Option<(WindowId, WindowRegion)> {
        for &id in self.order.iter().rev() {
            let window = match self.windows.get(&id) {
                Some(w) => w,
                None => continue,
            };
            if !window.rect().contains(pos) {
                continue;
            }
            return Some((id, hit_test_window(window, pos)));
        }
        None
    }

    /// Reassign stacking indices from positions in the order
    fn restack(&mut self) {
        for (index, id) in self.order.iter().enumerate() {
            if let Some(window) = self.windows.get_mut(id) {
                window.z_index = index as u32;
            }
        }
    }

    fn mark_front(&mut self) {
        self.restack();
        let top = self.order.last().copied();
        for window in self.windows.values_mut() {
            window.frontstage = Some(window.id) == top;
        }
    }
}

// =============================================================================
// Hit testing helper functions
// =============================================================================

/// Hit test a window known to contain `pos`
fn hit_test_window(window: &Window, pos: Vec2) -> WindowRegion {
    // Buttons first (highest priority)
    if let Some(region) = hit_test_buttons(window, pos) {
        return region;
    }

    // Corners before the title bar to allow corner grabs
    if let Some(handle) = hit_test_resize_corners(window.rect(), pos) {
        return WindowRegion::Resize(handle);
    }

    if window.title_bar_rect().contains(pos) {
        return WindowRegion::TitleBar;
    }

    if let Some(handle) = hit_test_resize_edges(window.rect(), pos) {
        return WindowRegion::Resize(handle);
    }

    WindowRegion::Content
}

fn hit_test_buttons(window: &Window, pos: Vec2) -> Option<WindowRegion> {
    if window.close_button_rect().contains(pos) {
        return Some(WindowRegion::CloseButton);
    }
    if window.fullscreen_button_rect().contains(pos) {
        return Some(WindowRegion::FullscreenButton);
    }
    None
}

fn hit_test_resize_corners(rect: Rect, pos: Vec2) -> Option<ResizeHandle> {
    let corner = FRAME_STYLE.corner_handle_size;

    let in_left = pos.x < rect.x + corner;
    let in_right = pos.x > rect.right() - corner;
    let in_top = pos.y < rect.y + corner;
    let in_bottom = pos.y > rect.bottom() - corner;

    match (in_top, in_bottom, in_left, in_right) {
        (true, _, true, _) => Some(ResizeHandle::NW),
        (true, _, _, true) => Some(ResizeHandle::NE),
        (_, true, true, _) => Some(ResizeHandle::SW),
        (_, true, _, true) => Some(ResizeHandle::SE),
        _ => None,
    }
}

fn hit_test_resize_edges(rect: Rect, pos: Vec2) -> Option<ResizeHandle> {
    let edge = FRAME_STYLE.resize_handle_size;

    if pos.y < rect.y + edge {
        return Some(ResizeHandle::N);
    }
    if pos.y > rect.bottom() - edge {
        return Some(ResizeHandle::S);
    }
    if pos.x < rect.x + edge {
        return Some(ResizeHandle::W);
    }
    if pos.x > rect.right() - edge {
        return Some(ResizeHandle::E);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DesktopConfig;
    use crate::math::Size;
    use crate::window::{WindowOptions, WindowState};

    fn create(wm: &mut WindowManager, window_type: &str, pos: Vec2) -> WindowId {
        let id = wm.allocate_id();
        let mut state = WindowState::from_options(&WindowOptions::default());
        state.position = pos;
        state.size = Size::new(800.0, 600.0);
        wm.insert(Window::new(id, window_type, state, &DesktopConfig::default()));
        id
    }

    #[test]
    fn test_window_insert() {
        let mut wm = WindowManager::new();
        let id = create(&mut wm, "test", Vec2::new(100.0, 100.0));

        assert!(wm.get(id).is_some());
        assert_eq!(wm.count(), 1);
        assert!(wm.get(id).unwrap().is_frontstage());
    }

    #[test]
    fn test_move_to_top_reorders() {
        let mut wm = WindowManager::new();
        let a = create(&mut wm, "t", Vec2::ZERO);
        let b = create(&mut wm, "t", Vec2::ZERO);
        let c = create(&mut wm, "t", Vec2::ZERO);

        assert!(wm.move_to_top(a));
        assert_eq!(wm.order(), &[b, c, a]);
        assert_eq!(wm.get(a).unwrap().z_index(), 2);
        assert_eq!(wm.get(b).unwrap().z_index(), 0);
        assert!(wm.get(a).unwrap().is_frontstage());
        assert!(!wm.get(b).unwrap().is_frontstage());
        assert!(!wm.get(c).unwrap().is_frontstage());

        assert!(!wm.move_to_top(999));
    }

    #[test]
    fn test_lose_focus_keeps_order() {
        let mut wm = WindowManager::new();
        let a = create(&mut wm, "t", Vec2::ZERO);
        let b = create(&mut wm, "t", Vec2::ZERO);

        wm.lose_focus();
        assert_eq!(wm.order(), &[a, b]);
        assert!(wm.windows_by_z().iter().all(|w| !w.is_frontstage()));
    }

    #[test]
    fn test_remove_restacks() {
        let mut wm = WindowManager::new();
        let a = create(&mut wm, "t", Vec2::ZERO);
        let b = create(&mut wm, "t", Vec2::ZERO);
        let c = create(&mut wm, "t", Vec2::ZERO);

        assert!(wm.remove(a).is_some());
        assert!(wm.remove(a).is_none());
        assert_eq!(wm.order(), &[b, c]);
        assert_eq!(wm.get(b).unwrap().z_index(), 0);
        assert_eq!(wm.get(c).unwrap().z_index(), 1);
    }

    #[test]
    fn test_top_window_by_type() {
        let mut wm = WindowManager::new();
        let term = create(&mut wm, "terminal", Vec2::ZERO);
        let browser = create(&mut wm, "browser", Vec2::ZERO);

        assert_eq!(wm.top_window(None).map(|w| w.id), Some(browser));
        assert_eq!(wm.top_window(Some("terminal")).map(|w| w.id), Some(term));
        assert!(wm.top_window(Some("editor")).is_none());
    }

    #[test]
    fn test_windows_mut_in_z_order() {
        let mut wm = WindowManager::new();
        let a = create(&mut wm, "t", Vec2::ZERO);
        let b = create(&mut wm, "t", Vec2::ZERO);
        wm.move_to_top(a);

        let ids: Vec<WindowId> = wm.windows_mut().map(|w| w.id).collect();
        assert_eq!(ids, vec![b, a]);
    }

    #[test]
    fn test_hit_testing() {
        let mut wm = WindowManager::new();
        let id = create(&mut wm, "test", Vec2::new(100.0, 100.0));

        // Point in title bar
        let (hit_id, region) = wm.region_at(Vec2::new(200.0, 116.0)).unwrap();
        assert_eq!(hit_id, id);
        assert_eq!(region, WindowRegion::TitleBar);

        // Point in content
        let (_, region) = wm.region_at(Vec2::new(500.0, 400.0)).unwrap();
        assert_eq!(region, WindowRegion::Content);

        // Corners and edges
        let (_, region) = wm.region_at(Vec2::new(102.0, 102.0)).unwrap();
        assert_eq!(region, WindowRegion::Resize(ResizeHandle::NW));
        let (_, region) = wm.region_at(Vec2::new(895.0, 695.0)).unwrap();
        assert_eq!(region, WindowRegion::Resize(ResizeHandle::SE));
        let (_, region) = wm.region_at(Vec2::new(500.0, 698.0)).unwrap();
        assert_eq!(region, WindowRegion::Resize(ResizeHandle::S));
        let (_, region) = wm.region_at(Vec2::new(102.0, 400.0)).unwrap();
        assert_eq!(region, WindowRegion::Resize(ResizeHandle::W));

        // Buttons
        let close = wm.get(id).unwrap().close_button_rect();
        let (_, region) = wm.region_at(Vec2::new(close.x + 2.0, close.y + 2.0)).unwrap();
        assert_eq!(region, WindowRegion::CloseButton);

        // Point outside
        assert!(wm.region_at(Vec2::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn test_hit_testing_prefers_front_window() {
        let mut wm = WindowManager::new();
        let _back = create(&mut wm, "t", Vec2::new(100.0, 100.0));
        let front = create(&mut wm, "t", Vec2::new(300.0, 300.0));

        let (hit_id, _) = wm.region_at(Vec2::new(500.0, 500.0)).unwrap();
        assert_eq!(hit_id, front);
    }
}
