//! Input routing module
//!
//! Provides the pointer tracker, the single gesture session router and the
//! resize computation shared by all eight handles.

mod router;
mod session;
mod pointer;
mod result;

pub use router::InputRouter;
pub use session::{GestureKind, GestureSession, PointerId};
pub use pointer::{PointerState, PointerTracker, SnapZone};
pub use result::InputResult;

use crate::math::{Size, Vec2};
use crate::policy::clamp_size;
use crate::window::{AxisEdge, ResizeHandle, WindowState};

/// Calculate new position and size for a resize gesture
///
/// `start` is the window state captured on pointer-down and `delta` the
/// pointer movement since then. Axes are resized independently. A leading
/// edge (north, west) that hits a size limit keeps the opposite edge
/// anchored, so the window never drifts while the handle is dragged past
/// its minimum or maximum.
///
/// The result keeps the overscroll bounds of [`crate::clamp_position`]: a
/// leading edge stops `border_over_edge` short of the far desktop edge, and
/// a trailing edge cannot shrink a window hanging off the left until less
/// than `border_over_edge` of it remains visible.
pub fn calculate_resize(
    handle: ResizeHandle,
    start: &WindowState,
    delta: Vec2,
    desktop: Size,
) -> (Vec2, Size) {
    let mut pos = start.position;
    let mut size = start.size;
    let max = start.max_size;
    let border = start.border_over_edge;

    match handle.horizontal() {
        Some(AxisEdge::Leading) => {
            let (x, width) = resize_leading(
                start.position.x,
                start.size.width,
                delta.x,
                start.min_size.width,
                max.map(|m| m.width),
                None,
                desktop.width - border,
            );
            pos.x = x;
            size.width = width;
        }
        Some(AxisEdge::Trailing) => {
            // Off the left edge the visible strip may not drop below the border
            let visible_min = border - start.position.x;
            size.width = clamp_size(
                start.size.width + delta.x,
                start.min_size.width.max(visible_min),
                max.map(|m| m.width),
            );
        }
        None => {}
    }

    match handle.vertical() {
        Some(AxisEdge::Leading) => {
            // The top edge never goes above the desktop
            let (y, height) = resize_leading(
                start.position.y,
                start.size.height,
                delta.y,
                start.min_size.height,
                max.map(|m| m.height),
                Some(0.0),
                desktop.height - border,
            );
            pos.y = y;
            size.height = height;
        }
        Some(AxisEdge::Trailing) => {
            size.height = clamp_size(
                start.size.height + delta.y,
                start.min_size.height,
                max.map(|m| m.height),
            );
        }
        None => {}
    }

    (pos, size)
}

/// Resize one axis from its leading edge
///
/// The edge is bounded to `[min_pos, max_pos]` before the size is derived,
/// so clamping the size afterwards only moves it back toward the anchor.
/// A start already outside a bound is never pushed further out.
fn resize_leading(
    start_pos: f32,
    start_size: f32,
    delta: f32,
    min: f32,
    max: Option<f32>,
    min_pos: Option<f32>,
    max_pos: f32,
) -> (f32, f32) {
    let mut pos = (start_pos + delta).min(max_pos.max(start_pos));
    if let Some(lower) = min_pos {
        pos = pos.max(lower.min(start_pos));
    }

    let requested = start_size - (pos - start_pos);
    let size = clamp_size(requested, min, max);
    if size != requested {
        pos = start_pos + start_size - size;
    }
    (pos, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowOptions;

    const DESKTOP: Size = Size::new(1000.0, 800.0);

    fn start_state() -> WindowState {
        let mut state = WindowState::from_options(&WindowOptions {
            min_size: Size::new(200.0, 150.0),
            max_size: Some(Size::new(800.0, 600.0)),
            ..Default::default()
        });
        state.position = Vec2::new(100.0, 100.0);
        state.size = Size::new(400.0, 300.0);
        state
    }

    #[test]
    fn test_resize_south() {
        let (pos, size) = calculate_resize(ResizeHandle::S, &start_state(), Vec2::new(0.0, 50.0), DESKTOP);
        assert!((pos.x - 100.0).abs() < 0.001);
        assert!((pos.y - 100.0).abs() < 0.001);
        assert!((size.width - 400.0).abs() < 0.001);
        assert!((size.height - 350.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_north() {
        let (pos, size) = calculate_resize(ResizeHandle::N, &start_state(), Vec2::new(0.0, -50.0), DESKTOP);
        assert!((pos.y - 50.0).abs() < 0.001);
        assert!((size.height - 350.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_north_past_min_keeps_bottom_anchored() {
        let start = start_state();
        let (pos, size) = calculate_resize(ResizeHandle::N, &start, Vec2::new(0.0, 500.0), DESKTOP);
        assert!((size.height - 150.0).abs() < 0.001);
        assert!((pos.y + size.height - start.rect().bottom()).abs() < 0.001);
    }

    #[test]
    fn test_resize_west_past_max_keeps_right_anchored() {
        let start = start_state();
        let (pos, size) = calculate_resize(ResizeHandle::W, &start, Vec2::new(-5000.0, 0.0), DESKTOP);
        assert!((size.width - 800.0).abs() < 0.001);
        assert!((pos.x + size.width - start.rect().right()).abs() < 0.001);
    }

    #[test]
    fn test_resize_north_stops_at_top_edge() {
        let start = start_state();
        let (pos, size) = calculate_resize(ResizeHandle::N, &start, Vec2::new(0.0, -180.0), DESKTOP);
        assert!((pos.y - 0.0).abs() < 0.001);
        assert!((size.height - 400.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_east_clamps_without_moving() {
        let (pos, size) = calculate_resize(ResizeHandle::E, &start_state(), Vec2::new(-1000.0, 0.0), DESKTOP);
        assert!((pos.x - 100.0).abs() < 0.001);
        assert!((size.width - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_corner_drives_both_axes() {
        let (pos, size) =
            calculate_resize(ResizeHandle::NW, &start_state(), Vec2::new(-20.0, -30.0), DESKTOP);
        assert!((pos.x - 80.0).abs() < 0.001);
        assert!((pos.y - 70.0).abs() < 0.001);
        assert!((size.width - 420.0).abs() < 0.001);
        assert!((size.height - 330.0).abs() < 0.001);

        let (pos, size) =
            calculate_resize(ResizeHandle::SE, &start_state(), Vec2::new(20.0, 30.0), DESKTOP);
        assert_eq!(pos, Vec2::new(100.0, 100.0));
        assert!((size.width - 420.0).abs() < 0.001);
        assert!((size.height - 330.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_east_keeps_left_overhang_visible() {
        let mut start = start_state();
        start.min_size = Size::new(100.0, 100.0);
        start.position = Vec2::new(-360.0, 100.0);
        let (pos, size) =
            calculate_resize(ResizeHandle::E, &start, Vec2::new(-30.0, 0.0), DESKTOP);
        assert!((pos.x - (-360.0)).abs() < 0.001);
        assert!((size.width - 400.0).abs() < 0.001);
        assert!(pos.x >= -(size.width - start.border_over_edge) - 0.001);
    }

    #[test]
    fn test_resize_west_stops_short_of_right_edge() {
        let mut start = start_state();
        start.min_size = Size::new(100.0, 100.0);
        start.position = Vec2::new(900.0, 100.0);
        start.size = Size::new(800.0, 300.0);
        let (pos, size) =
            calculate_resize(ResizeHandle::W, &start, Vec2::new(95.0, 0.0), DESKTOP);
        assert!((pos.x - 960.0).abs() < 0.001);
        assert!((size.width - 740.0).abs() < 0.001);
        assert!((pos.x + size.width - start.rect().right()).abs() < 0.001);
    }

    #[test]
    fn test_resize_north_stops_short_of_bottom_edge() {
        let mut start = start_state();
        start.min_size = Size::new(100.0, 100.0);
        start.position = Vec2::new(100.0, 700.0);
        let (pos, size) =
            calculate_resize(ResizeHandle::N, &start, Vec2::new(0.0, 150.0), DESKTOP);
        assert!((pos.y - 760.0).abs() < 0.001);
        assert!((size.height - 240.0).abs() < 0.001);
    }
}
