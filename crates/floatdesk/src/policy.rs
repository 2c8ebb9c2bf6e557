//! Geometry policy: size and position clamping
//!
//! Pure functions shared by every window operation. They are total over
//! finite input and never produce NaN for NaN input (`f32::max`/`f32::min`
//! return the non-NaN operand).

use crate::math::{Size, Vec2};

/// Clamp one axis of a requested size to `[min, max]`
///
/// With `max` set, `max` wins when the bounds disagree; callers keep
/// `min <= max` through [`crate::WindowOptions::normalized`].
#[inline]
pub fn clamp_size(requested: f32, min: f32, max: Option<f32>) -> f32 {
    let lower = requested.max(min);
    match max {
        Some(max) => lower.min(max),
        None => lower,
    }
}

/// Per-axis [`clamp_size`]
#[inline]
pub fn clamp_size2(requested: Size, min: Size, max: Option<Size>) -> Size {
    Size::new(
        clamp_size(requested.width, min.width, max.map(|m| m.width)),
        clamp_size(requested.height, min.height, max.map(|m| m.height)),
    )
}

/// Clamp a requested top-left position to the desktop
///
/// A window may hang off the left, right and bottom edges by all but
/// `border_over_edge` pixels. The top edge never allows overscroll. On a
/// degenerate desktop where the lower bound exceeds the upper one, the lower
/// bound wins so the title bar stays reachable.
pub fn clamp_position(requested: Vec2, size: Size, desktop: Size, border_over_edge: f32) -> Vec2 {
    let min_x = -(size.width - border_over_edge);
    let max_x = desktop.width - border_over_edge;
    let min_y = 0.0;
    let max_y = desktop.height - border_over_edge;

    Vec2::new(
        requested.x.min(max_x).max(min_x),
        requested.y.min(max_y).max(min_y),
    )
}
