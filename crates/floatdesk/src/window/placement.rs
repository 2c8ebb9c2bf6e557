//! Initial window placement
//!
//! A window opens at a default size centered horizontally, one third from
//! the top. When a window of the same type is already open, the new one
//! cascades from it instead.

use crate::math::{Rect, Size, Vec2};
use crate::policy::{clamp_position, clamp_size2};
use super::WindowState;

/// Default size and position for a window on a desktop of `desktop` size
pub fn default_placement(template: &WindowState, desktop: Size) -> (Vec2, Size) {
    let height = template.init_perc.height * desktop.height;
    let width = (template.init_perc.width * desktop.width).min(template.init_ratio_xy * height);
    let size = clamp_size2(Size::new(width, height), template.min_size, template.max_size);
    (centered(template, size, desktop), size)
}

/// Placement for a new window, cascading from `reference` when present
///
/// Cascade steps try `+offset` on both axes, then right only, then down
/// only. If none fits inside the desktop, the window is centered at the
/// reference size; if that lands exactly on the reference, the full default
/// placement is derived instead.
pub fn initial_placement(
    template: &WindowState,
    reference: Option<&WindowState>,
    desktop: Size,
    offset: f32,
) -> (Vec2, Size) {
    let reference = match reference {
        Some(r) => r,
        None => return default_placement(template, desktop),
    };

    let size = clamp_size2(reference.size, template.min_size, template.max_size);
    let steps = [
        Vec2::new(offset, offset),
        Vec2::new(offset, 0.0),
        Vec2::new(0.0, offset),
    ];

    for step in steps {
        let candidate = reference.position + step;
        if Rect::from_pos_size(candidate, size).fits_within(desktop) {
            return (candidate, size);
        }
    }

    let position = centered(template, size, desktop);
    if position == reference.position {
        return default_placement(template, desktop);
    }
    (position, size)
}

fn centered(template: &WindowState, size: Size, desktop: Size) -> Vec2 {
    let requested = Vec2::new(
        (desktop.width - size.width) / 2.0,
        (desktop.height - size.height) / 3.0,
    );
    clamp_position(requested, size, desktop, template.border_over_edge)
}
