//! Window geometry state and gesture mode

use serde::{Deserialize, Serialize};

use crate::math::{Rect, Size, Vec2};
use super::{ResizeHandle, WindowOptions};

/// Geometry and sizing policy of one window
///
/// Copied by value into gesture sessions; never shared by reference
/// across gesture boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowState {
    /// Top-left corner in desktop-local coordinates
    pub position: Vec2,
    /// Current size
    pub size: Size,
    /// Minimum size (never violated)
    pub min_size: Size,
    /// Maximum size (None = unbounded)
    pub max_size: Option<Size>,
    /// Initial-size fractions of the desktop
    pub init_perc: Size,
    /// Width:height cap for the initial size
    #[serde(rename = "initRatioXY")]
    pub init_ratio_xy: f32,
    /// Overscroll allowance past the left, right and bottom edges
    pub border_over_edge: f32,
}

impl WindowState {
    /// Build a state with zero geometry from (already normalized) options
    pub fn from_options(options: &WindowOptions) -> Self {
        Self {
            position: Vec2::ZERO,
            size: options.min_size,
            min_size: options.min_size,
            max_size: options.max_size,
            init_perc: options.init_perc,
            init_ratio_xy: options.init_ratio_xy,
            border_over_edge: options.border_over_edge,
        }
    }

    /// Bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }
}

/// Partial update for [`WindowState`]
///
/// Unset fields are left untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WindowStatePatch {
    pub position: Option<Vec2>,
    pub size: Option<Size>,
    pub min_size: Option<Size>,
    pub max_size: Option<Size>,
    pub border_over_edge: Option<f32>,
}

impl WindowStatePatch {
    /// Patch setting position and size together
    pub fn geometry(rect: Rect) -> Self {
        Self {
            position: Some(rect.position()),
            size: Some(rect.size()),
            ..Default::default()
        }
    }
}

/// Gesture and lifecycle mode of a window
///
/// At most one mode is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "handle", rename_all = "lowercase")]
pub enum WindowMode {
    #[default]
    Idle,
    Dragging,
    Resizing(ResizeHandle),
    Closing,
    Destroyed,
}

impl WindowMode {
    /// A drag or resize gesture is in progress
    #[inline]
    pub fn is_gesture(&self) -> bool {
        matches!(self, WindowMode::Dragging | WindowMode::Resizing(_))
    }

    /// The window has been asked to close
    #[inline]
    pub fn is_closing(&self) -> bool {
        matches!(self, WindowMode::Closing | WindowMode::Destroyed)
    }
}
