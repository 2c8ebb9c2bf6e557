//! Desktop area: the container rectangle inside the host viewport

use serde::Serialize;

use crate::math::{Size, Vec2};

/// The desktop container's placement in viewport coordinates
///
/// Window geometry and pointer state are kept in desktop-local coordinates;
/// this converts raw viewport coordinates into that space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct DesktopArea {
    /// Top-left corner within the viewport
    pub position: Vec2,
    /// Container size (may be zero before layout)
    pub size: Size,
}

impl DesktopArea {
    /// Create an area, sanitizing degenerate host measurements
    pub fn new(position: Vec2, size: Size) -> Self {
        Self {
            position: position.finite_or_zero(),
            size: size.sanitized(),
        }
    }

    /// Convert viewport coordinates to desktop-local coordinates
    #[inline]
    pub fn to_local(&self, viewport: Vec2) -> Vec2 {
        viewport - self.position
    }
}
