//! Axis-aligned rectangle type

use serde::{Deserialize, Serialize};
use super::{Size, Vec2};

/// Axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Zero rectangle at origin
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Create a new rectangle
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create from position and size
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Size) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Get position (top-left corner)
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Get size
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    /// Check that every edge lies within `[0, bounds]` on both axes
    #[inline]
    pub fn fits_within(&self, bounds: Size) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.right() <= bounds.width
            && self.bottom() <= bounds.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(100.0, 200.0, 50.0, 30.0);
        assert!((r.right() - 150.0).abs() < 0.001);
        assert!((r.bottom() - 230.0).abs() < 0.001);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains(Vec2::new(50.0, 40.0)));
        assert!(!rect.contains(Vec2::new(5.0, 40.0)));
        assert!(!rect.contains(Vec2::new(50.0, 100.0)));
    }

    #[test]
    fn test_rect_fits_within() {
        let bounds = Size::new(1000.0, 800.0);

        assert!(Rect::new(0.0, 0.0, 1000.0, 800.0).fits_within(bounds));
        assert!(Rect::new(100.0, 100.0, 400.0, 300.0).fits_within(bounds));
        assert!(!Rect::new(-1.0, 100.0, 400.0, 300.0).fits_within(bounds));
        assert!(!Rect::new(700.0, 100.0, 400.0, 300.0).fits_within(bounds));
        assert!(!Rect::new(100.0, 600.0, 400.0, 300.0).fits_within(bounds));
    }
}
