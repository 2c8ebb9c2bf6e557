//! 2D size type for dimensions

use serde::{Deserialize, Serialize};
use super::Vec2;

/// 2D size for width and height
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert to Vec2
    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Check if size is zero or negative
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(self, other: Size) -> Self {
        Self::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Non-finite or negative dimensions become zero
    ///
    /// Hosts report zero-size containers before layout completes and
    /// occasionally NaN; everything downstream assumes `>= 0`.
    #[inline]
    pub fn sanitized(self) -> Self {
        let fix = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self::new(fix(self.width), fix(self.height))
    }
}
