//! Core geometry types for the desktop area
//!
//! All coordinates are desktop-local pixels with the origin at the
//! top-left corner of the windows container.

mod vec2;
mod rect;
mod size;
mod style;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, FRAME_STYLE};
