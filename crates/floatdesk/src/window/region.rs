//! Window regions for hit testing and resize handles

use serde::{Deserialize, Serialize};

/// One of the eight resize handles around a window
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

/// Which edge of an axis a handle drags
///
/// `Leading` edges (north, west) move the position along with the size;
/// `Trailing` edges (south, east) change only the size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisEdge {
    Leading,
    Trailing,
}

impl ResizeHandle {
    /// All handles, edges first
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::N,
        ResizeHandle::S,
        ResizeHandle::E,
        ResizeHandle::W,
        ResizeHandle::NE,
        ResizeHandle::NW,
        ResizeHandle::SE,
        ResizeHandle::SW,
    ];

    /// Parse a compass direction (`"n"`, `"se"`, ...)
    pub fn from_direction(direction: &str) -> Option<Self> {
        match direction {
            "n" => Some(ResizeHandle::N),
            "s" => Some(ResizeHandle::S),
            "e" => Some(ResizeHandle::E),
            "w" => Some(ResizeHandle::W),
            "ne" => Some(ResizeHandle::NE),
            "nw" => Some(ResizeHandle::NW),
            "se" => Some(ResizeHandle::SE),
            "sw" => Some(ResizeHandle::SW),
            _ => None,
        }
    }

    /// Compass direction string
    pub fn as_str(&self) -> &'static str {
        match self {
            ResizeHandle::N => "n",
            ResizeHandle::S => "s",
            ResizeHandle::E => "e",
            ResizeHandle::W => "w",
            ResizeHandle::NE => "ne",
            ResizeHandle::NW => "nw",
            ResizeHandle::SE => "se",
            ResizeHandle::SW => "sw",
        }
    }

    /// Edge driven on the X axis, if any
    #[inline]
    pub fn horizontal(&self) -> Option<AxisEdge> {
        match self {
            ResizeHandle::W | ResizeHandle::NW | ResizeHandle::SW => Some(AxisEdge::Leading),
            ResizeHandle::E | ResizeHandle::NE | ResizeHandle::SE => Some(AxisEdge::Trailing),
            ResizeHandle::N | ResizeHandle::S => None,
        }
    }

    /// Edge driven on the Y axis, if any
    #[inline]
    pub fn vertical(&self) -> Option<AxisEdge> {
        match self {
            ResizeHandle::N | ResizeHandle::NE | ResizeHandle::NW => Some(AxisEdge::Leading),
            ResizeHandle::S | ResizeHandle::SE | ResizeHandle::SW => Some(AxisEdge::Trailing),
            ResizeHandle::E | ResizeHandle::W => None,
        }
    }

    /// Check if this is a corner handle
    #[inline]
    pub fn is_corner(&self) -> bool {
        self.horizontal().is_some() && self.vertical().is_some()
    }
}

/// Region of a window for hit testing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    /// Title bar area (drag handle)
    TitleBar,
    /// Content area
    Content,
    /// Close button
    CloseButton,
    /// Fullscreen toggle button
    FullscreenButton,
    /// Edge or corner resize handle
    Resize(ResizeHandle),
}

impl WindowRegion {
    /// Check if this is a resize region
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, WindowRegion::Resize(_))
    }

    /// Get CSS cursor style for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            WindowRegion::TitleBar => "move",
            WindowRegion::Content => "default",
            WindowRegion::CloseButton | WindowRegion::FullscreenButton => "pointer",
            WindowRegion::Resize(ResizeHandle::N | ResizeHandle::S) => "ns-resize",
            WindowRegion::Resize(ResizeHandle::E | ResizeHandle::W) => "ew-resize",
            WindowRegion::Resize(ResizeHandle::NE | ResizeHandle::SW) => "nesw-resize",
            WindowRegion::Resize(ResizeHandle::NW | ResizeHandle::SE) => "nwse-resize",
        }
    }
}
