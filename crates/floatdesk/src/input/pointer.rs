//! Pointer tracker: last known pointer position and snap zone

use serde::Serialize;

use crate::math::{Size, Vec2};

/// Snap zone derived from the pointer position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapZone {
    #[default]
    None,
    Left,
    Right,
    Top,
}

impl SnapZone {
    /// Classify a desktop-local pointer position
    ///
    /// Left/right take priority over top.
    pub fn classify(pos: Vec2, desktop: Size, edge_threshold: f32) -> Self {
        if pos.x <= edge_threshold {
            SnapZone::Left
        } else if pos.x >= desktop.width - edge_threshold {
            SnapZone::Right
        } else if pos.y <= 0.0 {
            SnapZone::Top
        } else {
            SnapZone::None
        }
    }
}

/// Pointer position in desktop-local coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PointerState {
    pub position: Vec2,
}

/// Tracks the shared pointer state and its snap zone
#[derive(Clone, Debug)]
pub struct PointerTracker {
    state: PointerState,
    zone: SnapZone,
    edge_threshold: f32,
}

impl PointerTracker {
    /// Create a tracker with the given snap edge threshold
    pub fn new(edge_threshold: f32) -> Self {
        Self {
            state: PointerState::default(),
            zone: SnapZone::None,
            edge_threshold,
        }
    }

    /// Store a desktop-local position, clamped into the desktop, and
    /// reclassify the snap zone
    pub fn update(&mut self, local: Vec2, desktop: Size) {
        let local = local.finite_or_zero();
        let position = Vec2::new(
            local.x.min(desktop.width).max(0.0),
            local.y.min(desktop.height).max(0.0),
        );
        self.state = PointerState { position };
        self.zone = SnapZone::classify(position, desktop, self.edge_threshold);
    }

    /// Current pointer state
    #[inline]
    pub fn state(&self) -> PointerState {
        self.state
    }

    /// Current pointer position
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.state.position
    }

    /// Current snap zone
    #[inline]
    pub fn zone(&self) -> SnapZone {
        self.zone
    }
}
