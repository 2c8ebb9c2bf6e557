//! Desktop engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `windows`: Window lifecycle, z-order and state operations
//! - `input`: Pointer routing and gesture sessions
//! - `snap`: Ghost preview negotiation during drags
//! - `resize`: Desktop area changes and proportional rescaling
//! - `lifecycle`: Deferred open/close timers
//! - `rendering`: View projections for the host

mod windows;
mod input;
mod snap;
mod resize;
mod lifecycle;
mod rendering;

use crate::area::DesktopArea;
use crate::config::DesktopConfig;
use crate::input::{InputRouter, PointerState, PointerTracker, SnapZone};
use crate::math::{Size, Vec2};
use crate::snap::GhostSnap;
use crate::window::{Window, WindowId, WindowManager};

pub use rendering::{GhostView, WindowView};

/// Desktop engine coordinating all desktop components
///
/// This is the main entry point for desktop operations, managing:
/// - Window manager (live windows, focus, z-order)
/// - Pointer tracker (shared pointer state and snap zone)
/// - Input router (the single active gesture session)
/// - Ghost snap preview
/// - Windows playing their close transition
pub struct DesktopEngine {
    /// Presentation constants
    pub config: DesktopConfig,
    /// Desktop container placement
    pub(crate) area: DesktopArea,
    /// Window manager
    pub windows: WindowManager,
    /// Shared pointer state
    pub(crate) pointer: PointerTracker,
    /// Input router
    pub input: InputRouter,
    /// Snap preview
    pub(crate) ghost: GhostSnap,
    /// Windows removed from the order, waiting for teardown
    pub(crate) closing: Vec<Window>,
    /// Ids of windows torn down since the last `take_detached`
    pub(crate) detached: Vec<WindowId>,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopEngine {
    /// Create a new desktop engine with default configuration
    pub fn new() -> Self {
        Self::with_config(DesktopConfig::default())
    }

    /// Create a new desktop engine
    pub fn with_config(config: DesktopConfig) -> Self {
        Self {
            config,
            area: DesktopArea::default(),
            windows: WindowManager::new(),
            pointer: PointerTracker::new(config.snap_edge_threshold),
            input: InputRouter::new(),
            ghost: GhostSnap::new(),
            closing: Vec::new(),
            detached: Vec::new(),
        }
    }

    /// Initialize the desktop area without rescaling windows
    pub fn init(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.area = DesktopArea::new(Vec2::new(x, y), Size::new(width, height));
    }

    /// Desktop area size
    #[inline]
    pub fn desktop_area_size(&self) -> Size {
        self.area.size
    }

    /// Desktop area offset within the viewport
    #[inline]
    pub fn desktop_area_position(&self) -> Vec2 {
        self.area.position
    }

    /// Last known pointer state (desktop-local)
    #[inline]
    pub fn pointer_state(&self) -> PointerState {
        self.pointer.state()
    }

    /// Current snap zone
    #[inline]
    pub fn snap_zone(&self) -> SnapZone {
        self.pointer.zone()
    }

    /// Snap preview state
    #[inline]
    pub fn ghost(&self) -> &GhostSnap {
        &self.ghost
    }
}
