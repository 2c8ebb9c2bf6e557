//! Window entity: geometry, gestures and open/close lifecycle

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::DesktopConfig;
use crate::input::calculate_resize;
use crate::math::{Rect, Size, Vec2, FRAME_STYLE};
use crate::policy::{clamp_position, clamp_size2};
use crate::transition::{LifecycleTimer, TransitionKind, TransitionOutcome};
use super::{ResizeHandle, WindowId, WindowMode, WindowState, WindowStatePatch};

/// Action run once when the window is torn down
pub type CleanupAction = Box<dyn FnOnce()>;

/// Callback invoked with the window id after teardown
pub type CloseCallback = Box<dyn FnOnce(WindowId)>;

/// Opaque payload hosted inside a window (a URL, markup, a node key)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Content(pub String);

impl Content {
    /// Borrow the payload
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content(s.to_string())
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Content(s)
    }
}

/// A floating window on the desktop
pub struct Window {
    /// Unique identifier
    pub id: WindowId,
    /// Grouping tag used for cascade placement
    window_type: String,
    /// Hosted payload
    content: Option<Content>,
    /// Geometry and sizing policy
    state: WindowState,
    /// Gesture/lifecycle mode
    mode: WindowMode,
    /// Stacking index (position in the z-order)
    pub(crate) z_index: u32,
    /// Frontmost-window marker
    pub(crate) frontstage: bool,
    /// "open" visual state
    visible: bool,
    /// Pending open or close timer
    timer: Option<LifecycleTimer>,
    /// Callback for the pending close
    on_closed: Option<CloseCallback>,
    /// Registered teardown actions
    cleanup: Vec<CleanupAction>,
    /// Geometry to restore when leaving fullscreen
    restore_state: Option<WindowState>,
    open_delay_ms: f64,
    close_delay_ms: f64,
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("id", &self.id)
            .field("window_type", &self.window_type)
            .field("state", &self.state)
            .field("mode", &self.mode)
            .field("z_index", &self.z_index)
            .field("frontstage", &self.frontstage)
            .field("visible", &self.visible)
            .field("cleanup_actions", &self.cleanup.len())
            .finish_non_exhaustive()
    }
}

impl Window {
    /// Create a window with already-placed geometry
    pub fn new(id: WindowId, window_type: impl Into<String>, state: WindowState, config: &DesktopConfig) -> Self {
        Self {
            id,
            window_type: window_type.into(),
            content: None,
            state,
            mode: WindowMode::Idle,
            z_index: 0,
            frontstage: false,
            visible: false,
            timer: None,
            on_closed: None,
            cleanup: Vec::new(),
            restore_state: None,
            open_delay_ms: config.open_delay_ms,
            close_delay_ms: config.close_delay_ms,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Type tag
    #[inline]
    pub fn window_type(&self) -> &str {
        &self.window_type
    }

    /// Copy of the current geometry state
    #[inline]
    pub fn window_state(&self) -> WindowState {
        self.state
    }

    /// Bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        self.state.rect()
    }

    /// Current mode
    #[inline]
    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    /// Stacking index
    #[inline]
    pub fn z_index(&self) -> u32 {
        self.z_index
    }

    /// Whether this window carries the frontstage marker
    #[inline]
    pub fn is_frontstage(&self) -> bool {
        self.frontstage
    }

    /// Whether the "open" visual state is set
    #[inline]
    pub fn is_open(&self) -> bool {
        self.visible
    }

    /// Whether the window fills the desktop
    #[inline]
    pub fn is_fullscreen(&self) -> bool {
        self.restore_state.is_some()
    }

    /// Whether an open or close timer is pending
    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.timer.is_some()
    }

    /// Hosted payload
    #[inline]
    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    /// Replace the hosted payload
    pub fn load_content(&mut self, content: impl Into<Content>) {
        self.content = Some(content.into());
    }

    /// Register an action to run once at teardown
    pub fn add_cleanup_action(&mut self, action: impl FnOnce() + 'static) {
        self.cleanup.push(Box::new(action));
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Apply a partial state update, re-clamping everything
    ///
    /// Bounds are applied first so the new size and position are checked
    /// against them. A max below min is raised to min.
    pub fn set_window_state_and_update(&mut self, patch: WindowStatePatch, desktop: Size) {
        if let Some(min) = patch.min_size {
            self.state.min_size = min.sanitized();
        }
        if let Some(max) = patch.max_size {
            self.state.max_size = Some(max.sanitized());
        }
        self.state.max_size = self.state.max_size.map(|max| max.max(self.state.min_size));
        if let Some(border) = patch.border_over_edge {
            if border.is_finite() && border >= 0.0 {
                self.state.border_over_edge = border;
            }
        }

        let size = patch.size.unwrap_or(self.state.size);
        let position = patch.position.unwrap_or(self.state.position).finite_or_zero();
        self.apply_clamped(position, size, desktop);
    }

    /// Check that every edge lies within the desktop
    #[inline]
    pub fn is_inside_desktop_area(&self, desktop: Size) -> bool {
        self.rect().fits_within(desktop)
    }

    /// Rescale the position proportionally after the desktop changed size
    ///
    /// Windows hanging off the left edge move by the opposite of the naive
    /// scaling delta. Fullscreen windows are refit to the new desktop.
    pub fn desktop_size_change(&mut self, old: Size, new: Size) {
        if self.is_fullscreen() {
            self.fit_to(new);
            return;
        }

        let pos = self.state.position;
        let scaled = Vec2::new(
            rescale_axis(pos.x, old.width, new.width, true),
            rescale_axis(pos.y, old.height, new.height, false),
        );
        self.apply_clamped(scaled, self.state.size, new);
    }

    /// Toggle fullscreen, returning the new fullscreen flag
    pub fn toggle_fullscreen(&mut self, desktop: Size) -> bool {
        match self.restore_state.take() {
            Some(saved) => {
                self.apply_clamped(saved.position, saved.size, desktop);
                false
            }
            None => {
                self.restore_state = Some(self.state);
                self.fit_to(desktop);
                true
            }
        }
    }

    fn fit_to(&mut self, desktop: Size) {
        self.apply_clamped(Vec2::ZERO, desktop, desktop);
    }

    fn apply_clamped(&mut self, position: Vec2, size: Size, desktop: Size) {
        let size = clamp_size2(size, self.state.min_size, self.state.max_size);
        self.state.size = size;
        self.state.position = clamp_position(position, size, desktop, self.state.border_over_edge);
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Enter drag mode, returning the pre-drag snapshot
    ///
    /// Refused while closing or while another gesture is active. Leaves
    /// fullscreen without restoring the saved geometry.
    pub fn begin_drag(&mut self) -> Option<WindowState> {
        if self.mode != WindowMode::Idle {
            return None;
        }
        self.restore_state = None;
        self.mode = WindowMode::Dragging;
        Some(self.state)
    }

    /// Move to `start.position + delta`, clamped to the desktop
    pub fn drag_to(&mut self, start: &WindowState, delta: Vec2, desktop: Size) {
        if self.mode != WindowMode::Dragging {
            return;
        }
        let requested = start.position + delta;
        self.state.position =
            clamp_position(requested, self.state.size, desktop, self.state.border_over_edge);
        trace!(id = self.id, x = self.state.position.x, y = self.state.position.y, "drag");
    }

    /// Enter resize mode for a handle, returning the pre-resize snapshot
    pub fn begin_resize(&mut self, handle: ResizeHandle) -> Option<WindowState> {
        if self.mode != WindowMode::Idle {
            return None;
        }
        self.restore_state = None;
        self.mode = WindowMode::Resizing(handle);
        Some(self.state)
    }

    /// Resize from the snapshot by `delta`, keeping the overscroll bounds
    pub fn resize_to(&mut self, start: &WindowState, delta: Vec2, desktop: Size) {
        let handle = match self.mode {
            WindowMode::Resizing(handle) => handle,
            _ => return,
        };
        let (position, size) = calculate_resize(handle, start, delta, desktop);
        self.state.position = position;
        self.state.size = size;
        trace!(
            id = self.id,
            handle = handle.as_str(),
            width = size.width,
            height = size.height,
            "resize"
        );
    }

    /// Leave drag/resize mode
    pub fn end_gesture(&mut self) {
        if self.mode.is_gesture() {
            self.mode = WindowMode::Idle;
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Schedule the "open" visual state
    ///
    /// A second call replaces the pending schedule.
    pub fn open(&mut self, now_ms: f64) {
        if self.mode.is_closing() {
            return;
        }
        self.timer = Some(LifecycleTimer::open(now_ms, self.open_delay_ms));
    }

    /// Clear the "open" state and schedule teardown
    ///
    /// Returns false if the window is already closing; the callback is then
    /// dropped without being called.
    pub fn close(&mut self, now_ms: f64, on_closed: impl FnOnce(WindowId) + 'static) -> bool {
        if self.mode.is_closing() {
            return false;
        }
        self.visible = false;
        self.frontstage = false;
        self.mode = WindowMode::Closing;
        self.timer = Some(LifecycleTimer::close(now_ms, self.close_delay_ms));
        self.on_closed = Some(Box::new(on_closed));
        true
    }

    /// Fire a due timer
    pub fn tick(&mut self, now_ms: f64) -> TransitionOutcome {
        let timer = match self.timer {
            Some(timer) => timer,
            None => return TransitionOutcome::Idle,
        };
        if !timer.is_due(now_ms) {
            return TransitionOutcome::Pending;
        }

        self.timer = None;
        match timer.kind {
            TransitionKind::Open => {
                self.visible = true;
                TransitionOutcome::Opened
            }
            TransitionKind::Close => {
                self.finish_close();
                TransitionOutcome::Closed
            }
        }
    }

    fn finish_close(&mut self) {
        let actions = std::mem::take(&mut self.cleanup);
        debug!(id = self.id, actions = actions.len(), "running window cleanup");
        for action in actions {
            action();
        }
        if let Some(on_closed) = self.on_closed.take() {
            on_closed(self.id);
        }
        self.mode = WindowMode::Destroyed;
    }

    // =========================================================================
    // Chrome rectangles
    // =========================================================================

    /// Get the title bar rectangle
    pub fn title_bar_rect(&self) -> Rect {
        Rect::new(
            self.state.position.x,
            self.state.position.y,
            self.state.size.width,
            FRAME_STYLE.title_bar_height,
        )
    }

    /// Get the close button rectangle
    pub fn close_button_rect(&self) -> Rect {
        let x = self.state.position.x + self.state.size.width
            - FRAME_STYLE.button_margin
            - FRAME_STYLE.button_size;
        Rect::new(x, self.button_y(), FRAME_STYLE.button_size, FRAME_STYLE.button_size)
    }

    /// Get the fullscreen button rectangle
    pub fn fullscreen_button_rect(&self) -> Rect {
        let x = self.state.position.x + self.state.size.width
            - FRAME_STYLE.button_margin
            - FRAME_STYLE.button_size * 2.0
            - FRAME_STYLE.button_spacing;
        Rect::new(x, self.button_y(), FRAME_STYLE.button_size, FRAME_STYLE.button_size)
    }

    fn button_y(&self) -> f32 {
        self.state.position.y + (FRAME_STYLE.title_bar_height - FRAME_STYLE.button_size) / 2.0
    }
}

/// Scale one axis of a position from `old` to `new` extent
fn rescale_axis(pos: f32, old: f32, new: f32, mirror_negative: bool) -> f32 {
    if !(old > 0.0) {
        return pos;
    }
    let scaled = pos / old * new;
    let delta = scaled - pos;
    if mirror_negative && pos < 0.0 {
        pos - delta
    } else {
        pos + delta
    }
}
