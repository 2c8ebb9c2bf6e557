//! Floating window engine for browser desktops
//!
//! This crate provides the window-state and gesture-coordination core of a
//! web desktop:
//! - Geometry policy (size and position clamping)
//! - Window placement, drag, eight-handle resize and fullscreen
//! - Z-order with a frontstage marker
//! - Shared pointer state with edge snap zones and a ghost preview
//! - Deferred open/close lifecycle with cleanup actions
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Rect`, `Size`)
//! - [`policy`]: Size and position clamping
//! - [`window`]: Window entity, placement and the z-ordered manager
//! - [`input`]: Pointer tracker, gesture sessions and resize computation
//! - [`snap`]: Snap candidates and the ghost preview
//! - [`transition`]: Open/close timers
//! - [`config`]: Desktop configuration
//!
//! ## Example
//!
//! ```rust
//! use floatdesk::{DesktopEngine, WindowOptions};
//!
//! let mut engine = DesktopEngine::new();
//! engine.init(0.0, 0.0, 1200.0, 800.0);
//!
//! let id = engine.open("terminal", None, WindowOptions::default(), 0.0);
//! engine.tick(100.0);
//! assert!(engine.window(id).unwrap().is_open());
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Time Abstraction**: Timers take the current time as an argument
//! 3. **Pull Rendering**: The host reads view projections; the core never touches the DOM

pub mod math;
pub mod policy;
pub mod window;
pub mod input;
pub mod snap;
pub mod transition;
pub mod config;
pub mod error;

mod area;
mod engine;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod console;
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{Rect, Size, Vec2, FRAME_STYLE, FrameStyle};
pub use policy::{clamp_position, clamp_size, clamp_size2};
pub use window::{
    Content, ResizeHandle, Window, WindowId, WindowManager, WindowMode, WindowOptions,
    WindowRegion, WindowState, WindowStatePatch,
};
pub use input::{InputResult, InputRouter, PointerId, PointerState, SnapZone};
pub use snap::GhostSnap;
pub use transition::TransitionOutcome;
pub use config::DesktopConfig;
pub use error::ConfigError;

pub use area::DesktopArea;
pub use engine::{DesktopEngine, GhostView, WindowView};
