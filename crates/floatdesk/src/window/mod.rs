//! Window module
//!
//! Provides the per-window geometry state machine, initial placement,
//! and the z-ordered collection with hit testing.

#[allow(clippy::module_inception)]
mod window;
mod options;
mod region;
mod state;
mod manager;
pub mod placement;

pub use window::{CleanupAction, CloseCallback, Content, Window};
pub use options::WindowOptions;
pub use region::{AxisEdge, ResizeHandle, WindowRegion};
pub use state::{WindowMode, WindowState, WindowStatePatch};
pub use manager::WindowManager;

/// Unique window identifier
pub type WindowId = u64;
