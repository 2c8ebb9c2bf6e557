//! Deferred open/close transitions
//!
//! Windows do not track animation progress; they only wait a fixed delay
//! so the stylesheet transition can play before the state flips.

mod lifecycle;

pub use lifecycle::{LifecycleTimer, TransitionKind, TransitionOutcome};
