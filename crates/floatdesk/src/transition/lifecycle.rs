//! Open/close timer state

/// What a pending timer does when it fires
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionKind {
    /// Make the window visible
    Open,
    /// Tear the window down
    Close,
}

/// A single pending deferred transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LifecycleTimer {
    /// What happens when the timer fires
    pub kind: TransitionKind,
    /// Scheduling time (ms timestamp)
    pub start_ms: f64,
    /// Time at which the timer fires (ms timestamp)
    pub due_ms: f64,
}

impl LifecycleTimer {
    /// Schedule the open transition
    pub fn open(now_ms: f64, delay_ms: f64) -> Self {
        Self {
            kind: TransitionKind::Open,
            start_ms: now_ms,
            due_ms: now_ms + delay_ms.max(0.0),
        }
    }

    /// Schedule the close teardown
    pub fn close(now_ms: f64, delay_ms: f64) -> Self {
        Self {
            kind: TransitionKind::Close,
            start_ms: now_ms,
            due_ms: now_ms + delay_ms.max(0.0),
        }
    }

    /// Check if the timer should fire
    #[inline]
    pub fn is_due(&self, now_ms: f64) -> bool {
        now_ms >= self.due_ms
    }
}

/// Result of ticking a window's lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// Nothing scheduled
    Idle,
    /// A timer is scheduled but not yet due
    Pending,
    /// The open timer fired; the window is now visible
    Opened,
    /// The close timer fired; cleanup ran and the window is destroyed
    Closed,
}
