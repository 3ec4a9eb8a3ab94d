//! Pointer position and the "actively moving" debounce.
//!
//! Every pointer event re-arms a 1 s deadline; the pointer counts as active
//! until the deadline passes. Time is supplied by the caller as a monotonic
//! offset, so the state machine can be driven from frame timestamps.

use std::time::Duration;

use glam::DVec2;

/// Pointer silence after which the pointer is considered idle.
pub const POINTER_IDLE_AFTER: Duration = Duration::from_millis(1000);

/// Debounce state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerState {
    Idle,
    /// Active until `deadline`, exclusive.
    Active { deadline: Duration },
}

/// Last known pointer position plus its debounce state.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    position: DVec2,
    state: PointerState,
}

impl PointerTracker {
    /// Starts idle at `position`.
    pub fn new(position: DVec2) -> Self {
        Self {
            position,
            state: PointerState::Idle,
        }
    }

    /// Records a pointer event; supersedes any pending deadline.
    pub fn on_move(&mut self, position: DVec2, now: Duration) {
        self.position = position;
        self.state = PointerState::Active {
            deadline: now + POINTER_IDLE_AFTER,
        };
    }

    /// Expires the deadline if it has passed and reports whether the pointer
    /// is still active.
    pub fn advance(&mut self, now: Duration) -> bool {
        if let PointerState::Active { deadline } = self.state {
            if now >= deadline {
                self.state = PointerState::Idle;
            }
        }
        self.is_active()
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, PointerState::Active { .. })
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }
}
