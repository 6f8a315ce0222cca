//! Per-method generation lifecycle.
//!
//! ```text
//! Declared ─► Validated ─► Resolving ─► Resolved ─► Rendered
//!    │                        │
//!    └─► Rejected             └─► ResolutionFailed
//! ```
//!
//! `Rejected`, `ResolutionFailed` and `Rendered` are terminal. Transitions
//! only move forward, so no state is ever revisited.

use std::fmt;

/// Where a delegating method is in the pipeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum MethodState {
    #[default]
    Declared,
    Validated,
    Resolving,
    Resolved,
    Rendered,
    /// Failed validation.
    Rejected,
    /// No delegate found.
    ResolutionFailed,
}

impl MethodState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            MethodState::Rendered | MethodState::Rejected | MethodState::ResolutionFailed
        )
    }

    /// Check if `self → to` is a legal transition.
    pub fn can_advance_to(self, to: MethodState) -> bool {
        matches!(
            (self, to),
            (MethodState::Declared, MethodState::Validated | MethodState::Rejected)
                | (MethodState::Validated, MethodState::Resolving)
                | (
                    MethodState::Resolving,
                    MethodState::Resolved | MethodState::ResolutionFailed
                )
                | (MethodState::Resolved, MethodState::Rendered)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MethodState::Declared => "declared",
            MethodState::Validated => "validated",
            MethodState::Resolving => "resolving",
            MethodState::Resolved => "resolved",
            MethodState::Rendered => "rendered",
            MethodState::Rejected => "rejected",
            MethodState::ResolutionFailed => "resolution failed",
        }
    }
}

impl fmt::Display for MethodState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An illegal lifecycle transition. Always an internal error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("illegal method state transition: {from} -> {to}")]
pub struct TransitionError {
    pub from: MethodState,
    pub to: MethodState,
}

/// Tracks one delegating method through the pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lifecycle {
    state: MethodState,
}

impl Lifecycle {
    pub fn new() -> Self {
        Lifecycle::default()
    }

    pub fn state(&self) -> MethodState {
        self.state
    }

    /// Move to `to`, or report the illegal transition and stay put.
    pub fn advance(&mut self, to: MethodState) -> Result<(), TransitionError> {
        if !self.state.can_advance_to(to) {
            return Err(TransitionError {
                from: self.state,
                to,
            });
        }
        tracing::trace!(from = %self.state, %to, "method state transition");
        self.state = to;
        Ok(())
    }
}
