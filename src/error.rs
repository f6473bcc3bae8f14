//! Error types for the clock engine and the application state

use thiserror::Error;

use crate::state::RunState;

/// Errors raised by [`crate::state::ChessClockEngine`] operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("invalid clock configuration: {0}")]
    InvalidConfig(String),

    #[error("cannot {operation} while the clock is {state}")]
    InvalidTransition {
        operation: &'static str,
        state: RunState,
    },

    #[error("corrupt clock state: {0}")]
    CorruptState(String),
}

/// Errors raised by [`crate::state::AppState`] commands
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Clock(#[from] ClockError),

    #[error("failed to lock {0}")]
    Lock(&'static str),
}
