//! Coffeehouse - A two-player chess clock
//! 
//! This library provides the dual clock state machine with Fischer increment,
//! pause/resume, and snapshot/restore, plus the tasks and console that drive
//! it from a terminal.

pub mod config;
pub mod console;
pub mod error;
pub mod persistence;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ClockError};
pub use state::{AppState, ChessClockEngine, ClockSettings, ClockState, Player, RunState};
pub use utils::{format_clock, shutdown_signal};
