//! State management module
//! 
//! This module contains the clock engine and the structures built around it.

pub mod app_state;
pub mod clock_state;
pub mod clock_view;
pub mod engine;
pub mod preferences;
pub mod session;
pub mod settings;

// Re-export main types
pub use app_state::AppState;
pub use clock_state::{ClockState, Player, RunState};
pub use clock_view::{ClockView, TIME_UP_LABEL};
pub use engine::ChessClockEngine;
pub use preferences::Preferences;
pub use session::ClockSession;
pub use settings::ClockSettings;
