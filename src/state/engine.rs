//! Dual clock state machine
//!
//! The engine owns both players' remaining time and decides which clock is
//! counting down. It never reads the wall clock itself: time only moves when
//! [`ChessClockEngine::tick`] is called with an elapsed delta, so a single
//! active player means a single countdown.

use tracing::{debug, info};

use crate::error::ClockError;

use super::{ClockSettings, ClockState, Player, RunState};

#[derive(Debug, Clone)]
pub struct ChessClockEngine {
    state: ClockState,
    /// Configuration for the next reset, kept apart from the match in progress
    settings: ClockSettings,
}

impl ChessClockEngine {
    pub fn new(settings: ClockSettings) -> Self {
        Self {
            state: ClockState::new(settings),
            settings,
        }
    }

    /// Set duration and increment for future resets
    ///
    /// A match in progress keeps the values it was started with.
    pub fn configure(&mut self, base_duration_ms: i64, increment_ms: i64) -> Result<(), ClockError> {
        self.settings = ClockSettings::new(base_duration_ms, increment_ms)?;
        debug!(
            "Configured base duration {}ms, increment {}ms",
            base_duration_ms, increment_ms
        );
        Ok(())
    }

    /// Put both clocks back to the configured base duration
    pub fn reset(&mut self) {
        self.state = ClockState::new(self.settings);
        info!(
            "Clocks reset to {}ms with {}ms increment",
            self.settings.base_duration_ms(),
            self.settings.increment_ms()
        );
    }

    pub fn start(&mut self, first_player: Player) -> Result<(), ClockError> {
        if self.state.run_state != RunState::NotStarted {
            return Err(self.invalid("start"));
        }
        self.state.active_player = Some(first_player);
        self.state.run_state = RunState::Running;
        info!("Match started, {} to move", first_player);
        Ok(())
    }

    /// Charge `elapsed_ms` to the active player
    ///
    /// Returns the player whose flag fell on this tick. Does nothing unless
    /// the match is running.
    pub fn tick(&mut self, elapsed_ms: u64) -> Option<Player> {
        if self.state.run_state != RunState::Running || elapsed_ms == 0 {
            return None;
        }
        let player = self.state.active_player?;
        let elapsed = i64::try_from(elapsed_ms).unwrap_or(i64::MAX);

        let remaining = self.state.remaining_mut(player);
        *remaining = remaining.saturating_sub(elapsed);
        if *remaining > 0 {
            return None;
        }

        *remaining = 0;
        self.state.run_state = RunState::Expired;
        info!("Time's up for {}", player);
        Some(player)
    }

    /// End the active player's turn
    ///
    /// The mover receives the increment and the opponent's clock starts.
    /// Returns `false` without changing anything when the match is not running.
    pub fn swap(&mut self) -> bool {
        let (RunState::Running, Some(mover)) = (self.state.run_state, self.state.active_player) else {
            debug!("Ignoring swap while the clock is {}", self.state.run_state);
            return false;
        };

        let increment = self.state.increment_ms;
        let remaining = self.state.remaining_mut(mover);
        *remaining = remaining.saturating_add(increment);
        self.state.active_player = Some(mover.other());
        debug!("{} moved, {} to move", mover, mover.other());
        true
    }

    pub fn pause(&mut self) -> Result<(), ClockError> {
        if self.state.run_state != RunState::Running {
            return Err(self.invalid("pause"));
        }
        self.state.paused_player = self.state.active_player.take();
        self.state.run_state = RunState::Paused;
        info!("Match paused");
        Ok(())
    }

    pub fn resume(&mut self) -> Result<(), ClockError> {
        if self.state.run_state != RunState::Paused {
            return Err(self.invalid("resume"));
        }
        self.state.active_player = self.state.paused_player.take();
        self.state.run_state = RunState::Running;
        info!("Match resumed");
        Ok(())
    }

    pub fn snapshot(&self) -> ClockState {
        self.state.clone()
    }

    /// Replace the whole engine state with a persisted snapshot
    ///
    /// The snapshot's match settings also become the configured settings.
    pub fn restore(&mut self, state: ClockState) -> Result<(), ClockError> {
        state.validate()?;
        self.settings = ClockSettings::new(state.base_duration_ms, state.increment_ms)?;
        debug!("Restored {} match", state.run_state);
        self.state = state;
        Ok(())
    }

    pub fn state(&self) -> &ClockState {
        &self.state
    }

    pub fn run_state(&self) -> RunState {
        self.state.run_state
    }

    pub fn active_player(&self) -> Option<Player> {
        self.state.active_player
    }

    pub fn remaining_ms(&self, player: Player) -> i64 {
        self.state.remaining_ms(player)
    }

    pub fn settings(&self) -> ClockSettings {
        self.settings
    }

    fn invalid(&self, operation: &'static str) -> ClockError {
        ClockError::InvalidTransition {
            operation,
            state: self.state.run_state,
        }
    }
}

impl Default for ChessClockEngine {
    fn default() -> Self {
        Self::new(ClockSettings::default())
    }
}
