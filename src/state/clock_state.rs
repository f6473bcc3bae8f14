//! Clock state record shared by the engine, persistence and rendering

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ClockError;

use super::ClockSettings;

/// One of the two players at the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    /// The player sitting across the board
    pub fn other(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Player1 => f.write_str("player 1"),
            Player::Player2 => f.write_str("player 2"),
        }
    }
}

/// Lifecycle stage of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RunState {
    NotStarted,
    Running,
    Paused,
    Expired,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RunState::NotStarted => "not started",
            RunState::Running => "running",
            RunState::Paused => "paused",
            RunState::Expired => "expired",
        };
        f.write_str(label)
    }
}

/// Complete state of both clocks, in the layout it is persisted with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockState {
    pub player1_remaining_ms: i64,
    pub player2_remaining_ms: i64,
    /// Player whose clock is counting down, or the flagged player once expired
    pub active_player: Option<Player>,
    pub run_state: RunState,
    pub base_duration_ms: i64,
    pub increment_ms: i64,
    /// Player to hand the clock back to on resume
    #[serde(default)]
    pub paused_player: Option<Player>,
}

impl ClockState {
    /// Fresh, not yet started match using the given settings
    pub fn new(settings: ClockSettings) -> Self {
        Self {
            player1_remaining_ms: settings.base_duration_ms(),
            player2_remaining_ms: settings.base_duration_ms(),
            active_player: None,
            run_state: RunState::NotStarted,
            base_duration_ms: settings.base_duration_ms(),
            increment_ms: settings.increment_ms(),
            paused_player: None,
        }
    }

    pub fn remaining_ms(&self, player: Player) -> i64 {
        match player {
            Player::Player1 => self.player1_remaining_ms,
            Player::Player2 => self.player2_remaining_ms,
        }
    }

    pub(crate) fn remaining_mut(&mut self, player: Player) -> &mut i64 {
        match player {
            Player::Player1 => &mut self.player1_remaining_ms,
            Player::Player2 => &mut self.player2_remaining_ms,
        }
    }

    /// Sum of both players' remaining time
    pub fn total_remaining_ms(&self) -> i64 {
        self.player1_remaining_ms.saturating_add(self.player2_remaining_ms)
    }

    /// Check that the record describes a state the engine could have produced
    pub fn validate(&self) -> Result<(), ClockError> {
        let corrupt = |reason: String| Err(ClockError::CorruptState(reason));

        if self.base_duration_ms <= 0 {
            return corrupt(format!("base duration {}ms is not positive", self.base_duration_ms));
        }
        if self.increment_ms < 0 {
            return corrupt(format!("increment {}ms is negative", self.increment_ms));
        }
        if self.player1_remaining_ms < 0 || self.player2_remaining_ms < 0 {
            return corrupt("remaining time is negative".to_string());
        }

        match (self.run_state, self.active_player, self.paused_player) {
            (RunState::NotStarted, None, None) => Ok(()),
            (RunState::Running, Some(player), None) | (RunState::Paused, None, Some(player)) => {
                if self.remaining_ms(player) == 0 {
                    corrupt(format!("{} has no time left but the match is {}", player, self.run_state))
                } else {
                    Ok(())
                }
            }
            (RunState::Expired, Some(player), None) => {
                if self.remaining_ms(player) == 0 {
                    Ok(())
                } else {
                    corrupt(format!("match expired but {} still has time", player))
                }
            }
            (state, active, paused) => corrupt(format!(
                "{} match with active player {:?} and paused player {:?}",
                state, active, paused
            )),
        }
    }
}

impl Default for ClockState {
    fn default() -> Self {
        Self::new(ClockSettings::default())
    }
}
