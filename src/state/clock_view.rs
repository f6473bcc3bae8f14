//! Render-ready view of both clocks, published on every state change

use crate::utils::format_clock;

use super::{ClockState, Player, RunState};

/// Label shown instead of the countdown once a player's flag falls
pub const TIME_UP_LABEL: &str = "Time's up";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockView {
    pub player1: String,
    pub player2: String,
    pub run_state: RunState,
    pub active_player: Option<Player>,
    pub dark_mode: bool,
}

impl ClockView {
    pub fn new(state: &ClockState, dark_mode: bool) -> Self {
        let face = |player: Player| {
            if state.run_state == RunState::Expired && state.active_player == Some(player) {
                TIME_UP_LABEL.to_string()
            } else {
                format_clock(state.remaining_ms(player))
            }
        };

        Self {
            player1: face(Player::Player1),
            player2: face(Player::Player2),
            run_state: state.run_state,
            active_player: state.active_player,
            dark_mode,
        }
    }

    pub fn face(&self, player: Player) -> &str {
        match player {
            Player::Player1 => &self.player1,
            Player::Player2 => &self.player2,
        }
    }

    /// Short status badge for one player's side of the clock
    pub fn badge(&self, player: Player) -> &'static str {
        match (self.run_state, self.active_player == Some(player)) {
            (RunState::NotStarted, _) => "ready",
            (RunState::Paused, _) => "paused",
            (RunState::Running, true) => "to move",
            (RunState::Running, false) => "waiting",
            (RunState::Expired, true) => "flagged",
            (RunState::Expired, false) => "stopped",
        }
    }
}

impl Default for ClockView {
    fn default() -> Self {
        Self::new(&ClockState::default(), true)
    }
}
