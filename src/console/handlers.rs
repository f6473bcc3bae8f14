//! Console command handlers

use std::sync::Arc;
use tracing::{error, info};

use crate::{
    persistence::{PreferencesStore, SnapshotStore},
    state::{AppState, ClockView, Player},
};
use super::commands::{Command, HELP};

/// What the console should do after a command ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to add, the renderer already shows the change
    Quiet,
    Message(String),
    Quit,
}

/// Files the console writes to when the user saves or changes preferences
#[derive(Debug, Clone)]
pub struct Stores {
    pub snapshot: SnapshotStore,
    pub preferences: PreferencesStore,
}

/// Run one console command against the application state
pub async fn handle_command(state: &Arc<AppState>, stores: &Stores, command: Command) -> Reply {
    let result = match command {
        Command::Start(player) => state.start(player).map(|_| Reply::Quiet),
        Command::Tap => state.tap().map(swap_reply),
        Command::Swap => state.swap().map(swap_reply),
        Command::Pause => state.pause().map(|_| Reply::Quiet),
        Command::Resume => state.resume().map(|_| Reply::Quiet),
        Command::Reset => state
            .reset()
            .map(|_| Reply::Message("Clocks reset, tap or 'start' to begin".to_string())),
        Command::Settings { minutes, increment_seconds } => {
            match state.apply_settings(minutes, increment_seconds) {
                Ok(_) => {
                    save_preferences(state, stores).await;
                    Ok(Reply::Message(format!(
                        "Settings saved: {} min + {} s",
                        minutes, increment_seconds
                    )))
                }
                Err(e) => Err(e),
            }
        }
        Command::Theme => match state.toggle_theme() {
            Ok(dark_mode) => {
                save_preferences(state, stores).await;
                Ok(Reply::Message(format!(
                    "Switched to {} mode",
                    if dark_mode { "dark" } else { "light" }
                )))
            }
            Err(e) => Err(e),
        },
        Command::Status => state.view().map(|view| Reply::Message(status_text(state, &view))),
        Command::Save => Ok(if save_snapshot(state, stores).await {
            Reply::Message(format!("Saved to {}", stores.snapshot.path().display()))
        } else {
            Reply::Message("Failed to save clock state".to_string())
        }),
        Command::Help => Ok(Reply::Message(HELP.to_string())),
        Command::Quit => Ok(Reply::Quit),
    };

    match result {
        Ok(reply) => reply,
        Err(e) => Reply::Message(e.to_string()),
    }
}

fn swap_reply(applied: bool) -> Reply {
    if applied {
        Reply::Quiet
    } else {
        Reply::Message("Clock is not running".to_string())
    }
}

/// Persist the current clock state, logging failures
pub async fn save_snapshot(state: &AppState, stores: &Stores) -> bool {
    let snapshot = match state.snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to read clock state: {}", e);
            return false;
        }
    };
    match stores.snapshot.save(&snapshot).await {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to save clock state: {:#}", e);
            false
        }
    }
}

async fn save_preferences(state: &AppState, stores: &Stores) {
    let prefs = match state.preferences() {
        Ok(prefs) => prefs,
        Err(e) => {
            error!("Failed to read preferences: {}", e);
            return;
        }
    };
    if let Err(e) = stores.preferences.save(&prefs).await {
        error!("Failed to save preferences: {:#}", e);
    } else {
        info!("Preferences saved to {}", stores.preferences.path().display());
    }
}

fn status_text(state: &AppState, view: &ClockView) -> String {
    let (last_action, last_action_time) = state.get_last_action();
    let prefs = state.preferences().unwrap_or_default();
    let mut lines = vec![
        format!("match: {}", view.run_state),
        format!("player 1: {} [{}]", view.face(Player::Player1), view.badge(Player::Player1)),
        format!("player 2: {} [{}]", view.face(Player::Player2), view.badge(Player::Player2)),
        format!("settings: {} min + {} s", prefs.minutes, prefs.increment_seconds),
        format!("uptime: {}", state.get_uptime()),
    ];
    if let (Some(action), Some(time)) = (last_action, last_action_time) {
        lines.push(format!("last action: {} at {}", action, time.format("%H:%M:%S")));
    }
    lines.join("\n")
}
