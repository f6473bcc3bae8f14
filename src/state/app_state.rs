//! Main application state management

use std::{
    sync::Mutex,
    time::Instant as StdInstant,
};
use chrono::{DateTime, Utc};
use tokio::{sync::watch, time::Instant};
use tracing::{info, warn};

use crate::error::{AppError, ClockError};

use super::{
    ChessClockEngine, ClockSession, ClockSettings, ClockState, ClockView, Player, Preferences,
    RunState,
};

/// Single writer for the clock session and the user's preferences
///
/// Every command locks the session, settles elapsed time, mutates the engine
/// and then publishes a fresh [`ClockView`] to watchers.
#[derive(Debug)]
pub struct AppState {
    session: Mutex<ClockSession>,
    preferences: Mutex<Preferences>,
    /// Process metadata
    pub start_time: StdInstant,
    /// Last action tracking
    pub last_action: Mutex<Option<String>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
    /// Channel for clock face updates
    pub clock_update_tx: watch::Sender<ClockView>,
    /// Keep the receiver alive to prevent channel closure
    pub _clock_update_rx: watch::Receiver<ClockView>,
}

impl AppState {
    /// Create a new AppState for a fresh match using the given preferences
    pub fn new(preferences: Preferences) -> Result<Self, ClockError> {
        let settings = preferences.settings()?;
        Ok(Self::with_settings(settings, preferences))
    }

    pub fn with_settings(settings: ClockSettings, preferences: Preferences) -> Self {
        let engine = ChessClockEngine::new(settings);
        let view = ClockView::new(engine.state(), preferences.is_dark_mode);
        let (clock_update_tx, clock_update_rx) = watch::channel(view);

        Self {
            session: Mutex::new(ClockSession::new(engine)),
            preferences: Mutex::new(preferences),
            start_time: StdInstant::now(),
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
            clock_update_tx,
            _clock_update_rx: clock_update_rx,
        }
    }

    /// Run a command against the engine and notify watchers
    fn command<T, F>(&self, action: &str, op: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut ChessClockEngine) -> Result<T, ClockError>,
    {
        let mut session = self.lock_session()?;
        let result = session.apply(Instant::now(), op);
        let state = session.engine().snapshot();
        drop(session); // Release the lock before notifying

        // Settling may have moved the clock even when the command is rejected
        self.publish(&state)?;

        match result {
            Ok(value) => {
                self.record_action(action);
                Ok(value)
            }
            Err(e) => {
                warn!("Rejected {}: {}", action, e);
                Err(e.into())
            }
        }
    }

    pub fn start(&self, first_player: Player) -> Result<ClockView, AppError> {
        self.command("start", |engine| engine.start(first_player))?;
        self.view()
    }

    /// Clock-face tap: starts player 1 before the match begins, swaps afterwards
    ///
    /// Returns whether the tap started or swapped the clock.
    pub fn tap(&self) -> Result<bool, AppError> {
        self.command("tap", |engine| {
            if engine.run_state() == RunState::NotStarted {
                engine.start(Player::Player1)?;
                Ok(true)
            } else {
                Ok(engine.swap())
            }
        })
    }

    /// Returns whether the swap was applied
    pub fn swap(&self) -> Result<bool, AppError> {
        self.command("swap", |engine| Ok(engine.swap()))
    }

    pub fn pause(&self) -> Result<ClockView, AppError> {
        self.command("pause", |engine| engine.pause())?;
        self.view()
    }

    pub fn resume(&self) -> Result<ClockView, AppError> {
        self.command("resume", |engine| engine.resume())?;
        self.view()
    }

    pub fn reset(&self) -> Result<ClockView, AppError> {
        info!("Resetting clocks");
        self.command("reset", |engine| {
            engine.reset();
            Ok(())
        })?;
        self.view()
    }

    /// Apply values confirmed on the settings screen
    ///
    /// A match that has not started yet picks them up immediately; otherwise
    /// they wait for the next reset.
    pub fn apply_settings(&self, minutes: u32, increment_seconds: u32) -> Result<ClockView, AppError> {
        let settings = ClockSettings::from_minutes(minutes, increment_seconds)?;
        self.command("settings", |engine| {
            engine.configure(settings.base_duration_ms(), settings.increment_ms())?;
            if engine.run_state() == RunState::NotStarted {
                engine.reset();
            }
            Ok(())
        })?;

        let mut prefs = self.lock_preferences()?;
        prefs.minutes = minutes;
        prefs.increment_seconds = increment_seconds;
        drop(prefs);

        info!("Settings set to {}min + {}s", minutes, increment_seconds);
        self.view()
    }

    /// Flip between dark and light theme, returning the new dark mode flag
    pub fn toggle_theme(&self) -> Result<bool, AppError> {
        let mut prefs = self.lock_preferences()?;
        prefs.is_dark_mode = !prefs.is_dark_mode;
        let dark_mode = prefs.is_dark_mode;
        drop(prefs);

        info!("Switched to {} mode", if dark_mode { "dark" } else { "light" });
        let state = self.lock_session()?.engine().snapshot();
        self.publish(&state)?;
        self.record_action("theme");
        Ok(dark_mode)
    }

    /// Settle elapsed time for the running clock, returning a player whose flag just fell
    pub fn tick_now(&self) -> Result<Option<Player>, AppError> {
        let mut session = self.lock_session()?;
        let flagged = session.settle(Instant::now());
        let state = session.engine().snapshot();
        drop(session);

        self.publish(&state)?;
        Ok(flagged)
    }

    /// Current state with all elapsed time charged
    pub fn snapshot(&self) -> Result<ClockState, AppError> {
        let mut session = self.lock_session()?;
        Ok(session.apply(Instant::now(), |engine| engine.snapshot()))
    }

    pub fn restore(&self, state: ClockState) -> Result<ClockView, AppError> {
        self.command("restore", |engine| engine.restore(state))?;
        self.view()
    }

    /// Restore a snapshot from a previous session, pausing a running match
    ///
    /// Time spent while the process was down is not charged to either player.
    pub fn restore_paused(&self, state: ClockState) -> Result<ClockView, AppError> {
        self.command("restore", |engine| {
            engine.restore(state)?;
            if engine.run_state() == RunState::Running {
                engine.pause()?;
                info!("Restored a running match as paused");
            }
            Ok(())
        })?;
        self.view()
    }

    pub fn view(&self) -> Result<ClockView, AppError> {
        let state = self.lock_session()?.engine().snapshot();
        Ok(ClockView::new(&state, self.dark_mode()?))
    }

    pub fn preferences(&self) -> Result<Preferences, AppError> {
        Ok(self.lock_preferences()?.clone())
    }

    pub fn subscribe(&self) -> watch::Receiver<ClockView> {
        self.clock_update_tx.subscribe()
    }

    /// Calculate process uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    /// Send a new view to watchers if anything visible changed
    fn publish(&self, state: &ClockState) -> Result<(), AppError> {
        let view = ClockView::new(state, self.dark_mode()?);
        self.clock_update_tx.send_if_modified(|current| {
            if *current == view {
                false
            } else {
                *current = view;
                true
            }
        });
        Ok(())
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    fn dark_mode(&self) -> Result<bool, AppError> {
        Ok(self.lock_preferences()?.is_dark_mode)
    }

    fn lock_session(&self) -> Result<std::sync::MutexGuard<'_, ClockSession>, AppError> {
        self.session.lock().map_err(|_| AppError::Lock("clock session"))
    }

    fn lock_preferences(&self) -> Result<std::sync::MutexGuard<'_, Preferences>, AppError> {
        self.preferences.lock().map_err(|_| AppError::Lock("preferences"))
    }
}
