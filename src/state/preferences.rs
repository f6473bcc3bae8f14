//! User preferences kept between sessions

use serde::{Deserialize, Serialize};

use crate::error::ClockError;

use super::{settings::{INCREMENT_SECONDS_RANGE, MINUTES_RANGE}, ClockSettings};

/// Key-value preferences: theme and the values last picked on the settings screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub is_dark_mode: bool,
    pub minutes: u32,
    pub increment_seconds: u32,
}

impl Preferences {
    pub fn settings(&self) -> Result<ClockSettings, ClockError> {
        ClockSettings::from_minutes(self.minutes, self.increment_seconds)
    }

    /// Reset out-of-range time fields to their defaults, returning whether any were reset
    pub fn sanitize(&mut self) -> bool {
        let defaults = Self::default();
        let mut changed = false;
        if !MINUTES_RANGE.contains(&self.minutes) {
            self.minutes = defaults.minutes;
            changed = true;
        }
        if !INCREMENT_SECONDS_RANGE.contains(&self.increment_seconds) {
            self.increment_seconds = defaults.increment_seconds;
            changed = true;
        }
        changed
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            is_dark_mode: true,
            minutes: 10,
            increment_seconds: 5,
        }
    }
}
