//! Validated clock configuration

use std::ops::RangeInclusive;

use crate::error::ClockError;

pub const DEFAULT_BASE_DURATION_MS: i64 = 600_000;
pub const DEFAULT_INCREMENT_MS: i64 = 5_000;

/// Minutes the settings screen lets a player pick
pub const MINUTES_RANGE: RangeInclusive<u32> = 1..=120;
/// Increment seconds the settings screen lets a player pick
pub const INCREMENT_SECONDS_RANGE: RangeInclusive<u32> = 0..=10;

/// Base duration and per-move increment applied on the next reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSettings {
    base_duration_ms: i64,
    increment_ms: i64,
}

impl ClockSettings {
    pub fn new(base_duration_ms: i64, increment_ms: i64) -> Result<Self, ClockError> {
        if base_duration_ms <= 0 {
            return Err(ClockError::InvalidConfig(format!(
                "base duration must be positive, got {}ms",
                base_duration_ms
            )));
        }
        if increment_ms < 0 {
            return Err(ClockError::InvalidConfig(format!(
                "increment must not be negative, got {}ms",
                increment_ms
            )));
        }
        Ok(Self {
            base_duration_ms,
            increment_ms,
        })
    }

    /// Convert the values picked on the settings screen
    pub fn from_minutes(minutes: u32, increment_seconds: u32) -> Result<Self, ClockError> {
        if !MINUTES_RANGE.contains(&minutes) {
            return Err(ClockError::InvalidConfig(format!(
                "minutes must be between {} and {}, got {}",
                MINUTES_RANGE.start(),
                MINUTES_RANGE.end(),
                minutes
            )));
        }
        if !INCREMENT_SECONDS_RANGE.contains(&increment_seconds) {
            return Err(ClockError::InvalidConfig(format!(
                "increment seconds must be between {} and {}, got {}",
                INCREMENT_SECONDS_RANGE.start(),
                INCREMENT_SECONDS_RANGE.end(),
                increment_seconds
            )));
        }
        Self::new(i64::from(minutes) * 60_000, i64::from(increment_seconds) * 1_000)
    }

    pub fn base_duration_ms(&self) -> i64 {
        self.base_duration_ms
    }

    pub fn increment_ms(&self) -> i64 {
        self.increment_ms
    }
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            base_duration_ms: DEFAULT_BASE_DURATION_MS,
            increment_ms: DEFAULT_INCREMENT_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_screen_values_to_milliseconds() {
        let settings = ClockSettings::from_minutes(3, 2).unwrap();
        assert_eq!(settings.base_duration_ms(), 180_000);
        assert_eq!(settings.increment_ms(), 2_000);

        let longest = ClockSettings::from_minutes(120, 10).unwrap();
        assert_eq!(longest.base_duration_ms(), 7_200_000);
        assert_eq!(longest.increment_ms(), 10_000);
    }

    #[test]
    fn rejects_values_outside_picker_ranges() {
        assert!(ClockSettings::from_minutes(0, 5).is_err());
        assert!(ClockSettings::from_minutes(121, 5).is_err());
        assert!(ClockSettings::from_minutes(10, 11).is_err());
    }

    #[test]
    fn rejects_non_positive_duration_and_negative_increment() {
        assert!(matches!(ClockSettings::new(0, 0), Err(ClockError::InvalidConfig(_))));
        assert!(matches!(ClockSettings::new(-1, 0), Err(ClockError::InvalidConfig(_))));
        assert!(matches!(ClockSettings::new(1_000, -1), Err(ClockError::InvalidConfig(_))));
        assert!(ClockSettings::new(1_000, 0).is_ok());
    }
}
