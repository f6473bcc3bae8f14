//! Configuration and CLI argument handling

use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::{state::Preferences, tasks::DEFAULT_TICK_INTERVAL};

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "coffeehouse")]
#[command(about = "A two-player chess clock with Fischer increment")]
#[command(version)]
pub struct Config {
    /// Starting time per player in minutes (overrides and updates saved preferences)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=120))]
    pub minutes: Option<u32>,

    /// Seconds added to a player's clock when they end their turn
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=10))]
    pub increment: Option<u32>,

    /// Milliseconds between clock ticks
    #[arg(long, default_value_t = DEFAULT_TICK_INTERVAL.as_millis() as u64, value_parser = clap::value_parser!(u64).range(10..=60_000))]
    pub tick_ms: u64,

    /// File the clock state is saved to on exit
    #[arg(long, default_value = "coffeehouse-state.json")]
    pub state_file: PathBuf,

    /// File holding theme and time settings
    #[arg(long, default_value = "coffeehouse-prefs.json")]
    pub prefs_file: PathBuf,

    /// Ignore any saved clock state and start a fresh match
    #[arg(long)]
    pub fresh: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Override stored preferences with values given on the command line
    ///
    /// Returns whether anything changed.
    pub fn apply_to(&self, prefs: &mut Preferences) -> bool {
        let before = prefs.clone();
        if let Some(minutes) = self.minutes {
            prefs.minutes = minutes;
        }
        if let Some(increment) = self.increment {
            prefs.increment_seconds = increment;
        }
        *prefs != before
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["coffeehouse"]).unwrap();
        assert_eq!(config.minutes, None);
        assert_eq!(config.tick_interval(), DEFAULT_TICK_INTERVAL);
        assert_eq!(config.tick_ms, 1000);
        assert_eq!(config.state_file, PathBuf::from("coffeehouse-state.json"));
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn rejects_out_of_range_settings() {
        assert!(Config::try_parse_from(["coffeehouse", "--minutes", "0"]).is_err());
        assert!(Config::try_parse_from(["coffeehouse", "--minutes", "121"]).is_err());
        assert!(Config::try_parse_from(["coffeehouse", "--increment", "11"]).is_err());
    }

    #[test]
    fn overrides_preferences() {
        let config = Config::try_parse_from(["coffeehouse", "-m", "3", "-i", "0", "-v"]).unwrap();
        let mut prefs = Preferences::default();
        assert!(config.apply_to(&mut prefs));
        assert_eq!(prefs.minutes, 3);
        assert_eq!(prefs.increment_seconds, 0);
        assert!(prefs.is_dark_mode);
        assert!(!config.apply_to(&mut prefs));
        assert_eq!(config.log_level(), "debug");
    }
}
