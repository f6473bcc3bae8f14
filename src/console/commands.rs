//! Console command parsing

use std::str::FromStr;

use thiserror::Error;

use crate::state::Player;

/// One user gesture typed at the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start(Player),
    Tap,
    Swap,
    Pause,
    Resume,
    Reset,
    Settings { minutes: u32, increment_seconds: u32 },
    Theme,
    Status,
    Save,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

pub const HELP: &str = "\
commands:
  <enter> | tap        start player 1, or end the current turn
  start [1|2]          start the match with the given player to move
  swap                 end the current turn
  pause | resume       stop or continue the running clock
  reset                put both clocks back to the configured time
  settings <min> <s>   minutes (1-120) and increment seconds (0-10)
  theme                toggle dark/light mode
  status               show clocks, settings and uptime
  save                 write the current state to disk
  quit                 save and exit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(Command::Tap);
        };
        let args: Vec<&str> = words.collect();

        let command = match (name.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("tap", []) => Command::Tap,
            ("start", []) => Command::Start(Player::Player1),
            ("start", [player]) => Command::Start(parse_player(player)?),
            ("start", _) => return Err(CommandError::Usage("start [1|2]")),
            ("swap", []) => Command::Swap,
            ("pause", []) => Command::Pause,
            ("resume", []) => Command::Resume,
            ("reset", []) => Command::Reset,
            ("settings", [minutes, seconds]) => Command::Settings {
                minutes: parse_number(minutes)?,
                increment_seconds: parse_number(seconds)?,
            },
            ("settings", _) => return Err(CommandError::Usage(SETTINGS_USAGE)),
            ("theme", []) => Command::Theme,
            ("status", []) => Command::Status,
            ("save", []) => Command::Save,
            ("help" | "?", []) => Command::Help,
            ("quit" | "exit", []) => Command::Quit,
            _ => return Err(CommandError::Unknown(line.trim().to_string())),
        };
        Ok(command)
    }
}

const SETTINGS_USAGE: &str = "settings <minutes> <increment seconds>";

fn parse_player(word: &str) -> Result<Player, CommandError> {
    match word {
        "1" | "p1" => Ok(Player::Player1),
        "2" | "p2" => Ok(Player::Player2),
        _ => Err(CommandError::Usage("start [1|2]")),
    }
}

fn parse_number(word: &str) -> Result<u32, CommandError> {
    word.parse().map_err(|_| CommandError::Usage(SETTINGS_USAGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_is_a_tap() {
        assert_eq!("".parse::<Command>(), Ok(Command::Tap));
        assert_eq!("   ".parse::<Command>(), Ok(Command::Tap));
    }

    #[test]
    fn parses_start_with_optional_player() {
        assert_eq!("start".parse::<Command>(), Ok(Command::Start(Player::Player1)));
        assert_eq!("START 2".parse::<Command>(), Ok(Command::Start(Player::Player2)));
        assert_eq!(
            "start 3".parse::<Command>(),
            Err(CommandError::Usage("start [1|2]"))
        );
    }

    #[test]
    fn parses_settings_arguments() {
        assert_eq!(
            "settings 15 10".parse::<Command>(),
            Ok(Command::Settings {
                minutes: 15,
                increment_seconds: 10,
            })
        );
        assert!(matches!("settings 15".parse::<Command>(), Err(CommandError::Usage(_))));
        assert!(matches!("settings x 1".parse::<Command>(), Err(CommandError::Usage(_))));
    }

    #[test]
    fn rejects_unknown_words() {
        assert_eq!(
            "castle kingside".parse::<Command>(),
            Err(CommandError::Unknown("castle kingside".to_string()))
        );
        assert!("pause now".parse::<Command>().is_err());
    }
}
