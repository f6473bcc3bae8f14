//! Wall-clock driving for the clock engine

use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

use super::{ChessClockEngine, Player, RunState};

/// Engine plus the instant up to which the running clock has been charged
///
/// The anchor is only set while the engine is running. Every command goes
/// through [`ClockSession::apply`], which settles the time owed to the
/// current mover before anything else changes.
#[derive(Debug)]
pub struct ClockSession {
    engine: ChessClockEngine,
    anchor: Option<Instant>,
}

impl ClockSession {
    pub fn new(engine: ChessClockEngine) -> Self {
        Self {
            engine,
            anchor: None,
        }
    }

    /// Charge the active player for the whole milliseconds elapsed since the anchor
    pub fn settle(&mut self, now: Instant) -> Option<Player> {
        let anchor = self.anchor?;
        let elapsed_ms = u64::try_from(now.saturating_duration_since(anchor).as_millis()).unwrap_or(u64::MAX);
        if elapsed_ms == 0 {
            return None;
        }

        // Sub-millisecond remainder stays behind the anchor for the next settle.
        self.anchor = Some(anchor + Duration::from_millis(elapsed_ms));
        let flagged = self.engine.tick(elapsed_ms);
        debug!("Settled {}ms", elapsed_ms);

        if self.engine.run_state() != RunState::Running {
            self.anchor = None;
        }
        flagged
    }

    /// Settle elapsed time, then run a command against the engine
    pub fn apply<T>(&mut self, now: Instant, op: impl FnOnce(&mut ChessClockEngine) -> T) -> T {
        self.settle(now);
        let out = op(&mut self.engine);
        self.anchor = match (self.engine.run_state(), self.anchor) {
            (RunState::Running, Some(anchor)) => Some(anchor),
            (RunState::Running, None) => Some(now),
            _ => None,
        };
        out
    }

    pub fn engine(&self) -> &ChessClockEngine {
        &self.engine
    }

    pub fn is_counting_down(&self) -> bool {
        self.anchor.is_some()
    }
}
