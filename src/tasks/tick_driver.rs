//! Tick driver background task

use std::{sync::Arc, time::Duration};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::AppState;

/// Reference cadence between ticks
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Background task that repeatedly settles elapsed time on the running clock
///
/// Each tick charges the measured time since the previous settle, so a late
/// or skipped tick does not make the clock drift.
pub async fn tick_driver_task(state: Arc<AppState>, cadence: Duration) {
    info!("Starting tick driver with {}ms cadence", cadence.as_millis());

    let mut interval = interval(cadence);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        match state.tick_now() {
            Ok(Some(player)) => {
                info!("Flag fell for {}, match over", player);
            }
            Ok(None) => {}
            Err(e) => {
                error!("Failed to tick clock: {}", e);
                debug!("Tick driver continuing after error");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Player, Preferences, RunState};

    #[tokio::test(start_paused = true)]
    async fn drives_the_active_clock() {
        let state = Arc::new(AppState::new(Preferences::default()).unwrap());
        state.start(Player::Player1).unwrap();

        let driver = tokio::spawn(tick_driver_task(Arc::clone(&state), DEFAULT_TICK_INTERVAL));
        tokio::time::sleep(Duration::from_millis(5_500)).await;
        assert_eq!(state.view().unwrap().player1, "00:09:55");

        state.swap().unwrap();
        tokio::time::sleep(Duration::from_millis(3_000)).await;
        let snapshot = state.snapshot().unwrap();
        assert_eq!(snapshot.player1_remaining_ms, 599_500);
        assert_eq!(snapshot.player2_remaining_ms, 597_000);

        driver.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn stops_at_expiry() {
        let prefs = Preferences {
            minutes: 1,
            increment_seconds: 0,
            ..Preferences::default()
        };
        let state = Arc::new(AppState::new(prefs).unwrap());
        state.start(Player::Player2).unwrap();

        let driver = tokio::spawn(tick_driver_task(Arc::clone(&state), DEFAULT_TICK_INTERVAL));
        tokio::time::sleep(Duration::from_secs(90)).await;

        let snapshot = state.snapshot().unwrap();
        assert_eq!(snapshot.run_state, RunState::Expired);
        assert_eq!(snapshot.player2_remaining_ms, 0);
        assert_eq!(snapshot.player1_remaining_ms, 60_000);

        driver.abort();
    }
}
