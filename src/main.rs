//! Coffeehouse - A two-player chess clock
//! 
//! This is the main entry point for the coffeehouse application.

use std::sync::Arc;
use anyhow::Context;
use tracing::{info, warn};

use coffeehouse::{
    config::Config,
    console::{console_task, save_snapshot, spawn_stdin_reader, Stores},
    persistence::{PreferencesStore, SnapshotStore},
    state::AppState,
    tasks::{renderer_task, tick_driver_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so they do not interleave with the clock line
    tracing_subscriber::fmt()
        .with_env_filter(format!("coffeehouse={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting coffeehouse v{}", env!("CARGO_PKG_VERSION"));

    let stores = Stores {
        snapshot: SnapshotStore::new(&config.state_file),
        preferences: PreferencesStore::new(&config.prefs_file),
    };

    let mut preferences = stores.preferences.load().await;
    if config.apply_to(&mut preferences) {
        stores.preferences.save(&preferences).await
            .context("Failed to save preferences")?;
    }
    info!("Configuration: {}min + {}s, tick={}ms",
          preferences.minutes, preferences.increment_seconds, config.tick_ms);

    let settings = preferences.settings()?;
    let state = Arc::new(AppState::new(preferences)?);

    if config.fresh {
        info!("Starting a fresh match");
    } else {
        match stores.snapshot.load().await {
            Ok(Some(saved)) => {
                if let Err(e) = state.restore_paused(saved.clock) {
                    warn!("Ignoring saved clock state: {}", e);
                }
            }
            Ok(None) => {}
            Err(e) => warn!("Failed to load saved clock state: {:#}", e),
        }
    }

    // Settings from preferences or the command line win over the restored
    // match and are picked up on the next reset
    let match_settings = state.snapshot()?;
    if match_settings.base_duration_ms != settings.base_duration_ms()
        || match_settings.increment_ms != settings.increment_ms()
    {
        let prefs = state.preferences()?;
        state.apply_settings(prefs.minutes, prefs.increment_seconds)?;
    }

    // Start the background tasks
    let tick_state = Arc::clone(&state);
    let cadence = config.tick_interval();
    let ticker = tokio::spawn(async move {
        tick_driver_task(tick_state, cadence).await;
    });
    let renderer = tokio::spawn(renderer_task(Arc::clone(&state)));

    let console = console_task(Arc::clone(&state), stores.clone(), spawn_stdin_reader());

    tokio::select! {
        _ = console => {
            info!("Console closed");
        }
        _ = wait_for_shutdown() => {
            info!("Shutdown signal received");
        }
    }

    ticker.abort();
    renderer.abort();

    if !save_snapshot(&state, &stores).await {
        warn!("Clock state was not saved");
    }

    info!("Shutdown complete");
    Ok(())
}

/// Resolve on a shutdown signal, or never if signals cannot be installed
async fn wait_for_shutdown() {
    if let Err(e) = shutdown_signal().await {
        warn!("Failed to listen for shutdown signals: {}", e);
        std::future::pending::<()>().await;
    }
}
