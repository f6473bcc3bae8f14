//! Console front end
//! 
//! This module reads user gestures from standard input and dispatches them
//! to the application state.

pub mod commands;
pub mod handlers;

use std::{io::BufRead, sync::Arc, thread};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::state::AppState;
pub use commands::{Command, CommandError};
pub use handlers::{handle_command, save_snapshot, Reply, Stores};

/// Read stdin lines on a detached thread and forward them over a channel
///
/// The blocking read never holds up runtime shutdown; the thread exits at
/// end of input or once the receiver is dropped.
pub fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (line_tx, line_rx) = mpsc::channel(16);

    let spawned = thread::Builder::new()
        .name("console-stdin".to_string())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if line_tx.blocking_send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("Failed to read console input: {}", e);
                        break;
                    }
                }
            }
            debug!("Standard input reader stopped");
        });

    if let Err(e) = spawned {
        warn!("Failed to start console input thread: {}", e);
    }
    line_rx
}

/// Dispatch commands from `lines` until `quit` or the channel closes
pub async fn console_task(state: Arc<AppState>, stores: Stores, mut lines: mpsc::Receiver<String>) {
    info!("Console ready, type 'help' for commands");

    while let Some(line) = lines.recv().await {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match handle_command(&state, &stores, command).await {
            Reply::Quiet => {}
            Reply::Message(message) => println!("{}", message),
            Reply::Quit => return,
        }
    }
    debug!("Console input closed");
}
