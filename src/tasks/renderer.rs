//! Clock face renderer background task

use std::{io::Write, sync::Arc};
use tracing::{debug, info, warn};

use crate::state::{AppState, ClockView, Player, RunState};

const DARK_STYLE: &str = "\x1b[1;97;40m";
const LIGHT_STYLE: &str = "\x1b[1;30;107m";
const RESET_STYLE: &str = "\x1b[0m";

/// Build the single status line shown for a view
pub fn render_line(view: &ClockView) -> String {
    let style = if view.dark_mode { DARK_STYLE } else { LIGHT_STYLE };
    let side = |player: Player| {
        let marker = if view.active_player == Some(player) && view.run_state == RunState::Running {
            '>'
        } else {
            ' '
        };
        format!("{}P{} {} [{}]", marker, player_number(player), view.face(player), view.badge(player))
    };
    format!(
        "{}{}  |  {}{}",
        style,
        side(Player::Player1),
        side(Player::Player2),
        RESET_STYLE
    )
}

fn player_number(player: Player) -> u8 {
    match player {
        Player::Player1 => 1,
        Player::Player2 => 2,
    }
}

/// Background task that redraws both clocks whenever the view changes
pub async fn renderer_task(state: Arc<AppState>) {
    info!("Starting renderer task");

    let mut view_rx = state.subscribe();
    let mut stdout = std::io::stdout();

    loop {
        let line = render_line(&view_rx.borrow_and_update());
        if let Err(e) = writeln!(stdout, "{}", line).and_then(|_| stdout.flush()) {
            warn!("Failed to draw clock: {}", e);
        }

        if view_rx.changed().await.is_err() {
            debug!("View channel closed, stopping renderer");
            break;
        }
    }
}
