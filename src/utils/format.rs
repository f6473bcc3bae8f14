//! Clock face formatting

/// Render milliseconds as `HH:MM:SS`
///
/// Hours wrap at 24, so a full day renders as `00:00:00`. Negative input
/// renders as zero.
pub fn format_clock(ms: i64) -> String {
    let ms = ms.max(0);
    let hours = (ms / 3_600_000) % 24;
    let minutes = (ms / 60_000) % 60;
    let seconds = (ms / 1000) % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
