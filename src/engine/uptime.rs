use std::time::Duration;

/// Renders an elapsed duration as `"{H} hours, {M} minutes, {S} seconds"`.
/// Hours are unbounded; minutes and seconds stay in `0..60`.
pub fn format_uptime(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    let hours = total_secs / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    format!("{hours} hours, {minutes} minutes, {seconds} seconds")
}
