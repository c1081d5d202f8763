//! Time formatting and thumbnail sampling.

use std::time::Duration;

/// Format seconds as `HH:MM:SS.mmm`.
///
/// Each component is floored. Hours are not wrapped, so long sources render
/// as e.g. `100:00:00.000`. Negative input is treated as zero.
pub fn format_time(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let hours = (seconds / 3600.0).floor() as u64;
    let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
    let remaining_seconds = (seconds % 60.0).floor() as u64;
    let milliseconds = ((seconds % 1.0) * 1000.0).floor() as u64;

    format!(
        "{:02}:{:02}:{:02}.{:03}",
        hours, minutes, remaining_seconds, milliseconds
    )
}

/// Frame timestamps for a thumbnail strip.
///
/// Samples every `interval_ms` from zero up to and including the total
/// duration, taking each frame `lead_ms` earlier (never before zero).
pub fn thumbnail_sample_times(total_secs: f64, interval_ms: u64, lead_ms: u64) -> Vec<Duration> {
    if interval_ms == 0 || !total_secs.is_finite() || total_secs < 0.0 {
        return Vec::new();
    }
    let total_ms = (total_secs * 1000.0).floor() as u64;

    (0..=total_ms)
        .step_by(interval_ms as usize)
        .map(|t| Duration::from_millis(t.saturating_sub(lead_ms)))
        .collect()
}
