//! Timecode formatting for ruler labels.

/// Format whole seconds as a zero-padded `HH:MM:SS` label.
///
/// Fractional seconds are truncated; negative input clamps to zero.
pub fn format_timecode(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}
