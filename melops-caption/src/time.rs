//! ASS timestamp formatting.

/// Format seconds as an ASS timestamp `H:MM:SS.cc`.
///
/// Rounds to the nearest centisecond on the total value; negative input is
/// clamped to zero.
pub fn format_time(secs: f64) -> String {
    let total_cs = (secs.max(0.0) * 100.0).round() as u64;

    let cs = total_cs % 100;
    let total_secs = total_cs / 100;
    let s = total_secs % 60;
    let m = (total_secs / 60) % 60;
    let h = total_secs / 3600;

    format!("{h}:{m:02}:{s:02}.{cs:02}")
}
