//! SRT subtitle conversion and preview utilities.
//!
//! Converts segments with timestamps into SRT subtitle format.

use melops_caption::types::Segment;
use srtlib::{Subtitle, Timestamp};
use std::fmt::Display;

/// Convert Segments to SRT Subtitles.
pub fn to_subtitles(segments: &[Segment]) -> Vec<Subtitle> {
    segments
        .iter()
        .zip(1..)
        .map(|(s, i)| create_subtitle(s, i))
        .collect()
}

/// Create a subtitle from a segment.
fn create_subtitle(segment: &Segment, index: usize) -> Subtitle {
    Subtitle::new(
        index,
        secs_to_timestamp(segment.start),
        secs_to_timestamp(segment.end),
        segment.text.trim().to_string(),
    )
}

/// Convert seconds to SRT Timestamp
fn secs_to_timestamp(secs: f64) -> Timestamp {
    Timestamp::from_milliseconds((secs.max(0.0) * 1000.0).round() as u32)
}

/// Format subtitles as SRT file content.
pub fn display_subtitles(subtitles: &[Subtitle]) -> String {
    let mut out = subtitles
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join("\n\n");
    out.push('\n');
    out
}

/// Display preview of items (first and last entries).
pub fn preview<T: Display>(items: &[T], head_count: usize, tail_count: usize, sep: &str) -> String {
    let total = items.len();

    let show = |items: &[T]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    if total <= head_count + tail_count {
        show(items).join(sep)
    } else {
        let mut out = show(&items[..head_count]);
        out.push("...".to_string());
        out.extend(show(&items[total - tail_count..]));
        out.join(sep)
    }
}
