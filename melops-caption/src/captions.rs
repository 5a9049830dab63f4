//! External caption input: ASS passthrough or SRT conversion.

use crate::error::CaptionError;
use crate::types::{Segment, TranscriptionResult};
use srtlib::{Subtitle, Subtitles, Timestamp};

/// Marker identifying ASS content.
const ASS_MARKER: &str = "[Script Info]";

/// Caption input for a styling job.
#[derive(Clone, Debug, PartialEq)]
pub enum CaptionSource {
    /// Ready-made ASS document, used as is
    Ass(String),
    /// Cues parsed from SRT; segments carry no word timing
    Srt(TranscriptionResult),
    /// Speech recognition output, possibly with word timing
    Transcript(TranscriptionResult),
}

/// Classify and parse raw caption content.
pub fn parse_captions(content: &str) -> Result<CaptionSource, CaptionError> {
    if content.contains(ASS_MARKER) {
        tracing::info!("detected ASS formatted captions");
        return Ok(CaptionSource::Ass(content.to_string()));
    }

    tracing::info!("detected SRT formatted captions");
    parse_srt(content).map(CaptionSource::Srt)
}

/// Convert SRT content into segments with empty word lists.
pub fn parse_srt(content: &str) -> Result<TranscriptionResult, CaptionError> {
    let normalized = content.replace("\r\n", "\n");
    let normalized = normalized.trim();

    if normalized.is_empty() {
        return Err(CaptionError::UnsupportedFormat {
            reason: "caption content is empty".to_string(),
        });
    }

    let subtitles = Subtitles::parse_from_str(format!("{normalized}\n")).map_err(|e| {
        CaptionError::UnsupportedFormat {
            reason: e.to_string(),
        }
    })?;

    let segments: Vec<Segment> = subtitles.to_vec().iter().map(to_segment).collect();

    if segments.is_empty() {
        return Err(CaptionError::UnsupportedFormat {
            reason: "no subtitle cues found".to_string(),
        });
    }

    tracing::info!(segments = segments.len(), "converted SRT content to transcription");

    Ok(TranscriptionResult::new(segments))
}

fn to_segment(subtitle: &Subtitle) -> Segment {
    Segment::new(
        subtitle.text.trim(),
        timestamp_to_secs(&subtitle.start_time),
        timestamp_to_secs(&subtitle.end_time),
    )
}

fn timestamp_to_secs(timestamp: &Timestamp) -> f64 {
    let (h, m, s, ms) = timestamp.get();
    h as f64 * 3600.0 + m as f64 * 60.0 + s as f64 + ms as f64 / 1000.0
}
