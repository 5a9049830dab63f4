//! Core types for melops-caption

use serde::{Deserialize, Serialize};

/// Single recognized word with timestamps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Word text, possibly with a leading space as emitted by ASR tools
    #[serde(rename = "word", alias = "text")]
    pub text: String,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
}

impl Word {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

/// Text segment with timestamps.
///
/// Represents a portion of transcribed text with start and end times in seconds.
/// `words` is empty when the segment came from plain caption text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
    /// Transcribed text
    pub text: String,
    /// Word-level timestamps, chronologically ordered
    #[serde(default)]
    pub words: Vec<Word>,
}

impl Segment {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            text: text.into(),
            words: Vec::new(),
        }
    }

    pub fn with_words(mut self, words: Vec<Word>) -> Self {
        self.words = words;
        self
    }

    /// Whether word-level timing is available.
    pub fn has_words(&self) -> bool {
        !self.words.is_empty()
    }
}

/// Ordered transcription output.
///
/// Segment order is chronological. Transformations such as alignment
/// produce a new result instead of mutating this one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionResult {
    pub segments: Vec<Segment>,
}

impl TranscriptionResult {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Parse ASR JSON output (`{"segments": [...]}`).
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whisper_style_json() {
        let json = r#"{
            "text": " Hello world.",
            "segments": [{
                "id": 0,
                "start": 0.0,
                "end": 1.2,
                "text": " Hello world.",
                "words": [
                    {"word": " Hello", "start": 0.0, "end": 0.5, "probability": 0.9},
                    {"word": " world.", "start": 0.5, "end": 1.2, "probability": 0.8}
                ]
            }]
        }"#;

        let result = TranscriptionResult::from_json(json).unwrap();

        match &result.segments[..] {
            [segment] => {
                assert_eq!(segment.text, " Hello world.");
                assert_eq!(segment.words.len(), 2);
                assert_eq!(segment.words[1].text, " world.");
                assert_eq!(segment.words[1].end, 1.2);
            }
            _ => panic!("expected 1 segment, got {}", result.segments.len()),
        }
    }

    #[test]
    fn writes_words_in_whisper_shape() {
        let segment = Segment::new("hi", 0.0, 0.5).with_words(vec![Word::new(" hi", 0.0, 0.5)]);
        let json = serde_json::to_value(TranscriptionResult::new(vec![segment])).unwrap();

        assert_eq!(json["segments"][0]["words"][0]["word"], " hi");
        assert!(json["segments"][0]["words"][0].get("text").is_none());

        let text_keyed = r#"{"segments": [{"start": 0.0, "end": 0.5, "text": "hi",
            "words": [{"text": " hi", "start": 0.0, "end": 0.5}]}]}"#;
        let result = TranscriptionResult::from_json(text_keyed).unwrap();
        assert_eq!(result.segments[0].words[0].text, " hi");
    }

    #[test]
    fn words_default_to_empty() {
        let json = r#"{"segments": [{"start": 1.0, "end": 2.0, "text": "plain"}]}"#;

        let result = TranscriptionResult::from_json(json).unwrap();

        assert!(!result.segments[0].has_words());
    }
}
