//! End-to-end caption job: optional alignment, styling and document assembly.

use crate::align::Aligner;
use crate::captions::CaptionSource;
use crate::document::Document;
use crate::error::{ConfigError, Result};
use crate::fonts::FontRegistry;
use crate::options::StyleOptions;
use crate::replace::ReplaceMap;
use crate::style::{StyleEngine, StyleKind};
use crate::types::TranscriptionResult;

/// Frame resolution used when none can be determined.
pub const DEFAULT_RESOLUTION: (u32, u32) = (384, 288);

/// Styling request for one caption run.
#[derive(Clone, Debug)]
pub struct CaptionJob {
    pub options: StyleOptions,
    pub replace: ReplaceMap,
    /// Frame `(width, height)` in pixels
    pub resolution: (u32, u32),
    pub aligner: Aligner,
}

impl CaptionJob {
    pub fn new(options: StyleOptions, replace: ReplaceMap, resolution: (u32, u32)) -> Self {
        Self {
            options,
            replace,
            resolution,
            aligner: Aligner::default(),
        }
    }

    /// Produce the ASS document for `source`.
    ///
    /// ASS input is returned untouched. SRT input only supports the classic
    /// style. Transcripts are aligned to `correct_text` first when it is set.
    ///
    /// Alignment rewrites segment text only; word timestamps keep their
    /// recognized text, so word-level styles render the uncorrected words.
    pub fn generate(&self, source: CaptionSource, fonts: &dyn FontRegistry) -> Result<String> {
        match source {
            CaptionSource::Ass(content) => Ok(content),
            CaptionSource::Srt(result) => {
                if self.options.style != StyleKind::Classic {
                    return Err(ConfigError::UnsupportedStyle {
                        style: self.options.style.to_string(),
                    }
                    .into());
                }
                self.render(&result, fonts)
            }
            CaptionSource::Transcript(result) => match self.options.correct_text.as_deref() {
                Some(corrected) if !corrected.trim().is_empty() => {
                    if self.options.style != StyleKind::Classic {
                        tracing::debug!(
                            style = %self.options.style,
                            "word styles render recognized words, not corrected text"
                        );
                    }
                    let aligned = self.aligner.align(&result, corrected);
                    self.render(&aligned, fonts)
                }
                _ => self.render(&result, fonts),
            },
        }
    }

    /// Style `result` and wrap the events in a document.
    pub fn render(&self, result: &TranscriptionResult, fonts: &dyn FontRegistry) -> Result<String> {
        let events = StyleEngine::new(fonts).render(
            result,
            &self.options,
            &self.replace,
            self.resolution,
        )?;

        tracing::info!(style = %self.options.style, "converted transcription result to ASS");

        Ok(Document::new(&self.options, self.resolution, events).render())
    }
}
