//! Subtitle style engine: renders segments into ASS dialogue events.
//!
//! Every style shares the same preprocessing, resolved once per run:
//! font availability check, grid placement, replacements and all-caps.
//! Styles other than classic need word timestamps and skip segments
//! without them.

mod classic;
mod highlight;
mod karaoke;
mod underline;
mod word_by_word;

use crate::color::{self, AssColor};
use crate::error::{Error, Result};
use crate::fonts::FontRegistry;
use crate::layout;
use crate::options::StyleOptions;
use crate::position::{self, Placement};
use crate::replace::ReplaceMap;
use crate::time::format_time;
use crate::types::{Segment, TranscriptionResult};
use std::fmt;
use std::str::FromStr;

/// Visual caption style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StyleKind {
    /// One positioned block per segment
    #[default]
    Classic,
    /// One event per segment with `\k` timing per word
    Karaoke,
    /// One event per word, active word recolored
    Highlight,
    /// One event per word, active word underlined
    Underline,
    /// One event per word showing only that word
    WordByWord,
}

impl StyleKind {
    pub const ALL: [Self; 5] = [
        Self::Classic,
        Self::Karaoke,
        Self::Highlight,
        Self::Underline,
        Self::WordByWord,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Karaoke => "karaoke",
            Self::Highlight => "highlight",
            Self::Underline => "underline",
            Self::WordByWord => "word_by_word",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Like [`StyleKind::parse`], but unknown names log a warning and map to classic.
    pub fn parse_or_classic(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            tracing::warn!(style = name, "unknown style, defaulting to 'classic'");
            Self::Classic
        })
    }

    fn renderer(self) -> &'static dyn Renderer {
        match self {
            Self::Classic => &classic::Classic,
            Self::Karaoke => &karaoke::Karaoke,
            Self::Highlight => &highlight::Highlight,
            Self::Underline => &underline::Underline,
            Self::WordByWord => &word_by_word::WordByWord,
        }
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            let names: Vec<_> = Self::ALL.iter().map(|k| k.name()).collect();
            format!("unknown style '{s}', expected one of: {}", names.join(", "))
        })
    }
}

/// Renders segments into dialogue lines for one style.
trait Renderer {
    fn render(&self, segments: &[Segment], ctx: &RenderContext) -> Vec<String>;
}

/// Word after replacements, with its original timing.
#[derive(Clone, Debug, PartialEq)]
struct TimedWord {
    text: String,
    start: f64,
    end: f64,
}

/// Settings resolved once per caption run and shared by all renderers.
struct RenderContext<'a> {
    options: &'a StyleOptions,
    replace: &'a ReplaceMap,
    placement: Placement,
    font_size: u32,
    line_color: AssColor,
    word_color: AssColor,
}

impl RenderContext<'_> {
    /// Apply replacements and optional upper-casing.
    fn process(&self, text: &str) -> String {
        let text = self.replace.apply(text);
        if self.options.all_caps {
            text.to_uppercase()
        } else {
            text
        }
    }

    /// Processed, non-empty words of a segment.
    fn timed_words(&self, segment: &Segment) -> Vec<TimedWord> {
        segment
            .words
            .iter()
            .map(|w| TimedWord {
                text: self.process(w.text.trim()),
                start: w.start,
                end: w.end,
            })
            .filter(|w| !w.text.trim().is_empty())
            .collect()
    }

    /// Group words into lines under the width budget (one line when disabled).
    fn lines(&self, words: Vec<TimedWord>) -> Vec<Vec<TimedWord>> {
        let units: Vec<&str> = words.iter().map(|w| w.text.as_str()).collect();
        let counts = layout::line_counts(
            &units,
            self.options.max_width as f64,
            self.font_size,
            &self.options.font_family,
        );
        layout::partition(words, &counts)
    }

    /// Wrap processed text into `\N`-separated lines.
    fn wrap(&self, text: &str) -> String {
        if self.options.max_width <= 0 {
            return text.to_string();
        }

        layout::wrap(
            text,
            self.options.max_width as f64,
            self.font_size,
            &self.options.font_family,
        )
        .join("\\N")
    }

    /// Positioned dialogue line.
    fn dialogue(&self, start: f64, end: f64, text: &str) -> String {
        format!(
            "Dialogue: 0,{},{},Default,,0,0,0,,{}{}",
            format_time(start),
            format_time(end),
            self.placement.tag(),
            text
        )
    }
}

/// One event per word; `mark` decorates the active word within its line.
fn emphasize_each(
    segments: &[Segment],
    ctx: &RenderContext,
    mark: impl Fn(&str) -> String,
) -> Vec<String> {
    let mut events = Vec::new();

    for segment in segments {
        let words = ctx.timed_words(segment);

        for line in ctx.lines(words) {
            for (active, word) in line.iter().enumerate() {
                let text = line
                    .iter()
                    .enumerate()
                    .map(|(i, w)| if i == active { mark(&w.text) } else { w.text.clone() })
                    .collect::<Vec<_>>()
                    .join(" ");

                let text = format!("{{\\c{}}}{text}", ctx.line_color);
                events.push(ctx.dialogue(word.start, word.end, &text));
            }
        }
    }

    events
}

/// Renders transcripts into dialogue events with an injected font registry.
pub struct StyleEngine<'a> {
    fonts: &'a dyn FontRegistry,
}

impl<'a> StyleEngine<'a> {
    pub fn new(fonts: &'a dyn FontRegistry) -> Self {
        Self { fonts }
    }

    /// Fail with [`Error::FontUnavailable`] unless `family` is installed.
    pub fn check_font(&self, family: &str) -> Result<()> {
        if self.fonts.contains(family) {
            tracing::info!(font = family, "font available");
            return Ok(());
        }

        let mut available = self.fonts.families();
        available.sort();
        available.dedup();

        tracing::warn!(font = family, "font not found");

        Err(Error::FontUnavailable {
            requested: family.to_string(),
            available,
        })
    }

    /// Render `result` in `options.style` for a `width` x `height` frame.
    ///
    /// Fails before producing any event if the font is not installed.
    pub fn render(
        &self,
        result: &TranscriptionResult,
        options: &StyleOptions,
        replace: &ReplaceMap,
        (width, height): (u32, u32),
    ) -> Result<Vec<String>> {
        self.check_font(&options.font_family)?;

        let placement = position::compute(
            &options.position,
            &options.alignment,
            options.x,
            options.y,
            width,
            height,
        );

        tracing::info!(
            style = %options.style,
            position = options.position,
            alignment = options.alignment,
            x = placement.x,
            y = placement.y,
            an_code = placement.an_code,
            "resolved caption placement"
        );

        let ctx = RenderContext {
            options,
            replace,
            placement,
            font_size: options.resolved_font_size(height),
            line_color: color::parse(&options.line_color, None),
            word_color: color::parse(&options.word_color, None),
        };

        let events = options.style.renderer().render(&result.segments, &ctx);

        tracing::info!(style = %options.style, events = events.len(), "rendered dialogues");

        Ok(events)
    }
}
