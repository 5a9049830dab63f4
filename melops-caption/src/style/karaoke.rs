//! Karaoke style: one event per segment with a `\k` duration per word.

use super::{RenderContext, Renderer};
use crate::types::Segment;

pub(super) struct Karaoke;

/// Highlight duration in centiseconds.
fn centiseconds(start: f64, end: f64) -> u64 {
    ((end - start).max(0.0) * 100.0).round() as u64
}

impl Renderer for Karaoke {
    fn render(&self, segments: &[Segment], ctx: &RenderContext) -> Vec<String> {
        let mut events = Vec::new();

        for segment in segments {
            let (Some(first), Some(last)) = (segment.words.first(), segment.words.last()) else {
                continue;
            };

            let words = ctx.timed_words(segment);
            if words.is_empty() {
                continue;
            }

            let text = ctx
                .lines(words)
                .iter()
                .map(|line| {
                    line.iter()
                        .map(|w| format!("{{\\k{}}}{}", centiseconds(w.start, w.end), w.text))
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect::<Vec<_>>()
                .join("\\N");

            let text = format!("{{\\c{}}}{text}", ctx.word_color);
            events.push(ctx.dialogue(first.start, last.end, &text));
        }

        events
    }
}
