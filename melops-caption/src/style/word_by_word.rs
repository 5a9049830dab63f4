//! Word-by-word style: each word shown alone in the accent color.

use super::{RenderContext, Renderer};
use crate::types::Segment;

pub(super) struct WordByWord;

impl Renderer for WordByWord {
    fn render(&self, segments: &[Segment], ctx: &RenderContext) -> Vec<String> {
        segments
            .iter()
            .flat_map(|segment| ctx.timed_words(segment))
            .map(|w| {
                let text = format!("{{\\c{}}}{}", ctx.word_color, w.text);
                ctx.dialogue(w.start, w.end, &text)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::StyleKind;
    use super::super::tests::{TAG, options, render, sample, words};
    use crate::types::{Segment, TranscriptionResult};

    #[test]
    fn shows_each_word_alone() {
        let events = render(&sample(), &options(StyleKind::WordByWord));

        assert_eq!(
            events[1],
            format!("Dialogue: 0,0:00:00.50,0:00:01.25,Default,,0,0,0,,{TAG}{{\\c&H0000FFFF}}world")
        );
    }

    #[test]
    fn drops_words_emptied_by_processing() {
        let result = TranscriptionResult::new(vec![
            Segment::new("a  b", 0.0, 1.0).with_words(words(&[
                ("a", 0.0, 0.3),
                ("  ", 0.3, 0.6),
                ("b", 0.6, 1.0),
            ])),
        ]);

        let events = render(&result, &options(StyleKind::WordByWord));

        assert_eq!(events.len(), 2);
    }
}
