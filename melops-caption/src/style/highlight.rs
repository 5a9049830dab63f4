//! Highlight style: one event per word, the active word recolored.

use super::{RenderContext, Renderer, emphasize_each};
use crate::types::Segment;

pub(super) struct Highlight;

impl Renderer for Highlight {
    fn render(&self, segments: &[Segment], ctx: &RenderContext) -> Vec<String> {
        emphasize_each(segments, ctx, |word| {
            format!("{{\\c{}}}{word}{{\\c{}}}", ctx.word_color, ctx.line_color)
        })
    }
}
