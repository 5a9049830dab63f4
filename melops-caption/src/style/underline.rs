//! Underline style: one event per word, the active word underlined.

use super::{RenderContext, Renderer, emphasize_each};
use crate::types::Segment;

pub(super) struct Underline;

impl Renderer for Underline {
    fn render(&self, segments: &[Segment], ctx: &RenderContext) -> Vec<String> {
        emphasize_each(segments, ctx, |word| format!("{{\\u1}}{word}{{\\u0}}"))
    }
}
