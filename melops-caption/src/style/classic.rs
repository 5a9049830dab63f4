//! Classic style: one positioned block per segment.

use super::{RenderContext, Renderer};
use crate::types::Segment;

pub(super) struct Classic;

impl Renderer for Classic {
    fn render(&self, segments: &[Segment], ctx: &RenderContext) -> Vec<String> {
        segments
            .iter()
            .filter_map(|segment| {
                let text = segment.text.trim().replace('\n', " ");
                let text = ctx.wrap(ctx.process(&text).trim());

                if text.is_empty() {
                    return None;
                }

                Some(ctx.dialogue(segment.start, segment.end, &text))
            })
            .collect()
    }
}
