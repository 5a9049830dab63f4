//! Re-aligns noisy ASR segment text against a corrected reference transcript.
//!
//! Each segment is matched, in time order, against the whole reference text
//! with a sliding window of `segment length + margin` characters scored by
//! [`ratio`]. The winning window is trimmed to the segment's word count, and
//! its character range is claimed so no later segment can reuse it. A match
//! overlapping an earlier claim is discarded and the segment keeps its
//! original text.
//!
//! Assignment is greedy and order dependent: an earlier segment keeps a
//! contested range even if a later segment would score higher on it.
//!
//! Cost is `O(segments * reference_len * window_len^2)`; callers should bound
//! the reference length.

use crate::types::{Segment, TranscriptionResult};
use std::ops::Range;

/// Default extra window size in characters.
pub const DEFAULT_MARGIN: usize = 10;

/// Per-segment result of an alignment run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Segment text replaced by `range` of the reference text
    Matched { range: Range<usize> },
    /// Best match overlapped an earlier claim; original text kept
    Overlapped { range: Range<usize> },
    /// No window scored above zero; original text kept
    NoMatch,
}

/// Aligned transcription with one outcome per segment.
#[derive(Clone, Debug)]
pub struct Alignment {
    pub result: TranscriptionResult,
    pub outcomes: Vec<MatchOutcome>,
}

/// Character ranges of the reference text already used by earlier segments.
///
/// Threaded through the alignment fold; scoped to a single run.
#[derive(Clone, Debug, Default)]
pub struct ClaimedRanges(Vec<Range<usize>>);

impl ClaimedRanges {
    pub fn overlaps(&self, range: &Range<usize>) -> bool {
        self.0
            .iter()
            .any(|claimed| claimed.start < range.end && range.start < claimed.end)
    }

    pub fn claim(mut self, range: Range<usize>) -> Self {
        self.0.push(range);
        self
    }

    pub fn ranges(&self) -> &[Range<usize>] {
        &self.0
    }
}

/// Candidate replacement found in the reference text.
#[derive(Clone, Debug, PartialEq)]
struct CharMatch {
    range: Range<usize>,
    text: String,
}

/// Adaptive sliding-window aligner.
#[derive(Clone, Copy, Debug)]
pub struct Aligner {
    /// Extra characters added to the window to absorb recognition errors
    pub margin: usize,
}

impl Default for Aligner {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
        }
    }
}

impl Aligner {
    pub fn new(margin: usize) -> Self {
        Self { margin }
    }

    /// Align segment texts to `corrected`, keeping every segment's timing.
    pub fn align(&self, result: &TranscriptionResult, corrected: &str) -> TranscriptionResult {
        self.align_with_outcomes(result, corrected).result
    }

    /// Align and report how each segment was resolved.
    pub fn align_with_outcomes(&self, result: &TranscriptionResult, corrected: &str) -> Alignment {
        let reference: Vec<char> = corrected.chars().collect();

        let (_, segments, outcomes) = result.segments.iter().fold(
            (ClaimedRanges::default(), Vec::new(), Vec::new()),
            |(claimed, mut segments, mut outcomes), segment| {
                let (claimed, aligned, outcome) = self.step(claimed, segment, &reference);
                segments.push(aligned);
                outcomes.push(outcome);
                (claimed, segments, outcomes)
            },
        );

        let matched = outcomes
            .iter()
            .filter(|o| matches!(o, MatchOutcome::Matched { .. }))
            .count();

        tracing::info!(
            segments = segments.len(),
            matched,
            fallback = segments.len() - matched,
            "aligned transcription to corrected text"
        );

        Alignment {
            result: TranscriptionResult::new(segments),
            outcomes,
        }
    }

    /// Resolve one segment against the reference text.
    fn step(
        &self,
        claimed: ClaimedRanges,
        segment: &Segment,
        reference: &[char],
    ) -> (ClaimedRanges, Segment, MatchOutcome) {
        let Some(found) = self.best_match(segment.text.trim(), reference) else {
            tracing::debug!(text = segment.text, "no confident match, keeping original");
            return (claimed, segment.clone(), MatchOutcome::NoMatch);
        };

        if claimed.overlaps(&found.range) {
            tracing::debug!(
                text = segment.text,
                candidate = found.text,
                start = found.range.start,
                end = found.range.end,
                "match overlaps claimed text, keeping original"
            );
            let outcome = MatchOutcome::Overlapped { range: found.range };
            return (claimed, segment.clone(), outcome);
        }

        let aligned = Segment {
            text: found.text,
            ..segment.clone()
        };
        let outcome = MatchOutcome::Matched {
            range: found.range.clone(),
        };

        (claimed.claim(found.range), aligned, outcome)
    }

    /// Best window for `text`, trimmed to its word count.
    fn best_match(&self, text: &str, reference: &[char]) -> Option<CharMatch> {
        let needle: Vec<char> = text.chars().collect();

        if needle.is_empty() || reference.len() < needle.len() {
            return None;
        }

        let window_len = needle.len() + self.margin;
        let mut best: Option<(Range<usize>, f64)> = None;

        for start in 0..=reference.len() - needle.len() {
            let end = (start + window_len).min(reference.len());
            let score = ratio(&needle, &reference[start..end]);

            if score > best.as_ref().map_or(0.0, |(_, s)| *s) {
                best = Some((start..end, score));
            }
        }

        let (window, _) = best?;
        let word_count = text.split_whitespace().count();

        Some(trim_window(&needle, word_count, reference, window))
    }
}

/// Narrow `window` to the `word_count` consecutive words scoring highest
/// against `needle`; keeps the whole window if none scores above zero.
fn trim_window(
    needle: &[char],
    word_count: usize,
    reference: &[char],
    window: Range<usize>,
) -> CharMatch {
    let spans = word_spans(&reference[window.clone()], window.start);

    let mut best = CharMatch {
        text: reference[window.clone()].iter().collect(),
        range: window,
    };
    let mut best_score = 0.0;

    if word_count == 0 || spans.len() < word_count {
        return best;
    }

    for group in spans.windows(word_count) {
        let text = group
            .iter()
            .map(|span| reference[span.clone()].iter().collect::<String>())
            .collect::<Vec<_>>()
            .join(" ");

        let candidate: Vec<char> = text.chars().collect();
        let score = ratio(needle, &candidate);

        if score > best_score {
            best_score = score;
            best = CharMatch {
                range: group[0].start..group[word_count - 1].end,
                text,
            };
        }
    }

    best
}

/// Absolute ranges of whitespace-separated words in `chars`.
fn word_spans(chars: &[char], offset: usize) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = None;

    for (i, c) in chars.iter().enumerate() {
        match (c.is_whitespace(), start) {
            (false, None) => start = Some(i),
            (true, Some(s)) => {
                spans.push(offset + s..offset + i);
                start = None;
            }
            _ => {}
        }
    }

    if let Some(s) = start {
        spans.push(offset + s..offset + chars.len());
    }

    spans
}

/// Similarity in `[0, 1]`: `2 * M / (len(a) + len(b))`, where `M` counts the
/// characters in recursively found longest common blocks.
pub fn ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_chars(a, b) as f64 / total as f64
}

/// Total size of matching blocks: take the longest common substring, then
/// recurse on the pieces to its left and right.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut total = 0;
    let mut queue = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        let (i, j, k) = longest_match(a, b, alo..ahi, blo..bhi);

        if k == 0 {
            continue;
        }

        total += k;

        if alo < i && blo < j {
            queue.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            queue.push((i + k, ahi, j + k, bhi));
        }
    }

    total
}

/// Longest common substring of `a[ar]` and `b[br]` as `(i, j, len)`.
///
/// Ties resolve to the earliest start in `a`, then the earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    ar: Range<usize>,
    br: Range<usize>,
) -> (usize, usize, usize) {
    let mut best = (ar.start, br.start, 0);
    let width = br.len() + 1;

    // run lengths ending at (i - 1, j - 1), shifted by one
    let mut prev = vec![0usize; width];
    let mut curr = vec![0usize; width];

    for i in ar {
        for j in br.clone() {
            let col = j - br.start + 1;
            curr[col] = if a[i] == b[j] { prev[col - 1] + 1 } else { 0 };

            let k = curr[col];
            if k > best.2 {
                best = (i + 1 - k, j + 1 - k, k);
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn transcript(texts: &[(f64, f64, &str)]) -> TranscriptionResult {
        TranscriptionResult::new(
            texts
                .iter()
                .map(|&(start, end, text)| Segment::new(text, start, end))
                .collect(),
        )
    }

    #[test]
    fn ratio_matches_block_counting() {
        assert_eq!(ratio(&chars("abcd"), &chars("abcd")), 1.0);
        assert_eq!(ratio(&chars("abcd"), &chars("wxyz")), 0.0);
        assert_eq!(ratio(&[], &[]), 1.0);

        // blocks "hello wo" + "ld"
        let r = ratio(&chars("hello wold"), &chars("hello world"));
        assert!((r - 20.0 / 21.0).abs() < 1e-9, "{r}");
    }

    #[test]
    fn ratio_counts_blocks_on_both_sides() {
        // single-char blocks: "a" first, then "b" and "c" from the right-hand recursion
        let r = ratio(&chars("xaybzc"), &chars("abc"));
        assert!((r - 6.0 / 9.0).abs() < 1e-9, "{r}");
    }

    #[test]
    fn longest_match_prefers_earliest() {
        let (i, j, k) = longest_match(&chars("abab"), &chars("ab"), 0..4, 0..2);
        assert_eq!((i, j, k), (0, 0, 2));
    }

    #[test]
    fn finds_word_spans() {
        let spans = word_spans(&chars("  ab c  def"), 5);
        assert_eq!(spans, vec![7..9, 10..11, 13..16]);
    }

    #[test]
    fn corrects_noisy_segments() {
        let result = transcript(&[(0.0, 1.0, "hello wold"), (1.0, 2.0, "how r u")]);

        let alignment = Aligner::new(10).align_with_outcomes(&result, "hello world how are you");

        let texts: Vec<&str> = alignment
            .result
            .segments
            .iter()
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(texts, ["hello world", "how are you"]);

        assert_eq!(
            alignment.outcomes,
            vec![
                MatchOutcome::Matched { range: 0..11 },
                MatchOutcome::Matched { range: 12..23 },
            ]
        );
    }

    #[test]
    fn preserves_timings() {
        let result = transcript(&[(0.5, 1.25, "hello wold"), (1.25, 2.75, "how r u")]);

        let aligned = Aligner::default().align(&result, "hello world how are you");

        assert_eq!(aligned.segments[0].start, 0.5);
        assert_eq!(aligned.segments[0].end, 1.25);
        assert_eq!(aligned.segments[1].start, 1.25);
        assert_eq!(aligned.segments[1].end, 2.75);
    }

    #[test]
    fn empty_reference_keeps_original_text() {
        let result = transcript(&[(0.0, 1.0, " hello wold"), (1.0, 2.0, "how r u")]);

        let alignment = Aligner::default().align_with_outcomes(&result, "");

        assert_eq!(alignment.result, result);
        assert!(alignment.outcomes.iter().all(|o| *o == MatchOutcome::NoMatch));
    }

    #[test]
    fn unrelated_reference_keeps_original_text() {
        let result = transcript(&[(0.0, 1.0, "abc")]);

        let aligned = Aligner::default().align(&result, "xyz xyz xyz");

        assert_eq!(aligned.segments[0].text, "abc");
    }

    #[test]
    fn overlapping_match_falls_back() {
        // both segments want the same words; the first one claims them
        let result = transcript(&[(0.0, 1.0, "good morning"), (1.0, 2.0, "good morning")]);

        let alignment = Aligner::default().align_with_outcomes(&result, "good morning everyone");

        assert_eq!(alignment.result.segments[0].text, "good morning");
        assert_eq!(alignment.result.segments[1].text, "good morning");

        match &alignment.outcomes[..] {
            [MatchOutcome::Matched { range }, MatchOutcome::Overlapped { range: lost }] => {
                assert_eq!(*range, 0..12);
                assert_eq!(*lost, 0..12);
            }
            other => panic!("unexpected outcomes: {other:?}"),
        }
    }

    #[test]
    fn fallback_keeps_noisy_text_verbatim() {
        let result = transcript(&[(0.0, 1.0, "the cat"), (1.0, 2.0, "the cat")]);

        let aligned = Aligner::default().align(&result, "the cat sat");

        assert_eq!(aligned.segments[1].text, "the cat");
    }

    #[test]
    fn never_claims_overlapping_ranges() {
        let result = transcript(&[
            (0.0, 1.0, "one two"),
            (1.0, 2.0, "two three"),
            (2.0, 3.0, "tree four"),
            (3.0, 4.0, "five"),
            (4.0, 5.0, "one two"),
        ]);

        let alignment = Aligner::new(4).align_with_outcomes(&result, "one two three four five six");

        let claimed: Vec<&Range<usize>> = alignment
            .outcomes
            .iter()
            .filter_map(|o| match o {
                MatchOutcome::Matched { range } => Some(range),
                _ => None,
            })
            .collect();

        for (i, a) in claimed.iter().enumerate() {
            for b in &claimed[i + 1..] {
                assert!(
                    a.end <= b.start || b.end <= a.start,
                    "overlap between {a:?} and {b:?}"
                );
            }
        }
    }

    #[test]
    fn claimed_ranges_detect_overlap() {
        let claimed = ClaimedRanges::default().claim(5..10);

        assert!(claimed.overlaps(&(9..12)));
        assert!(claimed.overlaps(&(0..6)));
        assert!(!claimed.overlaps(&(10..12)));
        assert!(!claimed.overlaps(&(0..5)));
        assert_eq!(claimed.ranges(), &[5..10]);
    }
}
