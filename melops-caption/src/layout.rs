//! Heuristic text width estimation and greedy line wrapping.
//!
//! Widths are approximations (`chars * font_size * factor`), not glyph metrics.

/// Broad font classification used to pick a per-character width factor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontClass {
    SansSerif,
    Serif,
    Monospace,
}

impl FontClass {
    /// Classify a font family name; unknown families count as sans-serif.
    pub fn of(family: &str) -> Self {
        match family.to_lowercase().as_str() {
            "times new roman" | "serif" => Self::Serif,
            "courier" | "monospace" => Self::Monospace,
            _ => Self::SansSerif,
        }
    }

    /// Average character width relative to font size.
    pub fn width_factor(self) -> f64 {
        match self {
            Self::SansSerif => 0.60,
            Self::Serif => 0.55,
            Self::Monospace => 0.65,
        }
    }
}

/// Estimate the rendered width of `text` in pixels.
pub fn estimate_width(text: &str, font_size: u32, family: &str) -> f64 {
    text.chars().count() as f64 * font_size as f64 * FontClass::of(family).width_factor()
}

/// Greedy word wrap over atomic units.
///
/// Returns the number of units on each line. A unit is never split, and a
/// line always holds at least one unit. `max_width <= 0` disables wrapping.
pub fn line_counts<S: AsRef<str>>(
    units: &[S],
    max_width: f64,
    font_size: u32,
    family: &str,
) -> Vec<usize> {
    let Some((first, rest)) = units.split_first() else {
        return Vec::new();
    };

    if max_width <= 0.0 {
        return vec![units.len()];
    }

    let mut counts = Vec::new();
    let mut line = first.as_ref().to_string();
    let mut count = 1;

    for unit in rest {
        let candidate = format!("{line} {}", unit.as_ref());

        if estimate_width(&candidate, font_size, family) <= max_width {
            line = candidate;
            count += 1;
        } else {
            counts.push(count);
            line = unit.as_ref().to_string();
            count = 1;
        }
    }

    counts.push(count);
    counts
}

/// Wrap whitespace-separated text into lines no wider than `max_width`.
///
/// Words are never split; a single word wider than the budget gets its own
/// line. Empty text yields no lines.
pub fn wrap(text: &str, max_width: f64, font_size: u32, family: &str) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();

    if words.is_empty() {
        return Vec::new();
    }

    if max_width <= 0.0 {
        return vec![text.to_string()];
    }

    let counts = line_counts(&words, max_width, font_size, family);

    partition(words, &counts)
        .into_iter()
        .map(|line| line.join(" "))
        .collect()
}

/// Split `items` into consecutive groups of the given sizes, preserving order.
///
/// Empty groups are dropped; items beyond the total count are discarded.
pub fn partition<T>(items: Vec<T>, counts: &[usize]) -> Vec<Vec<T>> {
    let mut items = items.into_iter();

    counts
        .iter()
        .map(|&n| items.by_ref().take(n).collect::<Vec<_>>())
        .filter(|group| !group.is_empty())
        .collect()
}
