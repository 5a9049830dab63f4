//! Grid placement: maps position/alignment labels to an `\an` code and anchor.
//!
//! The frame is split into a 3x3 grid. `position` picks the cell, `alignment`
//! picks the anchor inside the cell. The `\an` code follows numpad layout:
//!
//! | Row    | left | center | right |
//! |--------|------|--------|-------|
//! | top    | 7    | 8      | 9     |
//! | middle | 4    | 5      | 6     |
//! | bottom | 1    | 2      | 3     |

/// Resolved placement for every event of a caption run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Alignment code in `1..=9`
    pub an_code: u8,
    /// Anchor in pixels; whole numbers for grid cells, as given when explicit
    pub x: f64,
    pub y: f64,
}

impl Placement {
    /// ASS override block positioning an event, e.g. `{\an2\pos(960,900)}`.
    pub fn tag(&self) -> String {
        format!("{{\\an{}\\pos({},{})}}", self.an_code, self.x, self.y)
    }
}

/// Horizontal alignment code from a label: left=1, right=3, anything else center=2.
fn horizontal_code(alignment: &str) -> u8 {
    match alignment.to_lowercase().as_str() {
        "left" => 1,
        "right" => 3,
        _ => 2,
    }
}

/// Resolve placement within a `width` x `height` frame.
///
/// When both `x` and `y` are given they are used unchanged, the row is fixed
/// to middle and `position` is ignored.
pub fn compute(
    position: &str,
    alignment: &str,
    x: Option<f64>,
    y: Option<f64>,
    width: u32,
    height: u32,
) -> Placement {
    let horiz = horizontal_code(alignment);

    if let (Some(x), Some(y)) = (x, y) {
        return Placement {
            an_code: 4 + (horiz - 1),
            x,
            y,
        };
    }

    let (w, h) = (width as f64, height as f64);
    let position = position.to_lowercase();

    let (row_base, anchor_y) = if position.contains("top") {
        (7, h / 6.0)
    } else if position.contains("middle") {
        (4, h / 2.0)
    } else {
        (1, 5.0 * h / 6.0)
    };

    let (left, right) = if position.contains("left") {
        (0.0, w / 3.0)
    } else if position.contains("right") {
        (2.0 * w / 3.0, w)
    } else {
        (w / 3.0, 2.0 * w / 3.0)
    };

    let anchor_x = match horiz {
        1 => left,
        3 => right,
        _ => (left + right) / 2.0,
    };

    Placement {
        an_code: row_base + (horiz - 1),
        x: anchor_x.trunc(),
        y: anchor_y.trunc(),
    }
}
