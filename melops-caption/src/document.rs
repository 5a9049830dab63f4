//! ASS document assembly: script info, style definition and events.

use crate::color;
use crate::options::StyleOptions;

/// Style alignment; events override it with their own `\an` tag.
const STYLE_ALIGNMENT: u8 = 5;

const STYLE_FORMAT: &str = "Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, \
OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, \
BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding";

const EVENT_FORMAT: &str =
    "Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text";

/// ASS flag value for a boolean style attribute.
fn flag(on: bool) -> u8 {
    if on { 1 } else { 0 }
}

/// Build the `Style: Default,...` line (23 fields).
///
/// When both a shadow opacity and a shadow offset are configured, the back
/// color's alpha is replaced to match the opacity.
pub fn style_line(options: &StyleOptions, (_, height): (u32, u32)) -> String {
    let line_color = color::parse(&options.line_color, None);
    let outline_color = color::parse(&options.outline_color, None);
    let mut box_color = color::parse(&options.box_color, None);

    if options.shadow_opacity > 0.0 && options.shadow_offset != 0.0 {
        box_color = box_color.with_opacity(options.shadow_opacity);
    }

    let fields: [String; 23] = [
        "Default".to_string(),
        options.font_family.clone(),
        options.resolved_font_size(height).to_string(),
        line_color.to_string(),
        // secondary mirrors primary
        line_color.to_string(),
        outline_color.to_string(),
        box_color.to_string(),
        flag(options.bold).to_string(),
        flag(options.italic).to_string(),
        flag(options.underline).to_string(),
        flag(options.strikeout).to_string(),
        options.scale_x.to_string(),
        options.scale_y.to_string(),
        options.spacing.to_string(),
        options.angle.to_string(),
        options.border_style.to_string(),
        options.outline_width.to_string(),
        options.shadow_offset.to_string(),
        STYLE_ALIGNMENT.to_string(),
        options.margin_l.to_string(),
        options.margin_r.to_string(),
        options.margin_v.to_string(),
        "0".to_string(),
    ];

    format!("Style: {}", fields.join(","))
}

/// Script header up to and including the events format line.
pub fn header(options: &StyleOptions, resolution: (u32, u32)) -> String {
    let (width, height) = resolution;

    format!(
        "[Script Info]\n\
         ScriptType: v4.00+\n\
         PlayResX: {width}\n\
         PlayResY: {height}\n\
         ScaledBorderAndShadow: yes\n\
         \n\
         [V4+ Styles]\n\
         {STYLE_FORMAT}\n\
         {}\n\
         \n\
         [Events]\n\
         {EVENT_FORMAT}\n",
        style_line(options, resolution)
    )
}

/// Complete ASS document.
#[derive(Clone, Debug)]
pub struct Document {
    pub header: String,
    pub events: Vec<String>,
}

impl Document {
    pub fn new(options: &StyleOptions, resolution: (u32, u32), events: Vec<String>) -> Self {
        Self {
            header: header(options, resolution),
            events,
        }
    }

    /// Render the document; each event is terminated by a newline.
    pub fn render(&self) -> String {
        let mut out = self.header.clone();
        for event in &self.events {
            out.push_str(event);
            out.push('\n');
        }
        out
    }
}
