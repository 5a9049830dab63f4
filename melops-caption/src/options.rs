//! Typed style settings built from a JSON mapping.
//!
//! Caller values are applied over [`StyleOptions::default`]. Keys are
//! normalized from `kebab-case` to `snake_case`; unrecognized keys are
//! skipped with a debug log.

use crate::error::ConfigError;
use crate::style::StyleKind;
use serde_json::{Map, Value};

/// Share of the frame height used as font size when none is configured.
const FONT_SIZE_RATIO: f64 = 0.05;

/// Resolved style settings for a caption run.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleOptions {
    pub font_family: String,
    /// Font size in pixels; `None` derives it from the frame height
    pub font_size: Option<u32>,
    /// Base text color (`#RRGGBB`)
    pub line_color: String,
    /// Accent color for the active word
    pub word_color: String,
    /// Background / shadow color
    pub box_color: String,
    pub outline_color: String,
    pub all_caps: bool,
    /// Line width budget in pixels; `<= 0` disables wrapping
    pub max_width: i64,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikeout: bool,
    pub scale_x: f64,
    pub scale_y: f64,
    pub spacing: f64,
    pub angle: f64,
    pub border_style: u8,
    pub outline_width: f64,
    pub shadow_offset: f64,
    /// Shadow opacity in `[0, 1]`
    pub shadow_opacity: f64,
    pub margin_l: u32,
    pub margin_r: u32,
    pub margin_v: u32,
    /// Explicit anchor in pixels, used only when both are set
    pub x: Option<f64>,
    pub y: Option<f64>,
    /// Grid cell label such as `bottom_center`
    pub position: String,
    /// Anchor inside the cell: `left`, `center` or `right`
    pub alignment: String,
    pub style: StyleKind,
    /// Corrected transcript to align ASR output against
    pub correct_text: Option<String>,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: None,
            line_color: "#FFFFFF".to_string(),
            word_color: "#FFFF00".to_string(),
            box_color: "#000000".to_string(),
            outline_color: "#000000".to_string(),
            all_caps: false,
            max_width: 0,
            bold: false,
            italic: false,
            underline: false,
            strikeout: false,
            scale_x: 100.0,
            scale_y: 100.0,
            spacing: 0.0,
            angle: 0.0,
            border_style: 1,
            outline_width: 2.0,
            shadow_offset: 0.0,
            shadow_opacity: 0.0,
            margin_l: 20,
            margin_r: 20,
            margin_v: 20,
            x: None,
            y: None,
            position: "middle_center".to_string(),
            alignment: "center".to_string(),
            style: StyleKind::Classic,
            correct_text: None,
        }
    }
}

impl StyleOptions {
    /// Build options from a JSON object of settings.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let map = value.as_object().ok_or(ConfigError::NotAMapping)?;
        Self::from_map(map)
    }

    pub fn from_map(map: &Map<String, Value>) -> Result<Self, ConfigError> {
        let mut options = Self::default();
        let mut highlight = None;

        // later keys win, so `font-size` after `font_size` overrides it
        for (key, value) in map {
            let key = key.replace('-', "_");
            if key == "highlight_color" {
                highlight = Some(value);
            } else {
                options.set(&key, value)?;
            }
        }

        // the deprecated key replaces `word_color` wherever it appears
        if let Some(value) = highlight {
            options.set("highlight_color", value)?;
        }

        Ok(options)
    }

    /// Apply a single normalized setting. `null` leaves the default in place.
    pub fn set(&mut self, key: &str, value: &Value) -> Result<(), ConfigError> {
        if value.is_null() {
            match key {
                "font_size" => self.font_size = None,
                "x" => self.x = None,
                "y" => self.y = None,
                "correct_text" => self.correct_text = None,
                _ => {}
            }
            return Ok(());
        }

        match key {
            "font_family" => self.font_family = string(key, value)?,
            "font_size" => self.font_size = Some(unsigned(key, value)?),
            "line_color" => self.line_color = string(key, value)?,
            "word_color" => self.word_color = string(key, value)?,
            "highlight_color" => {
                tracing::warn!("'highlight_color' is deprecated; merging into 'word_color'");
                self.word_color = string(key, value)?;
            }
            "box_color" => self.box_color = string(key, value)?,
            "outline_color" => self.outline_color = string(key, value)?,
            "all_caps" => self.all_caps = boolean(key, value)?,
            "max_width" => self.max_width = integer(key, value)?,
            "bold" => self.bold = boolean(key, value)?,
            "italic" => self.italic = boolean(key, value)?,
            "underline" => self.underline = boolean(key, value)?,
            "strikeout" => self.strikeout = boolean(key, value)?,
            "scale_x" => self.scale_x = number(key, value)?,
            "scale_y" => self.scale_y = number(key, value)?,
            "spacing" => self.spacing = number(key, value)?,
            "angle" => self.angle = number(key, value)?,
            "border_style" => {
                self.border_style = u8::try_from(unsigned(key, value)?).map_err(|_| {
                    ConfigError::InvalidValue {
                        key: key.to_string(),
                        expected: "a border style code",
                    }
                })?
            }
            "outline_width" => self.outline_width = number(key, value)?,
            "shadow_offset" => self.shadow_offset = number(key, value)?,
            "shadow_opacity" => self.shadow_opacity = number(key, value)?,
            "margin_l" => self.margin_l = unsigned(key, value)?,
            "margin_r" => self.margin_r = unsigned(key, value)?,
            "margin_v" => self.margin_v = unsigned(key, value)?,
            "x" => self.x = Some(number(key, value)?),
            "y" => self.y = Some(number(key, value)?),
            "position" => self.position = string(key, value)?,
            "alignment" => self.alignment = string(key, value)?,
            "style" => self.style = StyleKind::parse_or_classic(&string(key, value)?),
            "correct_text" => self.correct_text = Some(string(key, value)?),
            _ => tracing::debug!(key, "ignoring unrecognized style option"),
        }

        Ok(())
    }

    /// Configured font size, or 5% of the frame height.
    pub fn resolved_font_size(&self, frame_height: u32) -> u32 {
        self.font_size
            .unwrap_or_else(|| (frame_height as f64 * FONT_SIZE_RATIO) as u32)
    }
}

fn invalid(key: &str, expected: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        expected,
    }
}

fn string(key: &str, value: &Value) -> Result<String, ConfigError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| invalid(key, "a string"))
}

fn boolean(key: &str, value: &Value) -> Result<bool, ConfigError> {
    value.as_bool().ok_or_else(|| invalid(key, "a boolean"))
}

/// Finite number from a JSON number or a numeric string.
fn number(key: &str, value: &Value) -> Result<f64, ConfigError> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    n.filter(|n| n.is_finite())
        .ok_or_else(|| invalid(key, "a number"))
}

fn integer(key: &str, value: &Value) -> Result<i64, ConfigError> {
    number(key, value).map(|n| n as i64)
}

fn unsigned(key: &str, value: &Value) -> Result<u32, ConfigError> {
    let n = number(key, value)?;
    if n < 0.0 || n > u32::MAX as f64 {
        return Err(invalid(key, "a non-negative integer"));
    }
    Ok(n as u32)
}
