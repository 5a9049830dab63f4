//! ASS color encoding (`&HAABBGGRR`).

use std::fmt;

/// Alpha byte for a fully opaque color; ASS alpha counts transparency.
pub const OPAQUE: u8 = 0x00;

/// Color used whenever an input hex string cannot be decoded.
pub const FALLBACK: AssColor = AssColor {
    alpha: OPAQUE,
    red: 0xFF,
    green: 0xFF,
    blue: 0xFF,
};

/// RGB color with ASS alpha, displayed as `&HAABBGGRR`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssColor {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl AssColor {
    /// Parse `#RRGGBB` (leading `#` optional). Returns `None` unless exactly
    /// six hex digits remain.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();

        Some(Self {
            alpha: OPAQUE,
            red: channel(0)?,
            green: channel(2)?,
            blue: channel(4)?,
        })
    }

    pub fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }

    /// Replace alpha from an opacity in `[0, 1]` (1 = fully opaque).
    pub fn with_opacity(self, opacity: f64) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        self.with_alpha((255.0 * (1.0 - opacity)) as u8)
    }
}

impl fmt::Display for AssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "&H{:02X}{:02X}{:02X}{:02X}",
            self.alpha, self.blue, self.green, self.red
        )
    }
}

/// Decode a hex color, falling back to opaque white on malformed input.
pub fn parse(hex: &str, alpha: Option<u8>) -> AssColor {
    match AssColor::from_hex(hex) {
        Some(color) => color.with_alpha(alpha.unwrap_or(OPAQUE)),
        None => {
            tracing::warn!(color = hex, "malformed color, using white");
            FALLBACK
        }
    }
}

/// Encode `#RRGGBB` plus optional alpha as an ASS color string.
pub fn encode(hex: &str, alpha: Option<u8>) -> String {
    parse(hex, alpha).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_red_without_alpha() {
        assert_eq!(encode("#FF0000", None), "&H000000FF");
    }

    #[test]
    fn reorders_to_bgr() {
        assert_eq!(encode("123456", None), "&H00563412");
        assert_eq!(encode("#abcdef", Some(0x80)), "&H80EFCDAB");
    }

    #[test]
    fn falls_back_to_white() {
        assert_eq!(encode("#FFF", None), "&H00FFFFFF");
        assert_eq!(encode("#GG0000", None), "&H00FFFFFF");
        assert_eq!(encode("", Some(0x40)), "&H00FFFFFF");
    }

    #[test]
    fn opacity_maps_to_inverse_alpha() {
        let black = AssColor::from_hex("#000000").unwrap();

        assert_eq!(black.with_opacity(1.0).to_string(), "&H00000000");
        assert_eq!(black.with_opacity(0.5).to_string(), "&H7F000000");
        assert_eq!(black.with_opacity(0.0).to_string(), "&HFF000000");
    }
}
