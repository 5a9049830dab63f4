//! Error types for melops-caption organized by processing stage.

use thiserror::Error;

/// Caption pipeline error variants organized by processing stage.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested font family is not installed
    #[error("font '{requested}' not available")]
    FontUnavailable {
        requested: String,
        available: Vec<String>,
    },

    /// Configuration stage error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Caption input stage error
    #[error(transparent)]
    Caption(#[from] CaptionError),
}

/// Style settings and replacement list errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings were not a JSON object
    #[error("'settings' should be a dictionary")]
    NotAMapping,

    /// Replacement list was not a JSON array
    #[error("'replace' should be a list of objects with 'find' and 'replace' keys")]
    NotAList,

    /// Replacement entry without usable find/replace strings
    #[error("invalid replace item at index {index}: {reason}")]
    InvalidReplaceEntry { index: usize, reason: &'static str },

    /// Option value of the wrong type
    #[error("invalid value for option '{key}': expected {expected}")]
    InvalidValue { key: String, expected: &'static str },

    /// Style that cannot be applied to the given caption input
    #[error("only 'classic' style is supported for SRT captions, got '{style}'")]
    UnsupportedStyle { style: String },
}

/// External caption content errors.
#[derive(Debug, Error)]
pub enum CaptionError {
    /// Content is neither ASS markup nor parseable SRT
    #[error("unsupported caption format: {reason}")]
    UnsupportedFormat { reason: String },
}

/// Result type alias for melops-caption operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Installed font families, present only for font errors.
    pub fn available_fonts(&self) -> Option<&[String]> {
        match self {
            Error::FontUnavailable { available, .. } => Some(available),
            _ => None,
        }
    }
}
