//! Shared argument types and input loading for resolved CLI configs.
//!
//! Per-command Args and Config structs live in their subcommand modules;
//! this module holds what they have in common.

use eyre::{Context, Result};
use melops_caption::captions::{self, CaptionSource};
use melops_caption::pipeline::DEFAULT_RESOLUTION;
use melops_caption::types::TranscriptionResult;
use serde_json::Value;
use std::path::Path;

/// Frame resolution the captions are laid out for.
#[derive(clap::Args, Clone, Copy, Debug)]
pub struct FrameArgs {
    /// Frame width in pixels
    #[arg(long, default_value_t = DEFAULT_RESOLUTION.0)]
    pub width: u32,

    /// Frame height in pixels
    #[arg(long, default_value_t = DEFAULT_RESOLUTION.1)]
    pub height: u32,
}

impl FrameArgs {
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).wrap_err_with(|| format!("failed to read: {:?}", path.display()))
}

pub fn read_json(path: &Path) -> Result<Value> {
    let text = read_text(path)?;
    serde_json::from_str(&text).wrap_err_with(|| format!("invalid json: {:?}", path.display()))
}

/// Load ASR output from a JSON file.
pub fn load_transcript(path: &Path) -> Result<TranscriptionResult> {
    let text = read_text(path)?;
    TranscriptionResult::from_json(&text)
        .wrap_err_with(|| format!("invalid transcript: {:?}", path.display()))
}

/// Load caption input: a JSON object is ASR output, anything else SRT or ASS.
pub fn load_source(path: &Path) -> Result<CaptionSource> {
    let content = read_text(path)?;

    if content.trim_start().starts_with('{') {
        return TranscriptionResult::from_json(&content)
            .map(CaptionSource::Transcript)
            .wrap_err_with(|| format!("invalid transcript: {:?}", path.display()));
    }

    captions::parse_captions(&content)
        .wrap_err_with(|| format!("failed to parse captions: {:?}", path.display()))
}
