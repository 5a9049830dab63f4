//! Mel: styled ASS captions and transcript alignment from the command line.

pub mod align;
pub mod cli;
pub mod config;
pub mod fonts;
pub mod srt;
pub mod style;
