//! Align subcommand - correct transcript text against a reference transcript.

use crate::config;
use crate::srt;
use eyre::{Context, Result};
use melops_caption::align::{Aligner, DEFAULT_MARGIN, MatchOutcome};
use melops_caption::types::TranscriptionResult;
use std::path::PathBuf;

/// CLI arguments for transcript alignment.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Transcript JSON file
    pub input: PathBuf,

    /// Corrected transcript text
    #[arg(long)]
    pub correct_text: PathBuf,

    /// Extra window size in characters
    #[arg(long, default_value_t = DEFAULT_MARGIN)]
    pub margin: usize,

    /// Output path (default: input with .srt, or .aligned.json with --json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the aligned transcript as JSON instead of SRT
    #[arg(long)]
    pub json: bool,
}

/// Resolved configuration for transcript alignment.
#[derive(Debug)]
pub struct Config {
    pub transcript: TranscriptionResult,
    pub corrected: String,
    pub aligner: Aligner,
    pub output: PathBuf,
    pub json: bool,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let extension = if args.json { "aligned.json" } else { "srt" };

        Ok(Self {
            transcript: config::load_transcript(&args.input)?,
            corrected: config::read_text(&args.correct_text)?,
            aligner: Aligner::new(args.margin),
            output: args
                .output
                .unwrap_or_else(|| args.input.with_extension(extension)),
            json: args.json,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    tracing::info!(
        segments = config.transcript.segments.len(),
        reference_chars = config.corrected.chars().count(),
        margin = config.aligner.margin,
        "aligning transcript"
    );

    let alignment = config
        .aligner
        .align_with_outcomes(&config.transcript, &config.corrected);

    for (index, outcome) in alignment.outcomes.iter().enumerate() {
        if !matches!(outcome, MatchOutcome::Matched { .. }) {
            tracing::warn!(index, ?outcome, "segment kept its original text");
        }
    }

    let content = if config.json {
        serde_json::to_string_pretty(&alignment.result).wrap_err("failed to serialize transcript")?
    } else {
        srt::display_subtitles(&srt::to_subtitles(&alignment.result.segments))
    };

    tracing::info!(path = ?config.output.display(), "write aligned transcript");

    std::fs::write(&config.output, content)
        .wrap_err_with(|| format!("failed to write output: {:?}", config.output.display()))?;

    Ok(())
}
