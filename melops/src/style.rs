//! Style subcommand - render styled ASS captions from a transcript or captions.

use crate::config::{self, FrameArgs};
use crate::fonts::SystemFonts;
use crate::srt;
use color_eyre::Section;
use eyre::{Context, Result, eyre};
use melops_caption::captions::CaptionSource;
use melops_caption::fonts::{FixedFonts, FontRegistry};
use melops_caption::options::StyleOptions;
use melops_caption::pipeline::CaptionJob;
use melops_caption::replace::ReplaceMap;
use melops_caption::style::StyleKind;
use std::path::PathBuf;

/// CLI arguments for styled caption generation.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Transcript JSON, SRT or ASS file
    pub input: PathBuf,

    /// Output ASS path (default: same as input with .ass extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON object of style settings
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// JSON list of {"find", "replace"} objects
    #[arg(long)]
    pub replace: Option<PathBuf>,

    /// Caption style, overrides the settings file
    #[arg(long)]
    pub style: Option<StyleKind>,

    /// Corrected transcript text to align against before styling
    #[arg(long)]
    pub correct_text: Option<PathBuf>,

    #[command(flatten)]
    pub frame: FrameArgs,

    /// Installed font family (repeatable; skips fontconfig lookup)
    #[arg(long = "font")]
    pub fonts: Vec<String>,

    /// Print the first and last dialogue events
    #[arg(long)]
    pub preview: bool,
}

/// Resolved configuration for styled caption generation.
#[derive(Debug)]
pub struct Config {
    pub source: CaptionSource,
    pub output: PathBuf,
    pub job: CaptionJob,
    pub fonts: Vec<String>,
    pub preview: bool,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let source = config::load_source(&args.input)?;

        let mut options = match args.settings.as_deref() {
            Some(path) => StyleOptions::from_value(&config::read_json(path)?)
                .wrap_err_with(|| format!("invalid settings: {:?}", path.display()))?,
            None => StyleOptions::default(),
        };

        if let Some(style) = args.style {
            options.style = style;
        }

        if let Some(path) = args.correct_text.as_deref() {
            options.correct_text = Some(config::read_text(path)?);
        }

        let replace = match args.replace.as_deref() {
            Some(path) => ReplaceMap::from_value(&config::read_json(path)?)
                .wrap_err_with(|| format!("invalid replace list: {:?}", path.display()))?,
            None => ReplaceMap::default(),
        };

        Ok(Self {
            output: args
                .output
                .unwrap_or_else(|| args.input.with_extension("ass")),
            source,
            job: CaptionJob::new(options, replace, args.frame.resolution()),
            fonts: args.fonts,
            preview: args.preview,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    tracing::info!(
        output = ?config.output.display(),
        style = %config.job.options.style,
        replacements = config.job.replace.len(),
        "generating styled captions"
    );

    let registry: Box<dyn FontRegistry> = if config.fonts.is_empty() {
        Box::new(SystemFonts::query()?)
    } else {
        Box::new(FixedFonts::new(config.fonts))
    };

    let document = config
        .job
        .generate(config.source, registry.as_ref())
        .map_err(|e| match e.available_fonts() {
            Some(available) => {
                let note = format!("available fonts: {}", available.join(", "));
                eyre!(e.to_string())
                    .with_note(|| note)
                    .with_suggestion(|| "set 'font_family' in the settings file")
            }
            None => eyre::Report::new(e),
        })?;

    tracing::info!(path = ?config.output.display(), "write ass file");

    std::fs::write(&config.output, &document)
        .wrap_err_with(|| format!("failed to write ass: {:?}", config.output.display()))?;

    if config.preview {
        let events = document
            .lines()
            .filter(|line| line.starts_with("Dialogue:"))
            .collect::<Vec<_>>();
        println!("{}", srt::preview(&events, 3, 3, "\n"));
    }

    Ok(())
}
