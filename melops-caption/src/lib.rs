//! melops-caption: styled ASS subtitles from timestamped transcripts.
//!
//! The crate turns speech-recognition output (or plain SRT captions) into an
//! Advanced SubStation Alpha document in one of several visual styles.
//!
//! # Architecture
//!
//! - [`align::Aligner`]: re-maps noisy segment text onto a corrected transcript
//! - [`style::StyleEngine`]: renders segments into dialogue events per [`style::StyleKind`]
//! - [`document::Document`]: assembles the script header, style line and events
//!
//! The style engine leans on three small leaf modules: [`layout`] for width
//! estimation and wrapping, [`position`] for grid placement and [`color`] for
//! the `&HAABBGGRR` color encoding.
//!
//! # Quick Start
//!
//! ```ignore
//! use melops_caption::fonts::FixedFonts;
//! use melops_caption::options::StyleOptions;
//! use melops_caption::pipeline::CaptionJob;
//! use melops_caption::captions::CaptionSource;
//! use melops_caption::replace::ReplaceMap;
//!
//! let options = StyleOptions::from_value(&serde_json::json!({ "style": "karaoke" }))?;
//! let job = CaptionJob::new(options, ReplaceMap::default(), (1920, 1080));
//! let fonts = FixedFonts::new(["Arial"]);
//! let ass = job.generate(CaptionSource::Transcript(result), &fonts)?;
//! ```

pub mod align;
pub mod captions;
pub mod color;
pub mod document;
pub mod error;
pub mod fonts;
pub mod layout;
pub mod options;
pub mod pipeline;
pub mod position;
pub mod replace;
pub mod style;
pub mod time;
pub mod types;
