//! CLI argument definitions using clap.

use clap::{Parser, ValueEnum};
use eyre::Result;
use std::path::PathBuf;
use voxalign::render::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "voxalign")]
#[command(about = "Attach speaker labels to a transcript and render it")]
#[command(version)]
pub struct Cli {
    /// Path to the transcription result JSON
    pub input: PathBuf,

    /// Path to diarization turns JSON; omit to use the silence-gap fallback
    #[arg(short, long)]
    pub turns: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: Format,

    /// Output directory (default: alongside the input file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the rendered output to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

/// Output format selection on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Plain narrative text with a header block
    Text,
    /// Speaker-grouped report with a detailed timeline
    Report,
    /// Machine-readable JSON record
    Json,
    /// SRT subtitles with speaker labels
    Srt,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::PlainText,
            Format::Report => OutputFormat::SpeakerReport,
            Format::Json => OutputFormat::StructuredRecord,
            Format::Srt => OutputFormat::Subtitle,
        }
    }
}

/// Execute CLI command - separated for testing.
pub fn run(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    crate::label::execute(cli)
}
