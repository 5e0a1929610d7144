//! Label subcommand body - align, render, and write the transcript artifact.

use crate::cli::Cli;
use crate::input::{self, TranscriptionInput};
use eyre::{Context, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use voxalign::pipeline::label_transcript;
use voxalign::render::{OutputFormat, Renderer};
use voxalign::types::{Diarization, UnifiedTranscript};

pub fn execute(cli: Cli) -> Result<()> {
    let transcription = TranscriptionInput::load(&cli.input)?;

    let diarization = match &cli.turns {
        Some(path) => input::load_turns(path)?,
        None => {
            tracing::info!("no diarization turns supplied, using silence-gap fallback");
            Diarization::Unavailable
        }
    };

    let transcript = label_transcript(
        transcription.segments(),
        &diarization,
        transcription.language(),
        transcription.duration(),
    )?;

    let source = cli
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.input.display().to_string());

    let renderer = Renderer::new(source);
    let format = OutputFormat::from(cli.format);
    let output = renderer.render(&transcript, format)?;

    if cli.stdout {
        print!("{}", output.content);
        return Ok(());
    }

    let path = output_path(&cli.input, cli.output.as_deref(), &renderer, format);

    std::fs::write(&path, &output.content)
        .wrap_err_with(|| format!("failed to write transcript: {}", path.display()))?;

    tracing::info!(path = %path.display(), "wrote transcript");
    print_summary(&transcript, &cli.input, &path);

    Ok(())
}

/// Artifact path: input stem, generation timestamp, format suffix.
fn output_path(
    input: &Path,
    output_dir: Option<&Path>,
    renderer: &Renderer,
    format: OutputFormat,
) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "transcript".to_string());
    let timestamp = renderer.generated_at.format("%Y%m%d_%H%M%S");
    let name = format!("{stem}_transcript_{timestamp}{}", format.file_suffix());

    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();

    dir.join(name)
}

fn print_summary(transcript: &UnifiedTranscript, input: &Path, output: &Path) {
    let speakers: BTreeSet<&str> = transcript
        .segments
        .iter()
        .map(|segment| segment.speaker.as_str())
        .collect();

    println!("{}", "=".repeat(60));
    println!("TRANSCRIPTION COMPLETE");
    println!("{}", "=".repeat(60));
    println!("Input file: {}", input.display());
    println!("Output file: {}", output.display());
    println!("Text length: {} characters", transcript.full_text.len());
    println!("Total segments: {}", transcript.segments.len());
    println!(
        "Detected speakers: {}",
        speakers.into_iter().collect::<Vec<_>>().join(", ")
    );

    if !transcript.segments.is_empty() {
        println!("\nPreview:");
        for segment in transcript.segments.iter().take(3) {
            let text = segment.text.trim();
            let preview: String = text.chars().take(100).collect();
            let ellipsis = if text.chars().count() > 100 { "..." } else { "" };
            println!("  [{}]: {preview}{ellipsis}", segment.speaker);
        }
    }
}
