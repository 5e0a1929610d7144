//! voxalign-cli: command-line front end for the voxalign library.
//!
//! Loads already-computed transcription and diarization results from JSON
//! files, labels segments with speakers, and writes the rendered transcript
//! in the requested format. No models, no network.

pub mod cli;
pub mod input;
pub mod label;
