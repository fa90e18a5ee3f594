//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::Path;

use log::info;
use serde::Serialize;

use crate::editor::Editor;
use crate::engine::{self, io};
use crate::error::Result;

/// Buffer metadata reported by the `info` command
#[derive(Debug, Serialize)]
struct BufferInfo {
    channels: usize,
    sample_rate: u32,
    frames: usize,
    duration_secs: f64,
    peak: f32,
    encoded_bytes: usize,
}

/// Show decoded-buffer metadata for a WAV file.
pub fn info(input: &Path, json: bool) -> Result<()> {
    let buffer = io::import_audio(input)?;

    let report = BufferInfo {
        channels: buffer.channels(),
        sample_rate: buffer.sample_rate(),
        frames: buffer.len(),
        duration_secs: buffer.duration_secs(),
        peak: buffer.peak(),
        encoded_bytes: engine::encoded_len(&buffer),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("File: {}", input.display());
        println!("Channels: {}", report.channels);
        println!("Sample rate: {} Hz", report.sample_rate);
        println!("Frames: {}", report.frames);
        println!("Duration: {:.2}s", report.duration_secs);
        println!("Peak: {:.4}", report.peak);
        println!("Encoded size: {} bytes", report.encoded_bytes);
    }

    Ok(())
}

/// Remove a region from a file and write the re-encoded result.
pub fn trim(input: &Path, start: f64, end: f64, output: &Path) -> Result<()> {
    info!(
        "trimming [{:.2}, {:.2}) from {}",
        start,
        end,
        input.display()
    );

    let mut editor = Editor::new();
    editor.load(input)?;
    editor.select(start, end);
    editor.trim_selection()?;
    editor.export(output)?;

    let remaining = editor.buffer().map(|b| b.duration_secs()).unwrap_or(0.0);
    println!("Trimmed [{:.2}s, {:.2}s) from {}", start, end, input.display());
    println!("Wrote {} ({:.2}s remain)", output.display(), remaining);

    Ok(())
}

/// Generate a sine test tone and write it as a WAV file.
pub fn tone(output: &Path, freq: f32, duration: f32, sample_rate: u32) -> Result<()> {
    info!(
        "generating {}Hz tone, {:.2}s at {}Hz",
        freq, duration, sample_rate
    );

    let buffer = io::generate_test_tone(freq, duration, sample_rate);
    io::export_audio(&buffer, output)?;

    println!("Wrote {}Hz tone to {}", freq, output.display());

    Ok(())
}
