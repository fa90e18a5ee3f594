//! CLI Module
//!
//! Command-line interface for the wavetrim audio trimmer.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wavetrim - trim audio regions and re-encode as 16-bit PCM WAV
#[derive(Parser, Debug)]
#[command(name = "wavetrim")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show decoded-buffer metadata for a WAV file
    #[command(name = "info")]
    Info {
        /// Input audio file
        input: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a [start, end) region and write the result as 16-bit PCM WAV
    #[command(name = "trim")]
    Trim {
        /// Input audio file
        input: PathBuf,

        /// Region start in seconds (rounded to 10ms)
        #[arg(short, long)]
        start: f64,

        /// Region end in seconds (rounded to 10ms)
        #[arg(short, long)]
        end: f64,

        /// Output WAV file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Generate a sine test tone WAV file
    #[command(name = "tone")]
    Tone {
        /// Output WAV file
        output: PathBuf,

        /// Tone frequency in Hz
        #[arg(short, long, default_value_t = 440.0)]
        freq: f32,

        /// Duration in seconds
        #[arg(short, long, default_value_t = 1.0)]
        duration: f32,

        /// Sample rate in Hz
        #[arg(short = 'r', long, default_value_t = 44100)]
        sample_rate: u32,
    },
}
