//! Wavetrim CLI - Audio Region Trimmer
//!
//! Command-line interface for trimming audio regions and re-encoding
//! the result as 16-bit PCM WAV.

use clap::Parser;
use env_logger::Env;
use log::error;
use std::process::ExitCode;

use wavetrim::cli::{commands, Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let result = match cli.command {
        Some(Commands::Info { input, json }) => commands::info(&input, json),
        Some(Commands::Trim {
            input,
            start,
            end,
            output,
        }) => commands::trim(&input, start, end, &output),
        Some(Commands::Tone {
            output,
            freq,
            duration,
            sample_rate,
        }) => commands::tone(&output, freq, duration, sample_rate),
        None => {
            println!("Wavetrim v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Core errors are recoverable: report and abort this operation
            error!("[{}] {}", err.error_code(), err);
            for suggestion in err.recovery_suggestions() {
                error!("  hint: {}", suggestion);
            }
            ExitCode::FAILURE
        }
    }
}
