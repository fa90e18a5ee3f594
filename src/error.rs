//! Error handling for wavetrim
//!
//! Every error here is recoverable at the caller boundary: the operation
//! is aborted and no partial output is produced or written.

use thiserror::Error;

/// Result type alias for wavetrim operations
pub type Result<T> = std::result::Result<T, WavetrimError>;

/// Main error type for wavetrim operations
#[derive(Error, Debug)]
pub enum WavetrimError {
    // Trim / selection errors
    #[error("Invalid trim range [{start:.2}, {end:.2}]: {reason}")]
    InvalidRange { start: f64, end: f64, reason: String },

    // Buffer errors
    #[error("Invalid audio buffer: {reason}")]
    InvalidBuffer { reason: String },

    #[error("No input available: {reason}")]
    UnavailableInput { reason: String },

    // File errors
    #[error("File not found: {path}")]
    FileNotFound {
        path: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Invalid audio file: {reason}")]
    InvalidAudio {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Unsupported audio format: {format}")]
    UnsupportedFormat { format: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WavetrimError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            WavetrimError::InvalidRange { .. } => "INVALID_RANGE",
            WavetrimError::InvalidBuffer { .. } => "INVALID_BUFFER",
            WavetrimError::UnavailableInput { .. } => "UNAVAILABLE_INPUT",
            WavetrimError::FileNotFound { .. } => "FILE_NOT_FOUND",
            WavetrimError::InvalidAudio { .. } => "INVALID_AUDIO",
            WavetrimError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            WavetrimError::Io(_) => "IO_ERROR",
            WavetrimError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error is recoverable
    ///
    /// Core operations are pure and deterministic, so retrying without
    /// different input would not change the outcome; "recoverable" means
    /// the host can report and continue.
    pub fn is_recoverable(&self) -> bool {
        match self {
            WavetrimError::InvalidRange { .. } => true,
            WavetrimError::InvalidBuffer { .. } => true,
            WavetrimError::UnavailableInput { .. } => true,
            WavetrimError::FileNotFound { .. } => true,
            WavetrimError::InvalidAudio { .. } => true,
            WavetrimError::UnsupportedFormat { .. } => true,
            _ => false,
        }
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            WavetrimError::InvalidRange { .. } => vec![
                "Check that the selection end is not before its start",
                "Keep both bounds within the audio duration",
            ],
            WavetrimError::UnavailableInput { .. } => vec![
                "Load an audio file before trimming",
                "Select a region before trimming",
            ],
            WavetrimError::FileNotFound { .. } => vec![
                "Check the file path is correct",
                "Verify the file hasn't been moved or deleted",
            ],
            WavetrimError::InvalidAudio { .. } => vec![
                "Check if the file plays in another application",
                "The file may be corrupted - try re-exporting from source",
            ],
            WavetrimError::UnsupportedFormat { .. } => vec![
                "Convert the file to integer PCM WAV first",
                "Supported sources: 8/16/24/32-bit int and 32-bit float WAV",
            ],
            _ => vec![],
        }
    }
}
