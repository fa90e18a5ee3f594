//! Wavetrim - Audio Region Trimming and WAV Encoding
//!
//! Wavetrim excises a selected time range from a decoded multi-channel
//! audio buffer and serializes buffers as canonical 16-bit PCM WAV byte
//! streams.
//!
//! # Architecture
//!
//! The core is two pure, independent operations composed in sequence:
//! - [`engine::trim`]: buffer + selection -> new buffer with the
//!   `[start, end)` span removed
//! - [`engine::encode`]: buffer -> complete RIFF/WAVE byte stream
//!
//! Buffers are immutable values; every transform allocates a fresh
//! buffer and ownership of encoded bytes passes to the caller. The
//! [`editor`] module carries the host-side session state (working
//! buffer, active selection) so the core itself stays stateless.

pub mod cli;
pub mod editor;
pub mod engine;
pub mod error;

pub use editor::Editor;
pub use engine::{AudioBuffer, Region};
pub use error::{Result, WavetrimError};
