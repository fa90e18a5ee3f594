//! Editor Session State
//!
//! The host-facing surface: holds the working buffer and the active
//! selection, and wires the pure core operations together. The core
//! itself (trim, encode) never tracks this state; the editor sources
//! current values explicitly before each call, so there is no hidden
//! coupling to selection or load events.
//!
//! A successful trim replaces the working buffer with the trimmed copy
//! and clears the selection, mirroring a reload of the edited audio.
//! A failed trim leaves both untouched.

use std::path::Path;

use log::{info, warn};

use crate::engine::buffer::AudioBuffer;
use crate::engine::region::Region;
use crate::engine::{io, trim, wav};
use crate::error::{Result, WavetrimError};

/// An editing session over one working buffer
#[derive(Debug, Default)]
pub struct Editor {
    buffer: Option<AudioBuffer>,
    selection: Option<Region>,
}

impl Editor {
    /// Create an empty session with no audio loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a WAV file as the working buffer
    ///
    /// Replaces any previous buffer and clears the selection.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let buffer = io::import_audio(path)?;
        self.set_buffer(buffer);
        Ok(())
    }

    /// Adopt an already-decoded buffer as the working buffer
    pub fn set_buffer(&mut self, buffer: AudioBuffer) {
        self.buffer = Some(buffer);
        self.selection = None;
    }

    /// The current working buffer, if any
    pub fn buffer(&self) -> Option<&AudioBuffer> {
        self.buffer.as_ref()
    }

    /// The active selection, if any
    pub fn selection(&self) -> Option<Region> {
        self.selection
    }

    /// Select a `[start, end)` region in seconds
    ///
    /// Bounds are rounded to the 10ms selection granularity; they are
    /// validated against the buffer when the trim happens.
    pub fn select(&mut self, start: f64, end: f64) {
        let region = Region::new(start, end);
        info!(
            "selected region [{:.2}, {:.2})",
            region.start(),
            region.end()
        );
        self.selection = Some(region);
    }

    /// Drop the active selection
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Trim the selected region out of the working buffer
    ///
    /// On success the working buffer is replaced by the trimmed copy and
    /// the selection is cleared. On failure nothing changes.
    ///
    /// # Errors
    /// * `UnavailableInput` if no buffer is loaded or nothing is selected
    /// * `InvalidRange` if the selection does not fit the buffer
    pub fn trim_selection(&mut self) -> Result<()> {
        let buffer = self.buffer.as_ref().ok_or_else(|| {
            WavetrimError::UnavailableInput {
                reason: "no audio loaded".to_string(),
            }
        })?;
        let region = self.selection.ok_or_else(|| {
            WavetrimError::UnavailableInput {
                reason: "no region selected".to_string(),
            }
        })?;

        let trimmed = trim::trim(buffer, region)?;
        if trimmed.is_empty() {
            // Permitted, but some players reject empty WAV data
            warn!("trim removed all audio; working buffer is now empty");
        }
        info!(
            "trimmed [{:.2}, {:.2}): {} frames remain",
            region.start(),
            region.end(),
            trimmed.len()
        );

        self.buffer = Some(trimmed);
        self.selection = None;
        Ok(())
    }

    /// Encode the working buffer as a WAV byte stream
    ///
    /// # Errors
    /// * `UnavailableInput` if no buffer is loaded
    pub fn encode(&self) -> Result<Vec<u8>> {
        let buffer = self.buffer.as_ref().ok_or_else(|| {
            WavetrimError::UnavailableInput {
                reason: "no audio loaded".to_string(),
            }
        })?;
        wav::encode(buffer)
    }

    /// Encode the working buffer and write it to a file
    pub fn export(&self, path: &Path) -> Result<()> {
        let bytes = self.encode()?;
        std::fs::write(path, &bytes)?;
        info!("exported {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}
