//! Selection Regions
//!
//! A region is a `[start, end)` time interval in seconds, supplied by
//! the host's region-selection surface. Bounds are quantized to two
//! decimal places on construction, matching the selection UI's
//! granularity, and are validated against a concrete buffer only when
//! the trim is performed.

use serde::{Deserialize, Serialize};

use crate::engine::buffer::AudioBuffer;
use crate::error::{Result, WavetrimError};

/// Round a time bound to two decimal places (10ms selection granularity)
#[inline]
fn round_to_centis(secs: f64) -> f64 {
    (secs * 100.0).round() / 100.0
}

/// A selected time interval `[start, end)` in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    start: f64,
    end: f64,
}

impl Region {
    /// Create a region, rounding both bounds to two decimal places
    ///
    /// No validation happens here: bounds are only meaningful relative
    /// to a buffer, which is not known until [`Region::resolve`].
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start: round_to_centis(start),
            end: round_to_centis(end),
        }
    }

    /// Start of the region in seconds (already rounded)
    pub fn start(&self) -> f64 {
        self.start
    }

    /// End of the region in seconds (already rounded)
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Validate this region against a buffer and resolve it to a half-open
    /// sample-frame range `[start_sample, end_sample)`
    ///
    /// Sample indices are `floor(bound * sample_rate)`, clamped to
    /// `[0, buffer.len()]`.
    ///
    /// # Errors
    /// * `InvalidRange` if `end < start`, `start < 0`, or
    ///   `end > buffer.duration_secs()`
    pub fn resolve(&self, buffer: &AudioBuffer) -> Result<SampleRange> {
        let duration = buffer.duration_secs();

        if self.end < self.start {
            return Err(WavetrimError::InvalidRange {
                start: self.start,
                end: self.end,
                reason: "end is before start".to_string(),
            });
        }
        if self.start < 0.0 {
            return Err(WavetrimError::InvalidRange {
                start: self.start,
                end: self.end,
                reason: "start is before 0".to_string(),
            });
        }
        if self.end > duration {
            return Err(WavetrimError::InvalidRange {
                start: self.start,
                end: self.end,
                reason: format!("end is past the audio duration ({:.2}s)", duration),
            });
        }

        let rate = buffer.sample_rate() as f64;
        let start_sample = ((self.start * rate).floor() as usize).min(buffer.len());
        let end_sample = ((self.end * rate).floor() as usize).min(buffer.len());

        Ok(SampleRange {
            start: start_sample,
            end: end_sample,
        })
    }
}

/// A half-open sample-frame range `[start, end)` within a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRange {
    pub start: usize,
    pub end: usize,
}

impl SampleRange {
    /// Number of sample frames covered by the range
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when the range covers no frames (a no-op trim)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
