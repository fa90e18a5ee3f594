//! Audio Buffer Management
//!
//! Provides the core decoded-audio value type. Buffers store planar
//! (non-interleaved) 32-bit float samples in the nominal range
//! [-1.0, 1.0]; values outside that range are legal in memory and are
//! clamped at encode time.
//!
//! A buffer is treated as an immutable value once handed to the core:
//! every transform allocates a fresh buffer rather than mutating its
//! input.

use crate::error::{Result, WavetrimError};

/// Core decoded-audio buffer
///
/// Stores audio as non-interleaved 32-bit floating point samples.
/// Each channel is a separate `Vec<f32>` of identical length.
///
/// # Example
/// ```
/// use wavetrim::engine::AudioBuffer;
///
/// // One second of stereo silence at 44.1kHz
/// let buffer = AudioBuffer::new(2, 44100, 44100);
/// assert_eq!(buffer.channels(), 2);
/// assert_eq!(buffer.len(), 44100);
/// assert!((buffer.duration_secs() - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// Sample data: outer Vec is channels, inner Vec is sample frames
    samples: Vec<Vec<f32>>,
    /// Sample rate in Hz
    sample_rate: u32,
}

impl AudioBuffer {
    /// Create a new buffer of silence with the given shape
    ///
    /// # Arguments
    /// * `num_channels` - Number of channels (1 = mono, 2 = stereo)
    /// * `num_samples` - Number of sample frames per channel
    /// * `sample_rate` - Sample rate in Hz
    pub fn new(num_channels: usize, num_samples: usize, sample_rate: u32) -> Self {
        Self {
            samples: vec![vec![0.0_f32; num_samples]; num_channels],
            sample_rate,
        }
    }

    /// Create a buffer from planar channel data
    ///
    /// # Errors
    /// * `InvalidBuffer` if there are no channels, the sample rate is
    ///   zero, or the channels have differing lengths
    pub fn from_channels(channels: Vec<Vec<f32>>, sample_rate: u32) -> Result<Self> {
        let buffer = Self {
            samples: channels,
            sample_rate,
        };
        buffer.validate()?;
        Ok(buffer)
    }

    /// Create a buffer from interleaved sample data (L, R, L, R, ...)
    ///
    /// # Errors
    /// * `InvalidBuffer` if the data length is not divisible by the
    ///   channel count, or the shape is otherwise degenerate
    pub fn from_interleaved(
        interleaved: &[f32],
        num_channels: usize,
        sample_rate: u32,
    ) -> Result<Self> {
        if num_channels == 0 {
            return Err(WavetrimError::InvalidBuffer {
                reason: "buffer has zero channels".to_string(),
            });
        }
        if interleaved.len() % num_channels != 0 {
            return Err(WavetrimError::InvalidBuffer {
                reason: format!(
                    "interleaved data length {} is not divisible by channel count {}",
                    interleaved.len(),
                    num_channels
                ),
            });
        }

        let num_samples = interleaved.len() / num_channels;
        let mut samples = vec![Vec::with_capacity(num_samples); num_channels];
        for frame in interleaved.chunks_exact(num_channels) {
            for (ch, &sample) in frame.iter().enumerate() {
                samples[ch].push(sample);
            }
        }

        Self::from_channels(samples, sample_rate)
    }

    /// Convert the buffer to interleaved format (channel-major per frame)
    pub fn to_interleaved(&self) -> Vec<f32> {
        let num_channels = self.channels();
        let num_samples = self.len();

        let mut interleaved = Vec::with_capacity(num_channels * num_samples);
        for frame in 0..num_samples {
            for channel in &self.samples {
                interleaved.push(channel[frame]);
            }
        }
        interleaved
    }

    /// Get the number of channels
    #[inline]
    pub fn channels(&self) -> usize {
        self.samples.len()
    }

    /// Get the number of sample frames per channel
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.first().map(|ch| ch.len()).unwrap_or(0)
    }

    /// Check if the buffer holds no sample frames
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample rate in Hz
    #[inline]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Duration in seconds (`len / sample_rate`)
    #[inline]
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.len() as f64 / self.sample_rate as f64
    }

    /// Get immutable access to a channel's samples
    ///
    /// # Panics
    /// Panics if the channel index is out of bounds
    #[inline]
    pub fn channel(&self, index: usize) -> &[f32] {
        &self.samples[index]
    }

    /// Get a sample at the specified channel and frame index
    #[inline]
    pub fn get_sample(&self, channel: usize, index: usize) -> Option<f32> {
        self.samples
            .get(channel)
            .and_then(|ch| ch.get(index).copied())
    }

    /// Validate the structural invariants of the buffer
    ///
    /// A zero-length buffer is valid; a zero-channel buffer, a zero
    /// sample rate, or ragged channel lengths are not.
    ///
    /// # Errors
    /// * `InvalidBuffer` describing the violated invariant
    pub fn validate(&self) -> Result<()> {
        if self.samples.is_empty() {
            return Err(WavetrimError::InvalidBuffer {
                reason: "buffer has zero channels".to_string(),
            });
        }
        if self.sample_rate == 0 {
            return Err(WavetrimError::InvalidBuffer {
                reason: "sample rate is zero".to_string(),
            });
        }
        let expected = self.samples[0].len();
        for (ch, channel) in self.samples.iter().enumerate() {
            if channel.len() != expected {
                return Err(WavetrimError::InvalidBuffer {
                    reason: format!(
                        "channel {} has {} samples, expected {}",
                        ch,
                        channel.len(),
                        expected
                    ),
                });
            }
        }
        Ok(())
    }

    /// Check if all samples are finite (not NaN or Infinity)
    pub fn is_finite(&self) -> bool {
        self.samples
            .iter()
            .flat_map(|ch| ch.iter())
            .all(|s| s.is_finite())
    }

    /// Peak absolute sample value across all channels
    pub fn peak(&self) -> f32 {
        self.samples
            .iter()
            .flat_map(|ch| ch.iter())
            .map(|&s| s.abs())
            .fold(0.0_f32, f32::max)
    }
}
