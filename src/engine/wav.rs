//! WAV Encoding
//!
//! Serializes a decoded buffer into an in-memory byte stream holding a
//! canonical uncompressed RIFF/WAVE file: a 44-byte header (16-byte
//! `fmt ` chunk, PCM format tag 1, 16 bits per sample) followed by
//! interleaved little-endian i16 frames. No compression, dithering, or
//! resampling takes place; this is a pure format transcode.
//!
//! The header is written field-by-field rather than through a container
//! library so the layout stays the plain 44-byte PCM form for any
//! channel count (container writers switch to WAVE_FORMAT_EXTENSIBLE
//! past stereo).
//!
//! Samples are clamped to [-1.0, 1.0] and quantized with symmetric
//! rounding (`round(s * 32767)`, half away from zero). Round-half-up by
//! adding 0.5 before truncation would bias negative samples upward by
//! one code; symmetric rounding keeps quantization error within one
//! 16-bit step in both directions.

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use log::debug;

use crate::engine::buffer::AudioBuffer;
use crate::error::{Result, WavetrimError};

/// Size in bytes of the canonical RIFF/WAVE header for 16-bit PCM
pub const WAV_HEADER_LEN: usize = 44;

/// Bytes per encoded sample (16-bit PCM)
pub const BYTES_PER_SAMPLE: usize = 2;

/// RIFF format tag for uncompressed PCM
const FORMAT_PCM: u16 = 1;

/// Clamp a float sample to [-1.0, 1.0] and quantize to i16
///
/// Symmetric rounding: half rounds away from zero. Output range is
/// [-32767, 32767]; -32768 is never produced.
#[inline]
pub fn quantize_sample(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16
}

/// Exact encoded size in bytes for a buffer, including the header
///
/// Holds for every valid buffer, including zero-length ones.
#[inline]
pub fn encoded_len(buffer: &AudioBuffer) -> usize {
    WAV_HEADER_LEN + buffer.len() * buffer.channels() * BYTES_PER_SAMPLE
}

/// Encode a buffer as a complete 16-bit PCM WAV byte stream
///
/// The output is deterministic: the 44-byte header followed by frames
/// interleaved channel-major (frame 0 channel 0, frame 0 channel 1,
/// ...). Ownership of the bytes passes entirely to the caller. The
/// input buffer is not modified.
///
/// # Errors
/// * `InvalidBuffer` for a degenerate buffer (zero channels, ragged
///   channel lengths, zero sample rate, or a shape whose header fields
///   overflow their fixed widths); no partial output is produced
pub fn encode(buffer: &AudioBuffer) -> Result<Vec<u8>> {
    buffer.validate()?;

    let num_channels = buffer.channels();
    if num_channels > u16::MAX as usize {
        return Err(WavetrimError::InvalidBuffer {
            reason: format!("{} channels exceed the WAV format limit", num_channels),
        });
    }

    let data_len = buffer.len() * num_channels * BYTES_PER_SAMPLE;
    let total_len = WAV_HEADER_LEN + data_len;
    if data_len > u32::MAX as usize - WAV_HEADER_LEN {
        return Err(WavetrimError::InvalidBuffer {
            reason: format!("{} data bytes exceed the RIFF size limit", data_len),
        });
    }

    let byte_rate = buffer.sample_rate() * num_channels as u32 * BYTES_PER_SAMPLE as u32;
    let block_align = (num_channels * BYTES_PER_SAMPLE) as u16;

    let mut out = Vec::with_capacity(total_len);

    // RIFF chunk descriptor
    out.write_all(b"RIFF")?;
    out.write_u32::<LittleEndian>(total_len as u32 - 8)?;
    out.write_all(b"WAVE")?;

    // "fmt " subchunk (16 bytes, plain PCM)
    out.write_all(b"fmt ")?;
    out.write_u32::<LittleEndian>(16)?;
    out.write_u16::<LittleEndian>(FORMAT_PCM)?;
    out.write_u16::<LittleEndian>(num_channels as u16)?;
    out.write_u32::<LittleEndian>(buffer.sample_rate())?;
    out.write_u32::<LittleEndian>(byte_rate)?;
    out.write_u16::<LittleEndian>(block_align)?;
    out.write_u16::<LittleEndian>(16)?;

    // "data" subchunk: interleaved little-endian i16 frames
    out.write_all(b"data")?;
    out.write_u32::<LittleEndian>(data_len as u32)?;
    for frame in 0..buffer.len() {
        for ch in 0..num_channels {
            out.write_i16::<LittleEndian>(quantize_sample(buffer.channel(ch)[frame]))?;
        }
    }

    debug!(
        "encoded {} frames x {} channels at {}Hz into {} bytes",
        buffer.len(),
        num_channels,
        buffer.sample_rate(),
        out.len()
    );
    debug_assert_eq!(out.len(), encoded_len(buffer));

    Ok(out)
}
