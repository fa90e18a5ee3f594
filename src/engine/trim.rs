//! Region Trimming
//!
//! Excises a selected `[start, end)` interval from a decoded buffer,
//! producing a fresh buffer with the span removed. Channel count and
//! sample rate are preserved; each channel is transformed identically
//! and independently, so stereo/multichannel phase alignment is kept.

use log::debug;

use crate::engine::buffer::AudioBuffer;
use crate::engine::region::Region;
use crate::error::Result;

/// Remove `region` from `buffer`, returning a new buffer
///
/// The input is never mutated. A selection that resolves to zero frames
/// yields a structurally new buffer with identical content (a defined
/// no-op, not an error); a selection covering the whole buffer yields a
/// valid zero-length buffer.
///
/// # Errors
/// * `InvalidBuffer` if the buffer's structural invariants do not hold
/// * `InvalidRange` if the region bounds are invalid for this buffer
pub fn trim(buffer: &AudioBuffer, region: Region) -> Result<AudioBuffer> {
    buffer.validate()?;
    let range = region.resolve(buffer)?;

    let new_len = buffer.len() - range.len();
    debug!(
        "trimming frames [{}, {}) of {}: {} frames remain",
        range.start,
        range.end,
        buffer.len(),
        new_len
    );

    let mut channels = Vec::with_capacity(buffer.channels());
    for ch in 0..buffer.channels() {
        let old = buffer.channel(ch);
        let mut new = Vec::with_capacity(new_len);
        // Head before the excised span, then tail after it, contiguously
        new.extend_from_slice(&old[..range.start]);
        new.extend_from_slice(&old[range.end..]);
        channels.push(new);
    }

    AudioBuffer::from_channels(channels, buffer.sample_rate())
}
