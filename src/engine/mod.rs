//! Audio Engine Module
//!
//! Core audio processing:
//! - Decoded buffer value type
//! - Selection regions and region trimming
//! - 16-bit PCM WAV encoding
//! - File decode/export

pub mod buffer;
pub mod io;
pub mod region;
pub mod trim;
pub mod wav;

pub use buffer::AudioBuffer;
pub use io::{export_audio, generate_stereo_test_tone, generate_test_tone, import_audio};
pub use region::{Region, SampleRange};
pub use trim::trim;
pub use wav::{encode, encoded_len, quantize_sample, BYTES_PER_SAMPLE, WAV_HEADER_LEN};
