//! Audio file I/O
//!
//! Decodes WAV files into [`AudioBuffer`] values and writes encoded
//! byte streams back to disk. Integer sources of 8/16/24/32 bits and
//! 32-bit float sources are normalized to planar f32 on import. The
//! sample rate is taken as-is; this crate never resamples.

use std::fs;
use std::path::Path;

use hound::{SampleFormat, WavReader};
use log::info;

use crate::engine::buffer::AudioBuffer;
use crate::engine::wav;
use crate::error::{Result, WavetrimError};

/// Import a WAV file as a decoded buffer
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidAudio` - If the file is not a readable WAV file
/// * `UnsupportedFormat` - If the bit depth is not supported
pub fn import_audio(path: &Path) -> Result<AudioBuffer> {
    if !path.exists() {
        return Err(WavetrimError::FileNotFound {
            path: path.display().to_string(),
            source: None,
        });
    }

    let reader = WavReader::open(path).map_err(|e| WavetrimError::InvalidAudio {
        reason: format!("Failed to open WAV file: {}", e),
        source: Some(Box::new(e)),
    })?;

    let spec = reader.spec();
    let channels = spec.channels as usize;
    let sample_rate = spec.sample_rate;

    let samples_f32 = read_samples_as_f32(reader, spec.bits_per_sample, spec.sample_format)?;
    let buffer = AudioBuffer::from_interleaved(&samples_f32, channels, sample_rate)?;

    info!(
        "imported {}: {} channels, {} frames at {}Hz ({:.2}s)",
        path.display(),
        buffer.channels(),
        buffer.len(),
        buffer.sample_rate(),
        buffer.duration_secs()
    );

    Ok(buffer)
}

/// Encode a buffer and write the byte stream to a file
///
/// The file only appears on success; encoding errors produce no output.
pub fn export_audio(buffer: &AudioBuffer, path: &Path) -> Result<()> {
    let bytes = wav::encode(buffer)?;
    fs::write(path, &bytes)?;

    info!("exported {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Generate a mono test tone (sine wave)
///
/// # Arguments
/// * `frequency` - Frequency of the sine wave in Hz
/// * `duration_secs` - Duration of the tone in seconds
/// * `sample_rate` - Sample rate in Hz
pub fn generate_test_tone(frequency: f32, duration_secs: f32, sample_rate: u32) -> AudioBuffer {
    let num_samples = (duration_secs * sample_rate as f32) as usize;
    let angular_freq = 2.0 * std::f32::consts::PI * frequency / sample_rate as f32;

    let samples: Vec<f32> = (0..num_samples)
        .map(|i| (angular_freq * i as f32).sin())
        .collect();

    // Shape is valid by construction
    AudioBuffer::from_channels(vec![samples], sample_rate)
        .unwrap_or_else(|_| AudioBuffer::new(1, 0, sample_rate))
}

/// Generate a stereo test tone with different frequencies per channel
pub fn generate_stereo_test_tone(
    freq_left: f32,
    freq_right: f32,
    duration_secs: f32,
    sample_rate: u32,
) -> AudioBuffer {
    let num_samples = (duration_secs * sample_rate as f32) as usize;
    let angular_freq_l = 2.0 * std::f32::consts::PI * freq_left / sample_rate as f32;
    let angular_freq_r = 2.0 * std::f32::consts::PI * freq_right / sample_rate as f32;

    let left: Vec<f32> = (0..num_samples)
        .map(|i| (angular_freq_l * i as f32).sin())
        .collect();
    let right: Vec<f32> = (0..num_samples)
        .map(|i| (angular_freq_r * i as f32).sin())
        .collect();

    AudioBuffer::from_channels(vec![left, right], sample_rate)
        .unwrap_or_else(|_| AudioBuffer::new(2, 0, sample_rate))
}

/// Read samples from a WAV reader and normalize to f32
fn read_samples_as_f32<R: std::io::Read>(
    mut reader: WavReader<R>,
    bits_per_sample: u16,
    sample_format: SampleFormat,
) -> Result<Vec<f32>> {
    match sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<Vec<f32>, _>>()
            .map_err(|e| WavetrimError::InvalidAudio {
                reason: format!("Failed to read float samples: {}", e),
                source: Some(Box::new(e)),
            }),
        SampleFormat::Int => match bits_per_sample {
            8 => reader
                .samples::<i8>()
                .map(|s| s.map(|v| v as f32 / 128.0))
                .collect::<std::result::Result<Vec<f32>, _>>()
                .map_err(|e| WavetrimError::InvalidAudio {
                    reason: format!("Failed to read 8-bit samples: {}", e),
                    source: Some(Box::new(e)),
                }),
            16 => reader
                .samples::<i16>()
                .map(|s| s.map(|v| v as f32 / 32768.0))
                .collect::<std::result::Result<Vec<f32>, _>>()
                .map_err(|e| WavetrimError::InvalidAudio {
                    reason: format!("Failed to read 16-bit samples: {}", e),
                    source: Some(Box::new(e)),
                }),
            24 => {
                // 24-bit stored as i32 in hound
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / 8388608.0))
                    .collect::<std::result::Result<Vec<f32>, _>>()
                    .map_err(|e| WavetrimError::InvalidAudio {
                        reason: format!("Failed to read 24-bit samples: {}", e),
                        source: Some(Box::new(e)),
                    })
            }
            32 => reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / 2147483648.0))
                .collect::<std::result::Result<Vec<f32>, _>>()
                .map_err(|e| WavetrimError::InvalidAudio {
                    reason: format!("Failed to read 32-bit int samples: {}", e),
                    source: Some(Box::new(e)),
                }),
            _ => Err(WavetrimError::UnsupportedFormat {
                format: format!("{}-bit integer audio", bits_per_sample),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_generate_test_tone() {
        let buffer = generate_test_tone(440.0, 1.0, 44100);

        assert_eq!(buffer.len(), 44100);
        assert_eq!(buffer.channels(), 1);

        // The signal should cross zero about half a cycle in
        let samples_per_cycle = 44100.0 / 440.0;
        let zero_crossing = (samples_per_cycle / 2.0) as usize;
        assert!(buffer.channel(0)[zero_crossing].abs() < 0.1);
    }

    #[test]
    fn test_generate_stereo_test_tone() {
        let buffer = generate_stereo_test_tone(440.0, 880.0, 0.5, 44100);

        assert_eq!(buffer.len(), 22050);
        assert_eq!(buffer.channels(), 2);

        // At sample 100, left (440Hz) and right (880Hz) should differ
        assert!((buffer.channel(0)[100] - buffer.channel(1)[100]).abs() > 0.01);
    }

    #[test]
    fn test_round_trip_mono() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test_mono.wav");

        let original = generate_test_tone(440.0, 0.5, 44100);
        export_audio(&original, &path).unwrap();
        let imported = import_audio(&path).unwrap();

        assert_eq!(imported.channels(), original.channels());
        assert_eq!(imported.len(), original.len());
        assert_eq!(imported.sample_rate(), original.sample_rate());

        // Encode scales by 32767, decode normalizes by 32768, so the
        // round trip can err up to (0.5 + |s|)/32768
        for (orig, imp) in original.channel(0).iter().zip(imported.channel(0)) {
            assert!(
                (orig - imp).abs() <= 1.5 / 32768.0 + 1e-6,
                "Sample mismatch: {} vs {}",
                orig,
                imp
            );
        }
    }

    #[test]
    fn test_round_trip_stereo() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test_stereo.wav");

        let original = generate_stereo_test_tone(440.0, 880.0, 0.25, 48000);
        export_audio(&original, &path).unwrap();
        let imported = import_audio(&path).unwrap();

        assert_eq!(imported.channels(), 2);
        assert_eq!(imported.len(), original.len());

        for ch in 0..2 {
            for (orig, imp) in original.channel(ch).iter().zip(imported.channel(ch)) {
                assert!(
                    (orig - imp).abs() <= 1.5 / 32768.0 + 1e-6,
                    "Sample mismatch in channel {}: {} vs {}",
                    ch,
                    orig,
                    imp
                );
            }
        }
    }

    #[test]
    fn test_round_trip_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test_empty.wav");

        let original = AudioBuffer::new(2, 0, 8000);
        export_audio(&original, &path).unwrap();

        assert_eq!(fs::metadata(&path).unwrap().len(), 44);

        let imported = import_audio(&path).unwrap();
        assert_eq!(imported.channels(), 2);
        assert_eq!(imported.len(), 0);
        assert_eq!(imported.sample_rate(), 8000);
    }

    #[test]
    fn test_import_nonexistent_file() {
        let result = import_audio(Path::new("/nonexistent/path/audio.wav"));
        match result.unwrap_err() {
            WavetrimError::FileNotFound { path, .. } => {
                assert!(path.contains("nonexistent"));
            }
            other => panic!("Expected FileNotFound error, got: {:?}", other),
        }
    }

    #[test]
    fn test_import_garbage_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("not_audio.wav");
        fs::write(&path, b"definitely not a RIFF file").unwrap();

        let result = import_audio(&path);
        assert!(matches!(result, Err(WavetrimError::InvalidAudio { .. })));
    }

    #[test]
    fn test_export_failed_encode_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("never_written.wav");

        let degenerate = AudioBuffer::new(0, 100, 44100);
        assert!(export_audio(&degenerate, &path).is_err());
        assert!(!path.exists());
    }
}
