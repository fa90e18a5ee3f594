//! Integration Tests
//!
//! Tests for component interaction and the full trim -> encode pipeline,
//! verified against hound as an independent, conformant WAV reader.

use hound::{SampleFormat, WavReader};
use tempfile::tempdir;

use wavetrim::engine::{
    encode, encoded_len, generate_stereo_test_tone, generate_test_tone, import_audio, trim,
    AudioBuffer, Region,
};
use wavetrim::{Editor, WavetrimError};

// === Trim -> encode pipeline ===

#[test]
fn test_trim_quarter_second_of_mono_silence() {
    // 1s of all-zero mono at 44.1kHz; trim [0.25, 0.5)
    let buffer = AudioBuffer::new(1, 44100, 44100);
    let trimmed = trim(&buffer, Region::new(0.25, 0.5)).unwrap();

    assert_eq!(trimmed.len(), 33075);
    assert!(trimmed.channel(0).iter().all(|&s| s == 0.0));

    let bytes = encode(&trimmed).unwrap();
    assert_eq!(bytes.len(), 66194);
    assert!(bytes[44..].iter().all(|&b| b == 0));
}

#[test]
fn test_empty_stereo_encodes_header_only() {
    let buffer = AudioBuffer::new(2, 0, 8000);
    let bytes = encode(&buffer).unwrap();

    assert_eq!(bytes.len(), 44);
    assert_eq!(u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]), 36);
    assert_eq!(
        u32::from_le_bytes([bytes[40], bytes[41], bytes[42], bytes[43]]),
        0
    );
}

#[test]
fn test_noop_trim_preserves_encoded_size() {
    let buffer = generate_stereo_test_tone(440.0, 880.0, 0.5, 44100);
    let noop = trim(&buffer, Region::new(0.0, 0.0)).unwrap();

    assert_eq!(noop.len(), buffer.len());
    assert_eq!(
        encode(&noop).unwrap().len(),
        encode(&buffer).unwrap().len()
    );
}

#[test]
fn test_encoded_size_law_across_shapes() {
    for (channels, frames, rate) in [(1, 0, 44100), (2, 1, 8000), (1, 44100, 44100), (3, 777, 22050)]
    {
        let buffer = AudioBuffer::new(channels, frames, rate);
        let bytes = encode(&buffer).unwrap();
        assert_eq!(bytes.len(), 44 + frames * channels * 2);
        assert_eq!(bytes.len(), encoded_len(&buffer));
    }
}

// === Round trip through a conformant reader ===

#[test]
fn test_encode_round_trips_through_hound() {
    let original = generate_stereo_test_tone(440.0, 880.0, 0.25, 48000);
    let bytes = encode(&original).unwrap();

    let mut reader = WavReader::new(std::io::Cursor::new(bytes)).unwrap();
    let spec = reader.spec();

    assert_eq!(spec.channels, 2);
    assert_eq!(spec.sample_rate, 48000);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, SampleFormat::Int);
    assert_eq!(reader.len() as usize, original.len() * 2);

    let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    for (frame, pair) in samples.chunks_exact(2).enumerate() {
        for (ch, &recovered) in pair.iter().enumerate() {
            let expected = original.channel(ch)[frame];
            let recovered_f = recovered as f32 / 32767.0;
            assert!(
                (recovered_f - expected).abs() <= 1.0 / 32767.0 + 1e-6,
                "frame {} channel {}: {} vs {}",
                frame,
                ch,
                recovered_f,
                expected
            );
        }
    }
}

#[test]
fn test_trim_then_encode_round_trip_on_disk() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.wav");
    let output = dir.path().join("output.wav");

    let source = generate_test_tone(440.0, 2.0, 44100);
    wavetrim::engine::export_audio(&source, &input).unwrap();

    let mut editor = Editor::new();
    editor.load(&input).unwrap();
    editor.select(0.5, 1.5);
    editor.trim_selection().unwrap();
    editor.export(&output).unwrap();

    let result = import_audio(&output).unwrap();
    assert_eq!(result.len(), 44100); // 2s minus the excised 1s
    assert_eq!(result.sample_rate(), 44100);
    assert_eq!(result.channels(), 1);

    // The head of the result matches the head of the source (within
    // one quantization step from the 16-bit pass through disk)
    for i in 0..100 {
        assert!((result.channel(0)[i] - source.channel(0)[i]).abs() <= 2.0 / 32767.0);
    }
    // Frame 22050 of the result is frame 66150 of the source
    for i in 0..100 {
        assert!(
            (result.channel(0)[22050 + i] - source.channel(0)[66150 + i]).abs() <= 2.0 / 32767.0
        );
    }
}

// === Error surface ===

#[test]
fn test_invalid_ranges_reported_not_written() {
    let buffer = AudioBuffer::new(2, 44100, 44100);

    for (start, end) in [(0.5, 0.25), (-0.5, 0.25), (0.0, 1.5)] {
        let err = trim(&buffer, Region::new(start, end)).unwrap_err();
        assert!(matches!(err, WavetrimError::InvalidRange { .. }));
        assert_eq!(err.error_code(), "INVALID_RANGE");
        assert!(err.is_recoverable());
    }
}

#[test]
fn test_trim_entire_buffer_then_encode() {
    // Open policy: an empty result is permitted and must encode cleanly
    let buffer = generate_test_tone(220.0, 1.0, 8000);
    let empty = trim(&buffer, Region::new(0.0, 1.0)).unwrap();

    assert!(empty.is_empty());
    let bytes = encode(&empty).unwrap();
    assert_eq!(bytes.len(), 44);

    let reader = WavReader::new(std::io::Cursor::new(bytes)).unwrap();
    assert_eq!(reader.len(), 0);
    assert_eq!(reader.spec().sample_rate, 8000);
}
