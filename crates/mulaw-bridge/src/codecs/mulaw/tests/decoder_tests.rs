//! µ-law Decoder Unit Tests
//!
//! Tests for µ-law decoding including:
//! - Reference values for every code
//! - Round-trip error bounds
//! - Batch operations

use crate::codecs::mulaw::tables::MULAW_DECODE_TABLE;
use crate::codecs::mulaw::*;

/// G.711 expansion computed from the bit fields
fn reference_expand(byte: u8) -> i16 {
    let complement = !byte as i32;
    let exponent = (complement >> 4) & 0x07;
    let mantissa = complement & 0x0F;
    let magnitude = (((mantissa << 3) + MULAW_BIAS) << exponent) - MULAW_BIAS;

    if complement & 0x80 != 0 {
        -magnitude as i16
    } else {
        magnitude as i16
    }
}

#[test]
fn test_decoding_all_values() {
    for byte in 0u8..=255 {
        assert_eq!(
            decode_sample(byte),
            reference_expand(byte),
            "decode mismatch for 0x{:02x}",
            byte
        );
        assert_eq!(decode_sample(byte), MULAW_DECODE_TABLE[byte as usize]);
    }
}

#[test]
fn test_decoding_known_values() {
    assert_eq!(decode_sample(0xff), 0);
    assert_eq!(decode_sample(0x7f), 0);
    assert_eq!(decode_sample(0xef), 132);
    assert_eq!(decode_sample(0xcd), 1052);
    assert_eq!(decode_sample(0x6f), -132);
    assert_eq!(decode_sample(0x4d), -1052);
    assert_eq!(decode_sample(0x80), 32124);
    assert_eq!(decode_sample(0x00), -32124);
}

#[test]
fn test_round_trip_within_segment_step() {
    for sample in (i16::MIN..=i16::MAX).step_by(3) {
        let encoded = encode_sample(sample);
        let decoded = decode_sample(encoded) as i32;
        let clamped = (sample as i32).clamp(-MULAW_CLIP, MULAW_CLIP);
        let step = 8i32 << segment_of(encoded);

        assert!(
            (decoded - clamped).abs() <= step,
            "sample {} decoded to {} (step {})",
            sample,
            decoded,
            step
        );
    }
}

#[test]
fn test_decode_encode_is_stable() {
    // Re-encoding a decoded value returns the same code, except for negative zero
    for byte in 0u8..=255 {
        if byte == 0x7f {
            continue;
        }
        assert_eq!(encode_sample(decode_sample(byte)), byte, "code 0x{:02x}", byte);
    }
}

#[test]
fn test_decode_batch() {
    let encoded = vec![0xffu8, 0xef, 0x6f, 0x80, 0x00];
    let mut decoded = vec![0i16; encoded.len()];

    assert_eq!(decode_batch(&encoded, &mut decoded), 5);
    assert_eq!(decoded, vec![0, 132, -132, 32124, -32124]);
}

#[test]
fn test_decode_batch_empty() {
    let mut decoded: Vec<i16> = Vec::new();
    assert_eq!(decode_batch(&[0xff, 0xef], &mut decoded), 0);
    assert_eq!(decode_batch(&[], &mut [0i16; 4]), 0);
}
