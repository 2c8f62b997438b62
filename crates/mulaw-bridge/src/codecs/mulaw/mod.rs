//! G.711 µ-law codec
//!
//! Per-sample conversion between 16-bit linear PCM and 8-bit µ-law, as
//! specified in ITU-T Recommendation G.711.
//!
//! ## Algorithm
//!
//! Encoding takes the sign, clamps the magnitude to [`MULAW_CLIP`], adds the
//! [`MULAW_BIAS`], looks the segment exponent up in [`tables::EXP_LUT`] and
//! keeps a 4-bit mantissa. The assembled byte is complemented before
//! transmission. Decoding is a single lookup in
//! [`tables::MULAW_DECODE_TABLE`].
//!
//! The codec is stateless; every function here is total over its input type.

pub mod tables;

#[cfg(test)]
mod tests;

use tables::{EXP_LUT, MULAW_DECODE_TABLE};

/// Largest magnitude encoded before the top segment saturates
pub const MULAW_CLIP: i32 = 32635;

/// Bias added to the clamped magnitude before segment lookup
pub const MULAW_BIAS: i32 = 0x84;

/// µ-law compression according to ITU-T G.711
///
/// Compresses a 16-bit linear PCM sample to an 8-bit µ-law byte. Magnitudes
/// above [`MULAW_CLIP`] are clamped, so every input is legal.
#[inline]
pub fn encode_sample(pcm: i16) -> u8 {
    let sign: u8 = if pcm < 0 { 0x80 } else { 0x00 };

    // i16::MIN has no positive i16 counterpart
    let magnitude = (pcm as i32).abs().min(MULAW_CLIP) + MULAW_BIAS;

    let exponent = EXP_LUT[((magnitude >> 7) & 0xFF) as usize];
    let mantissa = ((magnitude >> (exponent as i32 + 3)) & 0x0F) as u8;

    !(sign | (exponent << 4) | mantissa)
}

/// µ-law expansion according to ITU-T G.711
///
/// Expands an 8-bit µ-law byte to a 16-bit linear PCM sample.
#[inline]
pub fn decode_sample(byte: u8) -> i16 {
    MULAW_DECODE_TABLE[byte as usize]
}

/// Segment exponent carried by an encoded byte
#[inline]
pub fn segment_of(byte: u8) -> u8 {
    (!byte >> 4) & 0x07
}

/// Batch µ-law compression
///
/// Encodes `min(samples.len(), output.len())` samples and returns that count.
pub fn encode_batch(samples: &[i16], output: &mut [u8]) -> usize {
    let count = samples.len().min(output.len());

    for (out, &sample) in output[..count].iter_mut().zip(samples) {
        *out = encode_sample(sample);
    }

    count
}

/// Batch µ-law expansion
///
/// Decodes `min(encoded.len(), output.len())` bytes and returns that count.
pub fn decode_batch(encoded: &[u8], output: &mut [i16]) -> usize {
    let count = encoded.len().min(output.len());

    for (out, &byte) in output[..count].iter_mut().zip(encoded) {
        *out = decode_sample(byte);
    }

    count
}
