//! Sample rate conversion between the telephony and engine sides
//!
//! The two sides differ by exactly 2:1, so conversion is done per sample:
//!
//! - **Outbound** (16 kHz PCM → 8 kHz µ-law): point decimation keeps every
//!   even-indexed sample and encodes it.
//! - **Inbound** (8 kHz µ-law → 16 kHz PCM): each decoded sample is written
//!   twice (zero-order hold).
//!
//! ## Limitations
//!
//! No anti-aliasing or reconstruction filter is applied. Content above 4 kHz
//! in engine audio aliases into the telephony band, and upsampled audio
//! carries spectral images above 4 kHz. Voice-band audio (300-3400 Hz) is
//! unaffected in practice. Callers that need band-limited output must filter
//! before calling into this module.
//!
//! ## Length policy
//!
//! Trailing incomplete units are dropped: an odd sample count loses its last
//! sample on decimation, and an odd PCM byte count loses its last byte.

use crate::codecs::mulaw::{decode_sample, encode_sample};
use crate::error::Result;
use crate::types::RATE_RATIO;
use crate::utils::validation::validate_output_capacity;
use bytes::{BufMut, Bytes, BytesMut};
use rayon::prelude::*;

/// Minimum number of items each rayon task processes
const PARALLEL_MIN_LEN: usize = 4096;

/// Number of µ-law bytes produced from `samples` engine samples
#[inline]
pub fn encoded_len(samples: usize) -> usize {
    samples / RATE_RATIO
}

/// Number of engine samples produced from `bytes` µ-law bytes
#[inline]
pub fn decoded_len(bytes: usize) -> usize {
    bytes * RATE_RATIO
}

/// Decimate 16 kHz PCM by two and encode to 8 kHz µ-law
///
/// Returns `pcm.len() / 2` bytes: `[enc(s0), enc(s2), enc(s4), ...]`.
pub fn downsample_and_encode(pcm: &[i16]) -> Vec<u8> {
    log_truncation(pcm.len() % RATE_RATIO, "downsample_and_encode");

    let encoded: Vec<u8> = pcm
        .chunks_exact(RATE_RATIO)
        .map(|pair| encode_sample(pair[0]))
        .collect();

    tracing::trace!("Encoded {} samples into {} bytes", pcm.len(), encoded.len());
    encoded
}

/// Decode 8 kHz µ-law and upsample to 16 kHz PCM by sample repetition
///
/// Returns `mulaw.len() * 2` samples: `[dec(b0), dec(b0), dec(b1), dec(b1), ...]`.
pub fn decode_and_upsample(mulaw: &[u8]) -> Vec<i16> {
    let mut pcm = Vec::with_capacity(decoded_len(mulaw.len()));

    for &byte in mulaw {
        let sample = decode_sample(byte);
        pcm.push(sample);
        pcm.push(sample);
    }

    tracing::trace!("Decoded {} bytes into {} samples", mulaw.len(), pcm.len());
    pcm
}

/// Zero-copy variant of [`downsample_and_encode`]
///
/// Writes into `output` and returns the number of bytes written.
///
/// # Errors
///
/// Returns [`BridgeError::BufferTooSmall`](crate::BridgeError::BufferTooSmall)
/// if `output` is shorter than `pcm.len() / 2`. Nothing is written in that case.
pub fn downsample_and_encode_into(pcm: &[i16], output: &mut [u8]) -> Result<usize> {
    let needed = encoded_len(pcm.len());
    validate_output_capacity(needed, output.len())?;
    log_truncation(pcm.len() % RATE_RATIO, "downsample_and_encode_into");

    for (out, pair) in output[..needed].iter_mut().zip(pcm.chunks_exact(RATE_RATIO)) {
        *out = encode_sample(pair[0]);
    }

    Ok(needed)
}

/// Zero-copy variant of [`decode_and_upsample`]
///
/// Writes into `output` and returns the number of samples written.
///
/// # Errors
///
/// Returns [`BridgeError::BufferTooSmall`](crate::BridgeError::BufferTooSmall)
/// if `output` is shorter than `mulaw.len() * 2`. Nothing is written in that case.
pub fn decode_and_upsample_into(mulaw: &[u8], output: &mut [i16]) -> Result<usize> {
    let needed = decoded_len(mulaw.len());
    validate_output_capacity(needed, output.len())?;

    for (slot, &byte) in output[..needed].chunks_exact_mut(RATE_RATIO).zip(mulaw) {
        slot.fill(decode_sample(byte));
    }

    Ok(needed)
}

/// Parallel variant of [`downsample_and_encode`] for long recordings
///
/// Output is identical to the sequential function.
pub fn par_downsample_and_encode(pcm: &[i16]) -> Vec<u8> {
    let mut encoded = vec![0u8; encoded_len(pcm.len())];

    encoded
        .par_iter_mut()
        .zip(pcm.par_chunks_exact(RATE_RATIO))
        .with_min_len(PARALLEL_MIN_LEN)
        .for_each(|(out, pair)| *out = encode_sample(pair[0]));

    tracing::trace!(
        "Encoded {} samples into {} bytes (parallel)",
        pcm.len(),
        encoded.len()
    );
    encoded
}

/// Parallel variant of [`decode_and_upsample`] for long recordings
///
/// Output is identical to the sequential function.
pub fn par_decode_and_upsample(mulaw: &[u8]) -> Vec<i16> {
    let mut pcm = vec![0i16; decoded_len(mulaw.len())];

    pcm.par_chunks_exact_mut(RATE_RATIO)
        .zip(mulaw.par_iter())
        .with_min_len(PARALLEL_MIN_LEN)
        .for_each(|(slot, &byte)| slot.fill(decode_sample(byte)));

    tracing::trace!(
        "Decoded {} bytes into {} samples (parallel)",
        mulaw.len(),
        pcm.len()
    );
    pcm
}

/// Convert a 16 kHz PCM byte buffer to 8 kHz µ-law bytes
///
/// The input is read as native-endian `i16` samples; an odd trailing byte is
/// dropped. Returns `pcm.len() / 4` bytes.
pub fn pcm_bytes_to_mulaw(pcm: &[u8]) -> Bytes {
    log_truncation(pcm.len() % 2, "pcm_bytes_to_mulaw");

    let samples = pcm_bytes_to_samples(pcm);
    Bytes::from(downsample_and_encode(&samples))
}

/// Convert 8 kHz µ-law bytes to a 16 kHz PCM byte buffer
///
/// Samples are written in native byte order. Returns `mulaw.len() * 4` bytes.
pub fn mulaw_to_pcm_bytes(mulaw: &[u8]) -> Bytes {
    let mut pcm = BytesMut::with_capacity(decoded_len(mulaw.len()) * 2);

    for &byte in mulaw {
        let sample = decode_sample(byte);
        pcm.put_i16_ne(sample);
        pcm.put_i16_ne(sample);
    }

    pcm.freeze()
}

/// Read a native-endian PCM byte buffer as samples, dropping an odd trailing byte
pub fn pcm_bytes_to_samples(pcm: &[u8]) -> Vec<i16> {
    pcm.chunks_exact(2)
        .map(bytemuck::pod_read_unaligned::<i16>)
        .collect()
}

/// Write samples as a native-endian PCM byte buffer
pub fn samples_to_pcm_bytes(samples: &[i16]) -> Bytes {
    Bytes::copy_from_slice(bytemuck::cast_slice(samples))
}

fn log_truncation(dropped: usize, operation: &str) {
    if dropped > 0 {
        tracing::trace!("{}: dropped {} trailing unit(s)", operation, dropped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BridgeError;

    #[test]
    fn test_downsample_keeps_even_samples() {
        let pcm = [1000i16, -5000, -1000, 7000];
        let encoded = downsample_and_encode(&pcm);

        assert_eq!(encoded, vec![encode_sample(1000), encode_sample(-1000)]);
    }

    #[test]
    fn test_downsample_odd_length() {
        assert_eq!(downsample_and_encode(&[100, 200, 300]).len(), 1);
        assert_eq!(downsample_and_encode(&[100]).len(), 0);
        assert!(downsample_and_encode(&[]).is_empty());

        let encoded = downsample_and_encode(&[0, 1, 2, 3, 4000]);
        assert_eq!(encoded, vec![encode_sample(0), encode_sample(2)]);
    }

    #[test]
    fn test_upsample_repeats_samples() {
        assert_eq!(
            decode_and_upsample(&[0xef]),
            vec![decode_sample(0xef), decode_sample(0xef)]
        );
        assert_eq!(
            decode_and_upsample(&[0xef, 0x4d]),
            vec![132, 132, -1052, -1052]
        );
        assert!(decode_and_upsample(&[]).is_empty());
    }

    #[test]
    fn test_silence_end_to_end() {
        let encoded = downsample_and_encode(&[0, 0, 0, 0]);
        assert_eq!(encoded, vec![encode_sample(0); 2]);

        let decoded = decode_and_upsample(&encoded);
        assert_eq!(decoded, vec![decode_sample(encode_sample(0)); 4]);
    }

    #[test]
    fn test_into_variants_match_allocating_versions() {
        let pcm: Vec<i16> = (0..321).map(|i| (i * 97 - 15000) as i16).collect();

        let mut encoded = vec![0u8; 200];
        let written = downsample_and_encode_into(&pcm, &mut encoded).unwrap();
        assert_eq!(written, 160);
        assert_eq!(&encoded[..written], downsample_and_encode(&pcm).as_slice());

        let mut decoded = vec![0i16; 320];
        let written = decode_and_upsample_into(&encoded[..160], &mut decoded).unwrap();
        assert_eq!(written, 320);
        assert_eq!(decoded, decode_and_upsample(&encoded[..160]));
    }

    #[test]
    fn test_into_variants_reject_short_output() {
        let mut encoded = vec![0u8; 1];
        assert_eq!(
            downsample_and_encode_into(&[1, 2, 3, 4], &mut encoded),
            Err(BridgeError::buffer_too_small(2, 1))
        );
        assert_eq!(encoded, vec![0]);

        let mut decoded = vec![0i16; 3];
        assert_eq!(
            decode_and_upsample_into(&[0xff, 0xef], &mut decoded),
            Err(BridgeError::buffer_too_small(4, 3))
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let pcm: Vec<i16> = (0..50_001).map(|i| ((i * 7919) % 65536 - 32768) as i16).collect();
        assert_eq!(par_downsample_and_encode(&pcm), downsample_and_encode(&pcm));

        let mulaw: Vec<u8> = (0..20_000).map(|i| (i % 256) as u8).collect();
        assert_eq!(par_decode_and_upsample(&mulaw), decode_and_upsample(&mulaw));
    }

    #[test]
    fn test_byte_contract_lengths() {
        assert_eq!(pcm_bytes_to_mulaw(&[0u8; 640]).len(), 160);
        assert_eq!(pcm_bytes_to_mulaw(&[0u8; 7]).len(), 1);
        assert_eq!(mulaw_to_pcm_bytes(&[0xffu8; 160]).len(), 640);
    }

    #[test]
    fn test_byte_contract_native_endian() {
        let samples = [1024i16, 0, -1024, 0];
        let mut pcm = Vec::new();
        for sample in samples {
            pcm.extend_from_slice(&sample.to_ne_bytes());
        }

        let mulaw = pcm_bytes_to_mulaw(&pcm);
        assert_eq!(&mulaw[..], &[0xcdu8, 0x4d]);

        let back = mulaw_to_pcm_bytes(&mulaw);
        assert_eq!(pcm_bytes_to_samples(&back), vec![1052, 1052, -1052, -1052]);
        assert_eq!(back, samples_to_pcm_bytes(&[1052, 1052, -1052, -1052]));
    }
}
