//! µ-law media bridge
//!
//! [`MulawBridge`] connects a telephony media stream (8 kHz µ-law) with a
//! speech engine (16 kHz linear PCM). It holds only its validated
//! configuration and can be shared between any number of concurrent calls.

use crate::error::Result;
use crate::resample::{mulaw_to_pcm_bytes, pcm_bytes_to_mulaw};
use crate::types::{AudioBridge, AudioFormat, BridgeConfig, BridgeInfo};
use bytes::Bytes;
use std::slice::ChunksExact;

/// Bridge between µ-law telephony audio and 16 kHz PCM engine audio
#[derive(Debug, Clone)]
pub struct MulawBridge {
    config: BridgeConfig,
    telephony_frame_bytes: usize,
    engine_frame_bytes: usize,
}

impl MulawBridge {
    /// Create a new bridge
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: BridgeConfig) -> Result<Self> {
        config.validate()?;

        let telephony_frame_bytes =
            AudioFormat::Mulaw8k.bytes_for_duration_ms(config.frame_duration_ms);
        let engine_frame_bytes = AudioFormat::Pcm16k.bytes_for_duration_ms(config.frame_duration_ms);

        tracing::debug!(
            "Created µ-law bridge: {}ms frames ({} telephony bytes, {} engine bytes)",
            config.frame_duration_ms,
            telephony_frame_bytes,
            engine_frame_bytes
        );

        Ok(Self {
            config,
            telephony_frame_bytes,
            engine_frame_bytes,
        })
    }

    /// Get the bridge configuration
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Iterate over the complete telephony frames in `mulaw`
    ///
    /// A trailing partial frame is not yielded.
    pub fn telephony_frames<'a>(&self, mulaw: &'a [u8]) -> ChunksExact<'a, u8> {
        self.check_length(mulaw.len(), self.telephony_frame_bytes, "telephony");
        mulaw.chunks_exact(self.telephony_frame_bytes)
    }

    /// Iterate over the complete engine frames in `pcm`
    ///
    /// A trailing partial frame is not yielded.
    pub fn engine_frames<'a>(&self, pcm: &'a [u8]) -> ChunksExact<'a, u8> {
        self.check_length(pcm.len(), self.engine_frame_bytes, "engine");
        pcm.chunks_exact(self.engine_frame_bytes)
    }

    fn check_length(&self, len: usize, unit: usize, side: &str) {
        let remainder = len % unit;
        if remainder == 0 {
            return;
        }

        if self.config.log_odd_length {
            tracing::warn!(
                "{} buffer of {} bytes is not a multiple of {}; {} trailing bytes dropped",
                side,
                len,
                unit,
                remainder
            );
        } else {
            tracing::trace!("{} buffer: {} trailing bytes dropped", side, remainder);
        }
    }
}

impl AudioBridge for MulawBridge {
    fn to_engine(&self, telephony: &[u8]) -> Bytes {
        mulaw_to_pcm_bytes(telephony)
    }

    fn to_telephony(&self, engine: &[u8]) -> Bytes {
        self.check_length(engine.len(), 4, "engine");
        pcm_bytes_to_mulaw(engine)
    }

    fn info(&self) -> BridgeInfo {
        BridgeInfo {
            name: "PCMU-L16",
            telephony_format: AudioFormat::Mulaw8k,
            engine_format: AudioFormat::Pcm16k,
            frame_duration_ms: self.config.frame_duration_ms,
            telephony_frame_bytes: self.telephony_frame_bytes,
            engine_frame_bytes: self.engine_frame_bytes,
        }
    }

    fn telephony_frame_bytes(&self) -> usize {
        self.telephony_frame_bytes
    }

    fn engine_frame_bytes(&self) -> usize {
        self.engine_frame_bytes
    }
}
