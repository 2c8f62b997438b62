//! Core types and traits for the bridge library
//!
//! Buffers carry no format metadata of their own. The types here name the two
//! sides of the bridge so that callers and logs can describe what a buffer is.

use crate::error::Result;
use crate::utils::validation::validate_frame_duration;
use bytes::Bytes;
use std::fmt;

/// Sample rate of the telephony side in Hz
pub const TELEPHONY_SAMPLE_RATE: u32 = 8000;

/// Sample rate of the speech engine side in Hz
pub const ENGINE_SAMPLE_RATE: u32 = 16000;

/// Fixed ratio between the engine and telephony sample rates
pub const RATE_RATIO: usize = 2;

/// Frame durations accepted by [`BridgeConfig`]
pub const SUPPORTED_FRAME_DURATIONS: &[u32] = &[10, 20, 30, 40, 60];

/// Primary trait for format bridges
///
/// A bridge converts audio between the telephony transport and the speech
/// engine. Implementations hold no per-stream audio state, so one bridge can
/// serve any number of concurrent calls.
pub trait AudioBridge: Send + Sync {
    /// Convert telephony audio (8 kHz µ-law bytes) to engine audio
    /// (16 kHz native-endian 16-bit PCM bytes)
    fn to_engine(&self, telephony: &[u8]) -> Bytes;

    /// Convert engine audio (16 kHz native-endian 16-bit PCM bytes) to
    /// telephony audio (8 kHz µ-law bytes)
    fn to_telephony(&self, engine: &[u8]) -> Bytes;

    /// Get bridge information
    fn info(&self) -> BridgeInfo;

    /// Size of one telephony frame in bytes
    fn telephony_frame_bytes(&self) -> usize {
        self.info().telephony_frame_bytes
    }

    /// Size of one engine frame in bytes
    fn engine_frame_bytes(&self) -> usize {
        self.info().engine_frame_bytes
    }
}

/// Sample rate enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleRate {
    /// 8 kHz (narrowband telephony)
    Rate8000,
    /// 16 kHz (wideband speech engine)
    Rate16000,
}

impl SampleRate {
    /// Get the sample rate value in Hz
    pub fn hz(self) -> u32 {
        match self {
            Self::Rate8000 => TELEPHONY_SAMPLE_RATE,
            Self::Rate16000 => ENGINE_SAMPLE_RATE,
        }
    }

    /// Create from Hz value
    pub fn from_hz(hz: u32) -> Option<Self> {
        match hz {
            TELEPHONY_SAMPLE_RATE => Some(Self::Rate8000),
            ENGINE_SAMPLE_RATE => Some(Self::Rate16000),
            _ => None,
        }
    }
}

impl fmt::Display for SampleRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Hz", self.hz())
    }
}

/// The two buffer formats on either side of the bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    /// 8 kHz G.711 µ-law, one byte per sample
    Mulaw8k,
    /// 16 kHz signed 16-bit linear PCM, native byte order
    Pcm16k,
}

impl AudioFormat {
    /// Get the format name
    pub fn name(self) -> &'static str {
        match self {
            Self::Mulaw8k => "PCMU/8000",
            Self::Pcm16k => "L16/16000",
        }
    }

    /// Get the sample rate
    pub fn sample_rate(self) -> SampleRate {
        match self {
            Self::Mulaw8k => SampleRate::Rate8000,
            Self::Pcm16k => SampleRate::Rate16000,
        }
    }

    /// Get the size of one sample in bytes
    pub fn bytes_per_sample(self) -> usize {
        match self {
            Self::Mulaw8k => 1,
            Self::Pcm16k => 2,
        }
    }

    /// Get the number of samples in the given duration
    pub fn samples_for_duration_ms(self, duration_ms: u32) -> usize {
        (self.sample_rate().hz() as usize / 1000) * duration_ms as usize
    }

    /// Get the number of bytes in the given duration
    pub fn bytes_for_duration_ms(self, duration_ms: u32) -> usize {
        self.samples_for_duration_ms(duration_ms) * self.bytes_per_sample()
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Direction of travel through the bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Telephony transport to speech engine
    Inbound,
    /// Speech engine to telephony transport
    Outbound,
}

impl Direction {
    /// Format of the buffers entering the bridge
    pub fn source(self) -> AudioFormat {
        match self {
            Self::Inbound => AudioFormat::Mulaw8k,
            Self::Outbound => AudioFormat::Pcm16k,
        }
    }

    /// Format of the buffers leaving the bridge
    pub fn target(self) -> AudioFormat {
        match self {
            Self::Inbound => AudioFormat::Pcm16k,
            Self::Outbound => AudioFormat::Mulaw8k,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source(), self.target())
    }
}

/// Bridge configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Frame duration used when splitting buffers into frames
    pub frame_duration_ms: u32,
    /// Warn (instead of trace) when an input buffer is truncated
    pub log_odd_length: bool,
}

impl BridgeConfig {
    /// Create a new bridge configuration with 20ms frames
    pub fn new() -> Self {
        Self {
            frame_duration_ms: 20,
            log_odd_length: false,
        }
    }

    /// Set frame duration in milliseconds
    pub fn with_frame_duration_ms(mut self, frame_duration_ms: u32) -> Self {
        self.frame_duration_ms = frame_duration_ms;
        self
    }

    /// Warn whenever an input buffer has a trailing incomplete unit
    pub fn with_odd_length_logging(mut self, enabled: bool) -> Self {
        self.log_odd_length = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validate_frame_duration(self.frame_duration_ms)
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Bridge information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeInfo {
    /// Bridge name
    pub name: &'static str,
    /// Telephony side format
    pub telephony_format: AudioFormat,
    /// Engine side format
    pub engine_format: AudioFormat,
    /// Frame duration in milliseconds
    pub frame_duration_ms: u32,
    /// Size of one telephony frame in bytes
    pub telephony_frame_bytes: usize,
    /// Size of one engine frame in bytes
    pub engine_frame_bytes: usize,
}
