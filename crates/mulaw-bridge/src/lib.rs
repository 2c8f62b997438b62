//! # mulaw-bridge: Telephony ↔ Speech Engine Audio Bridge
//!
//! This library converts audio between a narrowband telephony media stream
//! (8 kHz G.711 µ-law) and a wideband speech engine (16 kHz 16-bit linear
//! PCM). It is a direct, deterministic per-sample transform with no
//! filtering and no state carried between buffers.
//!
//! ## Components
//!
//! - **µ-law codec** ([`codecs::mulaw`]): ITU-T G.711 per-sample
//!   encode/decode driven by two static 256-entry tables
//! - **Sample rate converter** ([`resample`]): 2:1 point decimation and
//!   sample-repeat upsampling around the codec
//! - **Bridge** ([`MulawBridge`]): byte-buffer façade for media streams
//!
//! ## Usage
//!
//! ```rust
//! use mulaw_bridge::{AudioBridge, BridgeConfig, MulawBridge};
//!
//! let bridge = MulawBridge::new(BridgeConfig::default())?;
//!
//! // 20ms of µ-law silence from the telephony side
//! let telephony = vec![0xffu8; 160];
//! let engine = bridge.to_engine(&telephony);
//! assert_eq!(engine.len(), 640);
//!
//! // And back again
//! let telephony = bridge.to_telephony(&engine);
//! assert_eq!(telephony.len(), 160);
//! # Ok::<(), mulaw_bridge::BridgeError>(())
//! ```
//!
//! The sample-level API is also available directly:
//!
//! ```rust
//! use mulaw_bridge::{decode_and_upsample, downsample_and_encode};
//!
//! let mulaw = downsample_and_encode(&[0, 0, 0, 0]);
//! assert_eq!(mulaw.len(), 2);
//! assert_eq!(decode_and_upsample(&mulaw), vec![0; 4]);
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bridge;
pub mod codecs;
pub mod error;
pub mod resample;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use bridge::MulawBridge;
pub use codecs::mulaw::{decode_sample, encode_sample};
pub use error::{BridgeError, Result};
pub use resample::{
    decode_and_upsample, downsample_and_encode, mulaw_to_pcm_bytes, pcm_bytes_to_mulaw,
};
pub use types::{AudioBridge, AudioFormat, BridgeConfig, BridgeInfo, Direction, SampleRate};

/// Version information for the bridge library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Formats handled by the bridge
pub const SUPPORTED_FORMATS: &[AudioFormat] = &[AudioFormat::Mulaw8k, AudioFormat::Pcm16k];

/// Initialize the bridge library
///
/// Installs a default `tracing` subscriber if none is set and logs the
/// library configuration. Safe to call multiple times.
///
/// # Errors
///
/// Currently never fails
pub fn init() -> Result<()> {
    let _ = tracing_subscriber::fmt::try_init();

    codecs::mulaw::tables::init_tables();

    tracing::info!("mulaw-bridge v{} initialized", VERSION);
    tracing::info!("Supported formats: {:?}", SUPPORTED_FORMATS);

    Ok(())
}

/// Get library information
pub fn info() -> LibraryInfo {
    LibraryInfo {
        version: VERSION,
        formats: SUPPORTED_FORMATS.to_vec(),
        table_bytes: codecs::mulaw::tables::get_table_memory_usage(),
    }
}

/// Library information structure
#[derive(Debug, Clone)]
pub struct LibraryInfo {
    /// Library version
    pub version: &'static str,
    /// Formats handled by the bridge
    pub formats: Vec<AudioFormat>,
    /// Size of the static lookup tables in bytes
    pub table_bytes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        assert!(init().is_ok());
        assert!(init().is_ok());
    }

    #[test]
    fn test_info() {
        let info = info();
        assert_eq!(info.version, VERSION);
        assert_eq!(info.formats.len(), 2);
        assert_eq!(info.table_bytes, 768);
    }
}
