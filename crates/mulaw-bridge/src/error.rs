//! Error handling for the bridge library
//!
//! Sample and buffer conversions are total and never fail. Errors only come
//! from bridge configuration and from caller-provided output buffers that are
//! too small to hold a conversion result.

#![allow(missing_docs)]

use std::fmt;
use thiserror::Error;

/// Result type alias for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Error type for bridge operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// Invalid bridge configuration
    #[error("Invalid bridge configuration: {details}")]
    InvalidConfig { details: String },

    /// Unsupported frame duration
    #[error("Invalid frame duration: {duration_ms}ms (supported: {supported:?})")]
    InvalidFrameDuration { duration_ms: u32, supported: Vec<u32> },

    /// Output buffer cannot hold the conversion result
    #[error("Buffer too small: need {needed} elements, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },
}

impl BridgeError {
    /// Create a new invalid configuration error
    pub fn invalid_config(details: impl Into<String>) -> Self {
        Self::InvalidConfig {
            details: details.into(),
        }
    }

    /// Create a new buffer too small error
    pub fn buffer_too_small(needed: usize, actual: usize) -> Self {
        Self::BufferTooSmall { needed, actual }
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfig { .. } | Self::InvalidFrameDuration { .. } => {
                ErrorCategory::Configuration
            }
            Self::BufferTooSmall { .. } => ErrorCategory::Memory,
        }
    }
}

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Configuration and parameter errors
    Configuration,
    /// Caller buffer sizing errors
    Memory,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Memory => write!(f, "Memory"),
        }
    }
}
