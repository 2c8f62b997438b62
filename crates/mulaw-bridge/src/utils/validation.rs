//! Input validation utilities for bridge operations

use crate::error::{BridgeError, Result};
use crate::types::SUPPORTED_FRAME_DURATIONS;

/// Validate a frame duration in milliseconds
pub fn validate_frame_duration(duration_ms: u32) -> Result<()> {
    if !SUPPORTED_FRAME_DURATIONS.contains(&duration_ms) {
        return Err(BridgeError::InvalidFrameDuration {
            duration_ms,
            supported: SUPPORTED_FRAME_DURATIONS.to_vec(),
        });
    }

    Ok(())
}

/// Validate that an output buffer can hold `needed` elements
pub fn validate_output_capacity(needed: usize, actual: usize) -> Result<()> {
    if actual < needed {
        return Err(BridgeError::buffer_too_small(needed, actual));
    }

    Ok(())
}
