//! Utility functions for bridge operations

pub mod validation;
