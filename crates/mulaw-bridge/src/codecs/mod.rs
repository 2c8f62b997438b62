//! Codec implementations

pub mod mulaw;

pub use mulaw::{decode_sample, encode_sample};
