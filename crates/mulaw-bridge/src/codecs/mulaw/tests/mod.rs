//! µ-law codec unit tests

mod decoder_tests;
