//! Integration tests for the encounter_parser crate.
//!
//! Tests for the encounter parsing pipeline:
//! - Vocabulary registration
//! - Tokenization
//! - Validation
//! - Derivation
//! - Full parser pipeline

mod derivation_tests;
mod validator_tests;
mod vocabulary_tests;
