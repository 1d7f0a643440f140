//! Encounter - Tokenizer, validator and derivation printer for wild encounters
//!
//! This crate re-exports all layers of the encounter system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: encounter_runtime    — REPL, CLI, batch runs
//! Layer 1: encounter_parser     — Vocabulary, tokenizer, validator, derivation
//! Layer 0: encounter_foundation — Core types (Token, Category, Error)
//! ```

pub use encounter_foundation as foundation;
pub use encounter_parser as parser;
pub use encounter_runtime as runtime;
