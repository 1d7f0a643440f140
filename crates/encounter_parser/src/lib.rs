//! Tokenizer, validator and derivation printer for the encounter grammar.
//!
//! This crate turns a line like
//! "Ash sees a wild Eevee Got away safely!" into typed tokens, checks them
//! against the grammar, and prints the leftmost derivation of the sentence.
//!
//! # Architecture
//!
//! ```text
//! "Brock sees a wild Zubat use Pokeball"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → [Brock <Trainer>, Zubat <WildPokemon>, use Pokeball <Decision>]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   VALIDATOR     │  → Accepted(capture) or Rejected(first violated rule)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   DERIVER       │  → <Game> ⇒ ... ⇒ Brock sees a wild Zubat use Pokeball ...
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`vocabulary`] - Registry of terminals by category
//! - [`stdlib`] - The built-in vocabulary
//! - [`grammar`] - Fixed connectives and the BNF guide
//! - [`tokenizer`] - Greedy longest-match tokenization
//! - [`validator`] - Structural rules, first failure wins
//! - [`derivation`] - Leftmost derivation of accepted sentences
//! - [`parser`] - Pipeline orchestration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod derivation;
pub mod grammar;
pub mod parser;
pub mod stdlib;
pub mod tokenizer;
pub mod validator;
pub mod vocabulary;

// Re-export main types for convenience
pub use derivation::{Derivation, Deriver};
pub use grammar::GrammarGuide;
pub use parser::{EncounterParser, ParseResult};
pub use stdlib::standard_vocabulary;
pub use tokenizer::{InputTokenizer, Lexeme, TokenSequence};
pub use validator::{Encounter, Rejection, TokenValidator, Validation};
pub use vocabulary::VocabularyRegistry;
