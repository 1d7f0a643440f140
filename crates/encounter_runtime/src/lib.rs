//! REPL and CLI for the encounter grammar.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-parse-print loop over the standard vocabulary
//! - [`ReplConfig`] - Prompt, exit keyword, colour and banner settings
//! - Batch processing of input files, one sentence per line
//!
//! The `encounter` binary wires these together behind a small CLI.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod highlight;
pub mod repl;

pub use config::ReplConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use highlight::EncounterHighlighter;
pub use repl::{BatchSummary, LineOutcome, Repl, render_result};
