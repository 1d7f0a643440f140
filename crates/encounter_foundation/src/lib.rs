//! Core types for the encounter grammar.
//!
//! This crate provides:
//! - [`Category`] - The grammar category a recognized terminal belongs to
//! - [`Token`] - A terminal annotated with its category
//! - [`Branch`] - The three continuations a decision can select
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod category;
pub mod error;
pub mod token;

pub use category::{Branch, Category, CategoryKind, MemberId};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use token::Token;
