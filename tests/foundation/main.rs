//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Category, Token and Error.

mod errors;
mod tokens;
