//! Tokens produced by the tokenizer.

use std::fmt;

use crate::category::Category;

/// A recognized terminal annotated with its grammar category.
///
/// Tokens are created by the tokenizer and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    text: String,
    category: Category,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    /// The matched terminal, exactly as registered.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The token's category.
    #[must_use]
    pub const fn category(&self) -> &Category {
        &self.category
    }

    /// Returns true if this token's category has the same kind as `other`.
    #[must_use]
    pub fn is(&self, kind: crate::CategoryKind) -> bool {
        self.category.kind() == kind
    }
}

/// Renders as `text → <Category>`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \u{2192} {}", self.text, self.category)
    }
}
