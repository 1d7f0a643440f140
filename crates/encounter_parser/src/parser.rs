//! Main parser pipeline.
//!
//! Orchestrates tokenize → validate → derive for one input line.

use encounter_foundation::Token;
use tracing::debug;

use crate::derivation::{Derivation, Deriver};
use crate::tokenizer::{InputTokenizer, Lexeme, TokenSequence};
use crate::validator::{Rejection, TokenValidator, Validation};
use crate::vocabulary::VocabularyRegistry;

/// Result of parsing one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// The line is a sentence of the grammar.
    Accepted {
        /// Recognized tokens, in input order
        tokens: TokenSequence,
        /// Leftmost derivation of the sentence
        derivation: Derivation,
    },
    /// The line was rejected.
    Rejected {
        /// Recognized tokens, in input order (possibly empty)
        tokens: TokenSequence,
        /// The first violated rule
        rejection: Rejection,
    },
}

impl ParseResult {
    /// Returns true if the line was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// The recognized tokens.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        match self {
            Self::Accepted { tokens, .. } | Self::Rejected { tokens, .. } => tokens,
        }
    }

    /// The derivation, if accepted.
    #[must_use]
    pub const fn derivation(&self) -> Option<&Derivation> {
        match self {
            Self::Accepted { derivation, .. } => Some(derivation),
            Self::Rejected { .. } => None,
        }
    }

    /// The rejection, if rejected.
    #[must_use]
    pub const fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected { rejection, .. } => Some(rejection),
        }
    }
}

/// The encounter parser: a tokenizer and validator sharing one vocabulary.
#[derive(Clone, Copy, Debug)]
pub struct EncounterParser<'v> {
    vocabulary: &'v VocabularyRegistry,
}

impl<'v> EncounterParser<'v> {
    /// Creates a parser over the given vocabulary.
    #[must_use]
    pub const fn new(vocabulary: &'v VocabularyRegistry) -> Self {
        Self { vocabulary }
    }

    /// The vocabulary this parser matches against.
    #[must_use]
    pub const fn vocabulary(&self) -> &'v VocabularyRegistry {
        self.vocabulary
    }

    /// Tokenizes a line.
    #[must_use]
    pub fn tokenize(&self, input: &str) -> TokenSequence {
        InputTokenizer::new(self.vocabulary).tokenize(input)
    }

    /// Tokenizes a line, keeping source spans.
    #[must_use]
    pub fn scan(&self, input: &str) -> Vec<Lexeme> {
        InputTokenizer::new(self.vocabulary).scan(input)
    }

    /// Validates a token sequence.
    #[must_use]
    pub fn validate<'t>(&self, tokens: &'t [Token]) -> Validation<'t> {
        TokenValidator::new(self.vocabulary).validate(tokens)
    }

    /// Parses one input line.
    ///
    /// A derivation is only produced for accepted lines.
    #[must_use]
    pub fn parse(&self, input: &str) -> ParseResult {
        // 1. Tokenize
        let tokens = self.tokenize(input);

        // 2. Validate, then 3. derive
        let outcome = match self.validate(&tokens) {
            Validation::Accepted(encounter) => Ok(Deriver::derive(&encounter)),
            Validation::Rejected(rejection) => Err(rejection),
        };

        match outcome {
            Ok(derivation) => ParseResult::Accepted { tokens, derivation },
            Err(rejection) => {
                debug!(input, %rejection, "input rejected");
                ParseResult::Rejected { tokens, rejection }
            }
        }
    }
}
