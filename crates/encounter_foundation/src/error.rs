//! Error types for the encounter system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Input that fails to match the grammar is not an [`Error`]: the parser
//! reports it as a rejection value. Errors are reserved for vocabulary
//! construction, terminal I/O and caller mistakes.

use std::fmt;

use thiserror::Error;

use crate::category::CategoryKind;

/// Result type alias using the encounter [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for encounter operations.
#[derive(Debug, Error)]
#[error("{kind}{}", .context.as_ref().map(|c| format!(" ({c})")).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a terminal conflict error.
    #[must_use]
    pub fn terminal_conflict(
        literal: impl Into<String>,
        existing: CategoryKind,
        attempted: CategoryKind,
    ) -> Self {
        Self::new(ErrorKind::TerminalConflict {
            literal: literal.into(),
            existing,
            attempted,
        })
    }

    /// Creates an I/O error from any displayable cause.
    #[must_use]
    pub fn io(message: impl fmt::Display) -> Self {
        Self::new(ErrorKind::Io(message.to_string()))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::io(err)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A literal was registered under two different categories.
    #[error("terminal '{literal}' is already registered as {existing}, cannot register it as {attempted}")]
    TerminalConflict {
        /// The conflicting literal.
        literal: String,
        /// The category the literal already belongs to.
        existing: CategoryKind,
        /// The category the caller tried to register it under.
        attempted: CategoryKind,
    },

    /// A terminal was empty or whitespace only.
    #[error("cannot register an empty {0} terminal")]
    EmptyTerminal(CategoryKind),

    /// A trainer, creature or party member name contained whitespace.
    #[error("{category} names must be a single word, got '{name}'")]
    MultiWordName {
        /// The offending name.
        name: String,
        /// The category it was registered under.
        category: CategoryKind,
    },

    /// A move was registered for a party member that does not exist.
    #[error("unknown party member: {0}")]
    UnknownMember(String),

    /// A terminal collides with a fixed connective of the grammar.
    #[error("'{0}' is reserved by the grammar")]
    ReservedTerminal(String),

    /// The line editor failed.
    #[error("line editor error: {0}")]
    Editor(String),

    /// Reading input failed.
    #[error("i/o error: {0}")]
    Io(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file, or `<stdin>`.
    pub source: Option<String>,
    /// Line number in source (1-indexed).
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.line) {
            (Some(source), Some(line)) => write!(f, "at {source}:{line}"),
            (Some(source), None) => write!(f, "at {source}"),
            (None, Some(line)) => write!(f, "at line {line}"),
            (None, None) => Ok(()),
        }
    }
}
