//! Syntax highlighting for the REPL.

use std::borrow::Cow;
use std::sync::Arc;

use encounter_foundation::CategoryKind;
use encounter_parser::{InputTokenizer, VocabularyRegistry};

/// ANSI reset sequence.
pub const RESET: &str = "\x1b[0m";

/// The colour used for a category.
#[must_use]
pub const fn category_color(kind: CategoryKind) -> &'static str {
    match kind {
        CategoryKind::Trainer => "\x1b[1;36m",      // bold cyan
        CategoryKind::WildCreature => "\x1b[33m",   // yellow
        CategoryKind::PartyMember => "\x1b[34m",    // blue
        CategoryKind::Decision => "\x1b[1;32m",     // bold green
        CategoryKind::UseKeyword => "\x1b[1m",      // bold
        CategoryKind::Move => "\x1b[35m",           // magenta
        CategoryKind::Outcome => "\x1b[32m",        // green
    }
}

/// Colours recognized terminals in the input line as the user types.
pub struct EncounterHighlighter {
    vocabulary: Arc<VocabularyRegistry>,
}

impl EncounterHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new(vocabulary: Arc<VocabularyRegistry>) -> Self {
        Self { vocabulary }
    }

    /// Highlight a line of input.
    ///
    /// Unrecognized words are left as typed.
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let lexemes = InputTokenizer::new(&self.vocabulary).scan(line);
        if lexemes.is_empty() {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut cursor = 0;
        for lexeme in lexemes {
            result.push_str(&line[cursor..lexeme.span.start]);
            result.push_str(category_color(lexeme.token.category().kind()));
            result.push_str(&line[lexeme.span.clone()]);
            result.push_str(RESET);
            cursor = lexeme.span.end;
        }
        result.push_str(&line[cursor..]);

        Cow::Owned(result)
    }
}
