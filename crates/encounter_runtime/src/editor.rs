//! Line editor abstraction for the REPL.
//!
//! This module provides a trait-based abstraction over line editing libraries,
//! allowing the REPL to use rustyline while tests drive it with scripted input.

use std::borrow::Cow;
use std::sync::Arc;

use encounter_foundation::{Error, ErrorKind, Result};
use encounter_parser::VocabularyRegistry;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};
use tracing::warn;

use crate::config::ReplConfig;
use crate::highlight::EncounterHighlighter;

/// Result of reading a line from the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);
}

/// Helper for rustyline that provides completion, hints and highlighting.
#[derive(Helper, Completer, Hinter, Validator)]
struct EncounterHelper {
    #[rustyline(Completer)]
    completer: TerminalCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    highlighter: EncounterHighlighter,
    color: bool,
}

impl Highlighter for EncounterHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        if self.color {
            self.highlighter.highlight(line, pos)
        } else {
            Cow::Borrowed(line)
        }
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default && self.color {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        self.color
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        if self.color {
            Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
        } else {
            Cow::Borrowed(hint)
        }
    }
}

/// Completer over every terminal of the vocabulary.
///
/// Multi-word terminals complete as a whole from their first word.
struct TerminalCompleter {
    terminals: Vec<String>,
}

impl TerminalCompleter {
    fn new(vocabulary: &VocabularyRegistry) -> Self {
        let mut terminals: Vec<String> = Vec::new();
        for terminal in vocabulary.terminals() {
            // Creatures can be both wild and in the party
            if !terminals.iter().any(|t| t == terminal) {
                terminals.push(terminal.to_string());
            }
        }
        Self { terminals }
    }
}

impl Completer for TerminalCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        // Find the start of the current word
        let start = line[..pos]
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + 1);

        let word = &line[start..pos];
        if word.is_empty() {
            return Ok((start, Vec::new()));
        }

        let candidates: Vec<Pair> = self
            .terminals
            .iter()
            .filter(|t| t.starts_with(word))
            .map(|t| Pair {
                display: t.clone(),
                replacement: t.clone(),
            })
            .collect();

        Ok((start, candidates))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<EncounterHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new(vocabulary: Arc<VocabularyRegistry>, config: &ReplConfig) -> Result<Self> {
        let rl_config = Config::builder()
            .auto_add_history(false)
            .max_history_size(config.history_size)
            .map_err(|e| Error::new(ErrorKind::Editor(e.to_string())))?
            .build();

        let helper = EncounterHelper {
            completer: TerminalCompleter::new(&vocabulary),
            hinter: HistoryHinter::new(),
            highlighter: EncounterHighlighter::new(vocabulary),
            color: config.color,
        };

        let mut editor = Editor::with_config(rl_config)
            .map_err(|e| Error::new(ErrorKind::Editor(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Editor(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            warn!(error = %e, "could not record history entry");
        }
    }
}
