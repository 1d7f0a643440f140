//! The main REPL implementation.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::sync::Arc;

use encounter_foundation::{Error, ErrorContext, Result};
use encounter_parser::{EncounterParser, GrammarGuide, ParseResult, Rejection, VocabularyRegistry};
use tracing::{debug, info};

use crate::config::ReplConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::highlight::{RESET, category_color};

/// What the loop should do after a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Print the text (possibly empty) and keep reading.
    Continue(String),
    /// The exit keyword was entered.
    Exit,
}

/// A line after parsing, before rendering.
enum Evaluated {
    Exit,
    Blank,
    Parsed(ParseResult),
}

/// Counts of a batch run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Lines that were accepted.
    pub accepted: usize,
    /// Lines that were rejected.
    pub rejected: usize,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The vocabulary every line is matched against.
    vocabulary: Arc<VocabularyRegistry>,

    /// Prompt, exit keyword, colour, banner.
    config: ReplConfig,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(vocabulary: Arc<VocabularyRegistry>, config: ReplConfig) -> Result<Self> {
        let editor = RustylineEditor::new(Arc::clone(&vocabulary), &config)?;
        Ok(Self::with_editor(editor, vocabulary, config))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E, vocabulary: Arc<VocabularyRegistry>, config: ReplConfig) -> Self {
        Self {
            editor,
            vocabulary,
            config,
        }
    }

    /// Disables the grammar banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.config.show_grammar = false;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ReplConfig {
        &self.config
    }

    /// Returns the vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &VocabularyRegistry {
        &self.vocabulary
    }

    /// Runs the REPL loop on stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with(&mut out)
    }

    /// Runs the REPL loop, writing to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run_with<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.config.show_grammar {
            writeln!(out, "{}", self.banner())?;
        }
        info!("session started");

        while self.read_eval_print(out)? {}

        writeln!(out, "\nGoodbye!")?;
        info!("session ended");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print<W: Write>(&mut self, out: &mut W) -> Result<bool> {
        let input = match self.editor.read_line(&self.config.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                writeln!(out)?;
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if !input.trim().is_empty() {
            self.editor.add_history(&input);
        }

        match self.process_line(&input) {
            LineOutcome::Exit => Ok(false),
            LineOutcome::Continue(text) => {
                if !text.is_empty() {
                    writeln!(out, "{text}")?;
                }
                Ok(true)
            }
        }
    }

    /// Handles one line of input without doing any I/O.
    #[must_use]
    pub fn process_line(&self, line: &str) -> LineOutcome {
        match self.evaluate(line) {
            Evaluated::Exit => LineOutcome::Exit,
            Evaluated::Blank => LineOutcome::Continue(String::new()),
            Evaluated::Parsed(result) => {
                LineOutcome::Continue(render_result(&result, self.config.color))
            }
        }
    }

    fn evaluate(&self, line: &str) -> Evaluated {
        if self.config.is_exit(line) {
            return Evaluated::Exit;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Evaluated::Blank;
        }
        Evaluated::Parsed(EncounterParser::new(&self.vocabulary).parse(trimmed))
    }

    /// The grammar guide shown at startup.
    #[must_use]
    pub fn banner(&self) -> String {
        let mut banner = String::from("-Pok\u{e9}mon Grammar Guide (CFG)-\n");
        for rule in GrammarGuide::rules(&self.vocabulary) {
            banner.push('\n');
            banner.push_str(&rule);
        }
        let _ = write!(
            banner,
            "\n\nEnter a Pok\u{e9}mon input (or type {} to quit):",
            self.config.exit_keyword
        );
        banner
    }

    /// Processes every line of a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read, or output
    /// cannot be written.
    pub fn eval_file<W: Write>(&self, path: &Path, out: &mut W) -> Result<BatchSummary> {
        let source = path.display().to_string();
        let file = File::open(path)
            .map_err(|e| Error::from(e).with_context(ErrorContext::new().with_source(&source)))?;
        self.eval_reader(BufReader::new(file), &source, out)
    }

    /// Processes lines from a reader until EOF or the exit keyword.
    ///
    /// Each line is echoed after the prompt, followed by its result.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn eval_reader<R: BufRead, W: Write>(
        &self,
        reader: R,
        source: &str,
        out: &mut W,
    ) -> Result<BatchSummary> {
        let mut summary = BatchSummary::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                Error::from(e).with_context(
                    ErrorContext::new()
                        .with_source(source)
                        .with_line(index + 1),
                )
            })?;

            match self.evaluate(&line) {
                Evaluated::Exit => {
                    debug!(source, line = index + 1, "exit keyword, stopping");
                    break;
                }
                Evaluated::Blank => {}
                Evaluated::Parsed(result) => {
                    writeln!(out, "{}{}", self.config.prompt, line.trim())?;
                    writeln!(out, "{}\n", render_result(&result, self.config.color))?;
                    if result.is_accepted() {
                        summary.accepted += 1;
                    } else {
                        summary.rejected += 1;
                    }
                }
            }
        }

        info!(
            source,
            accepted = summary.accepted,
            rejected = summary.rejected,
            "batch finished"
        );
        Ok(summary)
    }
}

const ACCEPTED: &str = "Input accepted!";
const REJECTED: &str = "Input rejected.";

fn paint(text: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Renders a parse result the way the REPL prints it.
///
/// Accepted lines show the tokens and the derivation; rejected lines show
/// the first violated rule.
#[must_use]
pub fn render_result(result: &ParseResult, color: bool) -> String {
    let mut out = String::new();
    match result {
        ParseResult::Accepted { tokens, derivation } => {
            let _ = writeln!(out, "{}", paint("Phase 1: Tokens", "\x1b[1m", color));
            for token in tokens {
                let category = token.category();
                let _ = writeln!(
                    out,
                    "{} \u{2192} {}",
                    token.text(),
                    paint(&category.to_string(), category_color(category.kind()), color)
                );
            }
            let _ = writeln!(out, "\n{}", paint("Phase 2: Derivation", "\x1b[1m", color));
            let _ = writeln!(out, "{derivation}");
            let _ = write!(out, "\n{}", paint(ACCEPTED, "\x1b[32m", color));
        }
        ParseResult::Rejected {
            rejection: Rejection::EmptyTokenization,
            ..
        } => {
            out.push_str(&paint("Error: No valid tokens found.", "\x1b[31m", color));
        }
        ParseResult::Rejected { rejection, .. } => {
            let _ = writeln!(
                out,
                "{}",
                paint(&format!("Validation error: {rejection}"), "\x1b[31m", color)
            );
            out.push_str(REJECTED);
        }
    }
    out
}
