//! Configuration for the REPL and batch runner.

/// Configuration for an encounter session.
///
/// Controls prompts, the exit keyword, colour and the startup banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    /// Primary prompt.
    pub prompt: String,

    /// Keyword that ends the session, matched case-insensitively.
    pub exit_keyword: String,

    /// Print the grammar guide when the REPL starts.
    pub show_grammar: bool,

    /// Use ANSI colours in output.
    pub color: bool,

    /// Maximum number of history entries kept by the line editor.
    pub history_size: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            exit_keyword: "ENDGAME".to_string(),
            show_grammar: true,
            color: true,
            history_size: 1000,
        }
    }
}

impl ReplConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration for scripted use: no banner, no colour.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            show_grammar: false,
            color: false,
            ..Self::default()
        }
    }

    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to set the exit keyword.
    #[must_use]
    pub fn with_exit_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.exit_keyword = keyword.into();
        self
    }

    /// Builder method to show or hide the grammar banner.
    #[must_use]
    pub fn with_grammar_banner(mut self, show: bool) -> Self {
        self.show_grammar = show;
        self
    }

    /// Builder method to enable/disable colour.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Builder method to set the history size.
    #[must_use]
    pub fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }

    /// Returns true if `line` is the exit keyword.
    #[must_use]
    pub fn is_exit(&self, line: &str) -> bool {
        line.trim().eq_ignore_ascii_case(&self.exit_keyword)
    }
}
