//! Input tokenization.
//!
//! Converts a raw input line into a stream of typed tokens by greedily
//! matching runs of words against the vocabulary.
//!
//! The scan is a single left-to-right pass with no backtracking:
//!
//! 1. At each word, the longest registered multi-word phrase starting there
//!    wins. Equal lengths are broken by category: outcome, then decision,
//!    then move.
//! 2. Otherwise the word is looked up on its own, in priority order:
//!    trainer, wild creature, party member, the connective `use`, decision,
//!    move, outcome.
//! 3. Words that match nothing are dropped.
//!
//! A creature registered both as wild and as a party member is tagged
//! `WildCreature` until the line's first wild creature has been emitted,
//! and `PartyMember` after that.
//!
//! Greedy matching is only sound because the vocabulary is small and free of
//! prefix ambiguity across categories. A larger vocabulary would need a real
//! parser here.

use std::ops::Range;

use encounter_foundation::{Category, CategoryKind, Token};
use tracing::{debug, trace};

use crate::grammar::USE_KEYWORD;
use crate::vocabulary::{Phrase, VocabularyRegistry};

/// An ordered list of tokens, in input order.
pub type TokenSequence = Vec<Token>;

/// A token together with the byte range of the words it was matched from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexeme {
    /// Byte range in the input line, from the first matched word's start to
    /// the last matched word's end.
    pub span: Range<usize>,
    /// The recognized token.
    pub token: Token,
}

/// A whitespace-delimited word and its byte range.
#[derive(Clone, Copy, Debug)]
struct Word<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

impl AsRef<str> for Word<'_> {
    fn as_ref(&self) -> &str {
        self.text
    }
}

/// Splits a line on whitespace, keeping byte offsets.
fn split_words(input: &str) -> Vec<Word<'_>> {
    let mut words = Vec::new();
    let mut start = None;

    for (i, ch) in input.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(s)) => {
                words.push(Word {
                    text: &input[s..i],
                    start: s,
                    end: i,
                });
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }

    // Flush final word
    if let Some(s) = start {
        words.push(Word {
            text: &input[s..],
            start: s,
            end: input.len(),
        });
    }

    words
}

/// Tie-break rank for phrases of equal length (lower wins).
fn phrase_rank(category: &Category) -> u8 {
    match category.kind() {
        CategoryKind::Outcome => 0,
        CategoryKind::Decision => 1,
        _ => 2,
    }
}

/// Priority for single-word lookup (lower wins).
fn word_rank(kind: CategoryKind) -> u8 {
    match kind {
        CategoryKind::Trainer => 0,
        CategoryKind::WildCreature => 1,
        CategoryKind::PartyMember => 2,
        CategoryKind::UseKeyword => 3,
        CategoryKind::Decision => 4,
        CategoryKind::Move => 5,
        CategoryKind::Outcome => 6,
    }
}

/// Tokenizes input lines against a vocabulary.
#[derive(Clone, Copy, Debug)]
pub struct InputTokenizer<'v> {
    vocab: &'v VocabularyRegistry,
}

impl<'v> InputTokenizer<'v> {
    /// Creates a tokenizer over the given vocabulary.
    #[must_use]
    pub const fn new(vocab: &'v VocabularyRegistry) -> Self {
        Self { vocab }
    }

    /// Tokenizes a raw input line.
    ///
    /// Never fails: a line with no recognized words yields an empty sequence.
    #[must_use]
    pub fn tokenize(&self, input: &str) -> TokenSequence {
        self.scan(input).into_iter().map(|l| l.token).collect()
    }

    /// Tokenizes a raw input line, keeping each token's source span.
    #[must_use]
    pub fn scan(&self, input: &str) -> Vec<Lexeme> {
        let words = split_words(input);
        let mut lexemes = Vec::new();
        let mut wild_seen = false;
        let mut i = 0;

        while i < words.len() {
            // 1. Longest multi-word phrase
            if let Some(phrase) = self.longest_phrase(&words[i..]) {
                let last = &words[i + phrase.len() - 1];
                trace!(phrase = %phrase.text, category = %phrase.category, "matched phrase");
                lexemes.push(Lexeme {
                    span: words[i].start..last.end,
                    token: Token::new(phrase.text.clone(), phrase.category.clone()),
                });
                i += phrase.len();
                continue;
            }

            // 2. Single word
            let word = &words[i];
            if let Some(category) = self.classify_word(word.text, wild_seen) {
                trace!(word = word.text, %category, "matched word");
                wild_seen |= category == Category::WildCreature;
                lexemes.push(Lexeme {
                    span: word.start..word.end,
                    token: Token::new(word.text, category),
                });
            } else {
                trace!(word = word.text, "dropped unrecognized word");
            }
            i += 1;
        }

        debug!(
            words = words.len(),
            tokens = lexemes.len(),
            "tokenized input"
        );
        lexemes
    }

    /// Finds the longest phrase that `words` starts with.
    fn longest_phrase(&self, words: &[Word<'_>]) -> Option<&'v Phrase> {
        let mut best: Option<&Phrase> = None;
        for phrase in self.vocab.phrases() {
            if !phrase.matches(words) {
                continue;
            }
            best = match best {
                Some(current)
                    if current.len() > phrase.len()
                        || (current.len() == phrase.len()
                            && phrase_rank(&current.category) <= phrase_rank(&phrase.category)) =>
                {
                    Some(current)
                }
                _ => Some(phrase),
            };
        }
        best
    }

    /// Looks up a single word.
    fn classify_word(&self, word: &str, wild_seen: bool) -> Option<Category> {
        if word == USE_KEYWORD {
            return Some(Category::UseKeyword);
        }
        let categories = self.vocab.categories_of(word);
        let is_party = categories.contains(&Category::PartyMember);

        categories
            .iter()
            .filter(|c| !(wild_seen && is_party && **c == Category::WildCreature))
            .min_by_key(|c| word_rank(c.kind()))
            .cloned()
    }
}
