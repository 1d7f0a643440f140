//! Leftmost derivations of accepted sentences.
//!
//! Starting from `<Game>`, each step replaces the leftmost non-terminal of
//! the current sentential form with one production, until only terminals
//! remain. The terminals are the texts of the tokens the validator chose,
//! so the last step reproduces the accepted input.

use std::fmt;

use encounter_foundation::CategoryKind;
use tracing::debug;

use crate::grammar::{
    CAPTURE_CONFIRMATION, ENCOUNTER_CONNECTIVE, FIGHT_SYMBOL, START_SYMBOL, non_terminal,
    skills_symbol,
};
use crate::validator::{Encounter, Fight, Plan};

/// A grammar symbol in a sentential form.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Symbol {
    Terminal(String),
    NonTerminal(String),
}

impl Symbol {
    fn t(text: &str) -> Self {
        Self::Terminal(text.to_string())
    }

    fn n(name: &str) -> Self {
        Self::NonTerminal(name.to_string())
    }

    fn kind(kind: CategoryKind) -> Self {
        Self::n(kind.symbol())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminal(text) => f.write_str(text),
            Self::NonTerminal(name) => f.write_str(&non_terminal(name)),
        }
    }
}

/// Records every sentential form while rewriting.
struct Rewriter {
    form: Vec<Symbol>,
    steps: Vec<String>,
}

impl Rewriter {
    fn start() -> Self {
        let mut rewriter = Self {
            form: vec![Symbol::n(START_SYMBOL)],
            steps: Vec::new(),
        };
        rewriter.record();
        rewriter
    }

    fn record(&mut self) {
        let line = self
            .form
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        self.steps.push(line);
    }

    /// Replaces the leftmost non-terminal with `production`.
    ///
    /// A form with no non-terminals is already a sentence and is left as is.
    fn rewrite(&mut self, production: Vec<Symbol>) {
        let leftmost = self
            .form
            .iter()
            .position(|s| matches!(s, Symbol::NonTerminal(_)));
        if let Some(pos) = leftmost {
            self.form.splice(pos..=pos, production);
            self.record();
        }
    }

    fn finish(self) -> Derivation {
        Derivation { steps: self.steps }
    }
}

/// The steps of a leftmost derivation, first `<Game>`, last the sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Derivation {
    steps: Vec<String>,
}

impl Derivation {
    /// Every sentential form in order.
    #[must_use]
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// The fully derived sentence.
    #[must_use]
    pub fn final_sentence(&self) -> &str {
        self.steps.last().map_or("", String::as_str)
    }

    /// Number of steps, including the start symbol.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a derivation produced by [`Deriver`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Consumes the derivation, returning its steps.
    #[must_use]
    pub fn into_steps(self) -> Vec<String> {
        self.steps
    }
}

/// Renders the start symbol on its own line and every later step prefixed
/// with `⇒`.
impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
                write!(f, "\u{21d2} ")?;
            }
            f.write_str(step)?;
        }
        Ok(())
    }
}

/// Produces leftmost derivations for accepted encounters.
pub struct Deriver;

impl Deriver {
    /// Derives the sentence an accepted encounter stands for.
    ///
    /// Only accepted sentences can be derived: the validator is the sole
    /// producer of [`Encounter`].
    #[must_use]
    pub fn derive(encounter: &Encounter<'_>) -> Derivation {
        let mut r = Rewriter::start();

        r.rewrite(vec![
            Symbol::kind(CategoryKind::Trainer),
            Symbol::t(ENCOUNTER_CONNECTIVE),
            Symbol::kind(CategoryKind::WildCreature),
            Symbol::kind(CategoryKind::Decision),
        ]);
        r.rewrite(vec![Symbol::t(encounter.trainer.text())]);
        r.rewrite(vec![Symbol::t(encounter.wild.text())]);

        let decision = encounter.decision.text();
        match encounter.plan {
            Plan::Fight(fight) => {
                r.rewrite(vec![Symbol::t(decision), Symbol::n(FIGHT_SYMBOL)]);
                Self::derive_fight(&mut r, &fight);
            }
            Plan::Capture => {
                r.rewrite(vec![Symbol::t(decision), Symbol::t(CAPTURE_CONFIRMATION)]);
            }
            Plan::Flee => r.rewrite(vec![Symbol::t(decision)]),
        }

        let derivation = r.finish();
        debug!(
            steps = derivation.len(),
            branch = %encounter.plan.branch(),
            "derived"
        );
        derivation
    }

    fn derive_fight(r: &mut Rewriter, fight: &Fight<'_>) {
        let member = fight.member.text();
        r.rewrite(vec![
            Symbol::kind(CategoryKind::PartyMember),
            Symbol::t(fight.keyword.text()),
            Symbol::kind(CategoryKind::Move),
            Symbol::kind(CategoryKind::Outcome),
        ]);
        r.rewrite(vec![Symbol::t(member)]);
        r.rewrite(vec![Symbol::n(&skills_symbol(member))]);
        r.rewrite(vec![Symbol::t(fight.skill.text())]);
        r.rewrite(vec![Symbol::t(fight.outcome.text())]);
    }
}
