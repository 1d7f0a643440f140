//! Structural validation of token sequences.
//!
//! Checks a token sequence against the grammar's structural rules, in a
//! fixed order, and reports the first rule that fails:
//!
//! 1. the sequence is not empty
//! 2. exactly one `<Trainer>`
//! 3. exactly one `<WildPokemon>`
//! 4. exactly one `<Decision>`, whose branch decides the rest
//! 5. on the fight branch: a `<Pokedex>`, the `use` keyword, a move owned
//!    by that party member, and a `<BattleOutcome>`
//!
//! Validation only looks at token categories, never at word order, because
//! the tokenizer drops filler words.

use encounter_foundation::{Branch, CategoryKind, Token};
use thiserror::Error;
use tracing::debug;

use crate::vocabulary::VocabularyRegistry;

/// Why a token sequence was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    /// No word of the input matched the vocabulary.
    #[error("no valid tokens found")]
    EmptyTokenization,

    /// A required category is absent.
    #[error("{}", missing_message(.0))]
    MissingCategory(CategoryKind),

    /// A category that must occur exactly once occurred more often.
    #[error("input must contain exactly one {category}, found {count}")]
    DuplicateCategory {
        /// The duplicated category.
        category: CategoryKind,
        /// How many tokens of that category were found.
        count: usize,
    },

    /// The chosen move belongs to a different party member.
    #[error("skill '{skill}' does not belong to {member}")]
    MoveOwnershipMismatch {
        /// The offending move.
        skill: String,
        /// The party member that was chosen.
        member: String,
    },

    /// A decision token whose phrase is not in the vocabulary.
    #[error("'{0}' is not a registered decision")]
    UnknownDecision(String),
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn missing_message(kind: &CategoryKind) -> String {
    match kind {
        CategoryKind::Trainer | CategoryKind::WildCreature | CategoryKind::Decision => {
            format!("input must contain exactly one {kind}, found none")
        }
        _ => format!("incomplete fight sequence: missing {kind}"),
    }
}

/// The tokens chosen for the fight branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fight<'t> {
    /// The `<Pokedex>` token.
    pub member: &'t Token,
    /// The `use` connective.
    pub keyword: &'t Token,
    /// The move, owned by `member`.
    pub skill: &'t Token,
    /// The `<BattleOutcome>` token.
    pub outcome: &'t Token,
}

/// What happens after the decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Plan<'t> {
    /// Fight with a party member.
    Fight(Fight<'t>),
    /// Capture the wild creature.
    Capture,
    /// Run away.
    Flee,
}

impl Plan<'_> {
    /// The branch this plan follows.
    #[must_use]
    pub const fn branch(&self) -> Branch {
        match self {
            Self::Fight(_) => Branch::Fight,
            Self::Capture => Branch::Capture,
            Self::Flee => Branch::Flee,
        }
    }
}

/// An accepted sentence, borrowing the tokens the validator selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Encounter<'t> {
    /// The `<Trainer>` token.
    pub trainer: &'t Token,
    /// The `<WildPokemon>` token.
    pub wild: &'t Token,
    /// The `<Decision>` token.
    pub decision: &'t Token,
    /// The continuation.
    pub plan: Plan<'t>,
}

/// Outcome of validating a token sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validation<'t> {
    /// The sequence is a sentence of the grammar.
    Accepted(Encounter<'t>),
    /// The first violated rule.
    Rejected(Rejection),
}

impl<'t> Validation<'t> {
    /// Returns true if the sequence was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Converts into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the rejection if the sequence was rejected.
    pub fn into_result(self) -> Result<Encounter<'t>, Rejection> {
        match self {
            Self::Accepted(encounter) => Ok(encounter),
            Self::Rejected(rejection) => Err(rejection),
        }
    }
}

/// Validates token sequences against the grammar.
#[derive(Clone, Copy, Debug)]
pub struct TokenValidator<'v> {
    vocab: &'v VocabularyRegistry,
}

impl<'v> TokenValidator<'v> {
    /// Creates a validator over the given vocabulary.
    #[must_use]
    pub const fn new(vocab: &'v VocabularyRegistry) -> Self {
        Self { vocab }
    }

    /// Validates a token sequence, short-circuiting at the first failure.
    #[must_use]
    pub fn validate<'t>(&self, tokens: &'t [Token]) -> Validation<'t> {
        let validation = match self.check(tokens) {
            Ok(encounter) => Validation::Accepted(encounter),
            Err(rejection) => Validation::Rejected(rejection),
        };
        match &validation {
            Validation::Accepted(encounter) => {
                debug!(branch = %encounter.plan.branch(), "accepted");
            }
            Validation::Rejected(rejection) => debug!(%rejection, "rejected"),
        }
        validation
    }

    fn check<'t>(&self, tokens: &'t [Token]) -> Result<Encounter<'t>, Rejection> {
        if tokens.is_empty() {
            return Err(Rejection::EmptyTokenization);
        }

        let trainer = exactly_one(tokens, CategoryKind::Trainer)?;
        let wild = exactly_one(tokens, CategoryKind::WildCreature)?;
        let decision = exactly_one(tokens, CategoryKind::Decision)?;

        let branch = self
            .vocab
            .branch_of(decision.text())
            .ok_or_else(|| Rejection::UnknownDecision(decision.text().to_string()))?;

        let plan = match branch {
            Branch::Fight => Plan::Fight(check_fight(tokens)?),
            Branch::Capture => Plan::Capture,
            Branch::Flee => Plan::Flee,
        };

        Ok(Encounter {
            trainer,
            wild,
            decision,
            plan,
        })
    }
}

fn exactly_one(tokens: &[Token], kind: CategoryKind) -> Result<&Token, Rejection> {
    let mut found = tokens.iter().filter(|t| t.is(kind));
    let first = found.next().ok_or(Rejection::MissingCategory(kind))?;
    let extra = found.count();
    if extra > 0 {
        return Err(Rejection::DuplicateCategory {
            category: kind,
            count: extra + 1,
        });
    }
    Ok(first)
}

fn first_of(tokens: &[Token], kind: CategoryKind) -> Result<&Token, Rejection> {
    tokens
        .iter()
        .find(|t| t.is(kind))
        .ok_or(Rejection::MissingCategory(kind))
}

fn check_fight(tokens: &[Token]) -> Result<Fight<'_>, Rejection> {
    let member = first_of(tokens, CategoryKind::PartyMember)?;
    let keyword = first_of(tokens, CategoryKind::UseKeyword)?;
    let skill = first_of(tokens, CategoryKind::Move)?;

    let owned = skill
        .category()
        .move_owner()
        .is_some_and(|owner| *owner == *member.text());
    if !owned {
        return Err(Rejection::MoveOwnershipMismatch {
            skill: skill.text().to_string(),
            member: member.text().to_string(),
        });
    }

    let outcome = first_of(tokens, CategoryKind::Outcome)?;
    Ok(Fight {
        member,
        keyword,
        skill,
        outcome,
    })
}
