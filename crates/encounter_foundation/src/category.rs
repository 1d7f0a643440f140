//! Grammar categories.
//!
//! Every recognized terminal is tagged with exactly one [`Category`]. Moves
//! are scoped by the party member that knows them, so the move category
//! carries its owner.

use std::fmt;
use std::sync::Arc;

/// The name of a party member, shared between the vocabulary and tokens.
///
/// Cloning is cheap; equality is by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberId(Arc<str>);

impl MemberId {
    /// Creates a member id from a name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// Returns the member's name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for MemberId {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

/// The grammar category of a token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// `<Trainer>`
    Trainer,
    /// `<WildPokemon>`
    WildCreature,
    /// `<Pokedex>`
    PartyMember,
    /// `<Decision>`
    Decision,
    /// `<BattleOutcome>`
    Outcome,
    /// The literal connective `use` inside a fight.
    UseKeyword,
    /// A move known by the given party member.
    Move(MemberId),
}

impl Category {
    /// Returns the field-less kind of this category.
    #[must_use]
    pub fn kind(&self) -> CategoryKind {
        match self {
            Self::Trainer => CategoryKind::Trainer,
            Self::WildCreature => CategoryKind::WildCreature,
            Self::PartyMember => CategoryKind::PartyMember,
            Self::Decision => CategoryKind::Decision,
            Self::Outcome => CategoryKind::Outcome,
            Self::UseKeyword => CategoryKind::UseKeyword,
            Self::Move(_) => CategoryKind::Move,
        }
    }

    /// Returns the owning member if this is a move category.
    #[must_use]
    pub fn move_owner(&self) -> Option<&MemberId> {
        match self {
            Self::Move(owner) => Some(owner),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move(owner) => write!(f, "<{owner}_Skills>"),
            other => write!(f, "{}", other.kind()),
        }
    }
}

/// A category without its move owner, used to name categories in messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    /// `<Trainer>`
    Trainer,
    /// `<WildPokemon>`
    WildCreature,
    /// `<Pokedex>`
    PartyMember,
    /// `<Decision>`
    Decision,
    /// `<BattleOutcome>`
    Outcome,
    /// `<UseKeyword>`
    UseKeyword,
    /// `<Skill>`
    Move,
}

impl CategoryKind {
    /// The non-terminal name used in the grammar guide.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Trainer => "Trainer",
            Self::WildCreature => "WildPokemon",
            Self::PartyMember => "Pokedex",
            Self::Decision => "Decision",
            Self::Outcome => "BattleOutcome",
            Self::UseKeyword => "UseKeyword",
            Self::Move => "Skill",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.symbol())
    }
}

/// The continuation selected by a decision phrase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Branch {
    /// Choose a party member and attack.
    Fight,
    /// Throw a ball at the wild creature.
    Capture,
    /// Run away.
    Flee,
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fight => write!(f, "fight"),
            Self::Capture => write!(f, "capture"),
            Self::Flee => write!(f, "flee"),
        }
    }
}
