//! Standard vocabulary for the wild-encounter grammar.
//!
//! Contains the built-in trainers, creatures, moves, decisions and outcomes.

use encounter_foundation::{Branch, Result};

use crate::vocabulary::VocabularyRegistry;

/// Trainers.
pub const TRAINERS: &[&str] = &["Ash", "Brock", "Misty"];

/// Creatures that can appear in the wild.
pub const WILD_CREATURES: &[&str] = &["Rattata", "Pidgey", "Zubat", "Eevee", "Ekans", "Pikachu"];

/// Party members and the moves each one knows.
pub const PARTY: &[(&str, &[&str])] = &[
    ("Pikachu", &["Thunderbolt", "Quick Attack"]),
    ("Onix", &["Rock Throw", "Tackle"]),
    ("Staryu", &["Water Gun", "Swift"]),
];

/// Phrase that starts a fight.
pub const FIGHT: &str = "Pick a Pokemon:";

/// Phrase that throws a ball.
pub const CAPTURE: &str = "use Pokeball";

/// Phrase that runs away.
pub const FLEE: &str = "Got away safely!";

/// Battle outcomes.
pub const OUTCOMES: &[&str] = &[
    "It's super effective!",
    "It's not very effective!",
    "A critical hit!",
    "The opponent is paralyzed!",
    "The opponent is asleep!",
    "The opponent is poisoned!",
    "The attack hit normally.",
];

/// Builds the standard vocabulary.
///
/// # Errors
///
/// Returns an error if the tables above ever register a terminal twice
/// under different categories.
pub fn standard_vocabulary() -> Result<VocabularyRegistry> {
    let mut vocab = VocabularyRegistry::new();

    for trainer in TRAINERS {
        vocab.register_trainer(trainer)?;
    }
    for creature in WILD_CREATURES {
        vocab.register_wild_creature(creature)?;
    }
    for (member, moves) in PARTY {
        vocab.register_party_member(member, moves.iter().copied())?;
    }

    vocab.register_decision(FIGHT, Branch::Fight)?;
    vocab.register_decision(CAPTURE, Branch::Capture)?;
    vocab.register_decision(FLEE, Branch::Flee)?;

    for outcome in OUTCOMES {
        vocab.register_outcome(outcome)?;
    }

    Ok(vocab)
}
