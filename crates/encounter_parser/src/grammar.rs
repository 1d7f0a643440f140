//! The fixed shape of the encounter grammar.
//!
//! ```text
//! <Game>     ::= <Trainer> sees a wild <WildPokemon> <Decision>
//! <Decision> ::= <fight phrase> <Fight> | <capture phrase> | <flee phrase>
//! <Fight>    ::= <Pokedex> use <Skill> <BattleOutcome>
//! <Skill>    ::= <M_Skills> for every party member M
//! ```
//!
//! Terminals come from the [`VocabularyRegistry`]; only the connectives
//! below are fixed.

use encounter_foundation::{Branch, CategoryKind};

use crate::vocabulary::VocabularyRegistry;

/// The start symbol.
pub const START_SYMBOL: &str = "Game";

/// Connective between the trainer and the wild creature.
pub const ENCOUNTER_CONNECTIVE: &str = "sees a wild";

/// Connective between the party member and its move.
pub const USE_KEYWORD: &str = "use";

/// Non-terminal for the fight continuation.
pub const FIGHT_SYMBOL: &str = "Fight";

/// Clause appended after a capture decision.
pub const CAPTURE_CONFIRMATION: &str = "The pokemon was caught!";

/// Formats a non-terminal name as `<name>`.
#[must_use]
pub fn non_terminal(name: &str) -> String {
    format!("<{name}>")
}

/// Name of the non-terminal listing a member's moves.
#[must_use]
pub fn skills_symbol(member: &str) -> String {
    format!("{member}_Skills")
}

/// Renders the grammar as BNF rules for a vocabulary.
pub struct GrammarGuide;

impl GrammarGuide {
    /// Returns one BNF rule per line, terminals in registration order.
    #[must_use]
    pub fn rules(vocab: &VocabularyRegistry) -> Vec<String> {
        let sym = |kind: CategoryKind| kind.to_string();
        let mut rules = vec![format!(
            "{} ::= {} {ENCOUNTER_CONNECTIVE} {} {}",
            non_terminal(START_SYMBOL),
            sym(CategoryKind::Trainer),
            sym(CategoryKind::WildCreature),
            sym(CategoryKind::Decision),
        )];

        rules.push(alternatives(
            &sym(CategoryKind::Trainer),
            vocab.trainers().iter().cloned(),
        ));
        rules.push(alternatives(
            &sym(CategoryKind::WildCreature),
            vocab.wild_creatures().iter().cloned(),
        ));
        rules.push(alternatives(
            &sym(CategoryKind::Decision),
            vocab.decisions().iter().map(|d| match d.branch {
                Branch::Fight => format!("{} {}", d.phrase, non_terminal(FIGHT_SYMBOL)),
                Branch::Capture | Branch::Flee => d.phrase.clone(),
            }),
        ));
        rules.push(format!(
            "{} ::= {} {USE_KEYWORD} {} {}",
            non_terminal(FIGHT_SYMBOL),
            sym(CategoryKind::PartyMember),
            sym(CategoryKind::Move),
            sym(CategoryKind::Outcome),
        ));
        rules.push(alternatives(
            &sym(CategoryKind::PartyMember),
            vocab.party_members().iter().map(|m| m.id.to_string()),
        ));
        rules.push(alternatives(
            &sym(CategoryKind::Move),
            vocab
                .party_members()
                .iter()
                .map(|m| non_terminal(&skills_symbol(m.id.as_str()))),
        ));
        for member in vocab.party_members() {
            let skills = non_terminal(&skills_symbol(member.id.as_str()));
            rules.push(format!("{} ::= {skills}", non_terminal(member.id.as_str())));
            rules.push(alternatives(
                &skills,
                member.moves.iter().cloned(),
            ));
        }
        rules.push(alternatives(
            &sym(CategoryKind::Outcome),
            vocab.outcomes().iter().cloned(),
        ));
        rules
    }
}

fn alternatives(head: &str, options: impl Iterator<Item = String>) -> String {
    let body: Vec<String> = options.collect();
    format!("{head} ::= {}", body.join(" | "))
}
