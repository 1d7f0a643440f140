//! Validator tests.
//!
//! Tests for the structural rules over token sequences.

use encounter_foundation::{Branch, CategoryKind};
use encounter_parser::validator::Plan;
use encounter_parser::{EncounterParser, Rejection, Validation, standard_vocabulary};

fn validate(input: &str) -> Result<Branch, Rejection> {
    let vocab = standard_vocabulary().unwrap();
    let parser = EncounterParser::new(&vocab);
    let tokens = parser.tokenize(input);
    parser
        .validate(&tokens)
        .into_result()
        .map(|encounter| encounter.plan.branch())
}

#[test]
fn accepts_each_branch() {
    assert_eq!(
        validate("Ash sees a wild Rattata Pick a Pokemon: Onix use Rock Throw A critical hit!"),
        Ok(Branch::Fight)
    );
    assert_eq!(validate("Brock sees a wild Zubat use Pokeball"), Ok(Branch::Capture));
    assert_eq!(validate("Misty sees a wild Eevee Got away safely!"), Ok(Branch::Flee));
}

#[test]
fn empty_sequence_rejected() {
    assert_eq!(validate("nothing here"), Err(Rejection::EmptyTokenization));
}

#[test]
fn missing_trainer() {
    assert_eq!(
        validate("sees a wild Eevee Got away safely!"),
        Err(Rejection::MissingCategory(CategoryKind::Trainer))
    );
}

#[test]
fn missing_wild_creature() {
    assert_eq!(
        validate("Misty sees a wild Got away safely!"),
        Err(Rejection::MissingCategory(CategoryKind::WildCreature))
    );
}

#[test]
fn missing_decision() {
    let rejection = validate("Misty sees a wild Eevee").unwrap_err();
    assert_eq!(rejection, Rejection::MissingCategory(CategoryKind::Decision));
    assert_eq!(
        rejection.to_string(),
        "input must contain exactly one <Decision>, found none"
    );
}

#[test]
fn duplicate_trainer() {
    let rejection = validate("Ash and Misty see a wild Eevee Got away safely!").unwrap_err();
    assert_eq!(
        rejection,
        Rejection::DuplicateCategory {
            category: CategoryKind::Trainer,
            count: 2,
        }
    );
    assert_eq!(
        rejection.to_string(),
        "input must contain exactly one <Trainer>, found 2"
    );
}

#[test]
fn duplicate_decision() {
    assert_eq!(
        validate("Ash sees a wild Ekans use Pokeball Got away safely!"),
        Err(Rejection::DuplicateCategory {
            category: CategoryKind::Decision,
            count: 2,
        })
    );
}

#[test]
fn fight_needs_every_part() {
    let base = "Ash sees a wild Pidgey Pick a Pokemon:";
    assert_eq!(
        validate(base),
        Err(Rejection::MissingCategory(CategoryKind::PartyMember))
    );
    assert_eq!(
        validate(&format!("{base} Staryu Swift")),
        Err(Rejection::MissingCategory(CategoryKind::UseKeyword))
    );
    assert_eq!(
        validate(&format!("{base} Staryu use")),
        Err(Rejection::MissingCategory(CategoryKind::Move))
    );

    let rejection = validate(&format!("{base} Staryu use Swift")).unwrap_err();
    assert_eq!(rejection, Rejection::MissingCategory(CategoryKind::Outcome));
    assert_eq!(
        rejection.to_string(),
        "incomplete fight sequence: missing <BattleOutcome>"
    );
}

#[test]
fn move_of_another_member_rejected() {
    let rejection = validate(
        "Ash sees a wild Pikachu Pick a Pokemon: Pikachu use Tackle It's super effective!",
    )
    .unwrap_err();
    assert_eq!(
        rejection,
        Rejection::MoveOwnershipMismatch {
            skill: "Tackle".to_string(),
            member: "Pikachu".to_string(),
        }
    );
}

#[test]
fn capture_ignores_fight_tokens() {
    assert_eq!(
        validate("Brock sees a wild Zubat use Pokeball Onix use Tackle"),
        Ok(Branch::Capture)
    );
}

#[test]
fn encounter_borrows_chosen_tokens() {
    let vocab = standard_vocabulary().unwrap();
    let parser = EncounterParser::new(&vocab);
    let tokens =
        parser.tokenize("Misty sees a wild Ekans Pick a Pokemon: Staryu use Water Gun The opponent is asleep!");

    let Validation::Accepted(encounter) = parser.validate(&tokens) else {
        panic!("expected acceptance");
    };
    assert_eq!(encounter.trainer.text(), "Misty");
    assert_eq!(encounter.wild.text(), "Ekans");
    let Plan::Fight(fight) = encounter.plan else {
        panic!("expected fight");
    };
    assert_eq!(fight.member.text(), "Staryu");
    assert_eq!(fight.skill.text(), "Water Gun");
    assert_eq!(fight.outcome.text(), "The opponent is asleep!");
}
