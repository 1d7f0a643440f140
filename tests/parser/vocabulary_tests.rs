//! Vocabulary tests.
//!
//! Tests for registering terminals and looking them up.

use encounter_foundation::{Branch, Category, CategoryKind, ErrorKind};
use encounter_parser::{VocabularyRegistry, standard_vocabulary};

#[test]
fn register_and_lookup() {
    let mut vocab = VocabularyRegistry::new();
    assert!(vocab.is_empty());

    vocab.register_trainer("Ash").unwrap();
    vocab.register_wild_creature("Zubat").unwrap();

    assert!(!vocab.is_empty());
    assert_eq!(vocab.categories_of("Ash"), [Category::Trainer]);
    assert_eq!(vocab.categories_of("Zubat"), [Category::WildCreature]);
    assert!(vocab.categories_of("Misty").is_empty());
}

#[test]
fn registering_twice_is_idempotent() {
    let mut vocab = VocabularyRegistry::new();
    vocab.register_trainer("Ash").unwrap();
    vocab.register_trainer("Ash").unwrap();
    vocab.register_outcome("A critical hit!").unwrap();
    vocab.register_outcome("A  critical hit!").unwrap();

    assert_eq!(vocab.trainers(), ["Ash"]);
    assert_eq!(vocab.outcomes(), ["A critical hit!"]);
    assert_eq!(vocab.phrases().len(), 1);
}

#[test]
fn literal_in_two_categories_conflicts() {
    let mut vocab = VocabularyRegistry::new();
    vocab.register_trainer("Brock").unwrap();

    let err = vocab.register_wild_creature("Brock").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::TerminalConflict {
            existing: CategoryKind::Trainer,
            attempted: CategoryKind::WildCreature,
            ..
        }
    ));
    assert!(vocab.wild_creatures().is_empty());
}

#[test]
fn creature_may_be_wild_and_in_party() {
    let mut vocab = VocabularyRegistry::new();
    vocab.register_wild_creature("Pikachu").unwrap();
    vocab
        .register_party_member("Pikachu", ["Thunderbolt"])
        .unwrap();

    assert_eq!(
        vocab.categories_of("Pikachu"),
        [Category::WildCreature, Category::PartyMember]
    );
}

#[test]
fn same_move_for_two_members_conflicts() {
    let mut vocab = VocabularyRegistry::new();
    vocab.register_party_member("Onix", ["Tackle"]).unwrap();

    let err = vocab
        .register_party_member("Staryu", ["Water Gun", "Tackle"])
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TerminalConflict { .. }));

    // Nothing of the failed registration is kept
    assert!(vocab.moves_of("Staryu").is_none());
    assert!(vocab.categories_of("Water Gun").is_empty());
    assert_eq!(vocab.party_members().len(), 1);
}

#[test]
fn use_is_reserved() {
    let mut vocab = VocabularyRegistry::new();
    let err = vocab.register_outcome("use").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ReservedTerminal(_)));

    // Phrases containing the connective are fine
    vocab.register_decision("use Pokeball", Branch::Capture).unwrap();
}

#[test]
fn empty_terminal_rejected() {
    let mut vocab = VocabularyRegistry::new();
    let err = vocab.register_decision("   ", Branch::Flee).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::EmptyTerminal(CategoryKind::Decision)
    ));
}

#[test]
fn names_must_be_single_words() {
    let mut vocab = VocabularyRegistry::new();
    let err = vocab.register_trainer("Team Rocket").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MultiWordName { .. }));

    let err = vocab
        .register_party_member("Mr Mime", ["Confusion"])
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MultiWordName { .. }));
}

#[test]
fn register_move_on_existing_member() {
    let mut vocab = VocabularyRegistry::new();
    vocab.register_party_member("Onix", ["Tackle"]).unwrap();
    vocab.register_move("Onix", "Rock Throw").unwrap();

    assert_eq!(
        vocab.moves_of("Onix"),
        Some(&["Tackle".to_string(), "Rock Throw".to_string()][..])
    );
    assert_eq!(vocab.owner_of("Rock Throw").map(|m| m.as_str()), Some("Onix"));
}

#[test]
fn register_move_on_unknown_member() {
    let mut vocab = VocabularyRegistry::new();
    let err = vocab.register_move("Mew", "Psychic").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownMember(ref m) if m == "Mew"));
}

#[test]
fn decisions_know_their_branch() {
    let vocab = standard_vocabulary().unwrap();
    assert_eq!(vocab.branch_of("Pick a Pokemon:"), Some(Branch::Fight));
    assert_eq!(vocab.branch_of("use Pokeball"), Some(Branch::Capture));
    assert_eq!(vocab.branch_of("Got away safely!"), Some(Branch::Flee));
    assert_eq!(vocab.branch_of("Run!"), None);
}

#[test]
fn standard_vocabulary_contents() {
    let vocab = standard_vocabulary().unwrap();
    assert_eq!(vocab.trainers(), ["Ash", "Brock", "Misty"]);
    assert!(vocab.wild_creatures().iter().any(|c| c == "Pikachu"));
    assert_eq!(vocab.party_members().len(), 3);
    assert_eq!(vocab.outcomes().len(), 7);
    assert_eq!(vocab.owner_of("Swift").map(|m| m.as_str()), Some("Staryu"));
}

#[test]
fn terminals_start_with_trainers() {
    let vocab = standard_vocabulary().unwrap();
    let terminals: Vec<&str> = vocab.terminals().collect();
    assert_eq!(&terminals[..3], ["Ash", "Brock", "Misty"]);
    assert!(terminals.contains(&"Quick Attack"));
    assert!(terminals.contains(&"The attack hit normally."));
}
