//! Integration tests for categories and tokens.

use encounter_foundation::{Branch, Category, CategoryKind, MemberId, Token};

#[test]
fn category_symbols() {
    assert_eq!(Category::Trainer.to_string(), "<Trainer>");
    assert_eq!(Category::WildCreature.to_string(), "<WildPokemon>");
    assert_eq!(Category::PartyMember.to_string(), "<Pokedex>");
    assert_eq!(Category::Decision.to_string(), "<Decision>");
    assert_eq!(Category::Outcome.to_string(), "<BattleOutcome>");
    assert_eq!(Category::UseKeyword.to_string(), "<UseKeyword>");
}

#[test]
fn move_category_names_its_owner() {
    let category = Category::Move(MemberId::new("Staryu"));
    assert_eq!(category.to_string(), "<Staryu_Skills>");
    assert_eq!(category.kind(), CategoryKind::Move);
    assert_eq!(category.move_owner().map(MemberId::as_str), Some("Staryu"));
    assert_eq!(Category::Trainer.move_owner(), None);
}

#[test]
fn moves_of_different_owners_differ() {
    let a = Category::Move(MemberId::new("Onix"));
    let b = Category::Move(MemberId::new("Pikachu"));
    assert_ne!(a, b);
    assert_eq!(a.kind(), b.kind());
}

#[test]
fn member_id_compares_with_str() {
    let id = MemberId::new("Onix");
    assert!(id == *"Onix");
    assert_eq!(id.to_string(), "Onix");
}

#[test]
fn token_accessors() {
    let token = Token::new("Quick Attack", Category::Move(MemberId::new("Pikachu")));
    assert_eq!(token.text(), "Quick Attack");
    assert!(token.is(CategoryKind::Move));
    assert!(!token.is(CategoryKind::Outcome));
}

#[test]
fn token_display() {
    let token = Token::new("Ash", Category::Trainer);
    assert_eq!(token.to_string(), "Ash → <Trainer>");
}

#[test]
fn branch_display() {
    assert_eq!(Branch::Fight.to_string(), "fight");
}
