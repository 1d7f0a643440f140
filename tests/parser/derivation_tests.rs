//! Derivation tests.
//!
//! Tests for leftmost derivations of accepted sentences.

use encounter_parser::{Derivation, Deriver, EncounterParser, standard_vocabulary};

fn derive(input: &str) -> Derivation {
    let vocab = standard_vocabulary().unwrap();
    let parser = EncounterParser::new(&vocab);
    let tokens = parser.tokenize(input);
    let encounter = parser.validate(&tokens).into_result().unwrap();
    Deriver::derive(&encounter)
}

#[test]
fn flee_derivation() {
    let derivation = derive("Misty sees a wild Eevee Got away safely!");
    assert_eq!(derivation.len(), 5);
    assert_eq!(derivation.steps()[0], "<Game>");
    assert_eq!(
        derivation.final_sentence(),
        "Misty sees a wild Eevee Got away safely!"
    );
}

#[test]
fn capture_appends_confirmation() {
    let derivation = derive("Brock sees a wild Zubat use Pokeball");
    assert_eq!(
        derivation.steps()[4],
        "Brock sees a wild Zubat use Pokeball The pokemon was caught!"
    );
    assert_eq!(derivation.len(), 5);
}

#[test]
fn fight_derivation_steps() {
    let derivation = derive(
        "Ash sees a wild Pikachu Pick a Pokemon: Pikachu use Thunderbolt It's super effective!",
    );
    assert_eq!(
        derivation.into_steps(),
        vec![
            "<Game>",
            "<Trainer> sees a wild <WildPokemon> <Decision>",
            "Ash sees a wild <WildPokemon> <Decision>",
            "Ash sees a wild Pikachu <Decision>",
            "Ash sees a wild Pikachu Pick a Pokemon: <Fight>",
            "Ash sees a wild Pikachu Pick a Pokemon: <Pokedex> use <Skill> <BattleOutcome>",
            "Ash sees a wild Pikachu Pick a Pokemon: Pikachu use <Skill> <BattleOutcome>",
            "Ash sees a wild Pikachu Pick a Pokemon: Pikachu use <Pikachu_Skills> <BattleOutcome>",
            "Ash sees a wild Pikachu Pick a Pokemon: Pikachu use Thunderbolt <BattleOutcome>",
            "Ash sees a wild Pikachu Pick a Pokemon: Pikachu use Thunderbolt It's super effective!",
        ]
    );
}

#[test]
fn derivation_ignores_filler_words() {
    let derivation = derive("Oh no! Misty suddenly sees a wild Eevee and Got away safely!");
    assert_eq!(
        derivation.final_sentence(),
        "Misty sees a wild Eevee Got away safely!"
    );
}

#[test]
fn each_step_rewrites_one_non_terminal() {
    let derivation = derive("Ash sees a wild Ekans Pick a Pokemon: Onix use Rock Throw A critical hit!");
    let counts: Vec<usize> = derivation
        .steps()
        .iter()
        .map(|s| s.matches('<').count())
        .collect();

    assert_eq!(counts.last(), Some(&0));
    assert!(derivation.steps()[..derivation.len() - 1]
        .iter()
        .all(|s| s.contains('<')));
}

#[test]
fn display_matches_steps() {
    let derivation = derive("Misty sees a wild Eevee Got away safely!");
    let rendered = derivation.to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), derivation.len());
    assert_eq!(lines[0], "<Game>");
    for (line, step) in lines[1..].iter().zip(&derivation.steps()[1..]) {
        assert_eq!(*line, format!("⇒ {step}"));
    }
}
