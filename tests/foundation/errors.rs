//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use encounter_foundation::{CategoryKind, Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_terminal_conflict() {
    let err = Error::terminal_conflict("Onix", CategoryKind::PartyMember, CategoryKind::Trainer);
    assert!(matches!(
        err.kind,
        ErrorKind::TerminalConflict {
            existing: CategoryKind::PartyMember,
            attempted: CategoryKind::Trainer,
            ..
        }
    ));
    let msg = format!("{err}");
    assert!(msg.contains("Onix"));
    assert!(msg.contains("<Pokedex>"));
    assert!(msg.contains("<Trainer>"));
}

#[test]
fn error_from_io() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let err = Error::from(io);
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert!(format!("{err}").contains("no such file"));
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn error_display_empty_terminal() {
    let err = Error::new(ErrorKind::EmptyTerminal(CategoryKind::Outcome));
    assert_eq!(format!("{err}"), "cannot register an empty <BattleOutcome> terminal");
}

#[test]
fn error_display_multi_word_name() {
    let err = Error::new(ErrorKind::MultiWordName {
        name: "Team Rocket".to_string(),
        category: CategoryKind::Trainer,
    });
    let msg = format!("{err}");
    assert!(msg.contains("single word"));
    assert!(msg.contains("Team Rocket"));
}

#[test]
fn error_display_reserved() {
    let err = Error::new(ErrorKind::ReservedTerminal("use".to_string()));
    assert_eq!(format!("{err}"), "'use' is reserved by the grammar");
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_with_full_context() {
    let err = Error::io("unexpected end of file").with_context(
        ErrorContext::new()
            .with_source("battles.txt")
            .with_line(7),
    );
    assert_eq!(
        format!("{err}"),
        "i/o error: unexpected end of file (at battles.txt:7)"
    );
}

#[test]
fn error_with_source_only() {
    let err = Error::io("denied").with_context(ErrorContext::new().with_source("<stdin>"));
    assert!(format!("{err}").ends_with("(at <stdin>)"));
}

#[test]
fn error_without_context_has_no_suffix() {
    let err = Error::new(ErrorKind::UnknownMember("Mew".to_string()));
    assert_eq!(format!("{err}"), "unknown party member: Mew");
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&Error::io("x"));
}

#[test]
fn every_kind_renders_a_message() {
    let kinds = [
        ErrorKind::TerminalConflict {
            literal: "Ash".to_string(),
            existing: CategoryKind::Trainer,
            attempted: CategoryKind::Outcome,
        },
        ErrorKind::EmptyTerminal(CategoryKind::Move),
        ErrorKind::MultiWordName {
            name: "Mr Mime".to_string(),
            category: CategoryKind::PartyMember,
        },
        ErrorKind::UnknownMember("Mew".to_string()),
        ErrorKind::ReservedTerminal("use".to_string()),
        ErrorKind::Editor("terminal closed".to_string()),
        ErrorKind::Io("broken pipe".to_string()),
    ];
    for kind in kinds {
        // Exhaustive, so a new kind must be listed above
        match &kind {
            ErrorKind::TerminalConflict { .. }
            | ErrorKind::EmptyTerminal(_)
            | ErrorKind::MultiWordName { .. }
            | ErrorKind::UnknownMember(_)
            | ErrorKind::ReservedTerminal(_)
            | ErrorKind::Editor(_)
            | ErrorKind::Io(_) => {}
        }
        assert!(!Error::new(kind).to_string().is_empty());
    }
}
