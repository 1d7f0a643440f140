//! Vocabulary registry for the encounter grammar.
//!
//! Stores trainers, wild creatures, party members with their moves,
//! decision phrases and battle outcomes. A vocabulary is built once through
//! the `register_*` methods and then shared by reference with the tokenizer,
//! validator and deriver for the rest of the process.

use std::collections::HashMap;

use encounter_foundation::{Branch, Category, CategoryKind, Error, ErrorKind, MemberId, Result};

use crate::grammar::USE_KEYWORD;

/// A registered party member and the moves it knows.
#[derive(Clone, Debug)]
pub struct PartyMember {
    /// Member name
    pub id: MemberId,
    /// Moves in registration order
    pub moves: Vec<String>,
}

/// A registered decision phrase.
#[derive(Clone, Debug)]
pub struct DecisionPhrase {
    /// The literal phrase, words separated by single spaces
    pub phrase: String,
    /// The continuation it selects
    pub branch: Branch,
}

/// A terminal made of two or more words.
///
/// Only decisions, outcomes and moves may span several words.
#[derive(Clone, Debug)]
pub struct Phrase {
    /// The literal phrase, words separated by single spaces
    pub text: String,
    /// The phrase split into words
    pub words: Vec<String>,
    /// Category of the phrase
    pub category: Category,
}

impl Phrase {
    /// Number of words in the phrase.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; phrases have at least two words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns true if `words` starts with this phrase.
    #[must_use]
    pub fn matches<S: AsRef<str>>(&self, words: &[S]) -> bool {
        words.len() >= self.words.len()
            && self
                .words
                .iter()
                .zip(words)
                .all(|(expected, actual)| expected == actual.as_ref())
    }
}

/// Runtime storage for all vocabulary definitions.
#[derive(Clone, Debug, Default)]
pub struct VocabularyRegistry {
    /// Trainer names
    trainers: Vec<String>,
    /// Wild creature names
    wild_creatures: Vec<String>,
    /// Party members with their moves
    party: Vec<PartyMember>,
    /// Decision phrases
    decisions: Vec<DecisionPhrase>,
    /// Battle outcomes
    outcomes: Vec<String>,
    /// Literal -> every category it is registered under
    literals: HashMap<String, Vec<Category>>,
    /// Terminals spanning more than one word
    phrases: Vec<Phrase>,
}

/// Normalizes a terminal to single-space separated words.
fn normalize(literal: &str) -> String {
    literal.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl VocabularyRegistry {
    /// Creates a new empty vocabulary registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a trainer name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, contains whitespace, is
    /// reserved, or is already registered under another category.
    pub fn register_trainer(&mut self, name: &str) -> Result<()> {
        let name = self.check_name(name, &Category::Trainer)?;
        if self.insert_literal(&name, Category::Trainer) {
            self.trainers.push(name);
        }
        Ok(())
    }

    /// Registers a wild creature name.
    ///
    /// A creature may also be registered as a party member; see
    /// [`crate::tokenizer`] for how such words are tagged.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::register_trainer`].
    pub fn register_wild_creature(&mut self, name: &str) -> Result<()> {
        let name = self.check_name(name, &Category::WildCreature)?;
        if self.insert_literal(&name, Category::WildCreature) {
            self.wild_creatures.push(name);
        }
        Ok(())
    }

    /// Registers a party member together with its moves.
    ///
    /// Registration is all-or-nothing: if any move conflicts, nothing is
    /// registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or any move is invalid or conflicts with
    /// an existing terminal.
    pub fn register_party_member<'a>(
        &mut self,
        name: &str,
        moves: impl IntoIterator<Item = &'a str>,
    ) -> Result<MemberId> {
        let name = self.check_name(name, &Category::PartyMember)?;
        let id = MemberId::new(&name);
        let category = Category::Move(id.clone());

        let mut checked: Vec<String> = Vec::new();
        for mv in moves {
            let mv = self.check_terminal(mv, &category)?;
            if checked.contains(&mv) || self.literal_has(&mv, &category) {
                continue;
            }
            if mv == name {
                return Err(Error::terminal_conflict(
                    mv,
                    CategoryKind::PartyMember,
                    CategoryKind::Move,
                ));
            }
            checked.push(mv);
        }

        if self.insert_literal(&name, Category::PartyMember) {
            self.party.push(PartyMember {
                id: id.clone(),
                moves: Vec::new(),
            });
        }
        for mv in checked {
            self.push_move(&id, mv);
        }
        Ok(id)
    }

    /// Adds a move to an already registered party member.
    ///
    /// # Errors
    ///
    /// Returns an error if the member is unknown or the move conflicts.
    pub fn register_move(&mut self, owner: &str, mv: &str) -> Result<()> {
        let id = self
            .party
            .iter()
            .find(|m| m.id == *owner)
            .map(|m| m.id.clone())
            .ok_or_else(|| Error::new(ErrorKind::UnknownMember(owner.to_string())))?;
        let category = Category::Move(id.clone());
        let mv = self.check_terminal(mv, &category)?;
        if !self.literal_has(&mv, &category) {
            self.push_move(&id, mv);
        }
        Ok(())
    }

    /// Registers a decision phrase and the branch it selects.
    ///
    /// # Errors
    ///
    /// Returns an error if the phrase is empty, reserved, or conflicts.
    pub fn register_decision(&mut self, phrase: &str, branch: Branch) -> Result<()> {
        let phrase = self.check_terminal(phrase, &Category::Decision)?;
        if self.insert_literal(&phrase, Category::Decision) {
            self.add_phrase(&phrase, Category::Decision);
            self.decisions.push(DecisionPhrase { phrase, branch });
        }
        Ok(())
    }

    /// Registers a battle outcome phrase.
    ///
    /// # Errors
    ///
    /// Returns an error if the phrase is empty, reserved, or conflicts.
    pub fn register_outcome(&mut self, phrase: &str) -> Result<()> {
        let phrase = self.check_terminal(phrase, &Category::Outcome)?;
        if self.insert_literal(&phrase, Category::Outcome) {
            self.add_phrase(&phrase, Category::Outcome);
            self.outcomes.push(phrase);
        }
        Ok(())
    }

    /// Every category a literal is registered under, in registration order.
    ///
    /// At most one entry, except for creatures that are both wild and in the
    /// party.
    #[must_use]
    pub fn categories_of(&self, literal: &str) -> &[Category] {
        self.literals.get(literal).map_or(&[], Vec::as_slice)
    }

    /// All terminals spanning two or more words.
    #[must_use]
    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    /// The branch a decision phrase selects.
    #[must_use]
    pub fn branch_of(&self, decision: &str) -> Option<Branch> {
        self.decisions
            .iter()
            .find(|d| d.phrase == decision)
            .map(|d| d.branch)
    }

    /// The moves known by a party member.
    #[must_use]
    pub fn moves_of(&self, member: &str) -> Option<&[String]> {
        self.party
            .iter()
            .find(|m| m.id == *member)
            .map(|m| m.moves.as_slice())
    }

    /// The party member that knows a move.
    #[must_use]
    pub fn owner_of(&self, mv: &str) -> Option<&MemberId> {
        self.categories_of(mv).iter().find_map(Category::move_owner)
    }

    /// Registered trainers.
    #[must_use]
    pub fn trainers(&self) -> &[String] {
        &self.trainers
    }

    /// Registered wild creatures.
    #[must_use]
    pub fn wild_creatures(&self) -> &[String] {
        &self.wild_creatures
    }

    /// Registered party members.
    #[must_use]
    pub fn party_members(&self) -> &[PartyMember] {
        &self.party
    }

    /// Registered decision phrases.
    #[must_use]
    pub fn decisions(&self) -> &[DecisionPhrase] {
        &self.decisions
    }

    /// Registered outcomes.
    #[must_use]
    pub fn outcomes(&self) -> &[String] {
        &self.outcomes
    }

    /// Every registered terminal, grouped by category in grammar order.
    pub fn terminals(&self) -> impl Iterator<Item = &str> {
        self.trainers
            .iter()
            .chain(&self.wild_creatures)
            .map(String::as_str)
            .chain(self.decisions.iter().map(|d| d.phrase.as_str()))
            .chain(self.party.iter().flat_map(|m| {
                std::iter::once(m.id.as_str()).chain(m.moves.iter().map(String::as_str))
            }))
            .chain(self.outcomes.iter().map(String::as_str))
    }

    /// Returns true if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    fn check_name(&self, name: &str, category: &Category) -> Result<String> {
        let name = self.check_terminal(name, category)?;
        if name.contains(' ') {
            return Err(Error::new(ErrorKind::MultiWordName {
                name,
                category: category.kind(),
            }));
        }
        Ok(name)
    }

    /// Normalizes a terminal and checks it against reserved words and
    /// existing literals.
    fn check_terminal(&self, literal: &str, category: &Category) -> Result<String> {
        let literal = normalize(literal);
        if literal.is_empty() {
            return Err(Error::new(ErrorKind::EmptyTerminal(category.kind())));
        }
        if literal == USE_KEYWORD {
            return Err(Error::new(ErrorKind::ReservedTerminal(literal)));
        }
        for existing in self.categories_of(&literal) {
            if existing == category || creatures_may_share(existing, category) {
                continue;
            }
            return Err(Error::terminal_conflict(
                literal,
                existing.kind(),
                category.kind(),
            ));
        }
        Ok(literal)
    }

    fn literal_has(&self, literal: &str, category: &Category) -> bool {
        self.categories_of(literal).contains(category)
    }

    /// Records a literal; returns false if it was already registered under
    /// the same category.
    fn insert_literal(&mut self, literal: &str, category: Category) -> bool {
        let entry = self.literals.entry(literal.to_string()).or_default();
        if entry.contains(&category) {
            return false;
        }
        entry.push(category);
        true
    }

    fn add_phrase(&mut self, literal: &str, category: Category) {
        let words: Vec<String> = literal.split(' ').map(str::to_string).collect();
        if words.len() > 1 {
            self.phrases.push(Phrase {
                text: literal.to_string(),
                words,
                category,
            });
        }
    }

    fn push_move(&mut self, owner: &MemberId, mv: String) {
        let category = Category::Move(owner.clone());
        if !self.insert_literal(&mv, category.clone()) {
            return;
        }
        self.add_phrase(&mv, category);
        if let Some(member) = self.party.iter_mut().find(|m| m.id == *owner) {
            member.moves.push(mv);
        }
    }
}

/// A creature may be both a wild encounter and a party member.
fn creatures_may_share(existing: &Category, attempted: &Category) -> bool {
    matches!(
        (existing, attempted),
        (Category::WildCreature, Category::PartyMember)
            | (Category::PartyMember, Category::WildCreature)
    )
}
