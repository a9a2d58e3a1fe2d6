//! Board state: remaining words per group and the known-word log.
//!
//! The board keeps a single source of truth: one persistent `Vector` of
//! remaining words per group, plus the ordered list of words guessed so far.
//! The mixed "all remaining" view handed to guessers is derived on demand.
//!
//! Cloning a board is O(1) (`im` structural sharing), which the engine uses to
//! snapshot state before each round.

use im::Vector;
use rustc_hash::FxHashSet;

use super::allocator::WordPartition;
use super::group::{Classification, Group};
use crate::core::TeamColor;
use crate::error::{GameError, Result};

/// The shared, mutable board of a game.
///
/// ## Usage
///
/// ```
/// use secret_code::board::{Board, Classification, Group, WordPartition};
///
/// let mut board = Board::new(WordPartition {
///     red: vec!["sun".into(), "star".into()],
///     blue: vec!["moon".into(), "tide".into()],
///     neutral: vec!["rock".into()],
///     forbidden: "void".into(),
/// })
/// .unwrap();
///
/// assert_eq!(board.classify("SUN"), Classification::Remaining(Group::Red));
/// board.remove("sun", Group::Red).unwrap();
/// assert_eq!(board.classify("sun"), Classification::Unknown);
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    partition: WordPartition,
    remaining: [Vector<String>; 4],
    known: Vector<String>,
}

impl Board {
    /// Build a board from a partition.
    ///
    /// Words are lowercased. Fails with `InvalidBoard` if a word is blank,
    /// appears in more than one place, or either team group is empty.
    pub fn new(partition: WordPartition) -> Result<Self> {
        let partition = WordPartition {
            red: partition.red.iter().map(|w| normalise(w)).collect(),
            blue: partition.blue.iter().map(|w| normalise(w)).collect(),
            neutral: partition.neutral.iter().map(|w| normalise(w)).collect(),
            forbidden: normalise(&partition.forbidden),
        };

        for color in TeamColor::ALL {
            if partition.team_words(color).is_empty() {
                return Err(GameError::InvalidBoard(format!("{color} group is empty")));
            }
        }

        let mut seen = FxHashSet::default();
        for word in partition.words() {
            if word.is_empty() {
                return Err(GameError::InvalidBoard("blank word".to_string()));
            }
            if !seen.insert(word.as_str()) {
                return Err(GameError::InvalidBoard(format!("'{word}' appears more than once")));
            }
        }

        let remaining = [
            partition.red.iter().cloned().collect(),
            partition.blue.iter().cloned().collect(),
            partition.neutral.iter().cloned().collect(),
            Vector::unit(partition.forbidden.clone()),
        ];

        Ok(Self {
            partition,
            remaining,
            known: Vector::new(),
        })
    }

    /// The original, immutable partition.
    #[must_use]
    pub fn partition(&self) -> &WordPartition {
        &self.partition
    }

    /// Words still unguessed in a group, in board order.
    ///
    /// An empty result means the group is fully guessed.
    #[must_use]
    pub fn remaining(&self, group: Group) -> &Vector<String> {
        &self.remaining[group.index()]
    }

    /// Number of unguessed words in a group.
    #[must_use]
    pub fn remaining_count(&self, group: Group) -> usize {
        self.remaining(group).len()
    }

    /// Every unguessed word, without group membership.
    #[must_use]
    pub fn all_remaining(&self) -> Vec<String> {
        Group::ALL
            .iter()
            .flat_map(|&g| self.remaining(g).iter().cloned())
            .collect()
    }

    /// Words guessed so far, in guess order.
    #[must_use]
    pub fn known(&self) -> &Vector<String> {
        &self.known
    }

    /// The forbidden word.
    #[must_use]
    pub fn forbidden_word(&self) -> &str {
        &self.partition.forbidden
    }

    /// Which remaining group holds `word`, case-insensitively.
    #[must_use]
    pub fn classify(&self, word: &str) -> Classification {
        let word = normalise(word);
        Group::ALL
            .into_iter()
            .find(|&g| self.remaining(g).contains(&word))
            .map_or(Classification::Unknown, Classification::Remaining)
    }

    /// Move `word` from `group`'s remaining words into the known list.
    ///
    /// Callers classify first; `InvalidRemoval` means that step was skipped.
    pub fn remove(&mut self, word: &str, group: Group) -> Result<()> {
        let word = normalise(word);
        let remaining = &mut self.remaining[group.index()];
        let Some(position) = remaining.index_of(&word) else {
            return Err(GameError::InvalidRemoval { word, group });
        };

        remaining.remove(position);
        self.known.push_back(word);
        Ok(())
    }
}

fn normalise(word: &str) -> String {
    word.trim().to_lowercase()
}
