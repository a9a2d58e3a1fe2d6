//! Dealing a board from a vocabulary.
//!
//! The allocator samples 25 distinct words uniformly, draws a random play
//! order, then splits the sample by position:
//!
//! | Slice          | Group              |
//! |----------------|--------------------|
//! | `[0..9]`       | first team's color |
//! | `[9..18]`      | second team's color|
//! | `[18..24]`     | neutral            |
//! | `[24]`         | forbidden          |
//!
//! Splitting one uniform, shuffled sample by position is already a uniform
//! partition, so four separate draws are unnecessary.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameRng, TeamColor};
use crate::error::{GameError, Result};

/// Words on a standard board.
pub const BOARD_SIZE: usize = 25;
/// Words owned by each team on a standard board.
pub const TEAM_WORDS: usize = 9;
/// Neutral words on a standard board.
pub const NEUTRAL_WORDS: usize = 6;

/// Fixed first/second acting order for a whole game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOrder {
    pub first: TeamColor,
    pub second: TeamColor,
}

impl PlayOrder {
    /// Order with `first` acting first every round.
    #[must_use]
    pub const fn starting_with(first: TeamColor) -> Self {
        Self { first, second: first.opponent() }
    }

    /// Both colors in acting order.
    #[must_use]
    pub const fn as_array(self) -> [TeamColor; 2] {
        [self.first, self.second]
    }
}

/// The four disjoint word groups of a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPartition {
    pub red: Vec<String>,
    pub blue: Vec<String>,
    pub neutral: Vec<String>,
    pub forbidden: String,
}

impl WordPartition {
    /// Words owned by a team.
    #[must_use]
    pub fn team_words(&self, color: TeamColor) -> &[String] {
        match color {
            TeamColor::Red => &self.red,
            TeamColor::Blue => &self.blue,
        }
    }

    /// Total number of words across all groups, forbidden word included.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.red.len() + self.blue.len() + self.neutral.len() + 1
    }

    /// Every word, in group order red, blue, neutral, forbidden.
    pub fn words(&self) -> impl Iterator<Item = &String> {
        self.red
            .iter()
            .chain(&self.blue)
            .chain(&self.neutral)
            .chain(std::iter::once(&self.forbidden))
    }
}

/// Result of dealing: the partition plus the fixed play order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    pub partition: WordPartition,
    pub order: PlayOrder,
}

/// Samples and splits board words from a vocabulary.
#[derive(Clone, Debug)]
pub struct WordAllocator {
    vocabulary: Vec<String>,
}

impl WordAllocator {
    /// Build an allocator over a vocabulary.
    ///
    /// Entries are trimmed and lowercased; blanks and duplicates are dropped.
    /// Fails with `InsufficientVocabulary` if fewer than 25 distinct words
    /// remain.
    pub fn new<I, S>(vocabulary: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let vocabulary: Vec<String> = vocabulary
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .filter(|w| seen.insert(w.clone()))
            .collect();

        if vocabulary.len() < BOARD_SIZE {
            return Err(GameError::InsufficientVocabulary {
                available: vocabulary.len(),
                required: BOARD_SIZE,
            });
        }

        Ok(Self { vocabulary })
    }

    /// Allocator over the bundled vocabulary.
    pub fn with_default_words() -> Result<Self> {
        Self::new(crate::words::DEFAULT_WORDS)
    }

    /// Normalised vocabulary size.
    #[must_use]
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Sample 25 distinct words in random order.
    pub fn sample_words(&self, rng: &mut GameRng) -> [String; BOARD_SIZE] {
        let indices = rng.sample_indices(self.vocabulary.len(), BOARD_SIZE);
        std::array::from_fn(|i| self.vocabulary[indices[i]].clone())
    }

    /// Uniformly random permutation of the two colors.
    pub fn play_order(rng: &mut GameRng) -> PlayOrder {
        let mut colors = TeamColor::ALL;
        rng.shuffle(&mut colors);
        PlayOrder { first: colors[0], second: colors[1] }
    }

    /// Split a 25-word sample by position according to the play order.
    #[must_use]
    pub fn split(words: &[String; BOARD_SIZE], order: PlayOrder) -> WordPartition {
        let first = words[..TEAM_WORDS].to_vec();
        let second = words[TEAM_WORDS..2 * TEAM_WORDS].to_vec();
        let neutral = words[2 * TEAM_WORDS..2 * TEAM_WORDS + NEUTRAL_WORDS].to_vec();
        let forbidden = words[BOARD_SIZE - 1].clone();

        let (red, blue) = match order.first {
            TeamColor::Red => (first, second),
            TeamColor::Blue => (second, first),
        };

        WordPartition { red, blue, neutral, forbidden }
    }

    /// Deal with a fixed seed, or from entropy when `seed` is `None`.
    pub fn deal_seeded(&self, seed: Option<u64>) -> Deal {
        let mut rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        self.deal(&mut rng)
    }

    /// Sample, order and split a complete board.
    pub fn deal(&self, rng: &mut GameRng) -> Deal {
        let words = self.sample_words(rng);
        let order = Self::play_order(rng);
        let partition = Self::split(&words, order);
        debug!(first = %order.first, forbidden = %partition.forbidden, "dealt board");
        Deal { partition, order }
    }
}
