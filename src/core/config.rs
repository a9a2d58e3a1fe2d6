//! Game configuration.
//!
//! `GameConfig` controls the policies the engine applies around the fixed
//! game rules:
//! - `max_rounds`: ceiling on the number of rounds before the run is aborted
//! - `invalid_guess_policy`: what to do when a guesser names a word that is
//!   not among the remaining board words
//! - `seed`: seed used when dealing a board from a vocabulary

use serde::{Deserialize, Serialize};

/// Default round ceiling.
///
/// A 25-word board is exhausted long before this when every turn reveals at
/// least one word.
pub const DEFAULT_MAX_ROUNDS: u32 = 100;

/// How the engine reacts to a guessed word that is not on the board.
///
/// No policy ever mutates the board for such a word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidGuessPolicy {
    /// Surface `GameError::InvalidGuess` and roll the round back.
    #[default]
    Abort,
    /// Log the word and continue with the next guess in the list.
    SkipWord,
    /// Log the word and end the acting team's turn.
    EndTurn,
}

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Maximum number of rounds. `None` disables the ceiling.
    pub max_rounds: Option<u32>,

    /// Reaction to guesses that match no remaining word.
    pub invalid_guess_policy: InvalidGuessPolicy,

    /// Seed for dealing boards. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: Some(DEFAULT_MAX_ROUNDS),
            invalid_guess_policy: InvalidGuessPolicy::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the round ceiling.
    #[must_use]
    pub fn with_max_rounds(mut self, limit: u32) -> Self {
        self.max_rounds = Some(limit);
        self
    }

    /// Remove the round ceiling entirely.
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.max_rounds = None;
        self
    }

    /// Set the invalid-guess policy.
    #[must_use]
    pub fn with_invalid_guess_policy(mut self, policy: InvalidGuessPolicy) -> Self {
        self.invalid_guess_policy = policy;
        self
    }

    /// Fix the dealing seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
