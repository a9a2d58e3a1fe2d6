//! Error taxonomy for setting up and running a game.
//!
//! | Variant                  | When                         | Caller action        |
//! |--------------------------|------------------------------|----------------------|
//! | `InsufficientVocabulary` | dealing a board              | fatal                |
//! | `InvalidBoard`           | building a board             | fatal                |
//! | `RoleMismatch`           | building a team              | fatal                |
//! | `DuplicateTeamColor`     | building an engine           | fatal                |
//! | `Provider`               | a decision call failed       | abort the run        |
//! | `InvalidGuess`           | guess matches no board word  | abort, skip or penalize |
//! | `InvalidRemoval`         | engine bug                   | treat as assertion   |
//! | `RoundLimitExceeded`     | round ceiling reached        | abort the run        |

use thiserror::Error;

use crate::board::Group;
use crate::core::{Role, TeamColor};
use crate::provider::ProviderError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;

/// Every error the game core can produce.
#[derive(Debug, Error)]
pub enum GameError {
    // ── Setup ─────────────────────────────────────────────────────────────
    /// Vocabulary has fewer distinct words than a board needs.
    #[error("Insufficient vocabulary: {available} distinct words, {required} required")]
    InsufficientVocabulary { available: usize, required: usize },

    /// A word partition violates the board invariants.
    #[error("Invalid board: {0}")]
    InvalidBoard(String),

    /// A team's agents are not exactly one code-giver and one guesser.
    #[error("Role mismatch in {color} team: {code_givers} code-giver(s), {guessers} guesser(s)")]
    RoleMismatch {
        color: TeamColor,
        code_givers: usize,
        guessers: usize,
    },

    /// Both teams were given the same color.
    #[error("Both teams are {0}")]
    DuplicateTeamColor(TeamColor),

    // ── Protocol violations by a decision provider ─────────────────────────
    /// A decision call returned no usable response.
    #[error("Provider failure for {color} {role}: {source}")]
    Provider {
        color: TeamColor,
        role: Role,
        #[source]
        source: ProviderError,
    },

    /// A guessed word is not among the remaining board words.
    #[error("Invalid guess by {color} team: '{word}' is not an unguessed board word")]
    InvalidGuess { color: TeamColor, word: String },

    // ── Engine ────────────────────────────────────────────────────────────
    /// Attempted to remove a word from a group that does not hold it.
    #[error("Invalid removal: '{word}' is not remaining in group {group}")]
    InvalidRemoval { word: String, group: Group },

    /// The configured round ceiling was reached without a winner.
    #[error("Round limit of {limit} reached without a winner")]
    RoundLimitExceeded { limit: u32 },

    /// A round was requested after the game ended.
    #[error("Game is already over")]
    GameFinished,

    /// A report was requested before the game ended.
    #[error("Game is not over yet")]
    GameNotFinished,
}

impl GameError {
    /// Errors raised while building the board, teams or engine.
    #[must_use]
    pub fn is_setup_error(&self) -> bool {
        matches!(
            self,
            Self::InsufficientVocabulary { .. }
                | Self::InvalidBoard(_)
                | Self::RoleMismatch { .. }
                | Self::DuplicateTeamColor(_)
        )
    }

    /// Errors caused by a decision provider misbehaving.
    #[must_use]
    pub fn is_protocol_violation(&self) -> bool {
        matches!(self, Self::Provider { .. } | Self::InvalidGuess { .. })
    }

    /// The team at fault, for protocol violations.
    #[must_use]
    pub fn offending_team(&self) -> Option<TeamColor> {
        match self {
            Self::Provider { color, .. } | Self::InvalidGuess { color, .. } => Some(*color),
            _ => None,
        }
    }
}
