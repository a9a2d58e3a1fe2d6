//! # secret-code
//!
//! Engine for a two-team word-guessing game played by pluggable agents.
//!
//! Each team has a code-giver, who sees which board words belong to whom, and
//! a guesser, who sees only the unguessed words. Every round both teams give a
//! one-word code with a count, then guess board words in order until they miss.
//! A team wins by uncovering all of its words or when the other team guesses
//! the forbidden word.
//!
//! ## Design Principles
//!
//! 1. **Agents are pluggable**: All decisions go through the
//!    `DecisionProvider` trait. Scripted and random providers ship with the
//!    crate; language-model clients live outside it.
//!
//! 2. **Persistent state**: Board and session state use `im` vectors, so a
//!    round can be snapshotted in O(1) and rolled back if any step fails.
//!
//! 3. **Deterministic dealing**: Boards and play order come from a seeded
//!    ChaCha8 RNG, so a seed reproduces a game setup exactly.
//!
//! ## Modules
//!
//! - `core`: Team colors, roles, RNG, configuration
//! - `board`: Word allocation, the board and its classification rules
//! - `team`: Agents and teams
//! - `provider`: The `DecisionProvider` trait, prompts and built-in providers
//! - `engine`: The round loop and guess evaluation
//! - `results`: The final game report

pub mod board;
pub mod core;
pub mod engine;
pub mod error;
pub mod provider;
pub mod results;
pub mod team;
pub mod words;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, InvalidGuessPolicy, Role, TeamColor};

pub use crate::board::{Board, Classification, Deal, Group, PlayOrder, WordAllocator, WordPartition};

pub use crate::team::{Agent, AgentProfile, Team, TeamProfile};

pub use crate::provider::{
    Code, CodeRequest, DecisionProvider, GuessRequest, Guesses, ProviderError,
};

pub use crate::engine::{run_dealt_game, run_game, GameEngine, RoundOutcome};

pub use crate::results::{GameReport, ResultsRecorder};

pub use crate::error::{GameError, Result};
