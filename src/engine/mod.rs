//! Game engine: the round state machine.
//!
//! - `session`: board, play order, counters and logs of one game
//! - `evaluation`: the guess cascade deciding turn continuation and wins
//! - `engine`: the round loop and the `run_game` entry point

#[allow(clippy::module_inception)]
pub mod engine;
pub mod evaluation;
pub mod session;

pub use engine::{run_dealt_game, run_game, GameEngine, RoundOutcome};
pub use evaluation::{evaluate_guesses, Evaluation, Reveal, TurnEnd};
pub use session::{EnginePhase, GameSession};
