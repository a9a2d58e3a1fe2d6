//! Decision providers: the boundary between the engine and whatever decides
//! codes and guesses.
//!
//! - `traits`: `DecisionProvider`, request and response types
//! - `prompts`: text rendering of requests for text-based adapters
//! - `scripted`: queue-backed adapter for tests and replays
//! - `random`: uniform-random adapter for simulations

pub mod prompts;
pub mod random;
pub mod scripted;
pub mod traits;

pub use random::RandomProvider;
pub use scripted::ScriptedProvider;
pub use traits::{Code, CodeRequest, DecisionProvider, GuessRequest, Guesses, ProviderError};
