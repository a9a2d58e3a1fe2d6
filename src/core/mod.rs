//! Core types shared by every other module: colors, roles, RNG, configuration.

pub mod color;
pub mod config;
pub mod rng;

pub use color::{Role, TeamColor};
pub use config::{GameConfig, InvalidGuessPolicy, DEFAULT_MAX_ROUNDS};
pub use rng::GameRng;
