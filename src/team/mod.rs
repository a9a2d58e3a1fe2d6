//! Teams and their agents.

pub mod agent;
#[allow(clippy::module_inception)]
pub mod team;

pub use agent::{Agent, AgentProfile};
pub use team::{Team, TeamProfile};
