//! Agents: a role, reporting metadata and the provider that decides for them.

use serde::{Deserialize, Serialize};

use crate::core::{Role, TeamColor};
use crate::provider::DecisionProvider;

/// Metadata reported for an agent in the final report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentProfile {
    /// Model identifier, or adapter name for non-model agents.
    pub model_name: String,
    pub temperature: f64,
    pub seed: Option<u64>,
}

impl AgentProfile {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            temperature: 0.0,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A role-tagged participant.
///
/// The color is unset until the agent joins a `Team`, which assigns it once.
pub struct Agent {
    name: String,
    role: Role,
    profile: AgentProfile,
    color: Option<TeamColor>,
    provider: Box<dyn DecisionProvider>,
}

impl Agent {
    pub fn new(
        name: impl Into<String>,
        role: Role,
        profile: AgentProfile,
        provider: impl DecisionProvider + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            role,
            profile,
            color: None,
            provider: Box::new(provider),
        }
    }

    /// A code-giver backed by `provider`.
    pub fn code_giver(
        name: impl Into<String>,
        profile: AgentProfile,
        provider: impl DecisionProvider + 'static,
    ) -> Self {
        Self::new(name, Role::CodeGiver, profile, provider)
    }

    /// A guesser backed by `provider`.
    pub fn guesser(
        name: impl Into<String>,
        profile: AgentProfile,
        provider: impl DecisionProvider + 'static,
    ) -> Self {
        Self::new(name, Role::Guesser, profile, provider)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn profile(&self) -> &AgentProfile {
        &self.profile
    }

    /// Team color, once the agent has joined a team.
    #[must_use]
    pub fn color(&self) -> Option<TeamColor> {
        self.color
    }

    pub(crate) fn assign_color(&mut self, color: TeamColor) {
        debug_assert!(self.color.is_none(), "agent {} already has a team", self.name);
        self.color = Some(color);
    }

    pub(crate) fn provider_mut(&mut self) -> &mut dyn DecisionProvider {
        self.provider.as_mut()
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("name", &self.name)
            .field("role", &self.role)
            .field("profile", &self.profile)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}
