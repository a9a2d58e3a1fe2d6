//! Teams: a color bound to exactly one code-giver and one guesser.

use serde::{Deserialize, Serialize};

use super::agent::{Agent, AgentProfile};
use crate::core::{Role, TeamColor};
use crate::error::{GameError, Result};

/// Reported metadata for both members of a team.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamProfile {
    pub code_giver: AgentProfile,
    pub guesser: AgentProfile,
}

/// A team of two agents sharing a color for the whole game.
#[derive(Debug)]
pub struct Team {
    color: TeamColor,
    code_giver: Agent,
    guesser: Agent,
}

impl Team {
    /// Form a team from two agents given in either order.
    ///
    /// Roles are resolved by tag. Fails with `RoleMismatch` unless there is
    /// exactly one code-giver and one guesser. Both agents take the team's
    /// color.
    pub fn new(color: TeamColor, first: Agent, second: Agent) -> Result<Self> {
        let (mut code_giver, mut guesser) = match (first.role(), second.role()) {
            (Role::CodeGiver, Role::Guesser) => (first, second),
            (Role::Guesser, Role::CodeGiver) => (second, first),
            (Role::CodeGiver, Role::CodeGiver) => {
                return Err(GameError::RoleMismatch { color, code_givers: 2, guessers: 0 });
            }
            (Role::Guesser, Role::Guesser) => {
                return Err(GameError::RoleMismatch { color, code_givers: 0, guessers: 2 });
            }
        };

        code_giver.assign_color(color);
        guesser.assign_color(color);

        Ok(Self { color, code_giver, guesser })
    }

    #[must_use]
    pub fn color(&self) -> TeamColor {
        self.color
    }

    #[must_use]
    pub fn code_giver(&self) -> &Agent {
        &self.code_giver
    }

    #[must_use]
    pub fn guesser(&self) -> &Agent {
        &self.guesser
    }

    /// Member metadata for the report.
    #[must_use]
    pub fn profile(&self) -> TeamProfile {
        TeamProfile {
            code_giver: self.code_giver.profile().clone(),
            guesser: self.guesser.profile().clone(),
        }
    }

    pub(crate) fn code_giver_mut(&mut self) -> &mut Agent {
        &mut self.code_giver
    }

    pub(crate) fn guesser_mut(&mut self) -> &mut Agent {
        &mut self.guesser
    }
}
