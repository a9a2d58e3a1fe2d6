//! Team colors and agent roles.
//!
//! ## TeamColor
//!
//! The two sides of a game. Every team, agent and word group that belongs to
//! a side is tagged with one of these.
//!
//! ## Role
//!
//! The job an agent performs inside its team.

use serde::{Deserialize, Serialize};

/// One of the two competing sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamColor {
    Red,
    Blue,
}

impl TeamColor {
    /// Both colors, red first.
    pub const ALL: [TeamColor; 2] = [TeamColor::Red, TeamColor::Blue];

    /// The other side.
    ///
    /// ```
    /// use secret_code::core::TeamColor;
    ///
    /// assert_eq!(TeamColor::Red.opponent(), TeamColor::Blue);
    /// assert_eq!(TeamColor::Blue.opponent(), TeamColor::Red);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            TeamColor::Red => TeamColor::Blue,
            TeamColor::Blue => TeamColor::Red,
        }
    }

    /// Lowercase name, as shown to agents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TeamColor::Red => "red",
            TeamColor::Blue => "blue",
        }
    }
}

impl std::fmt::Display for TeamColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The role an agent plays within its team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Sees every word's group and emits a (word, count) code.
    CodeGiver,
    /// Sees only the unguessed words and picks candidates for the code.
    Guesser,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::CodeGiver => "code-giver",
            Role::Guesser => "guesser",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
