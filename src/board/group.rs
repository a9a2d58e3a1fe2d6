//! Word groups and guess classification.

use serde::{Deserialize, Serialize};

use crate::core::TeamColor;

/// One of the four disjoint word groups on a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    Red,
    Blue,
    Neutral,
    Forbidden,
}

impl Group {
    /// All groups, in board order.
    pub const ALL: [Group; 4] = [Group::Red, Group::Blue, Group::Neutral, Group::Forbidden];

    /// The group owned by a team.
    #[must_use]
    pub const fn team(color: TeamColor) -> Self {
        match color {
            TeamColor::Red => Group::Red,
            TeamColor::Blue => Group::Blue,
        }
    }

    /// The owning team, for team groups.
    #[must_use]
    pub const fn team_color(self) -> Option<TeamColor> {
        match self {
            Group::Red => Some(TeamColor::Red),
            Group::Blue => Some(TeamColor::Blue),
            Group::Neutral | Group::Forbidden => None,
        }
    }

    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Group::Red => 0,
            Group::Blue => 1,
            Group::Neutral => 2,
            Group::Forbidden => 3,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Group::Red => "red",
            Group::Blue => "blue",
            Group::Neutral => "neutral",
            Group::Forbidden => "forbidden",
        }
    }
}

impl From<TeamColor> for Group {
    fn from(color: TeamColor) -> Self {
        Group::team(color)
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a guessed word currently sits on the board.
///
/// `Unknown` covers words that were already guessed and words that were
/// never on the board. It is never folded into one of the real groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    Remaining(Group),
    Unknown,
}

impl Classification {
    /// The group, if the word is still unguessed.
    #[must_use]
    pub const fn group(self) -> Option<Group> {
        match self {
            Classification::Remaining(group) => Some(group),
            Classification::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_groups_round_trip() {
        for color in TeamColor::ALL {
            assert_eq!(Group::team(color).team_color(), Some(color));
            assert_eq!(Group::from(color), Group::team(color));
        }
        assert_eq!(Group::Neutral.team_color(), None);
        assert_eq!(Group::Forbidden.team_color(), None);
    }

    #[test]
    fn test_indices_are_distinct() {
        let indices: Vec<_> = Group::ALL.iter().map(|g| g.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_classification_group() {
        assert_eq!(Classification::Remaining(Group::Neutral).group(), Some(Group::Neutral));
        assert_eq!(Classification::Unknown.group(), None);
    }
}
