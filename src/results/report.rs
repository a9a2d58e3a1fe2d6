//! Round records and the final game report.

use serde::{Deserialize, Serialize};

use crate::board::{PlayOrder, WordPartition};
use crate::core::TeamColor;
use crate::engine::evaluation::{Reveal, TurnEnd};
use crate::engine::{EnginePhase, GameSession};
use crate::error::{GameError, Result};
use crate::provider::{Code, Guesses};
use crate::team::TeamProfile;

/// What one team did during one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub color: TeamColor,
    pub code: Code,
    pub guesses: Guesses,
    /// Round message issued to the code-giver, verbatim.
    pub code_prompt: String,
    /// Round message issued to the guesser, verbatim.
    pub guess_prompt: String,
    pub reveals: Vec<Reveal>,
    pub rejected: Vec<String>,
    pub end: TurnEnd,
}

/// Every turn taken in one round, in acting order.
///
/// Holds a single turn when the game ended during the first team's turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number.
    pub round: u32,
    pub turns: Vec<TurnRecord>,
}

impl RoundRecord {
    #[must_use]
    pub fn new(round: u32) -> Self {
        Self { round, turns: Vec::new() }
    }

    /// The turn a team took this round, if it acted.
    #[must_use]
    pub fn turn(&self, color: TeamColor) -> Option<&TurnRecord> {
        self.turns.iter().find(|t| t.color == color)
    }
}

/// Member metadata for both teams.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamProfiles {
    pub red: TeamProfile,
    pub blue: TeamProfile,
}

impl TeamProfiles {
    #[must_use]
    pub fn get(&self, color: TeamColor) -> &TeamProfile {
        match color {
            TeamColor::Red => &self.red,
            TeamColor::Blue => &self.blue,
        }
    }
}

/// Immutable summary of a finished game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameReport {
    /// Original four-group word partition.
    pub words: WordPartition,
    pub order: PlayOrder,
    pub teams: TeamProfiles,
    /// Rounds played, including the one the game ended in.
    pub num_rounds: u32,
    pub rounds: Vec<RoundRecord>,
    pub winner: TeamColor,
    /// The shared history log, in order.
    pub history: Vec<String>,
    /// Words guessed, in guess order.
    pub known: Vec<String>,
}

/// Compiles a `GameReport` from a finished session.
pub struct ResultsRecorder;

impl ResultsRecorder {
    /// Snapshot a session into a report.
    ///
    /// Fails with `GameNotFinished` unless the session is in `GameOver`.
    pub fn record(session: &GameSession, teams: TeamProfiles) -> Result<GameReport> {
        let winner = match (session.phase(), session.winner()) {
            (EnginePhase::GameOver, Some(winner)) => winner,
            _ => return Err(GameError::GameNotFinished),
        };

        Ok(GameReport {
            words: session.board().partition().clone(),
            order: session.order(),
            teams,
            num_rounds: session.round(),
            rounds: session.rounds().iter().cloned().collect(),
            winner,
            history: session.history().iter().cloned().collect(),
            known: session.board().known().iter().cloned().collect(),
        })
    }
}
