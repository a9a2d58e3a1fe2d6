//! Game session: the mutable state a `GameEngine` drives.
//!
//! Board, history and finished rounds are persistent `im` structures, so
//! cloning a session is cheap. The engine clones it after every completed
//! turn and restores the latest clone if a turn fails, so a failure only
//! undoes the failing team's turn.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::{Board, PlayOrder};
use crate::core::TeamColor;
use crate::results::RoundRecord;

/// Engine state machine.
///
/// `AwaitingRound` → `RoundInProgress` → `AwaitingRound` | `GameOver`.
/// `GameOver` is terminal and only entered from inside a round. A session
/// stays in `RoundInProgress` between calls when a turn failed after another
/// team had already finished its turn in the same round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnginePhase {
    AwaitingRound,
    RoundInProgress,
    GameOver,
}

/// Board, play order, counters and logs of one game.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub(crate) board: Board,
    order: PlayOrder,
    pub(crate) round: u32,
    pub(crate) history: Vector<String>,
    pub(crate) rounds: Vector<RoundRecord>,
    pub(crate) pending: Option<RoundRecord>,
    pub(crate) phase: EnginePhase,
    pub(crate) winner: Option<TeamColor>,
}

impl GameSession {
    #[must_use]
    pub fn new(board: Board, order: PlayOrder) -> Self {
        Self {
            board,
            order,
            round: 0,
            history: Vector::new(),
            rounds: Vector::new(),
            pending: None,
            phase: EnginePhase::AwaitingRound,
            winner: None,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Fixed acting order for every round.
    #[must_use]
    pub fn order(&self) -> PlayOrder {
        self.order
    }

    /// Rounds played so far.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Append-only event log shared with agents.
    #[must_use]
    pub fn history(&self) -> &Vector<String> {
        &self.history
    }

    /// History joined with newlines, as passed to agents.
    #[must_use]
    pub fn history_text(&self) -> String {
        let lines: Vec<&str> = self.history.iter().map(String::as_str).collect();
        lines.join("\n")
    }

    #[must_use]
    pub fn rounds(&self) -> &Vector<RoundRecord> {
        &self.rounds
    }

    /// The round currently open, with the turns completed so far.
    #[must_use]
    pub fn pending_round(&self) -> Option<&RoundRecord> {
        self.pending.as_ref()
    }

    /// Whether `color` already finished its turn in the open round.
    #[must_use]
    pub fn has_acted(&self, color: TeamColor) -> bool {
        self.pending.as_ref().is_some_and(|round| round.turn(color).is_some())
    }

    #[must_use]
    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == EnginePhase::GameOver
    }

    /// Winning color, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<TeamColor> {
        self.winner
    }
}
