//! Round loop: asks each team's agents for decisions and applies them.
//!
//! ## Round protocol
//!
//! For the first team in play order, then the second:
//! 1. The code-giver produces a code from the history and every group's
//!    remaining words. Only the code word and count go into the history.
//! 2. The guesser produces ordered guesses from the history, the mixed
//!    unguessed words and the code word and count.
//! 3. Guesses are evaluated in order (see `evaluation`).
//!
//! A turn that ends the game skips the rest of the round. Each turn is
//! all-or-nothing: if any step fails, the session is restored to its state
//! before that turn and the error is returned. Earlier turns of the round
//! are kept, and the next `play_round` call picks up with the failing team.

use tracing::{debug, info, instrument, warn};

use super::evaluation::evaluate_guesses;
use super::session::{EnginePhase, GameSession};
use crate::board::{Board, Group, PlayOrder, WordAllocator};
use crate::core::{GameConfig, Role, TeamColor};
use crate::error::{GameError, Result};
use crate::provider::{Code, CodeRequest, GuessRequest, ProviderError};
use crate::results::{GameReport, ResultsRecorder, RoundRecord, TeamProfiles, TurnRecord};
use crate::team::Team;

/// Outcome of a single `play_round` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Both teams acted and nobody won.
    Continue,
    /// The round ended the game.
    GameOver { winner: TeamColor },
}

/// Drives a game from its first round to `GameOver`.
#[derive(Debug)]
pub struct GameEngine {
    red: Team,
    blue: Team,
    session: GameSession,
    config: GameConfig,
}

impl GameEngine {
    /// Create an engine for two teams of different colors.
    pub fn new(
        team_a: Team,
        team_b: Team,
        board: Board,
        order: PlayOrder,
        config: GameConfig,
    ) -> Result<Self> {
        let (red, blue) = match (team_a.color(), team_b.color()) {
            (TeamColor::Red, TeamColor::Blue) => (team_a, team_b),
            (TeamColor::Blue, TeamColor::Red) => (team_b, team_a),
            (color, _) => return Err(GameError::DuplicateTeamColor(color)),
        };

        Ok(Self {
            red,
            blue,
            session: GameSession::new(board, order),
            config,
        })
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.session.board()
    }

    #[must_use]
    pub fn phase(&self) -> EnginePhase {
        self.session.phase()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn team(&self, color: TeamColor) -> &Team {
        match color {
            TeamColor::Red => &self.red,
            TeamColor::Blue => &self.blue,
        }
    }

    fn team_mut(&mut self, color: TeamColor) -> &mut Team {
        match color {
            TeamColor::Red => &mut self.red,
            TeamColor::Blue => &mut self.blue,
        }
    }

    /// Play rounds until the game is over, then compile the report.
    #[instrument(skip(self), fields(first = %self.session.order().first))]
    pub fn play(&mut self) -> Result<GameReport> {
        info!("game started");
        while !self.session.is_over() {
            self.play_round()?;
        }
        self.report()
    }

    /// Play one round, or finish the open one.
    ///
    /// Fails with `GameFinished` after `GameOver` and with
    /// `RoundLimitExceeded` when a new round would pass the configured
    /// ceiling. A failed turn is undone on its own: turns already completed
    /// this round stay applied, and the next call resumes with the team that
    /// has not acted yet.
    #[instrument(skip(self), fields(round = self.session.round() + 1))]
    pub fn play_round(&mut self) -> Result<RoundOutcome> {
        if self.session.is_over() {
            return Err(GameError::GameFinished);
        }

        let mut committed = self.session.clone();
        if self.session.pending.is_none() {
            if let Some(limit) = self.config.max_rounds {
                if self.session.round() >= limit {
                    warn!(limit, "round limit reached");
                    return Err(GameError::RoundLimitExceeded { limit });
                }
            }
            self.open_round();
        }

        for color in self.session.order().as_array() {
            if self.session.has_acted(color) {
                continue;
            }

            match self.take_turn(color) {
                Ok(turn) => {
                    if let Some(round) = self.session.pending.as_mut() {
                        round.turns.push(turn);
                    }
                    if self.session.winner.is_some() {
                        break;
                    }
                    committed = self.session.clone();
                }
                Err(err) => {
                    warn!(error = %err, team = %color, "turn failed, restoring session");
                    self.session = committed;
                    return Err(err);
                }
            }
        }

        Ok(self.close_round())
    }

    fn open_round(&mut self) {
        let number = self.session.round + 1;
        self.session.history.push_back(format!("Round {number}"));
        self.session.pending = Some(RoundRecord::new(number));
        self.session.phase = EnginePhase::RoundInProgress;
    }

    fn close_round(&mut self) -> RoundOutcome {
        let number = self.session.round + 1;
        if let Some(record) = self.session.pending.take() {
            self.session.rounds.push_back(record);
        }
        self.session.round = number;

        match self.session.winner {
            Some(winner) => {
                self.session.phase = EnginePhase::GameOver;
                info!(%winner, rounds = number, "game over");
                RoundOutcome::GameOver { winner }
            }
            None => {
                self.session.phase = EnginePhase::AwaitingRound;
                RoundOutcome::Continue
            }
        }
    }

    #[instrument(skip(self))]
    fn take_turn(&mut self, color: TeamColor) -> Result<TurnRecord> {
        let board = self.session.board();
        let code_request = CodeRequest::new(
            color,
            self.session.history_text(),
            board.remaining(Group::team(color)).iter().cloned().collect(),
            board.remaining(Group::team(color.opponent())).iter().cloned().collect(),
            board.remaining(Group::Neutral).iter().cloned().collect(),
            board.forbidden_word().to_string(),
        );

        let code = self
            .team_mut(color)
            .code_giver_mut()
            .provider_mut()
            .produce_code(&code_request)
            .and_then(validate_code)
            .map_err(|source| GameError::Provider { color, role: Role::CodeGiver, source })?;

        debug!(word = %code.word, count = code.count, "code received");
        self.session
            .history
            .push_back(format!("{color} team turn. Code: {}, {}", code.word, code.count));

        let guess_request = GuessRequest::new(
            color,
            self.session.history_text(),
            self.session.board().all_remaining(),
            code.word.clone(),
            code.count,
        );

        let guesses = self
            .team_mut(color)
            .guesser_mut()
            .provider_mut()
            .produce_guesses(&guess_request)
            .map_err(|source| GameError::Provider { color, role: Role::Guesser, source })?;

        debug!(guesses = ?guesses.words, "guesses received");

        let evaluation = evaluate_guesses(
            &mut self.session.board,
            &mut self.session.history,
            color,
            &guesses.words,
            self.config.invalid_guess_policy,
        )?;

        if let Some(winner) = evaluation.winner {
            self.session.winner = Some(winner);
        }

        Ok(TurnRecord {
            color,
            code,
            guesses,
            code_prompt: code_request.prompt,
            guess_prompt: guess_request.prompt,
            reveals: evaluation.reveals,
            rejected: evaluation.rejected,
            end: evaluation.end,
        })
    }

    /// Compile the final report. Fails with `GameNotFinished` before
    /// `GameOver`.
    pub fn report(&self) -> Result<GameReport> {
        let teams = TeamProfiles {
            red: self.red.profile(),
            blue: self.blue.profile(),
        };
        ResultsRecorder::record(&self.session, teams)
    }
}

fn validate_code(code: Code) -> std::result::Result<Code, ProviderError> {
    if code.word.trim().is_empty() {
        return Err(ProviderError::Malformed("code word is blank".to_string()));
    }
    Ok(code)
}

/// Deal a board from `allocator` using `config.seed`, then play it out.
pub fn run_dealt_game(
    team_a: Team,
    team_b: Team,
    allocator: &WordAllocator,
    config: GameConfig,
) -> Result<GameReport> {
    let deal = allocator.deal_seeded(config.seed);
    let board = Board::new(deal.partition)?;
    run_game(team_a, team_b, board, deal.order, config)
}

/// Play a complete game and return its report.
pub fn run_game(
    team_a: Team,
    team_b: Team,
    board: Board,
    order: PlayOrder,
    config: GameConfig,
) -> Result<GameReport> {
    GameEngine::new(team_a, team_b, board, order, config)?.play()
}
