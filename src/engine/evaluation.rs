//! Guess evaluation cascade.
//!
//! Guesses are evaluated strictly in the order given. Own-team words are
//! revealed and evaluation continues; the first word that is not an own-team
//! word stops it:
//!
//! | Classification | Board          | Turn          | Game                     |
//! |----------------|----------------|---------------|--------------------------|
//! | own team       | removed        | continues     | own team wins if emptied |
//! | opposing team  | removed        | ends          | continues                |
//! | neutral        | removed        | ends          | continues                |
//! | forbidden      | untouched      | ends          | opposing team wins       |
//! | unknown        | untouched      | per policy    | continues                |

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::board::{Board, Classification, Group};
use crate::core::{InvalidGuessPolicy, TeamColor};
use crate::error::{GameError, Result};

/// A guessed word and the group it turned out to belong to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    pub word: String,
    pub group: Group,
}

/// Why a guesser's turn stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnEnd {
    /// Every guess was an own-team word and the list ran out.
    ListExhausted,
    /// The team revealed its last word.
    Depleted,
    /// An opposing team's word was guessed.
    OpposingWord,
    /// A neutral word was guessed.
    NeutralWord,
    /// The forbidden word was guessed.
    ForbiddenWord,
    /// A word not on the board ended the turn under `InvalidGuessPolicy::EndTurn`.
    InvalidWord,
}

/// Result of evaluating one guess list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// Evaluated board words, in order. Includes the forbidden word if guessed.
    pub reveals: Vec<Reveal>,
    /// Guesses that matched no remaining word and were passed over.
    pub rejected: Vec<String>,
    pub end: TurnEnd,
    /// Set when the turn ended the game.
    pub winner: Option<TeamColor>,
}

/// Evaluate `guesses` for the team `color`, mutating `board` and appending to
/// `history` as words are revealed.
///
/// Under `InvalidGuessPolicy::Abort` an unknown word returns `InvalidGuess`;
/// words revealed before it have already been applied, so callers that need
/// the board untouched evaluate against a snapshot.
pub fn evaluate_guesses(
    board: &mut Board,
    history: &mut Vector<String>,
    color: TeamColor,
    guesses: &[String],
    policy: InvalidGuessPolicy,
) -> Result<Evaluation> {
    let own = Group::team(color);
    let mut reveals = Vec::new();
    let mut rejected = Vec::new();

    for guess in guesses {
        let word = guess.trim().to_lowercase();

        let group = match board.classify(&word) {
            Classification::Remaining(group) => group,
            Classification::Unknown => {
                warn!(team = %color, word = %word, ?policy, "guess is not an unguessed board word");
                match policy {
                    InvalidGuessPolicy::Abort => {
                        return Err(GameError::InvalidGuess { color, word });
                    }
                    InvalidGuessPolicy::SkipWord => {
                        history.push_back(format!(
                            "{color} team guessed '{word}': not on the board, skipped"
                        ));
                        rejected.push(word);
                        continue;
                    }
                    InvalidGuessPolicy::EndTurn => {
                        history.push_back(format!(
                            "{color} team guessed '{word}': not on the board, turn over"
                        ));
                        rejected.push(word);
                        return Ok(Evaluation {
                            reveals,
                            rejected,
                            end: TurnEnd::InvalidWord,
                            winner: None,
                        });
                    }
                }
            }
        };

        debug!(team = %color, word = %word, group = %group, "guess revealed");
        history.push_back(format!("{color} team guessed '{word}': {group} word"));

        if group == Group::Forbidden {
            reveals.push(Reveal { word, group });
            return Ok(Evaluation {
                reveals,
                rejected,
                end: TurnEnd::ForbiddenWord,
                winner: Some(color.opponent()),
            });
        }

        board.remove(&word, group)?;
        reveals.push(Reveal { word, group });

        if group == own {
            if board.remaining(own).is_empty() {
                return Ok(Evaluation {
                    reveals,
                    rejected,
                    end: TurnEnd::Depleted,
                    winner: Some(color),
                });
            }
            continue;
        }

        let end = if group == Group::Neutral {
            TurnEnd::NeutralWord
        } else {
            TurnEnd::OpposingWord
        };
        return Ok(Evaluation { reveals, rejected, end, winner: None });
    }

    Ok(Evaluation { reveals, rejected, end: TurnEnd::ListExhausted, winner: None })
}
