//! Uniform-random provider for simulations.
//!
//! The code-giver picks a random clue word from outside the board and points
//! at a random number of its own remaining words. The guesser picks that many
//! words uniformly from the unguessed words, so it only ever names board
//! words and every turn reveals at least one word.

use super::traits::{Code, CodeRequest, DecisionProvider, GuessRequest, Guesses, ProviderError};
use crate::core::GameRng;
use crate::words::DEFAULT_WORDS;

/// Largest count the random code-giver will announce.
const MAX_COUNT: usize = 3;

/// Random code-giver and guesser.
#[derive(Clone, Debug)]
pub struct RandomProvider {
    rng: GameRng,
}

impl RandomProvider {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    fn pick_clue(&mut self, request: &CodeRequest) -> String {
        let on_board = |w: &str| {
            request.own_remaining.iter().any(|b| b == w)
                || request.opposing_remaining.iter().any(|b| b == w)
                || request.neutral_remaining.iter().any(|b| b == w)
                || request.forbidden_word == w
        };
        let candidates: Vec<&str> =
            DEFAULT_WORDS.iter().copied().filter(|w| !on_board(w)).collect();
        if candidates.is_empty() {
            return "clue".to_string();
        }
        candidates[self.rng.gen_range_usize(0..candidates.len())].to_string()
    }
}

impl DecisionProvider for RandomProvider {
    fn produce_code(&mut self, request: &CodeRequest) -> Result<Code, ProviderError> {
        // The opponent may have revealed all of our words; keep playing.
        if request.own_remaining.is_empty() {
            return Ok(Code::new(self.pick_clue(request), 1).with_justification("random"));
        }

        let count = 1 + self.rng.gen_range_usize(0..request.own_remaining.len().min(MAX_COUNT));
        let related: Vec<String> = self
            .rng
            .sample_indices(request.own_remaining.len(), count)
            .into_iter()
            .map(|i| request.own_remaining[i].clone())
            .collect();

        Ok(Code::new(self.pick_clue(request), count as u32)
            .with_justification("random")
            .with_related_words(related))
    }

    fn produce_guesses(&mut self, request: &GuessRequest) -> Result<Guesses, ProviderError> {
        let amount = (request.code_count as usize).min(request.all_remaining.len());
        let words: Vec<String> = self
            .rng
            .sample_indices(request.all_remaining.len(), amount)
            .into_iter()
            .map(|i| request.all_remaining[i].clone())
            .collect();

        Ok(Guesses::new(words).with_justification("random"))
    }
}
