//! Queue-backed provider for tests and replays.

use std::collections::VecDeque;

use super::traits::{Code, CodeRequest, DecisionProvider, GuessRequest, Guesses, ProviderError};

/// Replays prepared codes and guess lists in order.
///
/// Each call pops the next prepared response; an empty queue yields
/// `ProviderError::Exhausted`.
///
/// ```
/// use secret_code::provider::{Code, DecisionProvider, ScriptedProvider};
///
/// let provider = ScriptedProvider::new()
///     .with_code(Code::new("sky", 2))
///     .with_guesses(["sun", "star"]);
/// assert_eq!(provider.pending(), (1, 1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedProvider {
    codes: VecDeque<Code>,
    guesses: VecDeque<Guesses>,
}

impl ScriptedProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a code.
    #[must_use]
    pub fn with_code(mut self, code: Code) -> Self {
        self.codes.push_back(code);
        self
    }

    /// Queue a guess list.
    #[must_use]
    pub fn with_guesses<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.guesses.push_back(Guesses::new(words));
        self
    }

    /// Queue a prepared `Guesses` value.
    #[must_use]
    pub fn with_guess_list(mut self, guesses: Guesses) -> Self {
        self.guesses.push_back(guesses);
        self
    }

    /// Remaining (codes, guess lists).
    #[must_use]
    pub fn pending(&self) -> (usize, usize) {
        (self.codes.len(), self.guesses.len())
    }
}

impl DecisionProvider for ScriptedProvider {
    fn produce_code(&mut self, _request: &CodeRequest) -> Result<Code, ProviderError> {
        self.codes.pop_front().ok_or(ProviderError::Exhausted)
    }

    fn produce_guesses(&mut self, _request: &GuessRequest) -> Result<Guesses, ProviderError> {
        self.guesses.pop_front().ok_or(ProviderError::Exhausted)
    }
}
