//! Decision provider boundary.
//!
//! The engine never decides codes or guesses itself. It builds a request
//! holding exactly what the acting agent is allowed to see and hands it to a
//! `DecisionProvider`:
//!
//! - code-givers see every group's remaining words and the forbidden word
//! - guessers see the unguessed words mixed together, plus the code word and
//!   count
//!
//! Adapters (network-backed, interactive, scripted, random) implement the
//! trait; the engine only holds `Box<dyn DecisionProvider>`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::prompts;
use crate::core::TeamColor;

/// Failure to produce a structurally valid decision.
///
/// Propagated to the caller; the engine never retries or substitutes a
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Backend could not be reached or returned nothing.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// Response was missing fields or had invalid values.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// A scripted provider ran out of prepared responses.
    #[error("no scripted response left")]
    Exhausted,
}

/// A code-giver's clue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Code {
    /// Clue word.
    pub word: String,
    /// Number of own-team words the clue points at.
    pub count: u32,
    /// Reasoning, kept in the round record only.
    pub justification: String,
    /// Board words the clue is meant to cover, kept in the round record only.
    pub related_words: Vec<String>,
}

impl Code {
    /// A code with no justification or related words.
    pub fn new(word: impl Into<String>, count: u32) -> Self {
        Self {
            word: word.into(),
            count,
            justification: String::new(),
            related_words: Vec::new(),
        }
    }

    /// Attach reasoning.
    #[must_use]
    pub fn with_justification(mut self, justification: impl Into<String>) -> Self {
        self.justification = justification.into();
        self
    }

    /// Attach the words the clue targets.
    #[must_use]
    pub fn with_related_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_words = words.into_iter().map(Into::into).collect();
        self
    }
}

/// A guesser's ordered candidate words.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guesses {
    /// Candidates, most confident first.
    pub words: Vec<String>,
    pub justification: String,
}

impl Guesses {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            justification: String::new(),
        }
    }

    #[must_use]
    pub fn with_justification(mut self, justification: impl Into<String>) -> Self {
        self.justification = justification.into();
        self
    }
}

/// Everything a code-giver may see when producing a code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeRequest {
    pub color: TeamColor,
    /// History log joined with newlines.
    pub history: String,
    pub own_remaining: Vec<String>,
    pub opposing_remaining: Vec<String>,
    pub neutral_remaining: Vec<String>,
    pub forbidden_word: String,
    /// Rendered round message for text-based adapters.
    pub prompt: String,
}

impl CodeRequest {
    /// Build a request and render its prompt.
    pub fn new(
        color: TeamColor,
        history: String,
        own_remaining: Vec<String>,
        opposing_remaining: Vec<String>,
        neutral_remaining: Vec<String>,
        forbidden_word: String,
    ) -> Self {
        let mut request = Self {
            color,
            history,
            own_remaining,
            opposing_remaining,
            neutral_remaining,
            forbidden_word,
            prompt: String::new(),
        };
        request.prompt = prompts::code_prompt(&request);
        request
    }
}

/// Everything a guesser may see when producing guesses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuessRequest {
    pub color: TeamColor,
    /// History log joined with newlines.
    pub history: String,
    /// Unguessed words from every group, without membership.
    pub all_remaining: Vec<String>,
    pub code_word: String,
    pub code_count: u32,
    /// Rendered round message for text-based adapters.
    pub prompt: String,
}

impl GuessRequest {
    /// Build a request and render its prompt.
    pub fn new(
        color: TeamColor,
        history: String,
        all_remaining: Vec<String>,
        code_word: String,
        code_count: u32,
    ) -> Self {
        let mut request = Self {
            color,
            history,
            all_remaining,
            code_word,
            code_count,
            prompt: String::new(),
        };
        request.prompt = prompts::guess_prompt(&request);
        request
    }
}

/// Produces codes and guesses on behalf of an agent.
///
/// Calls are blocking and strictly sequential. Implementations own their
/// retry and timeout policy; the engine treats any `Err` as fatal for the
/// current round.
pub trait DecisionProvider {
    /// Produce a clue for the code-giver of `request.color`.
    fn produce_code(&mut self, request: &CodeRequest) -> Result<Code, ProviderError>;

    /// Produce ordered guesses for the guesser of `request.color`.
    fn produce_guesses(&mut self, request: &GuessRequest) -> Result<Guesses, ProviderError>;
}

impl<P: DecisionProvider + ?Sized> DecisionProvider for Box<P> {
    fn produce_code(&mut self, request: &CodeRequest) -> Result<Code, ProviderError> {
        (**self).produce_code(request)
    }

    fn produce_guesses(&mut self, request: &GuessRequest) -> Result<Guesses, ProviderError> {
        (**self).produce_guesses(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_builder() {
        let code = Code::new("sky", 2)
            .with_justification("both are up there")
            .with_related_words(["sun", "star"]);
        assert_eq!(code.word, "sky");
        assert_eq!(code.count, 2);
        assert_eq!(code.related_words, vec!["sun".to_string(), "star".to_string()]);
    }

    #[test]
    fn test_requests_render_prompts() {
        let code = CodeRequest::new(
            TeamColor::Red,
            String::new(),
            vec!["sun".into()],
            vec!["moon".into()],
            vec!["rock".into()],
            "void".into(),
        );
        assert!(!code.prompt.is_empty());

        let guess =
            GuessRequest::new(TeamColor::Red, String::new(), vec!["sun".into()], "sky".into(), 1);
        assert!(guess.prompt.contains("sky"));
    }
}
