//! Text rendering of decision requests.
//!
//! Text-based adapters (chat models, terminal players) send the briefing once
//! as a system message and the rendered round message each turn. The engine
//! records the round messages verbatim in the round record.

use super::traits::{CodeRequest, GuessRequest};
use crate::core::Role;

/// Rules shared by both briefings.
pub const GAME_RULES: &str = "\
You are playing Secret Code. Two teams, red and blue, each have a code-giver and a guesser.
The board holds each team's words, some neutral words and one forbidden word.
Code-givers know which group every word belongs to; guessers only see the words mixed together.
Each turn the code-giver says one clue word and a number.
The guesser then names board words in order of confidence.
A word from the guesser's own team is revealed and the guesser may keep going.
A word from the other team or a neutral word is revealed and the turn ends.
Naming the forbidden word loses the game immediately.
The first team to reveal all of its words wins.
The clue word must not be a board word and must not share a root with any board word.";

/// System briefing for code-givers.
pub const CODE_GIVER_BRIEFING: &str = "\
You are the code-giver. Cover as many of your team's words as your guesser can reliably follow,
and steer away from the other team's words, the neutral words and above all the forbidden word.";

/// System briefing for guessers.
pub const GUESSER_BRIEFING: &str = "\
You are the guesser. Name only words that are on the board, most likely first.
Use the other team's past clues to rule out words that are probably theirs.";

/// Full system message for an agent: the rules followed by its role briefing.
#[must_use]
pub fn briefing(role: Role) -> String {
    let role_briefing = match role {
        Role::CodeGiver => CODE_GIVER_BRIEFING,
        Role::Guesser => GUESSER_BRIEFING,
    };
    format!("{GAME_RULES}\n\n{role_briefing}")
}

/// Round message for a code-giver.
#[must_use]
pub fn code_prompt(request: &CodeRequest) -> String {
    format!(
        "Your team: {color}\n\n\
         Game history:\n{history}\n\n\
         Your team's words yet to be guessed:\n{own}\n\n\
         The {opponent} team's words yet to be guessed:\n{opposing}\n\n\
         Neutral words:\n{neutral}\n\n\
         Forbidden word:\n{forbidden}\n\n\
         Give your clue word and the number of words it covers.",
        color = request.color,
        history = request.history,
        own = list(&request.own_remaining),
        opponent = request.color.opponent(),
        opposing = list(&request.opposing_remaining),
        neutral = list(&request.neutral_remaining),
        forbidden = request.forbidden_word,
    )
}

/// Round message for a guesser.
#[must_use]
pub fn guess_prompt(request: &GuessRequest) -> String {
    format!(
        "Your team: {color}\n\n\
         Game history:\n{history}\n\n\
         Words on the board yet to be guessed:\n{words}\n\n\
         Your code-giver's clue this round: {word}, {count}\n\n\
         Name your words, most likely first.",
        color = request.color,
        history = request.history,
        words = list(&request.all_remaining),
        word = request.code_word,
        count = request.code_count,
    )
}

fn list(words: &[String]) -> String {
    if words.is_empty() {
        "(none)".to_string()
    } else {
        words.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TeamColor;

    #[test]
    fn test_briefing_per_role() {
        let code_giver = briefing(Role::CodeGiver);
        assert!(code_giver.starts_with(GAME_RULES));
        assert!(code_giver.ends_with(CODE_GIVER_BRIEFING));
        assert!(briefing(Role::Guesser).ends_with(GUESSER_BRIEFING));
    }

    #[test]
    fn test_code_prompt_lists_groups() {
        let request = CodeRequest::new(
            TeamColor::Blue,
            "Round 1".into(),
            vec!["moon".into(), "tide".into()],
            vec!["sun".into()],
            Vec::new(),
            "void".into(),
        );
        let prompt = code_prompt(&request);
        assert!(prompt.contains("Your team: blue"));
        assert!(prompt.contains("moon, tide"));
        assert!(prompt.contains("The red team's words"));
        assert!(prompt.contains("(none)"));
        assert!(prompt.contains("void"));
        assert!(prompt.contains("Round 1"));
    }

    #[test]
    fn test_guess_prompt_hides_groups() {
        let request = GuessRequest::new(
            TeamColor::Red,
            String::new(),
            vec!["sun".into(), "moon".into(), "void".into()],
            "sky".into(),
            2,
        );
        let prompt = guess_prompt(&request);
        assert!(prompt.contains("sun, moon, void"));
        assert!(prompt.contains("sky, 2"));
        assert!(!prompt.contains("Forbidden"));
        assert!(!prompt.contains("Neutral"));
    }
}
