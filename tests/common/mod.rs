#![allow(dead_code)]

use secret_code::board::{Board, WordPartition};
use secret_code::core::TeamColor;
use secret_code::provider::{Code, ScriptedProvider};
use secret_code::team::{Agent, AgentProfile, Team};

/// Install a test-writer subscriber once; `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// red={sun,star}, blue={moon,tide}, neutral={rock}, forbidden=void.
pub fn scenario_board() -> Board {
    Board::new(WordPartition {
        red: vec!["sun".into(), "star".into()],
        blue: vec!["moon".into(), "tide".into()],
        neutral: vec!["rock".into()],
        forbidden: "void".into(),
    })
    .unwrap()
}

/// Team whose code-giver and guesser replay the given scripts.
pub fn scripted_team(color: TeamColor, codes: &[(&str, u32)], guesses: &[&[&str]]) -> Team {
    let code_giver = codes
        .iter()
        .fold(ScriptedProvider::new(), |p, &(word, count)| p.with_code(Code::new(word, count)));
    let guesser = guesses
        .iter()
        .fold(ScriptedProvider::new(), |p, list| p.with_guesses(list.iter().copied()));

    Team::new(
        color,
        Agent::code_giver(
            format!("{color}-code-giver"),
            AgentProfile::new("scripted-cg").with_temperature(0.1).with_seed(1),
            code_giver,
        ),
        Agent::guesser(format!("{color}-guesser"), AgentProfile::new("scripted-g"), guesser),
    )
    .unwrap()
}

/// Team with empty scripts: any decision request fails with `Exhausted`.
pub fn silent_team(color: TeamColor) -> Team {
    scripted_team(color, &[], &[])
}
