//! Final report contents and serialization.

mod common;

use common::{init_tracing, scenario_board, scripted_team, silent_team};
use secret_code::board::{PlayOrder, WordAllocator};
use secret_code::core::{GameConfig, TeamColor};
use secret_code::engine::{run_dealt_game, run_game};
use secret_code::provider::RandomProvider;
use secret_code::results::GameReport;
use secret_code::team::{Agent, AgentProfile, Team};

fn finished_report() -> GameReport {
    let red = scripted_team(
        TeamColor::Red,
        &[("night", 1), ("sky", 1)],
        &[&["moon"], &["sun", "star"]],
    );
    let blue = scripted_team(TeamColor::Blue, &[("stone", 1)], &[&["rock"]]);
    let order = PlayOrder::starting_with(TeamColor::Red);
    run_game(red, blue, scenario_board(), order, GameConfig::default()).unwrap()
}

#[test]
fn test_report_contents() {
    init_tracing();
    let report = finished_report();

    assert_eq!(report.words.red, vec!["sun", "star"]);
    assert_eq!(report.words.forbidden, "void");
    assert_eq!(report.order.first, TeamColor::Red);
    assert_eq!(report.num_rounds, 2);
    assert_eq!(report.rounds.len(), 2);
    assert_eq!(report.rounds[0].round, 1);
    assert_eq!(report.rounds[1].round, 2);
    assert_eq!(report.rounds[0].turns.len(), 2);
    assert_eq!(report.rounds[1].turns.len(), 1);
    assert_eq!(report.winner, TeamColor::Red);
    assert_eq!(report.known, vec!["moon", "rock", "sun", "star"]);
}

#[test]
fn test_report_agent_metadata() {
    let report = finished_report();
    for color in TeamColor::ALL {
        let team = report.teams.get(color);
        assert_eq!(team.code_giver.model_name, "scripted-cg");
        assert_eq!(team.code_giver.temperature, 0.1);
        assert_eq!(team.code_giver.seed, Some(1));
        assert_eq!(team.guesser.model_name, "scripted-g");
        assert_eq!(team.guesser.seed, None);
    }
}

#[test]
fn test_report_history_is_ordered_log() {
    let report = finished_report();
    let expected = vec![
        "Round 1",
        "red team turn. Code: night, 1",
        "red team guessed 'moon': blue word",
        "blue team turn. Code: stone, 1",
        "blue team guessed 'rock': neutral word",
        "Round 2",
        "red team turn. Code: sky, 1",
        "red team guessed 'sun': red word",
        "red team guessed 'star': red word",
    ];
    assert_eq!(report.history, expected);
}

#[test]
fn test_report_json_round_trip() {
    let report = finished_report();
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"winner\":\"red\""));
    assert!(json.contains("\"end\":\"depleted\""));

    let back: GameReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn test_report_unfinished_game_is_refused() {
    let mut engine = secret_code::engine::GameEngine::new(
        silent_team(TeamColor::Red),
        silent_team(TeamColor::Blue),
        scenario_board(),
        PlayOrder::starting_with(TeamColor::Red),
        GameConfig::default(),
    )
    .unwrap();
    assert!(engine.play_round().is_err());
    assert!(matches!(engine.report(), Err(secret_code::GameError::GameNotFinished)));
}

/// Seeded dealing plus seeded random agents reproduce the same game.
#[test]
fn test_seeded_simulation_is_reproducible() {
    fn team(color: TeamColor, seed: u64) -> Team {
        Team::new(
            color,
            Agent::guesser("g", AgentProfile::new("random"), RandomProvider::seeded(seed)),
            Agent::code_giver(
                "cg",
                AgentProfile::new("random"),
                RandomProvider::seeded(seed + 100),
            ),
        )
        .unwrap()
    }

    let allocator = WordAllocator::with_default_words().unwrap();
    let play = |seed: u64| {
        run_dealt_game(
            team(TeamColor::Red, 1),
            team(TeamColor::Blue, 2),
            &allocator,
            GameConfig::default().with_seed(seed),
        )
        .unwrap()
    };

    let first = play(99);
    assert_eq!(first, play(99));
    assert_eq!(first.words.word_count(), 25);
}
