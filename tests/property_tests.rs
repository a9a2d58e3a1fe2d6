//! Property tests for dealing, board bookkeeping and the guess cascade.

use std::collections::HashSet;

use im::Vector;
use proptest::prelude::*;
use secret_code::board::{Board, Classification, Group, WordAllocator, BOARD_SIZE};
use secret_code::core::{GameConfig, GameRng, InvalidGuessPolicy, TeamColor};
use secret_code::engine::{evaluate_guesses, run_game, TurnEnd};
use secret_code::provider::RandomProvider;
use secret_code::team::{Agent, AgentProfile, Team};

fn vocabulary(size: usize) -> Vec<String> {
    (0..size).map(|i| format!("w{i:03}")).collect()
}

fn dealt_board(vocab_size: usize, seed: u64) -> Board {
    let allocator = WordAllocator::new(vocabulary(vocab_size)).unwrap();
    let deal = allocator.deal(&mut GameRng::new(seed));
    Board::new(deal.partition).unwrap()
}

fn random_team(color: TeamColor, seed: u64) -> Team {
    Team::new(
        color,
        Agent::code_giver(
            "cg",
            AgentProfile::new("random").with_seed(seed),
            RandomProvider::seeded(seed),
        ),
        Agent::guesser(
            "g",
            AgentProfile::new("random").with_seed(seed.wrapping_add(1)),
            RandomProvider::seeded(seed.wrapping_add(1)),
        ),
    )
    .unwrap()
}

proptest! {
    /// A dealt board has 9 + 9 + 6 + 1 distinct words drawn from the vocabulary.
    #[test]
    fn prop_deal_partitions_25_distinct_words(vocab_size in 25usize..120, seed in any::<u64>()) {
        let vocab = vocabulary(vocab_size);
        let allocator = WordAllocator::new(vocab.clone()).unwrap();
        let deal = allocator.deal(&mut GameRng::new(seed));
        let p = &deal.partition;

        prop_assert_eq!(p.red.len(), 9);
        prop_assert_eq!(p.blue.len(), 9);
        prop_assert_eq!(p.neutral.len(), 6);

        let words: HashSet<&String> = p.words().collect();
        prop_assert_eq!(words.len(), BOARD_SIZE);
        prop_assert!(words.iter().all(|w| vocab.contains(w)));
        prop_assert_ne!(deal.order.first, deal.order.second);
    }

    /// Removed words land in `known` exactly once and never come back.
    #[test]
    fn prop_remove_round_trip(
        seed in any::<u64>(),
        picks in prop::collection::vec(0usize..24, 0..40),
    ) {
        let mut board = dealt_board(40, seed);
        let mut removed = Vec::new();

        for pick in picks {
            let candidates: Vec<(String, Group)> = [Group::Red, Group::Blue, Group::Neutral]
                .into_iter()
                .flat_map(|g| board.remaining(g).iter().cloned().map(move |w| (w, g)))
                .collect();
            if candidates.is_empty() {
                break;
            }
            let (word, group) = candidates[pick % candidates.len()].clone();
            board.remove(&word, group).unwrap();
            removed.push(word);
        }

        let known: Vec<String> = board.known().iter().cloned().collect();
        prop_assert_eq!(&known, &removed);
        let all = board.all_remaining();
        for word in &removed {
            prop_assert!(!all.contains(word));
            prop_assert_eq!(board.classify(word), Classification::Unknown);
        }

        // Per-group: remaining plus known members equal the original group.
        let partition = board.partition().clone();
        for color in TeamColor::ALL {
            let team_words = partition.team_words(color);
            let mut rebuilt: Vec<String> =
                board.remaining(Group::team(color)).iter().cloned().collect();
            rebuilt.extend(known.iter().filter(|w| team_words.contains(w)).cloned());
            rebuilt.sort();
            let mut original = partition.team_words(color).to_vec();
            original.sort();
            prop_assert_eq!(rebuilt, original);
        }
        prop_assert_eq!(all.len() + known.len(), BOARD_SIZE);
    }

    /// Classification is case-insensitive and does not change the board.
    #[test]
    fn prop_classify_is_idempotent(
        seed in any::<u64>(),
        pick in 0usize..25,
        upper in any::<bool>(),
    ) {
        let board = dealt_board(40, seed);
        let word = board.all_remaining()[pick].clone();
        let query = if upper { word.to_uppercase() } else { word.clone() };

        let first = board.classify(&query);
        prop_assert_eq!(first, board.classify(&query));
        prop_assert_eq!(first, board.classify(&word));
        prop_assert!(first.group().is_some());
        prop_assert_eq!(board.all_remaining().len(), BOARD_SIZE);
    }

    /// Evaluation reveals a prefix of the guesses: own-team hits, then at most
    /// one stopping word.
    #[test]
    fn prop_cascade_stops_at_first_miss(
        seed in any::<u64>(),
        picks in prop::collection::vec(0usize..25, 0..10),
        red_acts in any::<bool>(),
    ) {
        let mut board = dealt_board(50, seed);
        let color = if red_acts { TeamColor::Red } else { TeamColor::Blue };

        let all = board.all_remaining();
        let mut seen = HashSet::new();
        let guesses: Vec<String> = picks
            .iter()
            .map(|&i| all[i % all.len()].clone())
            .filter(|w| seen.insert(w.clone()))
            .collect();

        let before = board.clone();
        let mut history = Vector::new();
        let policy = InvalidGuessPolicy::Abort;
        let eval = evaluate_guesses(&mut board, &mut history, color, &guesses, policy).unwrap();

        let evaluated: Vec<&String> = eval.reveals.iter().map(|r| &r.word).collect();
        let prefix: Vec<&String> = guesses.iter().take(evaluated.len()).collect();
        prop_assert_eq!(&evaluated, &prefix);

        let own = Group::team(color);
        if let Some((last, rest)) = eval.reveals.split_last() {
            prop_assert!(rest.iter().all(|r| r.group == own));
            match eval.end {
                TurnEnd::ListExhausted => {
                    prop_assert_eq!(last.group, own);
                    prop_assert_eq!(eval.reveals.len(), guesses.len());
                }
                TurnEnd::Depleted => {
                    prop_assert_eq!(last.group, own);
                    prop_assert!(board.remaining(own).is_empty());
                }
                TurnEnd::OpposingWord => {
                    prop_assert_eq!(last.group, Group::team(color.opponent()));
                }
                TurnEnd::NeutralWord => {
                    prop_assert_eq!(last.group, Group::Neutral);
                }
                TurnEnd::ForbiddenWord => {
                    prop_assert_eq!(last.group, Group::Forbidden);
                }
                TurnEnd::InvalidWord => {
                    prop_assert!(false, "no invalid words were guessed");
                }
            }
        } else {
            prop_assert!(guesses.is_empty());
        }

        for reveal in &eval.reveals {
            prop_assert_eq!(before.classify(&reveal.word), Classification::Remaining(reveal.group));
        }
        let removed = eval.reveals.iter().filter(|r| r.group != Group::Forbidden).count();
        prop_assert_eq!(board.known().len(), removed);
        prop_assert_eq!(history.len(), eval.reveals.len());
    }

    /// Games between random agents always finish with a winner inside the
    /// default round limit.
    #[test]
    fn prop_random_games_terminate(seed in any::<u64>()) {
        let deal = WordAllocator::with_default_words().unwrap().deal(&mut GameRng::new(seed));
        let board = Board::new(deal.partition.clone()).unwrap();
        let report = run_game(
            random_team(TeamColor::Red, seed.wrapping_mul(3)),
            random_team(TeamColor::Blue, seed.wrapping_mul(7)),
            board,
            deal.order,
            GameConfig::default(),
        )
        .unwrap();

        prop_assert_eq!(&report.words, &deal.partition);
        prop_assert_eq!(report.order, deal.order);
        prop_assert_eq!(report.num_rounds as usize, report.rounds.len());
        prop_assert!(report.num_rounds <= 24);

        for round in &report.rounds[..report.rounds.len() - 1] {
            prop_assert_eq!(round.turns.len(), 2);
            prop_assert_eq!(round.turns[0].color, deal.order.first);
        }

        let last_turn = report.rounds.last().unwrap().turns.last().unwrap();
        match last_turn.end {
            TurnEnd::Depleted => {
                prop_assert_eq!(report.winner, last_turn.color);
            }
            TurnEnd::ForbiddenWord => {
                prop_assert_eq!(report.winner, last_turn.color.opponent());
            }
            other => {
                prop_assert!(false, "game ended on {:?}", other);
            }
        }
    }
}
