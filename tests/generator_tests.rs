//! Play generator and harness integration tests.

use std::io::Cursor;

use rust_mcts::core::{GameRng, GameState, PlayerId};
use rust_mcts::games::row::{InputPhase, RowGameConfig, RowGameState};
use rust_mcts::generators::{
    ConsolePlayGenerator, HighestPlayGenerator, PlayError, PlayGenerator, RandomPlayGenerator,
};
use rust_mcts::harness::{play_game, play_match};
use rust_mcts::mcts::{Mcts, MctsConfig, RootParallelMcts};

type Seat = Box<dyn PlayGenerator<RowGameState>>;

fn random_seats(count: usize, seed: u64) -> Vec<Seat> {
    (0..count)
        .map(|i| Box::new(RandomPlayGenerator::new(seed + i as u64)) as Seat)
        .collect()
}

// =============================================================================
// Individual Generators
// =============================================================================

#[test]
fn test_highest_generator_on_take_row() {
    let config = RowGameConfig::default().with_player_count(2).with_hand_size(1);
    let mut state = RowGameState::new(config).unwrap();
    state.deal_card(PlayerId::new(0), 3).unwrap();
    for (row, card) in [10, 20, 30, 40].into_iter().enumerate() {
        state.add_starting_card(row, card).unwrap();
    }
    state.commit_play(3).unwrap();
    state.commit_play(50).unwrap();
    assert_eq!(state.phase(), InputPhase::TakeRow);

    assert_eq!(HighestPlayGenerator.find_play(&state).unwrap(), 3);
}

#[test]
fn test_console_generator_take_row() {
    let config = RowGameConfig::default().with_player_count(2).with_hand_size(1);
    let mut state = RowGameState::new(config).unwrap();
    state.deal_card(PlayerId::new(0), 3).unwrap();
    for (row, card) in [10, 20, 30, 40].into_iter().enumerate() {
        state.add_starting_card(row, card).unwrap();
    }
    state.commit_play(3).unwrap();
    state.commit_play(50).unwrap();

    let mut console = ConsolePlayGenerator::new(Cursor::new("7\n1\n"), Vec::new());
    assert_eq!(console.find_play(&state).unwrap(), 1);

    let printed = String::from_utf8(console.into_output()).unwrap();
    assert!(printed.contains("Phase: take-row"));
    assert!(printed.contains("Legal plays: 0, 1, 2, 3"));
    assert!(printed.contains("Chosen play '7' is not valid."));
}

#[test]
fn test_console_generator_drives_a_game() {
    let config = RowGameConfig::default().with_player_count(2).with_hand_size(2);
    let mut state = RowGameState::new(config).unwrap();
    state.deal_card(PlayerId::new(0), 60).unwrap();
    state.deal_card(PlayerId::new(0), 70).unwrap();
    state.deal_card(PlayerId::new(1), 61).unwrap();
    state.deal_card(PlayerId::new(1), 71).unwrap();
    for (row, card) in [10, 20, 30, 40].into_iter().enumerate() {
        state.add_starting_card(row, card).unwrap();
    }

    let mut seats: Vec<Seat> = vec![
        Box::new(ConsolePlayGenerator::new(Cursor::new("70\n60\n"), Vec::new())),
        Box::new(HighestPlayGenerator),
    ];
    let result = play_game(&mut state, &mut seats).unwrap();

    assert_eq!(result.as_slice(), &[66.0, 66.0]);
    // 70 and 71 extend row 3 first, so 60 and 61 land on row 2
    assert_eq!(state.board().row(3), &[40, 70, 71]);
    assert_eq!(state.board().row(2), &[30, 60, 61]);
}

#[test]
fn test_console_generator_input_closed_stops_game() {
    let state = RowGameState::deal(RowGameConfig::default(), &mut GameRng::new(1)).unwrap();
    let mut console = ConsolePlayGenerator::new(Cursor::new(""), Vec::new());

    assert!(matches!(console.find_play(&state), Err(PlayError::InputClosed)));
}

// =============================================================================
// Harness
// =============================================================================

#[test]
fn test_random_game_is_reproducible() {
    let config = RowGameConfig::default();

    let mut first = RowGameState::deal(config.clone(), &mut GameRng::new(77)).unwrap();
    let mut second = RowGameState::deal(config, &mut GameRng::new(77)).unwrap();

    let a = play_game(&mut first, &mut random_seats(5, 3)).unwrap();
    let b = play_game(&mut second, &mut random_seats(5, 3)).unwrap();

    assert_eq!(a, b);
    assert_eq!(first.board(), second.board());
}

#[test]
fn test_mixed_table_plays_to_the_end() {
    let config = RowGameConfig::default().with_player_count(4).with_hand_size(4);
    let mut state = RowGameState::deal(config, &mut GameRng::new(12)).unwrap();

    let parallel: RootParallelMcts<RowGameState> =
        RootParallelMcts::new(MctsConfig::default().with_iterations(60).with_workers(2)).unwrap();
    let mut seats: Vec<Seat> = vec![
        Box::new(Mcts::new(MctsConfig::default().with_iterations(100))),
        Box::new(parallel),
        Box::new(HighestPlayGenerator),
        Box::new(RandomPlayGenerator::new(4)),
    ];

    let result = play_game(&mut state, &mut seats).unwrap();

    assert!(state.is_game_over());
    assert_eq!(state.rounds_played(), 4);
    let taken: i32 = PlayerId::all(4).map(|p| state.penalty_points(p)).sum();
    let lost: f64 = result.as_slice().iter().map(|s| 66.0 - s).sum();
    assert_eq!(f64::from(taken), lost);
}

#[test]
fn test_play_match_carries_scores() {
    let config = RowGameConfig::default().with_player_count(3);
    let mut seats = random_seats(3, 20);

    let result = play_match(&config, &mut seats, &mut GameRng::new(8)).unwrap();

    assert!(result.scores.as_slice().iter().any(|&s| s < 0));
    assert!(result.scores.as_slice().iter().all(|&s| s <= 66));
    let winners = result.winners();
    let best = result.scores.as_slice().iter().copied().max().unwrap();
    assert!(winners.iter().all(|&p| result.scores[p] == best));
}
