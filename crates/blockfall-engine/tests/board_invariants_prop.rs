//! Property tests for the board state machine.
//!
//! Random seeds drive random interleavings of commands and ticks. After every
//! step the falling piece must be inside the grid and clear of locked cells,
//! the score must equal ten points per cleared row, and it must never drop
//! within a game. An occasional restart starts a new game from an empty grid.

use blockfall_engine::{Board, Command, GRID_HEIGHT, GRID_WIDTH, PieceSeed, SCORE_PER_ROW};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Step {
    Command(Command),
    Tick,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        12 => Just(Step::Tick),
        4 => Just(Step::Command(Command::MoveLeft)),
        4 => Just(Step::Command(Command::MoveRight)),
        4 => Just(Step::Command(Command::MoveDown)),
        4 => Just(Step::Command(Command::Rotate)),
        1 => Just(Step::Command(Command::StartOrRestart)),
    ]
}

fn assert_piece_valid(board: &Board) {
    if !board.state().is_playing() {
        assert!(board.current_piece().is_none(), "finished board kept its piece");
        return;
    }
    let piece = board.current_piece().expect("playing board has a falling piece");
    for pos in piece.occupied_cells() {
        assert!(pos.is_in_bounds(), "piece cell {pos:?} outside the grid");
        assert!(board.grid().is_vacant(pos), "piece cell {pos:?} overlaps");
    }
}

proptest! {
    #[test]
    fn random_play_keeps_board_consistent(
        seed in any::<[u8; 16]>(),
        steps in prop::collection::vec(step_strategy(), 1..600),
    ) {
        let mut board = Board::with_seed(PieceSeed::from_bytes(seed));
        board.reset();
        assert_piece_valid(&board);

        let mut last_score = 0;
        for step in steps {
            let over_before = board.is_over();
            let frozen = over_before.then(|| (board.render_data(), board.grid().clone()));

            let restarted = matches!(step, Step::Command(Command::StartOrRestart));
            match step {
                Step::Command(command) => {
                    board.apply(command);
                }
                Step::Tick => {
                    board.tick();
                }
            }

            assert_piece_valid(&board);
            if restarted {
                prop_assert!(board.state().is_playing());
                prop_assert_eq!(board.score(), 0);
                prop_assert_eq!(board.grid().filled_cells().count(), 0);
                last_score = 0;
            }
            prop_assert_eq!(board.score(), board.stats().cleared_rows() * SCORE_PER_ROW);
            prop_assert!(board.score() >= last_score);
            prop_assert!(board.score() % SCORE_PER_ROW == 0);
            last_score = board.score();

            if let Some((frame, grid)) = frozen.filter(|_| !restarted) {
                prop_assert!(board.is_over());
                prop_assert_eq!(&board.render_data(), &frame);
                prop_assert_eq!(board.grid(), &grid);
            }

            let frame = board.render_data();
            prop_assert!(frame.filled.len() <= GRID_WIDTH * GRID_HEIGHT);
            prop_assert_eq!(frame.is_over, board.is_over());
        }
    }

    #[test]
    fn same_seed_replays_identically(
        seed in any::<[u8; 16]>(),
        steps in prop::collection::vec(step_strategy(), 1..300),
    ) {
        let seed = PieceSeed::from_bytes(seed);
        let mut board1 = Board::with_seed(seed);
        let mut board2 = Board::with_seed(seed);
        board1.reset();
        board2.reset();

        for step in steps {
            let (outcome1, outcome2) = match step {
                Step::Command(command) => {
                    (board1.apply(command), board2.apply(command))
                }
                Step::Tick => (board1.tick().locked, board2.tick().locked),
            };
            prop_assert_eq!(outcome1, outcome2);
        }
        prop_assert_eq!(board1.render_data(), board2.render_data());
    }
}

#[test]
fn unattended_game_ends() {
    let seed: PieceSeed = "0123456789abcdef0123456789abcdef".parse().unwrap();
    let mut board = Board::with_seed(seed);
    board.reset();
    for _ in 0..(GRID_HEIGHT * GRID_HEIGHT * 10) {
        if board.is_over() {
            break;
        }
        board.tick();
        assert_piece_valid(&board);
    }
    assert!(board.is_over());
    assert!(board.render_data().is_over);
    assert_eq!(board.score(), 0);
}
