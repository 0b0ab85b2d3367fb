//! Property tests over arbitrary move sequences.

use proptest::prelude::*;
use std::collections::HashSet;
use tictactoe_engine::{
    EngineError, EngineInvariants, GameEngine, GameStatus, InvariantSet, LINES, MoveOutcome,
};

fn moves() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..3, 0usize..3), 0..40)
}

proptest! {
    #[test]
    fn turn_alternates_until_game_ends(moves in moves()) {
        let mut engine = GameEngine::new();
        for (row, col) in moves {
            let before = engine.clone();
            let outcome = engine.play_move(row, col).expect("in range");

            match outcome {
                MoveOutcome::Placed(mov) => {
                    prop_assert_eq!(mov.player(), before.current_player());
                    match engine.status() {
                        GameStatus::Turn(next) => {
                            prop_assert_eq!(next, before.current_player().opponent());
                        }
                        GameStatus::Win(_) | GameStatus::Tie => {
                            prop_assert_eq!(engine.current_player(), before.current_player());
                        }
                    }
                }
                MoveOutcome::Rejected(_) => {
                    prop_assert_eq!(&engine, &before);
                }
            }
        }
    }

    #[test]
    fn rejected_moves_never_mutate(moves in moves(), probe in (0usize..3, 0usize..3)) {
        let mut engine = GameEngine::new();
        for (row, col) in moves {
            engine.play_move(row, col).expect("in range");
        }

        let before = engine.clone();
        let playable = engine.is_cell_playable(probe.0, probe.1).expect("in range");
        let outcome = engine.play_move(probe.0, probe.1).expect("in range");

        prop_assert_eq!(outcome.is_placed(), playable);
        if !playable {
            prop_assert_eq!(&engine, &before);
        }
    }

    #[test]
    fn at_most_one_player_owns_a_line(moves in moves()) {
        let mut engine = GameEngine::new();
        for (row, col) in moves {
            engine.play_move(row, col).expect("in range");
            let owners: HashSet<_> = LINES
                .iter()
                .filter_map(|line| line.owner(engine.board()))
                .collect();
            prop_assert!(owners.len() <= 1);
            prop_assert!(EngineInvariants::check_all(engine.state()).is_ok());
        }
    }

    #[test]
    fn reset_always_restores_fresh_game(moves in moves()) {
        let mut engine = GameEngine::new();
        for (row, col) in moves {
            engine.play_move(row, col).expect("in range");
        }
        engine.reset();
        let once = engine.clone();
        engine.reset();

        prop_assert_eq!(&engine, &once);
        prop_assert_eq!(&engine, &GameEngine::new());
    }

    #[test]
    fn out_of_range_is_always_an_error(
        moves in moves(),
        row in 0usize..100,
        col in 3usize..100,
        swap in any::<bool>(),
    ) {
        let (row, col) = if swap { (col, row) } else { (row, col) };
        let mut engine = GameEngine::new();
        for (r, c) in moves {
            engine.play_move(r, c).expect("in range");
        }

        let before = engine.clone();
        prop_assert_eq!(
            engine.play_move(row, col),
            Err(EngineError::InvalidCoordinate { row, col })
        );
        prop_assert_eq!(&engine, &before);
    }
}
