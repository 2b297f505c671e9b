//! Property tests for hashing, win detection and copy independence.

use proptest::prelude::*;

use rust_gomoku::{Board, GameState, Move, Point, Side, NUM_IN_ROW};

const SIZE: usize = 9;

fn any_side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Black), Just(Side::White)]
}

/// Distinct points on a SIZE x SIZE board, each with a random owner.
fn placements(max: usize) -> impl Strategy<Value = Vec<(Point, Side)>> {
    proptest::sample::subsequence(
        (1..=SIZE as i32)
            .flat_map(|r| (1..=SIZE as i32).map(move |c| Point::new(r, c)))
            .collect::<Vec<_>>(),
        0..=max,
    )
    .prop_shuffle()
    .prop_flat_map(|points| {
        let n = points.len();
        (Just(points), proptest::collection::vec(any_side(), n))
    })
    .prop_map(|(points, sides)| points.into_iter().zip(sides).collect())
}

/// Place stones until one wins or the list runs out.
fn place_until_win(board: &mut Board, stones: &[(Point, Side)]) -> usize {
    for (i, &(point, side)) in stones.iter().enumerate() {
        board.place_stone(side, point);
        if board.winner_flag().is_some() {
            return i + 1;
        }
    }
    stones.len()
}

/// Longest same-side line through `point`, walking the whole board.
fn line_through(board: &Board, side: Side, point: Point) -> usize {
    rust_gomoku::core::LINES
        .iter()
        .map(|&dir| {
            let mut len = 1;
            for d in [dir, dir.reverse()] {
                let mut cur = point.step(d);
                while board.is_players_stone(side, cur) {
                    len += 1;
                    cur = cur.step(d);
                }
            }
            len
        })
        .max()
        .unwrap_or(1)
}

proptest! {
    #[test]
    fn prop_incremental_hash_matches_any_order(stones in placements(40)) {
        let mut board = Board::new(SIZE, SIZE);
        let placed = place_until_win(&mut board, &stones);
        let table = board.zobrist_table().clone();

        let mut reversed = stones[..placed].to_vec();
        reversed.reverse();

        prop_assert_eq!(board.zobrist_hash(), table.hash_position(stones[..placed].iter().copied()));
        prop_assert_eq!(board.zobrist_hash(), table.hash_position(reversed));
        prop_assert_eq!(board.stone_count(), placed);
    }

    #[test]
    fn prop_winner_iff_run_of_five(stones in placements(60)) {
        let mut board = Board::new(SIZE, SIZE);
        for &(point, side) in &stones {
            let run = {
                let mut probe = board.clone();
                probe.place_stone(side, point);
                line_through(&probe, side, point)
            };
            board.place_stone(side, point);

            if run >= NUM_IN_ROW {
                prop_assert_eq!(board.winner_flag(), Some(side));
                break;
            }
            prop_assert_eq!(board.winner_flag(), None);
        }
    }

    #[test]
    fn prop_copy_then_place_leaves_original(
        stones in placements(20),
        extra_side in any_side(),
    ) {
        let mut original = Board::new(SIZE, SIZE);
        let placed = place_until_win(&mut original, &stones);
        prop_assume!(original.winner_flag().is_none());
        prop_assume!(placed < SIZE * SIZE);

        let hash = original.zobrist_hash();
        let count = original.stone_count();
        let empty = (1..=SIZE as i32)
            .flat_map(|r| (1..=SIZE as i32).map(move |c| Point::new(r, c)))
            .find(|&p| original.get(p).is_none())
            .unwrap();

        let mut copy = original.clone();
        copy.place_stone(extra_side, empty);

        prop_assert_eq!(original.get(empty), None);
        prop_assert_eq!(original.zobrist_hash(), hash);
        prop_assert_eq!(original.stone_count(), count);
        prop_assert_eq!(original.winner_flag(), None);
        prop_assert_eq!(copy.stone_count(), count + 1);
    }

    #[test]
    fn prop_random_playout_invariants(seed in any::<u64>()) {
        let mut rng = rust_gomoku::GameRng::new(seed);
        let mut state = GameState::new_game(SIZE);
        let mut history = vec![state.clone()];

        while !state.is_over() {
            let moves = state.legal_moves();
            let mv = *rng.choose(&moves).unwrap();
            prop_assert!(state.is_valid_move(mv));
            state = state.apply_move(mv);
            history.push(state.clone());
        }

        prop_assert!(state.legal_moves().is_empty());
        prop_assert!(
            state.board().winner_flag().is_some() || state.board().is_full()
        );
        // Every retained ancestor still describes its own position.
        for (ply, past) in history.iter().enumerate() {
            prop_assert_eq!(past.ply(), ply);
            prop_assert_eq!(past.board().stone_count(), ply);
        }
        prop_assert_eq!(state.moves().len(), state.ply());
        prop_assert!(state.moves().iter().all(Move::is_play));
    }
}
