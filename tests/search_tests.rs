//! Integration tests for alpha-beta search
//!
//! # Test Organization
//!
//! - `test_pruning_*` - Alpha-beta agrees with exhaustive minimax
//! - `test_search_*` - Position restoration, mates and node budgets

#![cfg(feature = "shakmaty")]

mod common;

use chess_opponent::constants::{MATE_SCORE, SCORE_INFINITY};
use chess_opponent::search::order_moves;
use chess_opponent::{Evaluator, RulesEngine, Score, SearchOptions, Searcher, ShakmatyPosition};
use common::*;

/// Root values of every legal move, in search order, plus total nodes
fn root_values(pos: &mut ShakmatyPosition, depth: u8, options: SearchOptions) -> (Vec<Score>, u64) {
    let mut searcher = Searcher::new(Evaluator::default(), options);
    let maximizing = pos.side_to_move().is_maximizing();
    let mut moves = pos.legal_moves();
    order_moves(pos, &mut moves);

    let mut values = Vec::with_capacity(moves.len());
    for mv in &moves {
        pos.apply_move(mv).unwrap();
        values.push(
            searcher
                .search(pos, depth - 1, -SCORE_INFINITY, SCORE_INFINITY, !maximizing)
                .unwrap(),
        );
        pos.undo_move().unwrap();
    }
    (values, searcher.stats().nodes)
}

fn first_best(values: &[Score], maximizing: bool) -> Option<usize> {
    let best = if maximizing {
        values.iter().max()
    } else {
        values.iter().min()
    }?;
    values.iter().position(|v| v == best)
}

// ============================================================================
// Pruning Equivalence Tests
// ============================================================================

#[test]
fn test_pruning_matches_minimax_move_and_value() {
    //! Same first-seen best move and value, never more nodes
    let mut fens = MIDDLEGAMES.to_vec();
    fens.extend([START_FEN, HANGING_KNIGHT, WHITE_MATE_IN_ONE, BLACK_MATE_IN_ONE]);

    for fen in fens {
        for depth in 1..=3 {
            let mut pos = position(fen);
            let maximizing = pos.side_to_move().is_maximizing();

            let (pruned, pruned_nodes) = root_values(&mut pos, depth, SearchOptions::default());
            let (full, full_nodes) = root_values(&mut pos, depth, SearchOptions::exhaustive());

            assert_eq!(pruned, full, "{fen} at depth {depth}");
            assert_eq!(
                first_best(&pruned, maximizing),
                first_best(&full, maximizing),
                "{fen} at depth {depth}"
            );
            assert!(pruned_nodes <= full_nodes, "{fen} at depth {depth}");
        }
    }
}

#[test]
fn test_pruning_saves_nodes_in_middlegame() {
    let mut pos = position(MIDDLEGAMES[0]);
    let (_, pruned_nodes) = root_values(&mut pos, 3, SearchOptions::default());
    let (_, full_nodes) = root_values(&mut pos, 3, SearchOptions::exhaustive());

    assert!(pruned_nodes < full_nodes, "{pruned_nodes} vs {full_nodes}");
}

// ============================================================================
// Search Behaviour Tests
// ============================================================================

#[test]
fn test_search_restores_fen_everywhere() {
    for fen in MIDDLEGAMES {
        let mut pos = position(fen);
        let mut searcher = Searcher::new(Evaluator::default(), SearchOptions::default());
        let maximizing = pos.side_to_move().is_maximizing();

        searcher
            .search(&mut pos, 3, -SCORE_INFINITY, SCORE_INFINITY, maximizing)
            .unwrap();

        assert_eq!(pos.fen(), *fen);
    }
}

#[test]
fn test_search_sees_mate_for_both_colours() {
    let mut white = position(WHITE_MATE_IN_ONE);
    let mut searcher = Searcher::new(Evaluator::default(), SearchOptions::default());
    let value = searcher
        .search(&mut white, 2, -SCORE_INFINITY, SCORE_INFINITY, true)
        .unwrap();
    assert_eq!(value, MATE_SCORE);

    let mut black = position(BLACK_MATE_IN_ONE);
    let value = searcher
        .search(&mut black, 2, -SCORE_INFINITY, SCORE_INFINITY, false)
        .unwrap();
    assert_eq!(value, -MATE_SCORE);
}

#[test]
fn test_search_stalemate_is_a_leaf() {
    let mut pos = position(STALEMATE);
    let mut searcher = Searcher::new(Evaluator::default(), SearchOptions::default());

    let value = searcher
        .search(&mut pos, 3, -SCORE_INFINITY, SCORE_INFINITY, false)
        .unwrap();

    assert_eq!(value, 0);
    assert_eq!(searcher.stats().nodes, 1);
}

#[test]
fn test_search_node_limit_caps_work() {
    //! A small budget visits far fewer nodes than an unbounded search
    let mut pos = position(MIDDLEGAMES[0]);
    let limited = SearchOptions {
        alpha_beta: true,
        node_limit: Some(100),
    };
    let (_, limited_nodes) = root_values(&mut pos, 4, limited);
    let (_, unbounded_nodes) = root_values(&mut pos, 4, SearchOptions::default());

    assert!(limited_nodes < unbounded_nodes);
    assert_eq!(pos.fen(), MIDDLEGAMES[0]);
}
