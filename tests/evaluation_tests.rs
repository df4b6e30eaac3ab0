//! Integration tests for static evaluation
//!
//! Exercises [`Evaluator`] through the shakmaty adapter on real positions.
//!
//! # Test Organization
//!
//! - `test_symmetry_*` - Colour-mirrored positions evaluate to negated scores
//! - `test_terminal_*` - Mate and draw sentinels
//! - `test_material_*` - Material-only tier and material balance

#![cfg(feature = "shakmaty")]

mod common;

use chess_opponent::constants::{MATE_SCORE, PAWN_VALUE};
use chess_opponent::evaluation::evaluate_material;
use chess_opponent::{Evaluator, RulesEngine};
use common::*;

// ============================================================================
// Symmetry Tests
// ============================================================================

#[test]
fn test_symmetry_start_position_is_zero() {
    //! The start position is its own mirror, so it must score 0
    let pos = position(START_FEN);
    assert_eq!(Evaluator::default().evaluate(&pos).unwrap(), 0);
    assert_eq!(Evaluator::material_only().evaluate(&pos).unwrap(), 0);
}

#[test]
fn test_symmetry_mirrored_positions_negate() {
    //! Swapping colours and flipping the board negates the score
    let evaluators = [Evaluator::default(), Evaluator::new(50), Evaluator::material_only()];
    let mut fens = MIDDLEGAMES.to_vec();
    fens.extend([HANGING_KNIGHT, WHITE_MATE_IN_ONE, SINGLE_LEGAL_MOVE]);

    for fen in fens {
        let original = position(fen);
        let mirrored = position(&mirror_fen(fen));
        for evaluator in &evaluators {
            assert_eq!(
                evaluator.evaluate(&original).unwrap(),
                -evaluator.evaluate(&mirrored).unwrap(),
                "{fen} with weight {}",
                evaluator.pst_weight()
            );
        }
    }
}

#[test]
fn test_symmetry_mirror_fen_is_an_involution() {
    for fen in MIDDLEGAMES {
        assert_eq!(mirror_fen(&mirror_fen(fen)), *fen);
    }
}

// ============================================================================
// Terminal Tests
// ============================================================================

#[test]
fn test_terminal_white_mated_scores_negative_mate() {
    let pos = position(FOOLS_MATE);
    assert_eq!(Evaluator::default().evaluate(&pos).unwrap(), -MATE_SCORE);
}

#[test]
fn test_terminal_black_mated_scores_positive_mate() {
    let pos = position(&mirror_fen(FOOLS_MATE));
    assert_eq!(Evaluator::default().evaluate(&pos).unwrap(), MATE_SCORE);
}

#[test]
fn test_terminal_stalemate_scores_zero() {
    //! White is a queen up but the position is a draw
    let pos = position(STALEMATE);
    assert_eq!(Evaluator::default().evaluate(&pos).unwrap(), 0);
}

#[test]
fn test_terminal_insufficient_material_scores_zero() {
    let pos = position("4k3/8/8/8/8/8/8/3BK3 w - - 0 1");
    assert_eq!(Evaluator::default().evaluate(&pos).unwrap(), 0);
}

// ============================================================================
// Material Tests
// ============================================================================

#[test]
fn test_material_pawn_up() {
    //! After 1.e4 d5 2.exd5 White is exactly one pawn up on material
    let mut pos = position(START_FEN);
    for san in ["e4", "d5", "exd5"] {
        pos.play_san(san).unwrap();
    }

    assert_eq!(evaluate_material(&pos.board_pieces()), PAWN_VALUE);
    assert_eq!(Evaluator::material_only().evaluate(&pos).unwrap(), PAWN_VALUE);
}

#[test]
fn test_material_positional_term_breaks_material_ties() {
    //! 1.e4 is a better pawn placement than 1.a3 for the full evaluator only
    let full = Evaluator::default();
    let material = Evaluator::material_only();

    let mut center = position(START_FEN);
    center.play_san("e4").unwrap();
    let mut rim = position(START_FEN);
    rim.play_san("a3").unwrap();

    assert!(full.evaluate(&center).unwrap() > full.evaluate(&rim).unwrap());
    assert_eq!(
        material.evaluate(&center).unwrap(),
        material.evaluate(&rim).unwrap()
    );
}
