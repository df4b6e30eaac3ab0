//! # Engine Constants - Piece Values & Search Parameters
//!
//! Piece values are in centipawns. The scheme keeps the usual
//! 3 : 3 : 5 : 9 ratio between knight, bishop, rook and queen, with the
//! bishop a hair above the knight so the evaluator prefers the bishop pair
//! when everything else is equal.
//!
//! The king has no material value. Both kings are always on the board
//! during play, so any value would cancel out; mate is scored by the
//! terminal sentinel [`MATE_SCORE`] instead.
//!
//! ## Score Range
//!
//! Real scores live in `[-MATE_SCORE, MATE_SCORE]`. [`SCORE_INFINITY`] is
//! strictly outside that range, so the search's initial `-inf` / `+inf`
//! sentinels can never tie a real evaluation.

use crate::types::{PieceKind, Score};

pub const PAWN_VALUE: Score = 100;
pub const KNIGHT_VALUE: Score = 320;
pub const BISHOP_VALUE: Score = 330;
pub const ROOK_VALUE: Score = 500;
pub const QUEEN_VALUE: Score = 900;
pub const KING_VALUE: Score = 0;

/// Material value indexed by [`PieceKind::index`]
pub const PIECE_VALUE: [Score; 6] = [
    PAWN_VALUE,
    KNIGHT_VALUE,
    BISHOP_VALUE,
    ROOK_VALUE,
    QUEEN_VALUE,
    KING_VALUE,
];

/// Terminal sentinel for checkmate (positive: White mated Black)
pub const MATE_SCORE: Score = 100_000;

/// Search window bound, strictly outside every reachable score
pub const SCORE_INFINITY: Score = 1_000_000;

/// Default fixed search depth in plies
pub const DEFAULT_DEPTH: u8 = 3;

/// Upper bound accepted by configuration validation
pub const MAX_DEPTH: u8 = 8;

/// Default positional weight in percent (100 = tables applied as written)
pub const DEFAULT_PST_WEIGHT: i32 = 100;

/// Largest positional weight accepted; keeps every evaluation well inside `MATE_SCORE`
pub const MAX_PST_WEIGHT: i32 = 400;

/// Material value of a piece kind
#[inline]
pub fn material_value(kind: PieceKind) -> Score {
    PIECE_VALUE[kind.index()]
}
