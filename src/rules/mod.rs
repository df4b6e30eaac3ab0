//! Rules engine boundary
//!
//! The decision engine implements no chess rules. It drives an external
//! rules engine through the [`RulesEngine`] capability trait, implemented
//! by the position type itself: enumerate legal moves, apply one, undo it,
//! classify the position, and report the pieces on the board.
//!
//! ## Apply / Undo Contract
//!
//! `apply_move` mutates the position in place and pushes whatever is needed
//! to reverse it. `undo_move` reverses exactly the last applied move,
//! restoring castling rights, en-passant state and move counters. The search
//! relies on this to hand the caller back the position it was given.
//!
//! ## Implementations
//!
//! - [`ShakmatyPosition`] - backed by the `shakmaty` crate (feature `shakmaty`)

#[cfg(feature = "shakmaty")]
mod shakmaty_position;

#[cfg(feature = "shakmaty")]
pub use self::shakmaty_position::ShakmatyPosition;

use crate::error::RulesResult;
use crate::types::{PlacedPiece, Side, TerminalStatus};
use std::fmt::Debug;

/// Capabilities the engine consumes from a rules engine
pub trait RulesEngine {
    /// Opaque move descriptor; compared, ordered and handed back, never built
    type Move: Clone + PartialEq + Debug;

    /// All and only the legal moves in the current position, in any order
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Cheap "this move captures" signal used for move ordering
    fn is_capture(&self, mv: &Self::Move) -> bool;

    /// Apply `mv` in place, rejecting illegal or malformed moves
    fn apply_move(&mut self, mv: &Self::Move) -> RulesResult<()>;

    /// Reverse the last applied move
    fn undo_move(&mut self) -> RulesResult<()>;

    /// Terminal classification of the current position
    fn terminal_status(&self) -> RulesResult<TerminalStatus>;

    fn side_to_move(&self) -> Side;

    /// Every occupied square with its piece
    fn board_pieces(&self) -> Vec<PlacedPiece>;

    /// Full FEN of the current position
    fn fen(&self) -> String;

    /// Parse short algebraic notation in the current position
    fn parse_move(&self, notation: &str) -> RulesResult<Self::Move>;

    /// Short algebraic notation of a legal move in the current position
    fn notation(&self, mv: &Self::Move) -> String;
}
