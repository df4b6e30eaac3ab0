//! # Engine Core Types
//!
//! The decision engine never looks inside a position. Everything it knows
//! about the board arrives through [`crate::rules::RulesEngine`] as the
//! small value types defined here:
//!
//! - [`Side`] - who moves, and which side a piece belongs to
//! - [`PieceKind`] / [`Piece`] - used only for evaluation lookups
//! - [`Square`] / [`PlacedPiece`] - where a piece stands
//! - [`TerminalStatus`] - the rules engine's verdict on a position
//!
//! ## Score Convention
//!
//! [`Score`] is always relative to White: positive favours White (the
//! maximizing side), negative favours Black. It is never relative to the
//! side to move, so evaluating the same physical position always yields the
//! same sign.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Signed evaluation in centipawns, relative to White
pub type Score = i32;

/// The two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// The opposing side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// White is the maximizing side by convention
    #[inline]
    pub fn is_maximizing(self) -> bool {
        self == Side::White
    }

    /// `+1` for White, `-1` for Black
    #[inline]
    pub fn sign(self) -> Score {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// Piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Index into per-kind tables (pawn = 0 .. king = 5)
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A (kind, side) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }
}

/// Board square as (file, rank), both `0..8`
///
/// File 0 is the a-file. Rank 0 is White's back rank (rank 1), rank 7 is
/// Black's back rank (rank 8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub file: u8,
    pub rank: u8,
}

impl Square {
    /// Build a square, returning `None` when either coordinate is off-board
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        (file < 8 && rank < 8).then_some(Self { file, rank })
    }

    /// Square from a linear index where a1 = 0, h1 = 7, a8 = 56, h8 = 63
    pub fn from_index(index: u8) -> Option<Self> {
        Self::new(index % 8, index / 8)
    }

    #[inline]
    pub fn index(self) -> u8 {
        self.rank * 8 + self.file
    }

    /// The same file on the opposite side of the board
    #[inline]
    pub fn mirrored(self) -> Self {
        Self {
            file: self.file,
            rank: 7 - self.rank,
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

/// A piece standing on a square, as reported by the rules engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacedPiece {
    pub square: Square,
    pub piece: Piece,
}

/// Reasons a position is drawn by rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawKind {
    InsufficientMaterial,
    FiftyMoveRule,
    ThreefoldRepetition,
}

/// Terminal classification of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalStatus {
    /// Game continues
    Ongoing,
    /// The side to move is mated; `winner` delivered the mate
    Checkmate { winner: Side },
    /// The side to move has no legal move and is not in check
    Stalemate,
    /// Drawn by rule
    Draw(DrawKind),
}

impl TerminalStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, TerminalStatus::Ongoing)
    }
}
