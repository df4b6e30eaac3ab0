//! `shakmaty`-backed rules engine
//!
//! Wraps a [`shakmaty::Chess`] position with an undo stack. A `shakmaty`
//! position is cheap to clone, so undo simply restores the
//! previous snapshot, which also restores castling rights, the en-passant
//! square and both move counters.
//!
//! Threefold repetition is tracked here because `shakmaty` positions carry
//! no game history: every position reached through [`RulesEngine::apply_move`]
//! is recorded by its placement, turn, castling and en-passant fields.

use crate::error::{RulesError, RulesResult};
use crate::rules::RulesEngine;
use crate::types::{DrawKind, Piece, PieceKind, PlacedPiece, Side, Square, TerminalStatus};
use ::shakmaty::fen::Fen;
use ::shakmaty::san::{San, SanPlus};
use ::shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Move, Position, Role};

/// Halfmove clock value at which the fifty-move rule applies
const FIFTY_MOVE_HALFMOVES: u32 = 100;

/// Chess position driven through [`RulesEngine`]
#[derive(Debug, Clone)]
pub struct ShakmatyPosition {
    current: Chess,
    history: Vec<Chess>,
    /// Repetition keys of every position on the current line, current last
    line: Vec<String>,
}

impl Default for ShakmatyPosition {
    fn default() -> Self {
        Self::from_chess(Chess::default())
    }
}

impl ShakmatyPosition {
    /// Standard starting position
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_chess(chess: Chess) -> Self {
        let key = repetition_key(&chess);
        Self {
            current: chess,
            history: Vec::new(),
            line: vec![key],
        }
    }

    /// Parse a full FEN string
    pub fn from_fen(fen: &str) -> RulesResult<Self> {
        let parsed = fen.trim().parse::<Fen>().map_err(|e| RulesError::InvalidFen {
            fen: fen.to_string(),
            reason: e.to_string(),
        })?;
        let chess: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| RulesError::InvalidFen {
                fen: fen.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self::from_chess(chess))
    }

    /// Underlying `shakmaty` position
    pub fn chess(&self) -> &Chess {
        &self.current
    }

    /// Number of moves currently on the undo stack
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Parse and apply a move given in SAN
    pub fn play_san(&mut self, notation: &str) -> RulesResult<()> {
        let mv = self.parse_move(notation)?;
        self.apply_move(&mv)
    }

    fn repetitions(&self) -> usize {
        match self.line.last() {
            Some(current) => self.line.iter().filter(|key| *key == current).count(),
            None => 0,
        }
    }
}

/// Placement, turn, castling and en-passant fields of the FEN
fn repetition_key(chess: &Chess) -> String {
    let fen = Fen::from_position(chess.clone(), EnPassantMode::Legal).to_string();
    fen.split_whitespace().take(4).collect::<Vec<_>>().join(" ")
}

fn side_of(color: Color) -> Side {
    match color {
        Color::White => Side::White,
        Color::Black => Side::Black,
    }
}

fn kind_of(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

impl RulesEngine for ShakmatyPosition {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        self.current.legal_moves().into_iter().collect()
    }

    fn is_capture(&self, mv: &Move) -> bool {
        mv.is_capture()
    }

    fn apply_move(&mut self, mv: &Move) -> RulesResult<()> {
        if !self.current.is_legal(mv) {
            return Err(RulesError::IllegalMove {
                notation: format!("{mv:?}"),
            });
        }
        let previous = self.current.clone();
        self.current.play_unchecked(mv);
        self.history.push(previous);
        self.line.push(repetition_key(&self.current));
        Ok(())
    }

    fn undo_move(&mut self) -> RulesResult<()> {
        let previous = self.history.pop().ok_or(RulesError::NothingToUndo)?;
        self.current = previous;
        self.line.pop();
        Ok(())
    }

    fn terminal_status(&self) -> RulesResult<TerminalStatus> {
        let pos = &self.current;
        let status = if pos.is_checkmate() {
            TerminalStatus::Checkmate {
                winner: side_of(pos.turn()).opponent(),
            }
        } else if pos.is_stalemate() {
            TerminalStatus::Stalemate
        } else if pos.is_insufficient_material() {
            TerminalStatus::Draw(DrawKind::InsufficientMaterial)
        } else if pos.halfmoves() >= FIFTY_MOVE_HALFMOVES {
            TerminalStatus::Draw(DrawKind::FiftyMoveRule)
        } else if self.repetitions() >= 3 {
            TerminalStatus::Draw(DrawKind::ThreefoldRepetition)
        } else {
            TerminalStatus::Ongoing
        };
        Ok(status)
    }

    fn side_to_move(&self) -> Side {
        side_of(self.current.turn())
    }

    fn board_pieces(&self) -> Vec<PlacedPiece> {
        let board = self.current.board();
        let mut pieces = Vec::with_capacity(32);
        for sq in board.occupied() {
            let Some(piece) = board.piece_at(sq) else {
                continue;
            };
            let Some(square) = Square::from_index(sq as u8) else {
                continue;
            };
            pieces.push(PlacedPiece {
                square,
                piece: Piece::new(kind_of(piece.role), side_of(piece.color)),
            });
        }
        pieces
    }

    fn fen(&self) -> String {
        Fen::from_position(self.current.clone(), EnPassantMode::Legal).to_string()
    }

    fn parse_move(&self, notation: &str) -> RulesResult<Move> {
        let san = notation
            .trim()
            .parse::<SanPlus>()
            .map_err(|e| RulesError::InvalidNotation {
                notation: notation.to_string(),
                reason: e.to_string(),
            })?;
        san.san
            .to_move(&self.current)
            .map_err(|e| RulesError::InvalidNotation {
                notation: notation.to_string(),
                reason: e.to_string(),
            })
    }

    fn notation(&self, mv: &Move) -> String {
        San::from_move(&self.current, mv).to_string()
    }
}
