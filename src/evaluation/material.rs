//! Material evaluation
//!
//! Counts piece values for both sides: White's total minus Black's.

use crate::constants::material_value;
use crate::types::{PlacedPiece, Score};

/// Evaluate material balance
pub fn evaluate_material(pieces: &[PlacedPiece]) -> Score {
    pieces
        .iter()
        .map(|placed| placed.piece.side.sign() * material_value(placed.piece.kind))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{PAWN_VALUE, QUEEN_VALUE};
    use crate::types::{Piece, PieceKind, Side, Square};

    fn placed(kind: PieceKind, side: Side, file: u8, rank: u8) -> PlacedPiece {
        PlacedPiece {
            square: Square::new(file, rank).unwrap(),
            piece: Piece::new(kind, side),
        }
    }

    #[test]
    fn test_empty_board_material() {
        assert_eq!(evaluate_material(&[]), 0, "Empty board should have 0 material");
    }

    #[test]
    fn test_white_up_queen() {
        let pieces = [
            placed(PieceKind::King, Side::White, 4, 0),
            placed(PieceKind::Queen, Side::White, 3, 0),
            placed(PieceKind::King, Side::Black, 4, 7),
        ];
        assert_eq!(evaluate_material(&pieces), QUEEN_VALUE);
    }

    #[test]
    fn test_black_up_pawn() {
        let pieces = [
            placed(PieceKind::King, Side::White, 4, 0),
            placed(PieceKind::King, Side::Black, 4, 7),
            placed(PieceKind::Pawn, Side::Black, 0, 6),
        ];
        assert_eq!(
            evaluate_material(&pieces),
            -PAWN_VALUE,
            "Score should be exactly negative pawn value"
        );
    }
}
