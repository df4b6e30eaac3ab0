//! Shared fixtures for integration tests
//!
//! FEN positions with known answers and [`CountingRules`], a rules engine
//! wrapper that records how often the engine mutates the position.

#![allow(dead_code)]

use chess_opponent::{PlacedPiece, RulesEngine, RulesResult, ShakmatyPosition, Side, TerminalStatus};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// White plays Ra8#
pub const WHITE_MATE_IN_ONE: &str = "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1";

/// Black plays Ra1#
pub const BLACK_MATE_IN_ONE: &str = "r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1";

/// Kxb2 is White's only legal move
pub const SINGLE_LEGAL_MOVE: &str = "k7/8/8/8/8/8/1r6/K7 w - - 0 1";

/// Black to move, not in check, no legal moves
pub const STALEMATE: &str = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1";

/// Fool's mate; White is checkmated
pub const FOOLS_MATE: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";

/// exd5 wins an undefended knight
pub const HANGING_KNIGHT: &str = "rnbqkb1r/pppppppp/8/3n4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 3";

/// Positions with no book entry used for search comparisons
pub const MIDDLEGAMES: &[&str] = &[
    "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
    "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/3P1N2/PPP2PPP/RNBQK2R b KQkq - 0 5",
    "r2q1rk1/ppp2ppp/2np1n2/2b1p1B1/2B1P1b1/2NP1N2/PPP2PPP/R2Q1RK1 w - - 6 8",
    "8/5pk1/6p1/8/3R4/6P1/5PK1/1r6 w - - 0 40",
];

pub fn position(fen: &str) -> ShakmatyPosition {
    ShakmatyPosition::from_fen(fen).unwrap()
}

/// Swap colours and flip the board vertically
///
/// The result is the same position seen from the other side: every piece
/// changes colour and moves to the mirrored rank, the side to move flips,
/// and castling rights and the en-passant square follow.
pub fn mirror_fen(fen: &str) -> String {
    let fields: Vec<&str> = fen.split_whitespace().collect();

    let placement = fields[0]
        .split('/')
        .rev()
        .map(swap_case)
        .collect::<Vec<_>>()
        .join("/");
    let turn = if fields[1] == "w" { "b" } else { "w" };
    let castling = if fields[2] == "-" {
        "-".to_string()
    } else {
        let mut rights: Vec<char> = swap_case(fields[2]).chars().collect();
        rights.sort_by_key(|c| (c.is_lowercase(), "KQkq".find(c.to_ascii_uppercase())));
        rights.into_iter().collect()
    };
    let en_passant = match fields[3] {
        "-" => "-".to_string(),
        square => {
            let mut chars = square.chars();
            let file = chars.next().unwrap_or('a');
            let rank = chars.next().and_then(|c| c.to_digit(10)).unwrap_or(1);
            format!("{}{}", file, 9 - rank)
        }
    };

    format!("{} {} {} {} {} {}", placement, turn, castling, en_passant, fields[4], fields[5])
}

fn swap_case(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}

/// Rules engine wrapper that counts mutations
#[derive(Debug, Clone)]
pub struct CountingRules<P> {
    pub inner: P,
    pub applied: usize,
    pub undone: usize,
    /// Moves applied below each root move, in the order root moves were tried
    pub below_root: Vec<usize>,
    depth: usize,
}

impl<P> CountingRules<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            applied: 0,
            undone: 0,
            below_root: Vec::new(),
            depth: 0,
        }
    }
}

impl<P: RulesEngine> RulesEngine for CountingRules<P> {
    type Move = P::Move;

    fn legal_moves(&self) -> Vec<Self::Move> {
        self.inner.legal_moves()
    }

    fn is_capture(&self, mv: &Self::Move) -> bool {
        self.inner.is_capture(mv)
    }

    fn apply_move(&mut self, mv: &Self::Move) -> RulesResult<()> {
        self.applied += 1;
        self.inner.apply_move(mv)?;
        match self.below_root.last_mut() {
            Some(count) if self.depth > 0 => *count += 1,
            _ => self.below_root.push(0),
        }
        self.depth += 1;
        Ok(())
    }

    fn undo_move(&mut self) -> RulesResult<()> {
        self.undone += 1;
        self.inner.undo_move()?;
        self.depth = self.depth.saturating_sub(1);
        Ok(())
    }

    fn terminal_status(&self) -> RulesResult<TerminalStatus> {
        self.inner.terminal_status()
    }

    fn side_to_move(&self) -> Side {
        self.inner.side_to_move()
    }

    fn board_pieces(&self) -> Vec<PlacedPiece> {
        self.inner.board_pieces()
    }

    fn fen(&self) -> String {
        self.inner.fen()
    }

    fn parse_move(&self, notation: &str) -> RulesResult<Self::Move> {
        self.inner.parse_move(notation)
    }

    fn notation(&self, mv: &Self::Move) -> String {
        self.inner.notation(mv)
    }
}
