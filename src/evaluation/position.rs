//! Full position evaluation
//!
//! Terminal positions score as sentinels; everything else scores as
//! material plus weighted piece-square bonuses.

use super::pst::get_pst_value;
use crate::constants::{material_value, DEFAULT_PST_WEIGHT, MATE_SCORE, MAX_PST_WEIGHT};
use crate::error::{EngineError, EngineResult};
use crate::rules::RulesEngine;
use crate::types::{PlacedPiece, Score, TerminalStatus};

/// Static evaluator, scoring from White's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    /// Positional weight in percent; 0 gives a material-only evaluation
    pst_weight: i32,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(DEFAULT_PST_WEIGHT)
    }
}

impl Evaluator {
    /// Evaluator with the given positional weight, clamped to `0..=MAX_PST_WEIGHT`
    pub fn new(pst_weight: i32) -> Self {
        Self {
            pst_weight: pst_weight.clamp(0, MAX_PST_WEIGHT),
        }
    }

    /// Reduced-strength evaluator that ignores piece placement
    pub fn material_only() -> Self {
        Self::new(0)
    }

    pub fn pst_weight(&self) -> i32 {
        self.pst_weight
    }

    /// Evaluate a position
    ///
    /// Checkmate scores `+MATE_SCORE` when White delivered it and
    /// `-MATE_SCORE` when Black did. Every draw classification scores 0.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnclassifiedPosition`] if the rules engine cannot
    /// determine the terminal status.
    pub fn evaluate<P: RulesEngine>(&self, position: &P) -> EngineResult<Score> {
        let status = position
            .terminal_status()
            .map_err(EngineError::UnclassifiedPosition)?;

        Ok(self.score_classified(status, position))
    }

    /// Score a position whose terminal status is already known
    pub(crate) fn score_classified<P: RulesEngine>(
        &self,
        status: TerminalStatus,
        position: &P,
    ) -> Score {
        match status {
            TerminalStatus::Checkmate { winner } => winner.sign() * MATE_SCORE,
            TerminalStatus::Stalemate | TerminalStatus::Draw(_) => 0,
            TerminalStatus::Ongoing => self.evaluate_pieces(&position.board_pieces()),
        }
    }

    /// Material plus positional score of a set of pieces, ignoring terminal state
    pub fn evaluate_pieces(&self, pieces: &[PlacedPiece]) -> Score {
        let mut score = 0;

        for placed in pieces {
            // Material
            let mut value = material_value(placed.piece.kind);

            // Positional
            if self.pst_weight != 0 {
                value += get_pst_value(placed.piece, placed.square) * self.pst_weight / 100;
            }

            score += placed.piece.side.sign() * value;
        }

        score
    }
}
