//! Move making and unmaking for search
//!
//! Thin wrappers over the rules engine that turn its rejections into
//! search-aborting engine errors.

use crate::error::{EngineError, EngineResult};
use crate::rules::RulesEngine;

/// Make a move on the position
pub(crate) fn make_move<P: RulesEngine>(position: &mut P, mv: &P::Move) -> EngineResult<()> {
    position
        .apply_move(mv)
        .map_err(|source| EngineError::IllegalMove {
            notation: format!("{mv:?}"),
            source,
        })
}

/// Unmake the last move on the position
pub(crate) fn unmake_move<P: RulesEngine>(position: &mut P) -> EngineResult<()> {
    position.undo_move().map_err(EngineError::UndoFailed)
}
