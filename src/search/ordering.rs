//! Move ordering for alpha-beta pruning
//!
//! Captures are tried first so that cutoffs come early. The sort is stable:
//! within the capture group and within the quiet group the rules engine's
//! own order is kept, so a fixed input list always orders the same way.

use crate::rules::RulesEngine;

/// Order moves for better alpha-beta pruning
pub fn order_moves<P: RulesEngine>(position: &P, moves: &mut [P::Move]) {
    moves.sort_by_key(|mv| !position.is_capture(mv));
}
