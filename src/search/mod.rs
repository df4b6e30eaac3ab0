//! Fixed-depth alpha-beta search
//!
//! This module implements the engine's lookahead using:
//! - Two-sided minimax (White maximizes, Black minimizes)
//! - Alpha-beta pruning, which can be switched off for exhaustive minimax
//! - Capture-first move ordering for earlier cutoffs
//! - An optional node budget as a hard bound on work
//!
//! There is no transposition table, no iterative deepening and no
//! quiescence search: depth is the bound on running time.
//!
//! ## Module Organization
//!
//! - `alphabeta` - Core search ([`Searcher`])
//! - `ordering` - Move ordering heuristics
//! - `make_unmake` - Move making/unmaking wrappers

mod alphabeta;
mod make_unmake;
mod ordering;

pub use alphabeta::Searcher;
pub use ordering::order_moves;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Knobs that change how the tree is walked, not how it is scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Stop iterating siblings once `beta <= alpha`
    pub alpha_beta: bool,

    /// Score interior nodes as leaves once this many nodes were visited
    pub node_limit: Option<u64>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            alpha_beta: true,
            node_limit: None,
        }
    }
}

impl SearchOptions {
    /// Exhaustive minimax over the same tree, without pruning
    pub fn exhaustive() -> Self {
        Self {
            alpha_beta: false,
            node_limit: None,
        }
    }
}

/// Search telemetry for one decision
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered, root children included
    pub nodes: u64,
    /// Sibling loops cut short by alpha-beta
    pub cutoffs: u64,
    /// Depth in plies the decision was searched to (0 for book moves)
    pub depth: u8,
    /// Wall-clock time of the decision
    pub elapsed: Duration,
}
