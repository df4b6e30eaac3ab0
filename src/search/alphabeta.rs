//! Depth-bounded minimax with two-sided alpha-beta pruning
//!
//! White maximizes and Black minimizes the same White-relative score, so
//! there is no negamax sign flipping: each node knows which side it is
//! playing for through `maximizing`.

use super::make_unmake::{make_move, unmake_move};
use super::ordering::order_moves;
use super::{SearchOptions, SearchStats};
use crate::constants::SCORE_INFINITY;
use crate::error::{EngineError, EngineResult};
use crate::evaluation::Evaluator;
use crate::rules::RulesEngine;
use crate::types::Score;

/// Fixed-depth search over a rules engine
#[derive(Debug, Clone)]
pub struct Searcher {
    evaluator: Evaluator,
    options: SearchOptions,
    stats: SearchStats,
    /// Node count at which the current budget started
    budget_start: u64,
}

impl Searcher {
    pub fn new(evaluator: Evaluator, options: SearchOptions) -> Self {
        Self {
            evaluator,
            options,
            stats: SearchStats::default(),
            budget_start: 0,
        }
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Counters accumulated since the last [`Searcher::reset_stats`]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
        self.budget_start = 0;
    }

    /// Give the next search a fresh node budget without clearing the counters
    pub fn restart_budget(&mut self) {
        self.budget_start = self.stats.nodes;
    }

    fn budget_exhausted(&self) -> bool {
        self.options
            .node_limit
            .is_some_and(|limit| self.stats.nodes - self.budget_start >= limit)
    }

    /// Minimax value of `position` searched `depth` plies deep
    ///
    /// `alpha` is the best score the maximizer is already guaranteed,
    /// `beta` the best the minimizer is already guaranteed. The position
    /// is handed back exactly as it was received.
    ///
    /// # Errors
    ///
    /// Aborts if the rules engine rejects a move it listed as legal, fails
    /// to undo, or cannot classify a position.
    pub fn search<P: RulesEngine>(
        &mut self,
        position: &mut P,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> EngineResult<Score> {
        self.stats.nodes += 1;

        let status = position
            .terminal_status()
            .map_err(EngineError::UnclassifiedPosition)?;

        // Base case: horizon, terminal position or exhausted node budget
        if depth == 0 || status.is_terminal() || self.budget_exhausted() {
            return Ok(self.evaluator.score_classified(status, position));
        }

        let mut moves = position.legal_moves();
        if moves.is_empty() {
            return Ok(self.evaluator.score_classified(status, position));
        }
        order_moves(position, &mut moves);

        if maximizing {
            let mut max_eval = -SCORE_INFINITY;
            for mv in &moves {
                let eval = self.search_child(position, mv, depth - 1, alpha, beta, false)?;
                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if self.options.alpha_beta && beta <= alpha {
                    // Beta cutoff
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            Ok(max_eval)
        } else {
            let mut min_eval = SCORE_INFINITY;
            for mv in &moves {
                let eval = self.search_child(position, mv, depth - 1, alpha, beta, true)?;
                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if self.options.alpha_beta && beta <= alpha {
                    // Alpha cutoff
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            Ok(min_eval)
        }
    }

    /// Apply `mv`, search the child, and undo before reporting the result
    pub(crate) fn search_child<P: RulesEngine>(
        &mut self,
        position: &mut P,
        mv: &P::Move,
        depth: u8,
        alpha: Score,
        beta: Score,
        maximizing: bool,
    ) -> EngineResult<Score> {
        make_move(position, mv)?;
        let result = self.search(position, depth, alpha, beta, maximizing);
        unmake_move(position)?;
        result
    }
}
