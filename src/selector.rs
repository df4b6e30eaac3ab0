//! Move selection
//!
//! [`MoveSelector`] is the engine's entry point. Given a position it asks the
//! opening book first and, on a miss, searches every root move to the
//! configured depth and keeps the best one for the side to move.
//!
//! # Root Search
//!
//! Each root move is searched with the full `(-INF, +INF)` window rather than
//! narrowing alpha/beta across siblings. Every root move therefore gets an
//! exact value, which ties need: with [`TieBreak::Random`] all moves sharing
//! the best value are candidates, and with [`TieBreak::FirstSeen`] the
//! choice is the same whether or not pruning is enabled below the root.
//!
//! A node budget is split evenly across the root moves. Every root move is
//! then searched under the same limit, so a move is never compared against
//! siblings that were cut off at a shallower horizon just because they came
//! later in move order.

use crate::book::OpeningBook;
use crate::config::{EngineConfig, TieBreak};
use crate::constants::SCORE_INFINITY;
use crate::error::EngineResult;
use crate::rules::RulesEngine;
use crate::search::{order_moves, SearchOptions, SearchStats, Searcher};
use crate::types::Score;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use web_time::Instant;

/// Where a chosen move came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveSource {
    Book,
    Search,
}

/// A decision together with how it was reached
#[derive(Debug, Clone, PartialEq)]
pub struct MoveChoice<M> {
    pub mv: M,
    /// Short algebraic notation in the position the move was chosen for
    pub notation: String,
    /// White-relative root value; `None` for book moves
    pub score: Option<Score>,
    pub source: MoveSource,
    pub stats: SearchStats,
}

/// Book lookup, search fallback and final move choice
#[derive(Debug, Clone)]
pub struct MoveSelector<R = StdRng> {
    config: EngineConfig,
    book: OpeningBook,
    rng: R,
}

impl MoveSelector<StdRng> {
    /// Selector with a reproducible random source
    pub fn seeded(config: EngineConfig, book: OpeningBook, seed: u64) -> Self {
        Self::new(config, book, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MoveSelector<R> {
    pub fn new(config: EngineConfig, book: OpeningBook, rng: R) -> Self {
        Self { config, book, rng }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EngineConfig) {
        self.config = config;
    }

    pub fn book(&self) -> &OpeningBook {
        &self.book
    }

    /// Best move for the side to move, or `None` if it has no legal move
    ///
    /// The position is left exactly as it was received.
    ///
    /// # Errors
    ///
    /// Fails if the rules engine rejects one of its own legal moves, cannot
    /// undo, or cannot classify a position during search.
    pub fn best_move<P: RulesEngine>(&mut self, position: &mut P) -> EngineResult<Option<P::Move>> {
        Ok(self.choose(position)?.map(|choice| choice.mv))
    }

    /// Like [`MoveSelector::best_move`], with the value and search telemetry
    pub fn choose<P: RulesEngine>(
        &mut self,
        position: &mut P,
    ) -> EngineResult<Option<MoveChoice<P::Move>>> {
        let start = Instant::now();

        if self.config.use_book {
            if let Some(mv) = self.book.lookup(position, &mut self.rng) {
                let stats = SearchStats {
                    elapsed: start.elapsed(),
                    ..SearchStats::default()
                };
                let notation = position.notation(&mv);
                info!(
                    "[AI] Best move: {} (book), value: -, nodes: 0, time: {}ms",
                    notation,
                    stats.elapsed.as_millis()
                );
                return Ok(Some(MoveChoice {
                    mv,
                    notation,
                    score: None,
                    source: MoveSource::Book,
                    stats,
                }));
            }
        }

        let mut moves = position.legal_moves();
        if moves.is_empty() {
            info!("[AI] No legal moves in {}", position.fen());
            return Ok(None);
        }
        order_moves(position, &mut moves);

        let depth = self.config.depth.max(1);
        let maximizing = position.side_to_move().is_maximizing();
        // Each root move gets an equal share of the node budget
        let options = SearchOptions {
            node_limit: self
                .config
                .node_limit
                .map(|limit| (limit / moves.len() as u64).max(1)),
            ..self.config.search_options()
        };
        let mut searcher = Searcher::new(self.config.evaluator(), options);

        let mut best_value: Option<Score> = None;
        let mut best_indices: Vec<usize> = Vec::new();

        for (index, mv) in moves.iter().enumerate() {
            searcher.restart_budget();
            let value = searcher.search_child(
                position,
                mv,
                depth - 1,
                -SCORE_INFINITY,
                SCORE_INFINITY,
                !maximizing,
            )?;
            debug!("[AI] Root {}: {}", position.notation(mv), value);

            let improves = match best_value {
                None => true,
                Some(best) if maximizing => value > best,
                Some(best) => value < best,
            };
            if improves {
                best_value = Some(value);
                best_indices.clear();
                best_indices.push(index);
            } else if best_value == Some(value) {
                best_indices.push(index);
            }
        }

        let (Some(score), Some(&first)) = (best_value, best_indices.first()) else {
            return Ok(None);
        };
        let chosen = match self.config.tie_break {
            TieBreak::FirstSeen => first,
            TieBreak::Random => best_indices[self.rng.random_range(0..best_indices.len())],
        };

        let mv = moves.swap_remove(chosen);
        let notation = position.notation(&mv);
        let stats = SearchStats {
            depth,
            elapsed: start.elapsed(),
            ..*searcher.stats()
        };

        info!(
            "[AI] Best move: {}, value: {}, nodes: {}, time: {}ms",
            notation,
            score,
            stats.nodes,
            stats.elapsed.as_millis()
        );

        Ok(Some(MoveChoice {
            mv,
            notation,
            score: Some(score),
            source: MoveSource::Search,
            stats,
        }))
    }
}
