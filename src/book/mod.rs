//! Opening book
//!
//! A static map from normalized position keys to weighted candidate moves,
//! consulted before search. Candidates are short algebraic notation; a move
//! listed several times is proportionally more likely to be chosen.
//!
//! # Normalization
//!
//! Keys keep only the first three FEN fields: piece placement, side to move
//! and castling rights. The en-passant square and both move counters are
//! dropped so transpositions and clock differences still hit the book. The
//! same [`normalize_fen`] is applied when inserting and when looking up.
//!
//! # Stale Entries
//!
//! A book is curated offline and may not match the rules engine perfectly.
//! A candidate the rules engine cannot parse, or that is not in its legal
//! move list, is treated as a miss: [`OpeningBook::lookup`] logs a warning
//! and returns `None` so the caller falls back to search.

mod entries;

use crate::rules::RulesEngine;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Reduce a FEN string to its book key
pub fn normalize_fen(fen: &str) -> String {
    fen.split_whitespace().take(3).collect::<Vec<_>>().join(" ")
}

/// Normalized position key to candidate moves
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpeningBook {
    entries: HashMap<String, Vec<String>>,
}

impl OpeningBook {
    /// A book with no entries; every lookup misses
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in book of standard opening moves
    pub fn standard() -> Self {
        let mut book = Self::empty();
        for (key, candidates) in entries::STANDARD_ENTRIES {
            book.insert(key, candidates.iter().copied());
        }
        book
    }

    /// Parse a JSON object of `{ "fen": ["move", ...] }`, normalizing every key
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json)?;
        let mut book = Self::empty();
        for (key, candidates) in raw {
            book.insert(&key, candidates);
        }
        Ok(book)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Set the candidates for a position, replacing any previous list
    ///
    /// `fen` may be a full FEN or an already normalized key.
    pub fn insert<I, S>(&mut self, fen: &str, candidates: I) -> Option<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let moves = candidates.into_iter().map(Into::into).collect();
        self.entries.insert(normalize_fen(fen), moves)
    }

    /// Candidate list for a position, if the book knows it
    pub fn candidates(&self, fen: &str) -> Option<&[String]> {
        self.entries.get(&normalize_fen(fen)).map(Vec::as_slice)
    }

    /// Number of positions in the book
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick a book move for `position`
    ///
    /// Draws one candidate uniformly from the entry's list. Returns `None`
    /// when the position is not in the book, its list is empty, or the drawn
    /// candidate is rejected by the rules engine.
    pub fn lookup<P: RulesEngine, R: Rng>(&self, position: &P, rng: &mut R) -> Option<P::Move> {
        let key = normalize_fen(&position.fen());
        let candidates = self.entries.get(&key).filter(|list| !list.is_empty())?;
        let notation = &candidates[rng.random_range(0..candidates.len())];

        match position.parse_move(notation) {
            Ok(mv) if position.legal_moves().contains(&mv) => {
                debug!("[BOOK] Hit for '{}': {}", key, notation);
                Some(mv)
            }
            Ok(_) => {
                warn!(
                    "[BOOK] Move '{}' for '{}' is not legal here; falling back to search",
                    notation, key
                );
                None
            }
            Err(e) => {
                warn!(
                    "[BOOK] Rules engine rejected '{}' for '{}': {}; falling back to search",
                    notation, key, e
                );
                None
            }
        }
    }
}
