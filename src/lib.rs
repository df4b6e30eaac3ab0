//! Chess opponent decision engine
//!
//! Picks a move for the side to move in a chess position:
//! - Opening book lookup for well-known early positions
//! - Fixed-depth minimax with alpha-beta pruning otherwise
//! - Material plus piece-square table evaluation at the leaves
//!
//! The engine implements no chess rules itself. It drives an external rules
//! engine through [`rules::RulesEngine`]; [`rules::ShakmatyPosition`] (feature
//! `shakmaty`, on by default) adapts the `shakmaty` crate.
//!
//! # Example
//!
//! ```
//! use chess_opponent::{Difficulty, MoveSelector, OpeningBook, RulesEngine, ShakmatyPosition};
//!
//! let mut position = ShakmatyPosition::new();
//! let mut selector = MoveSelector::seeded(Difficulty::Hard.config(), OpeningBook::standard(), 7);
//! if let Some(mv) = selector.best_move(&mut position)? {
//!     assert!(position.legal_moves().contains(&mv));
//!     println!("{}", position.notation(&mv));
//! }
//! # Ok::<(), chess_opponent::EngineError>(())
//! ```
//!
//! ## Module Organization
//!
//! - `types` - Sides, pieces, squares and terminal classification
//! - `constants` - Piece values and score sentinels
//! - `error` - Error types
//! - `rules` - Rules engine boundary and adapters
//! - `evaluation` - Static evaluation
//! - `search` - Alpha-beta search
//! - `book` - Opening book
//! - `selector` - Move selection entry point
//! - `config` - Engine configuration and difficulty presets

pub mod book;
pub mod config;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod rules;
pub mod search;
pub mod selector;
pub mod types;

pub use book::{normalize_fen, OpeningBook};
pub use config::{Difficulty, EngineConfig, TieBreak};
pub use error::{ConfigError, EngineError, EngineResult, RulesError, RulesResult};
pub use evaluation::Evaluator;
pub use rules::RulesEngine;
#[cfg(feature = "shakmaty")]
pub use rules::ShakmatyPosition;
pub use search::{SearchOptions, SearchStats, Searcher};
pub use selector::{MoveChoice, MoveSelector, MoveSource};
pub use types::{DrawKind, Piece, PieceKind, PlacedPiece, Score, Side, Square, TerminalStatus};
