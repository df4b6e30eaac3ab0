//! Position evaluation with piece-square tables
//!
//! Evaluates chess positions using:
//! - Terminal sentinels (checkmate, stalemate and draws by rule)
//! - Material count (piece values)
//! - Positional bonuses (piece-square tables), scaled by a weight
//!
//! ## Module Organization
//!
//! - `pst` - Piece-square tables for positional evaluation
//! - `material` - Material balance evaluation
//! - `position` - Full position evaluation ([`Evaluator`])

mod material;
mod position;
mod pst;

pub use material::evaluate_material;
pub use position::Evaluator;
