//! Engine configuration and difficulty presets
//!
//! [`EngineConfig`] collects every knob the selector reads. It serializes to
//! JSON so a front end can persist the player's choice between sessions;
//! missing fields fall back to their defaults.
//!
//! # Difficulty Levels
//!
//! | Difficulty | Depth | Positional term | Ties   |
//! |------------|-------|-----------------|--------|
//! | Easy       | 1 ply | off             | random |
//! | Medium     | 2 ply | full            | first  |
//! | Hard       | 3 ply | full            | first  |

use crate::constants::{DEFAULT_DEPTH, DEFAULT_PST_WEIGHT, MAX_DEPTH, MAX_PST_WEIGHT};
use crate::error::ConfigError;
use crate::evaluation::Evaluator;
use crate::search::SearchOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// How the selector picks among root moves with the same best value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// First move in search order with the best value
    #[default]
    FirstSeen,
    /// Uniform choice among every move with the best value
    Random,
}

/// Everything the move selector needs to know about how to play
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search depth in plies, `1..=MAX_DEPTH`
    pub depth: u8,

    /// Positional weight in percent, `0..=MAX_PST_WEIGHT`; 0 plays material only
    pub pst_weight: i32,

    /// Consult the opening book before searching
    pub use_book: bool,

    pub tie_break: TieBreak,

    /// Optional hard cap on nodes visited per decision
    pub node_limit: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Difficulty::default().config()
    }
}

impl EngineConfig {
    /// Check that every field holds a playable value
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 || self.depth > MAX_DEPTH {
            return Err(ConfigError::Invalid {
                message: format!("depth must be in 1..={}, got {}", MAX_DEPTH, self.depth),
            });
        }
        if !(0..=MAX_PST_WEIGHT).contains(&self.pst_weight) {
            return Err(ConfigError::Invalid {
                message: format!(
                    "pst_weight must be in 0..={}, got {}",
                    MAX_PST_WEIGHT, self.pst_weight
                ),
            });
        }
        if self.node_limit == Some(0) {
            return Err(ConfigError::Invalid {
                message: "node_limit must be at least 1 when set".to_string(),
            });
        }
        Ok(())
    }

    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate and write this config as pretty JSON, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        self.validate()?;
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!("[CONFIG] Saved engine config to {:?}", path);
        Ok(())
    }

    /// Like [`EngineConfig::load`] but never fails: any problem yields the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("[CONFIG] No engine config at {:?}. Using defaults.", path);
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => {
                info!("[CONFIG] Loaded engine config from {:?}", path);
                config
            }
            Err(e) => {
                warn!(
                    "[CONFIG] Failed to load engine config at {:?}: {}. Using defaults.",
                    path, e
                );
                Self::default()
            }
        }
    }

    pub fn evaluator(&self) -> Evaluator {
        Evaluator::new(self.pst_weight)
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            alpha_beta: true,
            node_limit: self.node_limit,
        }
    }
}

/// Playing strength presets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// One ply, material only, random among equal moves
    ///
    /// Takes free material and otherwise plays almost anything.
    Easy,

    /// Two plies with positional scoring
    Medium,

    /// Three plies with positional scoring
    #[default]
    Hard,
}

impl Difficulty {
    pub fn config(self) -> EngineConfig {
        match self {
            Difficulty::Easy => EngineConfig {
                depth: 1,
                pst_weight: 0,
                use_book: true,
                tie_break: TieBreak::Random,
                node_limit: None,
            },
            Difficulty::Medium => EngineConfig {
                depth: 2,
                pst_weight: DEFAULT_PST_WEIGHT,
                use_book: true,
                tie_break: TieBreak::FirstSeen,
                node_limit: None,
            },
            Difficulty::Hard => EngineConfig {
                depth: DEFAULT_DEPTH,
                pst_weight: DEFAULT_PST_WEIGHT,
                use_book: true,
                tie_break: TieBreak::FirstSeen,
                node_limit: None,
            },
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy (1 ply, material only)",
            Difficulty::Medium => "Medium (2 ply)",
            Difficulty::Hard => "Hard (3 ply)",
        }
    }
}
