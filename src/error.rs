//! Error types for the decision engine
//!
//! Two layers: [`RulesError`] is what a rules engine reports back through
//! [`crate::rules::RulesEngine`], and [`EngineError`] is what the engine
//! itself surfaces to its caller. Configuration errors live in
//! [`ConfigError`].

use thiserror::Error;

/// Errors reported by a rules engine implementation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// Position text could not be parsed or describes an impossible position
    #[error("Invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    /// Move text is not valid notation in the current position
    #[error("Invalid move notation '{notation}': {reason}")]
    InvalidNotation { notation: String, reason: String },

    /// Move is well-formed but not legal in the current position
    #[error("Illegal move '{notation}'")]
    IllegalMove { notation: String },

    /// Undo requested with no applied move on the history stack
    #[error("No move to undo")]
    NothingToUndo,

    /// Terminal status could not be determined
    #[error("Position cannot be classified: {reason}")]
    Unclassified { reason: String },
}

/// Errors that abort an engine call
#[derive(Error, Debug)]
pub enum EngineError {
    /// The engine attempted to apply a move the rules engine rejected
    #[error("Rules engine rejected move '{notation}' during search: {source}")]
    IllegalMove {
        notation: String,
        #[source]
        source: RulesError,
    },

    /// Undo failed; the position may no longer match the caller's state
    #[error("Failed to undo move: {0}")]
    UndoFailed(#[source] RulesError),

    /// Evaluation was requested on a position the rules engine cannot classify
    #[error("Cannot evaluate unclassified position: {0}")]
    UnclassifiedPosition(#[source] RulesError),

    /// Configuration could not be loaded, saved or validated
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors from loading, saving or validating [`crate::config::EngineConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file I/O error
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config serialization/deserialization error
    #[error("Config serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A field holds a value the engine cannot run with
    #[error("Invalid config: {message}")]
    Invalid { message: String },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Result type alias for rules engine operations
pub type RulesResult<T> = Result<T, RulesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_move_message_names_the_move() {
        let err = EngineError::IllegalMove {
            notation: "Ke9".to_string(),
            source: RulesError::IllegalMove {
                notation: "Ke9".to_string(),
            },
        };
        let message = err.to_string();
        assert!(message.contains("Ke9"), "message was: {message}");
    }

    #[test]
    fn test_config_error_converts_into_engine_error() {
        let err: EngineError = ConfigError::Invalid {
            message: "depth must be at least 1".to_string(),
        }
        .into();
        assert!(matches!(err, EngineError::Config(ConfigError::Invalid { .. })));
        assert_eq!(err.to_string(), "Invalid config: depth must be at least 1");
    }
}
