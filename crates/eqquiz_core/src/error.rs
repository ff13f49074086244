//! Game Error Types

use thiserror::Error;

/// Errors that can occur while running a quiz session
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Puzzle error: {0}")]
    PuzzleError(#[from] eqquiz_puzzle::PuzzleError),

    #[error("Invalid option: {index} (round has {count} options)")]
    InvalidOption { index: usize, count: usize },

    #[error("Round already solved - start a new round")]
    RoundResolved,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Could not determine settings directory")]
    NoConfigDir,

    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings format error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GameError::InvalidOption { index: 7, count: 4 };
        assert!(err.to_string().contains('7'));
        assert!(err.to_string().contains('4'));

        let err = GameError::ConfigError("bad seed".into());
        assert!(err.to_string().contains("bad seed"));
    }

    #[test]
    fn test_error_from_puzzle() {
        let puzzle_err = eqquiz_puzzle::PuzzleError::InvalidBandIndex(10);
        let game_err: GameError = puzzle_err.into();
        assert!(matches!(game_err, GameError::PuzzleError(_)));
    }
}
