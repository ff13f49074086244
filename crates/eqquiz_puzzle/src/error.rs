//! Puzzle Error Types

use std::fmt;

use thiserror::Error;

/// Which argument of a two-operand check was malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    First,
    Second,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::First => f.write_str("1"),
            Operand::Second => f.write_str("2"),
        }
    }
}

/// Generation step that gave up after hitting its attempt limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Perturbing a single configuration
    Alternative,
    /// Building the decoy triple
    Decoys,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Alternative => f.write_str("alternative"),
            Stage::Decoys => f.write_str("decoys"),
        }
    }
}

/// Errors that can occur while building or judging puzzles
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Equalization array {operand} has incorrect length: {len}")]
    LengthMismatch { operand: Operand, len: usize },

    #[error("Invalid band index: {0} (must be 0-9)")]
    InvalidBandIndex(usize),

    #[error("Gave up generating {stage} after {attempts} attempts")]
    GenerationExhausted { stage: Stage, attempts: u32 },
}

/// Result type alias for puzzle operations
pub type PuzzleResult<T> = Result<T, PuzzleError>;
