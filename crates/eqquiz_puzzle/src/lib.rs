//! EQ Quiz Puzzle - Round Generation
//!
//! This crate decides which gain configurations a player sees:
//! - 10-band gain configurations and the checked equality that judges guesses
//! - Random band edits by rejection sampling
//! - Decoy triples with a configurable distinctness check
//! - Round assembly with a uniform shuffle of the four options
//! - Slider panel layout for drawing a configuration and reading it back
//!
//! # Randomness
//!
//! No generator touches a global RNG. Randomness is passed in through
//! [`RandomSource`], implemented for every `rand::Rng` and by
//! [`ScriptedSource`] for fixed draw sequences.

mod config;
mod decoys;
mod equalization;
mod error;
mod panel;
mod perturb;
mod random;
mod round;

pub use config::{Distinctness, GeneratorConfig};
pub use decoys::generate_decoys;
pub use equalization::{equal, Equalization, BAND_COUNT, EQ_BANDS, GAIN_LEVELS};
pub use error::{Operand, PuzzleError, PuzzleResult, Stage};
pub use panel::{SliderGeometry, SliderKnob, SliderPanel};
pub use perturb::{generate_alternative, EXTRA_EDIT_ODDS};
pub use random::{RandomSource, ScriptedSource};
pub use round::{QuizRound, RoundFactory, OPTION_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_exports() {
        // Verify all public types are accessible
        let _config = GeneratorConfig::default();
        let _factory = RoundFactory::new(ScriptedSource::default());
        let _geometry = SliderGeometry::default();
    }
}
