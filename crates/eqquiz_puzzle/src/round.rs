//! Quiz Rounds
//!
//! A round is the configuration applied to the audio plus the four panels
//! the player chooses from. Rounds are built whole and never edited; a new
//! round replaces the old one.

use serde::Serialize;
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::decoys::generate_decoys;
use crate::equalization::{equal, Equalization};
use crate::error::PuzzleResult;
use crate::perturb::generate_alternative;
use crate::random::RandomSource;

/// Number of panels shown per round
pub const OPTION_COUNT: usize = 4;

/// One round of the quiz
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizRound {
    target: Equalization,
    options: [Equalization; OPTION_COUNT],
}

impl QuizRound {
    /// Configuration applied to the audio
    pub fn target(&self) -> &Equalization {
        &self.target
    }

    /// Panels in presentation order
    pub fn options(&self) -> &[Equalization; OPTION_COUNT] {
        &self.options
    }

    pub fn option(&self, index: usize) -> Option<&Equalization> {
        self.options.get(index)
    }

    /// Judge a guess given as raw levels (e.g. read back from a panel)
    pub fn is_correct<G: AsRef<[i32]> + ?Sized>(&self, guess: &G) -> PuzzleResult<bool> {
        equal(&self.target, guess)
    }

    /// Position of the first panel matching the target
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|option| *option == self.target)
    }
}

/// Builds rounds from a random source and generator settings
#[derive(Debug, Clone)]
pub struct RoundFactory<R> {
    rng: R,
    config: GeneratorConfig,
}

impl<R: RandomSource> RoundFactory<R> {
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, GeneratorConfig::default())
    }

    pub fn with_config(rng: R, config: GeneratorConfig) -> Self {
        Self { rng, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a fresh round
    ///
    /// The target is an edit of the baseline; the three decoys come from
    /// [`generate_decoys`]. Presentation order is a uniform random
    /// permutation of `[decoy, decoy, decoy, target]`.
    pub fn new_round(&mut self) -> PuzzleResult<QuizRound> {
        let target =
            generate_alternative(&Equalization::BASELINE, &mut self.rng, self.config.max_attempts)?;
        let [c0, c1, c2] = generate_decoys(&target, &mut self.rng, &self.config)?;

        let mut options = [c0, c1, c2, target];
        self.rng.shuffle(&mut options);

        debug!(%target, distinctness = ?self.config.distinctness, "round generated");
        Ok(QuizRound { target, options })
    }
}
