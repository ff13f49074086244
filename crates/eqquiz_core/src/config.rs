//! Session Configuration

use eqquiz_puzzle::{Distinctness, GeneratorConfig};
use serde::{Deserialize, Serialize};

/// Overall quiz configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Round generation settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Fixed RNG seed; `None` seeds from the OS
    #[serde(default)]
    pub seed: Option<u64>,

    /// Show which panel is correct (practice mode)
    #[serde(default)]
    pub reveal_target: bool,
}

impl QuizConfig {
    /// Original game rules: asymmetric decoy check, unbounded retries
    pub fn classic() -> Self {
        Self::default()
    }

    /// All four panels always differ
    pub fn strict() -> Self {
        Self {
            generator: GeneratorConfig::strict(),
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn is_strict(&self) -> bool {
        self.generator.distinctness == Distinctness::Strict
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        self.generator.validate()
    }
}
