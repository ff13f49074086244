//! Generator Configuration

use serde::{Deserialize, Serialize};

/// How thoroughly the decoy triple is checked for duplicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distinctness {
    /// Only the first decoy is compared, against the other two and the target.
    /// The second and third decoy may repeat each other or the target.
    #[default]
    Asymmetric,

    /// All four options must be pairwise different
    Strict,
}

/// Settings shared by every generation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub distinctness: Distinctness,

    /// Cap on rejected candidates per loop. `None` retries until a candidate
    /// is accepted, which terminates with probability 1.
    #[serde(default)]
    pub max_attempts: Option<u32>,
}

impl GeneratorConfig {
    /// All four options distinct, bounded retries
    pub fn strict() -> Self {
        Self {
            distinctness: Distinctness::Strict,
            max_attempts: Some(10_000),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == Some(0) {
            return Err("max_attempts must be at least 1".to_string());
        }
        Ok(())
    }
}
