//! Persistent Settings Management
//!
//! Handles saving/loading the player's preferences and solved-round history.
//!
//! # Storage Locations
//! - Linux: `~/.config/eqquiz/settings.json`
//! - Windows: `%APPDATA%\eqquiz\settings.json`
//! - macOS: `~/Library/Application Support/eqquiz/settings.json`

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use eqquiz_puzzle::{Distinctness, GeneratorConfig};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::config::QuizConfig;
use crate::error::{GameError, GameResult};

/// Oldest records are dropped past this many
pub const MAX_HISTORY: usize = 200;

/// One solved round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub solved_at: DateTime<Utc>,
    pub guesses: u32,
    #[serde(default)]
    pub distinctness: Distinctness,
}

/// Root settings structure
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuizSettings {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub reveal_target: bool,
    /// Solved rounds, oldest first
    #[serde(default)]
    pub history: Vec<RoundRecord>,
}

impl QuizSettings {
    /// Load settings from disk, or return default if missing/corrupt
    pub fn load() -> Self {
        if let Some(path) = Self::get_config_path() {
            if path.exists() {
                match Self::load_from(&path) {
                    Ok(settings) => {
                        info!("Settings loaded from {:?}", path);
                        return settings;
                    }
                    Err(e) => {
                        error!("Failed to read settings file: {}", e);
                    }
                }
            }
        }

        info!("Using default settings");
        Self::default()
    }

    /// Save settings to disk
    pub fn save(&self) -> GameResult<()> {
        let path = Self::get_config_path().ok_or(GameError::NoConfigDir)?;
        self.save_to(&path)?;
        info!("Settings saved to {:?}", path);
        Ok(())
    }

    pub fn load_from(path: &Path) -> GameResult<Self> {
        let file = fs::File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    pub fn save_to(&self, path: &Path) -> GameResult<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Session configuration from the stored preferences
    pub fn quiz_config(&self) -> QuizConfig {
        QuizConfig {
            generator: self.generator,
            seed: None,
            reveal_target: self.reveal_target,
        }
    }

    /// Append a solved round, trimming the oldest past [`MAX_HISTORY`]
    pub fn record_round(&mut self, guesses: u32, distinctness: Distinctness) {
        self.history.push(RoundRecord {
            solved_at: Utc::now(),
            guesses,
            distinctness,
        });
        if self.history.len() > MAX_HISTORY {
            let excess = self.history.len() - MAX_HISTORY;
            self.history.drain(..excess);
        }
    }

    /// Share of solved rounds that took a single guess
    pub fn first_try_rate(&self) -> Option<f32> {
        if self.history.is_empty() {
            return None;
        }
        let first_try = self.history.iter().filter(|r| r.guesses == 1).count();
        Some(first_try as f32 / self.history.len() as f32)
    }

    /// Mean guesses per solved round
    pub fn average_guesses(&self) -> Option<f32> {
        if self.history.is_empty() {
            return None;
        }
        let total: u32 = self.history.iter().map(|r| r.guesses).sum();
        Some(total as f32 / self.history.len() as f32)
    }

    /// Get the platform-specific configuration file path
    fn get_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "eqquiz", "eqquiz")
            .map(|proj| proj.config_dir().join("settings.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = QuizSettings::default();
        assert_eq!(settings.generator, GeneratorConfig::default());
        assert!(!settings.reveal_target);
        assert!(settings.history.is_empty());
        assert_eq!(settings.average_guesses(), None);
        assert_eq!(settings.first_try_rate(), None);
    }

    #[test]
    fn test_settings_serialization_roundtrip() {
        let mut settings = QuizSettings {
            generator: GeneratorConfig::strict(),
            reveal_target: true,
            history: Vec::new(),
        };
        settings.record_round(3, Distinctness::Strict);

        let json = serde_json::to_string_pretty(&settings).unwrap();
        let deserialized: QuizSettings = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, settings);
        assert_eq!(deserialized.history[0].guesses, 3);
    }

    #[test]
    fn test_settings_backward_compat_missing_fields() {
        // Older files carried only the history
        let old_json = r#"{
            "history": [
                { "solved_at": "2026-01-02T03:04:05Z", "guesses": 2 }
            ]
        }"#;

        let settings: QuizSettings = serde_json::from_str(old_json).unwrap();
        assert_eq!(settings.generator, GeneratorConfig::default());
        assert_eq!(settings.history[0].distinctness, Distinctness::Asymmetric);
    }

    #[test]
    fn test_history_is_capped() {
        let mut settings = QuizSettings::default();
        for i in 0..(MAX_HISTORY as u32 + 10) {
            settings.record_round(i, Distinctness::Asymmetric);
        }
        assert_eq!(settings.history.len(), MAX_HISTORY);
        assert_eq!(settings.history[0].guesses, 10);
    }

    #[test]
    fn test_history_statistics() {
        let mut settings = QuizSettings::default();
        settings.record_round(1, Distinctness::Asymmetric);
        settings.record_round(1, Distinctness::Asymmetric);
        settings.record_round(4, Distinctness::Asymmetric);
        settings.record_round(2, Distinctness::Asymmetric);

        assert_eq!(settings.average_guesses(), Some(2.0));
        assert_eq!(settings.first_try_rate(), Some(0.5));
    }

    #[test]
    fn test_quiz_config_from_settings() {
        let settings = QuizSettings {
            generator: GeneratorConfig::strict(),
            reveal_target: true,
            history: Vec::new(),
        };
        let config = settings.quiz_config();
        assert!(config.is_strict());
        assert!(config.reveal_target);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = std::env::temp_dir().join(format!("eqquiz-settings-{}", std::process::id()));
        let path = dir.join("settings.json");

        let mut settings = QuizSettings::default();
        settings.record_round(2, Distinctness::Asymmetric);
        settings.save_to(&path).unwrap();

        let loaded = QuizSettings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_file_fails() {
        let path = std::env::temp_dir().join("eqquiz-does-not-exist/settings.json");
        assert!(matches!(QuizSettings::load_from(&path), Err(GameError::Io(_))));
    }
}
