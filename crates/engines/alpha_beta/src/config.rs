//! Bot settings and the immutable search configuration derived from them.

use std::path::{Path, PathBuf};

use checkers_core::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Heuristic variant used at the leaves of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScoringMode {
    /// Material only, kings weigh 4 men.
    Number,
    /// Material plus a bonus for men closer to promotion, kings weigh 5 men.
    #[default]
    NumberAndPotential,
}

impl ScoringMode {
    pub fn king_weight(self) -> f64 {
        match self {
            ScoringMode::Number => 4.0,
            ScoringMode::NumberAndPotential => 5.0,
        }
    }

    pub fn counts_potential(self) -> bool {
        self == ScoringMode::NumberAndPotential
    }
}

/// Everything a single search needs to know. Passed by reference into the
/// search and never changed while it runs.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Maximum search depth in plies
    pub depth: usize,
    pub scoring: ScoringMode,
    /// Alpha-beta cutoffs. Off explores the full tree and picks the same turn.
    pub pruning: bool,
    /// Pin the move-ordering seed to 0 instead of the wall clock
    pub deterministic: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 5,
            scoring: ScoringMode::default(),
            pruning: true,
            deterministic: false,
        }
    }
}

impl SearchConfig {
    /// Reproducible config searching to `depth` plies.
    pub fn depth(depth: usize) -> Self {
        Self {
            depth,
            deterministic: true,
            ..Default::default()
        }
    }

    pub fn with_scoring(mut self, scoring: ScoringMode) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }
}

/// Optimization level that turns alpha-beta cutoffs off.
pub const NO_OPTIMIZATION: &str = "O0";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse JSON settings (comments are not supported): {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse TOML settings: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// The `Bot` section of the settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BotSettings {
    pub is_white_bot: bool,
    pub is_black_bot: bool,
    /// Search depth for the white bot
    pub white_bot_level: usize,
    /// Search depth for the black bot
    pub black_bot_level: usize,
    pub bot_scoring_type: ScoringMode,
    /// `"O0"` disables pruning, any other value enables it
    pub optimization: String,
    pub no_random: bool,
    /// Pause before a bot move is shown, for interactive front ends
    #[serde(rename = "BotDelayMS")]
    pub bot_delay_ms: u64,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            is_white_bot: false,
            is_black_bot: true,
            white_bot_level: 5,
            black_bot_level: 5,
            bot_scoring_type: ScoringMode::default(),
            optimization: "O1".to_string(),
            no_random: false,
            bot_delay_ms: 0,
        }
    }
}

impl BotSettings {
    pub fn is_bot(&self, color: Color) -> bool {
        match color {
            Color::White => self.is_white_bot,
            Color::Black => self.is_black_bot,
        }
    }

    pub fn level(&self, color: Color) -> usize {
        match color {
            Color::White => self.white_bot_level,
            Color::Black => self.black_bot_level,
        }
    }

    pub fn pruning(&self) -> bool {
        self.optimization != NO_OPTIMIZATION
    }

    /// Search configuration for the bot playing `color`.
    pub fn search_config(&self, color: Color) -> SearchConfig {
        SearchConfig {
            depth: self.level(color),
            scoring: self.bot_scoring_type,
            pruning: self.pruning(),
            deterministic: self.no_random,
        }
    }
}

/// Whole settings file. Sections other than `Bot` belong to the UI and are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "Bot", default)]
    pub bot: BotSettings,
}

impl Settings {
    /// Load settings from a `.toml` file, or JSON for any other extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&contents),
            _ => Self::from_json_str(&contents),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        for (key, level) in [
            ("WhiteBotLevel", self.bot.white_bot_level),
            ("BlackBotLevel", self.bot.black_bot_level),
        ] {
            if level == 0 {
                return Err(SettingsError::Invalid {
                    key,
                    reason: "search depth must be at least 1".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
