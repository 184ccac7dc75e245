// Application configuration loaded from RON

use crate::animation::Easing;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("RON error: {0}")]
    Ron(#[from] ron::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Undo/redo history settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of commands kept for undo
    pub max_size: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_size: crate::command::manager::DEFAULT_MAX_HISTORY,
        }
    }
}

/// Page/modal container settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Block input while a transition runs
    pub lock_interaction: bool,
    /// Pages and modals block input through the same gate
    pub share_interaction_gate: bool,
    /// Give each pushed modal a backdrop
    pub modal_backdrops: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            lock_interaction: true,
            share_interaction_gate: true,
            modal_backdrops: true,
        }
    }
}

/// Transition durations in seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub push_enter: f32,
    pub push_exit: f32,
    pub pop_enter: f32,
    pub pop_exit: f32,
    pub backdrop: f32,
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            push_enter: 0.3,
            push_exit: 0.3,
            pop_enter: 0.3,
            pop_exit: 0.3,
            backdrop: 0.2,
            easing: Easing::EaseInOut,
        }
    }
}

/// Top-level configuration
///
/// Every section falls back to its defaults, so a partial file such as
/// `(history: (max_size: 20))` is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub history: HistoryConfig,
    pub navigation: NavigationConfig,
    pub animation: AnimationConfig,
    /// JSON item catalog to load at startup
    pub catalog_path: Option<PathBuf>,
    /// Capacity of the history notification channel
    pub notification_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            navigation: NavigationConfig::default(),
            animation: AnimationConfig::default(),
            catalog_path: None,
            notification_capacity: 64,
        }
    }
}

impl AppConfig {
    /// Load and validate a RON configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_ron_str(&text)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let text = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        std::fs::write(path, text)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history.max_size == 0 {
            return Err(ConfigError::Invalid(
                "history.max_size must be at least 1".to_string(),
            ));
        }

        if self.notification_capacity == 0 {
            return Err(ConfigError::Invalid(
                "notification_capacity must be at least 1".to_string(),
            ));
        }

        let animation = &self.animation;
        let durations = [
            ("push_enter", animation.push_enter),
            ("push_exit", animation.push_exit),
            ("pop_enter", animation.pop_enter),
            ("pop_exit", animation.pop_exit),
            ("backdrop", animation.backdrop),
        ];
        for (name, value) in durations {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "animation.{} must be a non-negative number of seconds (got {})",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
