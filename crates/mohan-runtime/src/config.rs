use crate::{Error, Result};
use mohan_engine::{AnimationSettings, BusyPolicy, DashboardOptions};
use mohan_types::Role;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolve the data directory holding `config.toml`, by priority:
/// 1. Explicit path (with tilde expansion)
/// 2. MOHAN_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.mohan
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("MOHAN_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("mohan"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".mohan"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashboardConfig {
    pub default_role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub enabled: bool,
    pub min_steps: u32,
    pub max_steps: u32,
    pub min_interval_ms: u64,
    pub max_interval_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        let settings = AnimationSettings::default();
        Self {
            enabled: true,
            min_steps: settings.min_steps,
            max_steps: settings.max_steps,
            min_interval_ms: settings.min_interval_ms,
            max_interval_ms: settings.max_interval_ms,
        }
    }
}

impl AnimationConfig {
    /// `None` when animation is switched off.
    pub fn settings(&self) -> Option<AnimationSettings> {
        if !self.enabled {
            return None;
        }
        Some(AnimationSettings {
            min_steps: self.min_steps,
            max_steps: self.max_steps,
            min_interval_ms: self.min_interval_ms,
            max_interval_ms: self.max_interval_ms,
            ..AnimationSettings::default()
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub reply_delay_ms: u64,
    pub busy_policy: BusyPolicy,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1500,
            busy_policy: BusyPolicy::default(),
        }
    }
}

impl AssistantConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long the event loop waits for a key before redrawing.
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 50 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Log file used while the terminal UI is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub dashboard: DashboardConfig,
    pub animation: AnimationConfig,
    pub assistant: AssistantConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(resolve_data_dir(None)?.join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        let animation = &self.animation;
        if animation.min_steps == 0 {
            return Err(Error::Config("animation.min_steps must be at least 1".to_string()));
        }
        if animation.min_steps > animation.max_steps {
            return Err(Error::Config(format!(
                "animation.min_steps ({}) is greater than animation.max_steps ({})",
                animation.min_steps, animation.max_steps
            )));
        }
        if animation.min_interval_ms > animation.max_interval_ms {
            return Err(Error::Config(format!(
                "animation.min_interval_ms ({}) is greater than animation.max_interval_ms ({})",
                animation.min_interval_ms, animation.max_interval_ms
            )));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(Error::Config("ui.tick_rate_ms must be positive".to_string()));
        }
        Ok(())
    }

    pub fn dashboard_options(&self) -> DashboardOptions {
        DashboardOptions {
            role: self.dashboard.default_role,
            animation: self.animation.settings(),
            busy_policy: self.assistant.busy_policy,
            seed: None,
        }
    }
}
