use anyhow::Result;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::todo::seed::DEFAULT_CATEGORY_ID;
use crate::utils::paths::get_config_path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,

    /// How long the completion confetti stays on screen.
    #[serde(default = "default_celebration_ms")]
    pub celebration_ms: u64,

    /// How long a notification stays in the status bar.
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,

    /// chrono format string used for due dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default = "default_category")]
    pub default_category: String,

    #[serde(default = "default_show_sidebar")]
    pub show_sidebar: bool,
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_celebration_ms() -> u64 {
    2000
}

fn default_notification_secs() -> u64 {
    3
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_category() -> String {
    DEFAULT_CATEGORY_ID.to_string()
}

fn default_show_sidebar() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            celebration_ms: default_celebration_ms(),
            notification_secs: default_notification_secs(),
            date_format: default_date_format(),
            default_category: default_category(),
            show_sidebar: default_show_sidebar(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&get_config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content)?;

        Ok(())
    }

    pub fn is_dark(&self) -> bool {
        self.theme.eq_ignore_ascii_case("dark")
    }

    /// The configured date format, or the default when chrono cannot parse it.
    pub fn validated_date_format(&self) -> String {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            warn!(date_format = %self.date_format, "invalid date_format, using default");
            return default_date_format();
        }
        self.date_format.clone()
    }
}
