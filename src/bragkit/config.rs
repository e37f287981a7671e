use crate::error::{BragError, Result};
use crate::model::{ExportFormat, RecentDays};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_RECENT_DAYS: u32 = 7;

/// Front-end preferences, stored as `config.json` in the user config dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BragConfig {
    /// Last time window picked in the Recent view.
    #[serde(default = "default_recent_days")]
    pub recent_days: u32,

    /// Format preselected by the Export form.
    #[serde(default)]
    pub export_format: ExportFormat,
}

fn default_recent_days() -> u32 {
    DEFAULT_RECENT_DAYS
}

impl Default for BragConfig {
    fn default() -> Self {
        Self {
            recent_days: DEFAULT_RECENT_DAYS,
            export_format: ExportFormat::default(),
        }
    }
}

impl BragConfig {
    pub const KEYS: [&'static str; 2] = ["recent-days", "export-format"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BragConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// The stored window, or the default one if the file holds an odd value.
    pub fn recent_days(&self) -> RecentDays {
        RecentDays::try_from(self.recent_days).unwrap_or_default()
    }

    pub fn set_recent_days(&mut self, days: RecentDays) {
        self.recent_days = days.days();
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "recent-days" => Ok(self.recent_days().to_string()),
            "export-format" => Ok(self.export_format.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "recent-days" => {
                let days = value
                    .parse::<RecentDays>()
                    .map_err(|e| BragError::Config(e.to_string()))?;
                self.set_recent_days(days);
            }
            "export-format" => {
                self.export_format = value
                    .parse::<ExportFormat>()
                    .map_err(|e| BragError::Config(e.to_string()))?;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> BragError {
    BragError::Config(format!(
        "Unknown config key: {} (known keys: {})",
        key,
        BragConfig::KEYS.join(", ")
    ))
}
