use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, TracalError};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for tracal, stored as config.json beside the item
/// snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TracalConfig {
    /// Daily calorie limit consulted by the total report. `None` disables
    /// the limit entirely.
    #[serde(default)]
    pub daily_limit: Option<i64>,
}

impl TracalConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TracalError::Io)?;
        let config: TracalConfig =
            serde_json::from_str(&content).map_err(TracalError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TracalError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TracalError::Serialization)?;
        fs::write(config_path, content).map_err(TracalError::Io)?;
        Ok(())
    }
}
