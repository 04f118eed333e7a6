//! Driver configuration for pocketbook-sync
//!
//! One user-visible setting: the lookup name of the host library's custom
//! Yes/No column that holds the read state. Everything else about the device
//! (catalog location, schema) is fixed by the firmware.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SyncError};

/// Configuration for one PocketBook device driver instance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Lookup name of the host library's boolean column holding read state
    #[serde(default = "default_read_column")]
    pub read_column: String,
}

fn default_read_column() -> String {
    "#read".to_string()
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            read_column: default_read_column(),
        }
    }
}

impl DeviceConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: DeviceConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SyncError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
