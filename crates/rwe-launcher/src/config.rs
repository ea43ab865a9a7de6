//! Launcher configuration.

use std::path::{Path, PathBuf};

use rwe_launcher_store::StoreConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::LauncherError;

/// Configuration for a [`Launcher`](crate::Launcher).
///
/// Every field has a default, so a config document only needs the fields
/// it wants to change:
///
/// ```json
/// { "mods_path": "/opt/rwe/mods" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Directory scanned for installed mods at startup.
    pub mods_path: PathBuf,

    /// Capacity of the merged event stream feeding the store.
    pub event_channel_size: usize,

    /// Capacity of the reduced-event broadcast that processes listen on.
    pub action_channel_size: usize,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        let store = StoreConfig::default();
        Self {
            mods_path: PathBuf::from("mods"),
            event_channel_size: store.event_channel_size,
            action_channel_size: store.action_channel_size,
        }
    }
}

impl LauncherConfig {
    /// Parses a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, LauncherError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: &Path) -> Result<Self, LauncherError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Fixes out-of-range values so the config is safe to use.
    ///
    /// Tokio channels need a capacity of at least one; zero is raised to one.
    pub fn validated(mut self) -> Self {
        if self.event_channel_size == 0 {
            warn!("event_channel_size is 0, using 1");
            self.event_channel_size = 1;
        }
        if self.action_channel_size == 0 {
            warn!("action_channel_size is 0, using 1");
            self.action_channel_size = 1;
        }
        self
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            event_channel_size: self.event_channel_size,
            action_channel_size: self.action_channel_size,
        }
    }
}
