//! Store configuration.

use serde::{Deserialize, Serialize};

/// Channel sizes for the store actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Capacity of the inbound event channel. Senders wait when it is full.
    pub event_channel_size: usize,

    /// Capacity of the reduced-event broadcast. Subscribers that fall
    /// further behind than this miss events and are told how many.
    pub action_channel_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            event_channel_size: 64,
            action_channel_size: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_config_default() {
        let config = StoreConfig::default();
        assert_eq!(config.event_channel_size, 64);
        assert_eq!(config.action_channel_size, 64);
    }
}
