//! Unified error type for the launcher.

use rwe_launcher_bridge::{BridgeError, DiscoveryError};
use rwe_launcher_store::StoreError;

/// Top-level error that wraps every crate-specific error.
///
/// The `#[from]` attribute on each variant auto-generates `From` impls,
/// so `?` converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum LauncherError {
    /// The game-engine bridge failed.
    #[error(transparent)]
    Bridge(#[from] BridgeError),

    /// Mod discovery failed.
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// The store has shut down.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A configuration document could not be parsed.
    #[error("invalid launcher config: {0}")]
    Config(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("cannot read launcher config: {0}")]
    ConfigIo(#[from] std::io::Error),
}
