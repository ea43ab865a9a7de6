//! Error types for the collaborator layer.

use std::path::PathBuf;

/// Errors returned by a [`BridgeService`](crate::BridgeService).
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The game-engine bridge could not be reached (not running, crashed,
    /// connection dropped, timed out).
    #[error("bridge unreachable: {0}")]
    Unreachable(String),

    /// The bridge has no map with this name.
    #[error("map not found: {0}")]
    MapNotFound(String),

    /// The bridge answered, but with an error.
    #[error("bridge request failed: {0}")]
    Request(String),
}

/// Errors returned by a [`ModSource`](crate::ModSource).
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    /// Reading the mods directory failed.
    #[error("failed to read mods directory: {0}")]
    Io(#[from] std::io::Error),

    /// The configured mods path exists but is not a directory.
    #[error("mods path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}
