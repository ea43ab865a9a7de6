//! Failure vocabulary shared by the coordination processes and the store.
//!
//! Collaborator errors (`BridgeError`, `DiscoveryError`) are rich but not
//! `Clone`. When a process turns one into an event it keeps only what the
//! state needs: which fetch failed and a human-readable reason.

use serde::{Deserialize, Serialize};

/// A fetch that failed and was surfaced as an event.
///
/// A superseded fetch is never reported through this type; its result is
/// simply dropped.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error,
)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FetchFailure {
    /// Enumerating the local mods directory failed.
    #[error("mod discovery failed: {reason}")]
    Discovery { reason: String },

    /// The bridge could not produce the list of available maps.
    #[error("map list fetch failed: {reason}")]
    MapList { reason: String },

    /// Map info or minimap could not be fetched for `map_name`.
    ///
    /// Also used when only one of the two calls failed: a half-resolved
    /// map is never cached.
    #[error("map info fetch failed for {map_name}: {reason}")]
    MapInfo { map_name: String, reason: String },
}
