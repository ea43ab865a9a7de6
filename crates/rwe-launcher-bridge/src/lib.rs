//! Collaborator contracts for the RWE launcher.
//!
//! The launcher core never talks to the game engine or the filesystem
//! directly. It goes through two traits:
//!
//! - [`BridgeService`]: queries answered by the game-engine bridge (map
//!   list, map info, minimap rendering).
//! - [`ModSource`]: enumeration of locally installed mods.
//!
//! The transport behind a `BridgeService` is not this crate's concern; an
//! implementation may speak JSON over a pipe, a socket, or call into a
//! library. Tests substitute in-memory fakes.
//!
//! [`FsModSource`] is the default `ModSource`: it lists the sub-directories
//! of the mods directory.

mod error;
mod fs;

pub use error::{BridgeError, DiscoveryError};
pub use fs::FsModSource;
pub use rwe_launcher_model::{InstalledModInfo, MapInfo};

use std::future::Future;
use std::path::Path;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Bridge payloads
// ---------------------------------------------------------------------------

/// Response to a minimap request: where the bridge wrote the image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minimap {
    pub path: String,
}

/// One entry of the bridge's map list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapListEntry {
    pub name: String,
}

/// Response to a map list request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapList {
    pub maps: Vec<MapListEntry>,
}

impl MapList {
    /// The map names, in the order the bridge listed them.
    pub fn names(&self) -> Vec<String> {
        self.maps.iter().map(|m| m.name.clone()).collect()
    }
}

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// Queries answered by the game-engine bridge.
///
/// Calls may be issued concurrently, and a call may be left to finish after
/// the caller has lost interest in it; implementations must tolerate both.
/// Timeouts are the implementation's responsibility.
///
/// # Example
///
/// ```rust
/// use rwe_launcher_bridge::{
///     BridgeError, BridgeService, MapInfo, MapList, MapListEntry, Minimap,
/// };
///
/// /// A bridge that knows a single map.
/// struct OneMapBridge;
///
/// impl BridgeService for OneMapBridge {
///     async fn get_map_info(
///         &self,
///         map_name: &str,
///     ) -> Result<MapInfo, BridgeError> {
///         match map_name {
///             "Dump" => Ok(MapInfo {
///                 description: "Two players, lots of metal".into(),
///                 memory: "32 MB".into(),
///                 number_of_players: "2".into(),
///             }),
///             other => Err(BridgeError::MapNotFound(other.into())),
///         }
///     }
///
///     async fn get_minimap(
///         &self,
///         map_name: &str,
///     ) -> Result<Minimap, BridgeError> {
///         Ok(Minimap { path: format!("/tmp/{map_name}.png") })
///     }
///
///     async fn get_map_list(&self) -> Result<MapList, BridgeError> {
///         Ok(MapList { maps: vec![MapListEntry { name: "Dump".into() }] })
///     }
/// }
/// ```
pub trait BridgeService: Send + Sync + 'static {
    /// Fetches description, memory requirement, and player count for a map.
    fn get_map_info(
        &self,
        map_name: &str,
    ) -> impl Future<Output = Result<MapInfo, BridgeError>> + Send;

    /// Renders the minimap for a map and returns the image path.
    fn get_minimap(
        &self,
        map_name: &str,
    ) -> impl Future<Output = Result<Minimap, BridgeError>> + Send;

    /// Lists every map the engine can load.
    fn get_map_list(
        &self,
    ) -> impl Future<Output = Result<MapList, BridgeError>> + Send;
}

/// Enumerates mods installed on this machine.
pub trait ModSource: Send + Sync + 'static {
    /// Lists the mods installed under `path`.
    ///
    /// An empty directory yields `Ok(vec![])`; any failure to read it is an
    /// error, never an empty list.
    fn installed_mods(
        &self,
        path: &Path,
    ) -> impl Future<
        Output = Result<Vec<InstalledModInfo>, DiscoveryError>,
    > + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_list_names_keep_order() {
        let list = MapList {
            maps: vec![
                MapListEntry { name: "Lava Run".into() },
                MapListEntry { name: "Coast To Coast".into() },
                MapListEntry { name: "Dump".into() },
            ],
        };
        assert_eq!(list.names(), vec!["Lava Run", "Coast To Coast", "Dump"]);
    }

    #[test]
    fn test_map_list_decodes_bridge_json() {
        let list: MapList = serde_json::from_str(
            r#"{"maps":[{"name":"Dump"},{"name":"Lava Run"}]}"#,
        )
        .unwrap();
        assert_eq!(list.names(), vec!["Dump", "Lava Run"]);
    }
}
