//! # RWE Launcher
//!
//! Coordination core of a multiplayer game launcher.
//!
//! The launcher keeps one application state, owned by a store actor and
//! changed only by reducing [`LauncherEvent`]s. Long-running processes
//! watch that state and fetch what the UI needs from the game-engine
//! bridge: map info and minimaps for the map being picked, the map list
//! when the map dialog opens, installed mods at startup.
//!
//! Embedders implement [`BridgeService`] for their engine bridge and hand
//! it to the builder together with a [`ModSource`] (usually
//! [`FsModSource`]).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rwe_launcher::prelude::*;
//!
//! // Implement BridgeService for your bridge, then:
//! // let launcher = Launcher::builder()
//! //     .config(LauncherConfig::default())
//! //     .build(MyBridge::connect()?, FsModSource);
//! // launcher.dispatch(LauncherEvent::OpenSelectMapDialog).await?;
//! // assert!(launcher.can_launch_rwe());
//! ```

mod config;
mod error;
mod launcher;
pub mod logging;

pub use config::LauncherConfig;
pub use error::LauncherError;
pub use launcher::{Launcher, LauncherBuilder};

pub use rwe_launcher_bridge::{
    BridgeError, BridgeService, DiscoveryError, FsModSource, MapList,
    MapListEntry, Minimap, ModSource,
};
pub use rwe_launcher_model::{
    AppState, ChatMessage, ConnectionStatus, FetchFailure, GameId,
    GameListEntry, GameRoom, InstalledModInfo, LauncherEvent, MapCacheValue,
    MapDialogState, MapInfo, PlayerColor, PlayerId, PlayerInfo, PlayerSide,
    PlayerSlot, Screen,
};
pub use rwe_launcher_store::StoreError;

/// Common imports for embedding the launcher.
pub mod prelude {
    pub use crate::{
        AppState, BridgeError, BridgeService, DiscoveryError, FetchFailure,
        FsModSource, GameId, GameListEntry, GameRoom, InstalledModInfo,
        Launcher, LauncherConfig, LauncherError, LauncherEvent, MapInfo,
        MapList, MapListEntry, Minimap, ModSource, PlayerId, PlayerInfo,
        PlayerSlot, Screen,
    };
}
