//! Domain types for the launcher's application state.
//!
//! Everything the UI layer reads lives in one [`AppState`] snapshot. The
//! snapshot is owned by the store; nested entities (rooms, slots, cache
//! entries) are owned transitively and replaced wholesale on every update
//! rather than mutated in place.
//!
//! All types derive `Serialize`/`Deserialize` so a snapshot can be handed to
//! whatever renders it (a webview, a TUI, a test assertion).

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::FetchFailure;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A player's identity within a game room.
///
/// Newtype over the raw number the lobby server assigns, so a `PlayerId`
/// can't be confused with a [`GameId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P-{}", self.0)
    }
}

/// The identity of an open game in the lobby's game list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u32);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Lobby game list
// ---------------------------------------------------------------------------

/// One open game as advertised by the master server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameListEntry {
    pub id: GameId,
    pub description: String,
    /// Players currently in the game.
    pub players: u32,
    /// Player capacity of the game.
    pub max_players: u32,
}

impl GameListEntry {
    /// Returns `true` if the game has exactly as many players as slots.
    ///
    /// An over-capacity entry (`players > max_players`) is not considered
    /// full; the lobby server never reports one in practice.
    pub fn is_full(&self) -> bool {
        self.players == self.max_players
    }
}

/// Connection state of the master (lobby) server client.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Connected,
    #[default]
    Disconnected,
}

// ---------------------------------------------------------------------------
// Mods
// ---------------------------------------------------------------------------

/// A mod found in the local mods directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledModInfo {
    pub name: String,
    pub path: String,
}

// ---------------------------------------------------------------------------
// Players
// ---------------------------------------------------------------------------

/// The faction a player has picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlayerSide {
    Arm,
    Core,
}

/// Palette index of a player's team color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerColor(pub u8);

/// A player occupying a slot in a game room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub id: PlayerId,
    pub name: String,
    pub side: PlayerSide,
    pub color: PlayerColor,
    pub team: Option<u32>,
    pub ready: bool,
    /// Names of the mods this player has installed locally.
    pub installed_mods: BTreeSet<String>,
}

impl PlayerInfo {
    /// Returns `true` if every mod in `mods` is installed for this player.
    pub fn has_mods<'a>(
        &self,
        mods: impl IntoIterator<Item = &'a String>,
    ) -> bool {
        mods.into_iter().all(|m| self.installed_mods.contains(m))
    }
}

/// One seat in a game room.
///
/// Closed slots are seats the host has disabled; they never block a start.
/// Empty slots are open seats nobody has taken yet, and do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "player", rename_all = "lowercase")]
pub enum PlayerSlot {
    Empty,
    Closed,
    Filled(PlayerInfo),
}

impl PlayerSlot {
    /// Returns the player in this slot, if any.
    pub fn player(&self) -> Option<&PlayerInfo> {
        match self {
            Self::Filled(p) => Some(p),
            Self::Empty | Self::Closed => None,
        }
    }
}

/// A chat line in a game room. System messages have no sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender_name: Option<String>,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Maps
// ---------------------------------------------------------------------------

/// Map metadata as reported by the game-engine bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapInfo {
    pub description: String,
    pub memory: String,
    pub number_of_players: String,
}

/// A resolved map, cached per room by map name.
///
/// Only ever created from a successful combined info + minimap fetch, and
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapCacheValue {
    pub description: String,
    pub memory: String,
    pub number_of_players: String,
    /// Filesystem path of the rendered minimap image.
    pub minimap: Option<String>,
}

impl MapCacheValue {
    /// Builds a cache entry from the two halves of a combined fetch.
    pub fn from_parts(info: MapInfo, minimap_path: String) -> Self {
        Self {
            description: info.description,
            memory: info.memory,
            number_of_players: info.number_of_players,
            minimap: Some(minimap_path),
        }
    }
}

/// State of the "select map" dialog inside a game room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapDialogState {
    /// Available map names, `None` until the bridge has answered.
    pub maps: Option<Vec<String>>,
    /// The map currently highlighted in the dialog.
    pub selected_map: Option<String>,
}

// ---------------------------------------------------------------------------
// Game room
// ---------------------------------------------------------------------------

/// A game room the local player has joined or is hosting.
///
/// The map cache lives here, so it is discarded when the player leaves the
/// room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRoom {
    pub local_player_id: Option<PlayerId>,
    /// The room's owner. Only the owner may start the game.
    pub admin_player_id: Option<PlayerId>,
    pub players: Vec<PlayerSlot>,
    pub messages: Vec<ChatMessage>,
    /// The map the room will be played on.
    pub map_name: Option<String>,
    pub map_dialog: Option<MapDialogState>,
    pub mods_dialog_open: bool,
    /// Mods every player must have installed to start.
    pub active_mods: Vec<String>,
    pub map_cache: HashMap<String, MapCacheValue>,
}

impl GameRoom {
    /// The map highlighted in the open map dialog, if any.
    pub fn dialog_selected_map(&self) -> Option<&str> {
        self.map_dialog.as_ref()?.selected_map.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Screens and root state
// ---------------------------------------------------------------------------

/// The screen the launcher is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "kebab-case")]
pub enum Screen {
    /// The game list.
    Overview {
        dialog_open: bool,
        mods_dialog_open: bool,
    },
    /// The "host a new game" form.
    HostForm,
    /// Inside a game room. `room` is `None` until the join completes.
    GameRoom { room: Option<GameRoom> },
}

impl Default for Screen {
    fn default() -> Self {
        Self::Overview {
            dialog_open: false,
            mods_dialog_open: false,
        }
    }
}

/// Root snapshot of the launcher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// `None` until mod discovery has succeeded.
    pub installed_mods: Option<Vec<InstalledModInfo>>,
    pub active_mods: Vec<String>,
    pub games: Vec<GameListEntry>,
    pub selected_game_id: Option<GameId>,
    pub current_screen: Screen,
    /// Whether a game engine process launched by us is still alive.
    pub is_rwe_running: bool,
    pub master_server_connection_status: ConnectionStatus,
    /// The most recent failed fetch, for the UI to surface.
    pub last_failure: Option<FetchFailure>,
}

impl AppState {
    /// The joined game room, if the launcher is showing one.
    pub fn room(&self) -> Option<&GameRoom> {
        match &self.current_screen {
            Screen::GameRoom { room } => room.as_ref(),
            Screen::Overview { .. } | Screen::HostForm => None,
        }
    }

    /// Mutable access to the joined game room.
    pub fn room_mut(&mut self) -> Option<&mut GameRoom> {
        match &mut self.current_screen {
            Screen::GameRoom { room } => room.as_mut(),
            Screen::Overview { .. } | Screen::HostForm => None,
        }
    }

    /// The game list entry for the selected game id.
    pub fn selected_game(&self) -> Option<&GameListEntry> {
        let id = self.selected_game_id?;
        self.games.iter().find(|g| g.id == id)
    }
}
