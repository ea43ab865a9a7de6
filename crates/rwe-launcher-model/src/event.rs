//! Events: the only way application state changes.
//!
//! UI intents, lobby notifications, and the results of background fetches
//! all travel as a [`LauncherEvent`]. The store reduces each one into the
//! next [`AppState`](crate::AppState) snapshot and then re-broadcasts it so
//! coordination processes can react.

use serde::{Deserialize, Serialize};

use crate::{
    ChatMessage, FetchFailure, GameId, GameListEntry, InstalledModInfo,
    MapInfo, PlayerId, PlayerSlot,
};

/// Everything that can happen to the launcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LauncherEvent {
    // -- Master server --
    MasterServerConnected,
    MasterServerDisconnected,
    /// Full replacement of the open games list.
    GameListReceived { games: Vec<GameListEntry> },
    GameCreated { game: GameListEntry },
    /// Replaces the entry with the same id.
    GameUpdated { game: GameListEntry },
    GameDeleted { id: GameId },
    SelectGame { id: GameId },

    // -- Game engine process --
    RweStarted,
    RweExited,

    // -- Mods --
    /// Result of local mod discovery.
    InstalledModsReceived { mods: Vec<InstalledModInfo> },
    SetActiveMods { mods: Vec<String> },
    OpenModsDialog,
    CloseModsDialog,

    // -- Screens --
    /// The join dialog on the game list. Ignored on other screens.
    OpenJoinDialog,
    CloseJoinDialog,
    OpenHostForm,
    CloseHostForm,
    /// The player asked to join or host; the room is pending.
    EnterGameRoom,
    /// The game server accepted us into the room.
    RoomJoined {
        local_player_id: PlayerId,
        admin_player_id: PlayerId,
        players: Vec<PlayerSlot>,
        map_name: Option<String>,
        active_mods: Vec<String>,
    },
    LeaveGameRoom,

    // -- Game room --
    PlayersChanged { players: Vec<PlayerSlot> },
    AdminChanged { id: PlayerId },
    ChatMessageReceived { message: ChatMessage },
    MapChanged { map_name: Option<String> },
    RoomModsChanged { mods: Vec<String> },

    // -- Map dialog --
    OpenSelectMapDialog,
    CloseSelectMapDialog,
    DialogSelectMap { map_name: String },
    /// Applies the dialog's selection to the room and closes the dialog.
    ConfirmSelectMap,
    /// Available map names, in the order the bridge listed them.
    MapListReceived { maps: Vec<String> },
    /// Map info and minimap for one map, fetched together.
    CombinedMapInfoReceived {
        map_name: String,
        info: MapInfo,
        minimap_path: String,
    },

    /// A background fetch failed.
    Failed { failure: FetchFailure },
}

impl LauncherEvent {
    /// Short name of the event for log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MasterServerConnected => "master_server_connected",
            Self::MasterServerDisconnected => "master_server_disconnected",
            Self::GameListReceived { .. } => "game_list_received",
            Self::GameCreated { .. } => "game_created",
            Self::GameUpdated { .. } => "game_updated",
            Self::GameDeleted { .. } => "game_deleted",
            Self::SelectGame { .. } => "select_game",
            Self::RweStarted => "rwe_started",
            Self::RweExited => "rwe_exited",
            Self::InstalledModsReceived { .. } => "installed_mods_received",
            Self::SetActiveMods { .. } => "set_active_mods",
            Self::OpenModsDialog => "open_mods_dialog",
            Self::CloseModsDialog => "close_mods_dialog",
            Self::OpenJoinDialog => "open_join_dialog",
            Self::CloseJoinDialog => "close_join_dialog",
            Self::OpenHostForm => "open_host_form",
            Self::CloseHostForm => "close_host_form",
            Self::EnterGameRoom => "enter_game_room",
            Self::RoomJoined { .. } => "room_joined",
            Self::LeaveGameRoom => "leave_game_room",
            Self::PlayersChanged { .. } => "players_changed",
            Self::AdminChanged { .. } => "admin_changed",
            Self::ChatMessageReceived { .. } => "chat_message_received",
            Self::MapChanged { .. } => "map_changed",
            Self::RoomModsChanged { .. } => "room_mods_changed",
            Self::OpenSelectMapDialog => "open_select_map_dialog",
            Self::CloseSelectMapDialog => "close_select_map_dialog",
            Self::DialogSelectMap { .. } => "dialog_select_map",
            Self::ConfirmSelectMap => "confirm_select_map",
            Self::MapListReceived { .. } => "map_list_received",
            Self::CombinedMapInfoReceived { .. } => {
                "combined_map_info_received"
            }
            Self::Failed { .. } => "failed",
        }
    }
}
