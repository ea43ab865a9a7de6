//! The reducer: `(state, event) -> next state`.
//!
//! Pure and total. Every event produces a snapshot; events that do not apply
//! to the current screen (a room event while on the overview, say) produce
//! an unchanged copy.

use rwe_launcher_model::{
    AppState, ConnectionStatus, FetchFailure, GameRoom, LauncherEvent,
    MapCacheValue, MapDialogState, Screen,
};

/// Applies `event` to `state` and returns the next snapshot.
pub fn reduce(state: &AppState, event: &LauncherEvent) -> AppState {
    let mut next = state.clone();
    apply(&mut next, event);
    next
}

fn apply(state: &mut AppState, event: &LauncherEvent) {
    match event {
        // -- Master server --
        LauncherEvent::MasterServerConnected => {
            state.master_server_connection_status = ConnectionStatus::Connected;
        }
        LauncherEvent::MasterServerDisconnected => {
            state.master_server_connection_status =
                ConnectionStatus::Disconnected;
            // The list is stale without a connection.
            state.games.clear();
            state.selected_game_id = None;
        }
        LauncherEvent::GameListReceived { games } => {
            state.games = games.clone();
        }
        LauncherEvent::GameCreated { game } => {
            match state.games.iter_mut().find(|g| g.id == game.id) {
                Some(existing) => *existing = game.clone(),
                None => state.games.push(game.clone()),
            }
        }
        LauncherEvent::GameUpdated { game } => {
            if let Some(existing) =
                state.games.iter_mut().find(|g| g.id == game.id)
            {
                *existing = game.clone();
            }
        }
        LauncherEvent::GameDeleted { id } => {
            state.games.retain(|g| g.id != *id);
            if state.selected_game_id == Some(*id) {
                state.selected_game_id = None;
            }
        }
        LauncherEvent::SelectGame { id } => {
            state.selected_game_id = Some(*id);
        }

        // -- Game engine process --
        LauncherEvent::RweStarted => state.is_rwe_running = true,
        LauncherEvent::RweExited => state.is_rwe_running = false,

        // -- Mods --
        LauncherEvent::InstalledModsReceived { mods } => {
            state.installed_mods = Some(mods.clone());
            clear_failure(state, |f| {
                matches!(f, FetchFailure::Discovery { .. })
            });
        }
        LauncherEvent::SetActiveMods { mods } => {
            state.active_mods = mods.clone();
        }
        LauncherEvent::OpenModsDialog => set_mods_dialog(state, true),
        LauncherEvent::CloseModsDialog => set_mods_dialog(state, false),

        // -- Screens --
        LauncherEvent::OpenJoinDialog => set_join_dialog(state, true),
        LauncherEvent::CloseJoinDialog => set_join_dialog(state, false),
        LauncherEvent::OpenHostForm => {
            if matches!(state.current_screen, Screen::Overview { .. }) {
                state.current_screen = Screen::HostForm;
            }
        }
        LauncherEvent::CloseHostForm => {
            if matches!(state.current_screen, Screen::HostForm) {
                state.current_screen = Screen::default();
            }
        }
        LauncherEvent::EnterGameRoom => {
            state.current_screen = Screen::GameRoom { room: None };
        }
        LauncherEvent::RoomJoined {
            local_player_id,
            admin_player_id,
            players,
            map_name,
            active_mods,
        } => {
            // The player may have backed out while the join was pending.
            if let Screen::GameRoom { room } = &mut state.current_screen {
                *room = Some(GameRoom {
                    local_player_id: Some(*local_player_id),
                    admin_player_id: Some(*admin_player_id),
                    players: players.clone(),
                    map_name: map_name.clone(),
                    active_mods: active_mods.clone(),
                    ..GameRoom::default()
                });
            }
        }
        LauncherEvent::LeaveGameRoom => {
            state.current_screen = Screen::default();
        }

        // -- Game room --
        LauncherEvent::PlayersChanged { players } => {
            with_room(state, |room| room.players = players.clone());
        }
        LauncherEvent::AdminChanged { id } => {
            with_room(state, |room| room.admin_player_id = Some(*id));
        }
        LauncherEvent::ChatMessageReceived { message } => {
            with_room(state, |room| room.messages.push(message.clone()));
        }
        LauncherEvent::MapChanged { map_name } => {
            with_room(state, |room| room.map_name = map_name.clone());
        }
        LauncherEvent::RoomModsChanged { mods } => {
            with_room(state, |room| room.active_mods = mods.clone());
        }

        // -- Map dialog --
        LauncherEvent::OpenSelectMapDialog => {
            with_room(state, |room| {
                room.map_dialog = Some(MapDialogState {
                    maps: None,
                    selected_map: room.map_name.clone(),
                });
            });
        }
        LauncherEvent::CloseSelectMapDialog => {
            with_room(state, |room| room.map_dialog = None);
        }
        LauncherEvent::DialogSelectMap { map_name } => {
            with_room(state, |room| {
                if let Some(dialog) = &mut room.map_dialog {
                    dialog.selected_map = Some(map_name.clone());
                }
            });
        }
        LauncherEvent::ConfirmSelectMap => {
            with_room(state, |room| {
                let selected = room
                    .map_dialog
                    .take()
                    .and_then(|dialog| dialog.selected_map);
                if selected.is_some() {
                    room.map_name = selected;
                }
            });
        }
        LauncherEvent::MapListReceived { maps } => {
            with_room(state, |room| {
                if let Some(dialog) = &mut room.map_dialog {
                    dialog.maps = Some(maps.clone());
                }
            });
            clear_failure(state, |f| matches!(f, FetchFailure::MapList { .. }));
        }
        LauncherEvent::CombinedMapInfoReceived {
            map_name,
            info,
            minimap_path,
        } => {
            with_room(state, |room| {
                // A result for a map the dialog has moved away from is
                // stale, even if it was current when it was emitted.
                if room.dialog_selected_map() != Some(map_name.as_str()) {
                    return;
                }
                // Entries are immutable once created.
                room.map_cache.entry(map_name.clone()).or_insert_with(|| {
                    MapCacheValue::from_parts(
                        info.clone(),
                        minimap_path.clone(),
                    )
                });
            });
            clear_failure(state, |f| {
                matches!(
                    f,
                    FetchFailure::MapInfo { map_name: failed, .. }
                        if failed == map_name
                )
            });
        }

        LauncherEvent::Failed { failure } => {
            state.last_failure = Some(failure.clone());
        }
    }
}

/// Runs `f` on the joined room. No-op outside a room.
fn with_room(state: &mut AppState, f: impl FnOnce(&mut GameRoom)) {
    if let Some(room) = state.room_mut() {
        f(room);
    }
}

fn set_join_dialog(state: &mut AppState, open: bool) {
    if let Screen::Overview { dialog_open, .. } = &mut state.current_screen {
        *dialog_open = open;
    }
}

fn set_mods_dialog(state: &mut AppState, open: bool) {
    match &mut state.current_screen {
        Screen::Overview {
            mods_dialog_open, ..
        } => *mods_dialog_open = open,
        Screen::GameRoom { room: Some(room) } => room.mods_dialog_open = open,
        Screen::GameRoom { room: None } | Screen::HostForm => {}
    }
}

/// Clears `last_failure` if it matches; a later success supersedes it.
fn clear_failure(
    state: &mut AppState,
    superseded: impl FnOnce(&FetchFailure) -> bool,
) {
    if state.last_failure.as_ref().is_some_and(superseded) {
        state.last_failure = None;
    }
}

#[cfg(test)]
mod tests {
    use rwe_launcher_model::{
        ChatMessage, GameId, GameListEntry, InstalledModInfo, MapInfo,
        PlayerId, PlayerSlot,
    };

    use super::*;

    fn game(id: u32, players: u32) -> GameListEntry {
        GameListEntry {
            id: GameId(id),
            description: format!("game {id}"),
            players,
            max_players: 4,
        }
    }

    fn info() -> MapInfo {
        MapInfo {
            description: "Islands".into(),
            memory: "32 MB".into(),
            number_of_players: "4".into(),
        }
    }

    fn joined() -> LauncherEvent {
        LauncherEvent::RoomJoined {
            local_player_id: PlayerId(1),
            admin_player_id: PlayerId(1),
            players: vec![PlayerSlot::Empty, PlayerSlot::Closed],
            map_name: Some("Dump".into()),
            active_mods: vec![],
        }
    }

    /// Folds events over the default state.
    fn run(events: &[LauncherEvent]) -> AppState {
        events
            .iter()
            .fold(AppState::default(), |state, event| reduce(&state, event))
    }

    fn in_room() -> AppState {
        run(&[LauncherEvent::EnterGameRoom, joined()])
    }

    /// In a room with the map dialog open on `map_name`.
    fn dialog_on(map_name: &str) -> AppState {
        let state = reduce(&in_room(), &LauncherEvent::OpenSelectMapDialog);
        reduce(&state, &LauncherEvent::DialogSelectMap {
            map_name: map_name.into(),
        })
    }

    #[test]
    fn test_reduce_does_not_touch_input() {
        let before = AppState::default();
        let after = reduce(&before, &LauncherEvent::RweStarted);
        assert!(!before.is_rwe_running);
        assert!(after.is_rwe_running);
    }

    #[test]
    fn test_rwe_running_flag() {
        let state = run(&[LauncherEvent::RweStarted]);
        assert!(state.is_rwe_running);
        let state = reduce(&state, &LauncherEvent::RweExited);
        assert!(!state.is_rwe_running);
    }

    #[test]
    fn test_game_list_lifecycle() {
        let state = run(&[
            LauncherEvent::GameListReceived {
                games: vec![game(1, 1), game(2, 2)],
            },
            LauncherEvent::GameCreated { game: game(3, 1) },
            LauncherEvent::GameUpdated { game: game(1, 4) },
            LauncherEvent::SelectGame { id: GameId(2) },
            LauncherEvent::GameDeleted { id: GameId(2) },
        ]);
        let ids: Vec<u32> = state.games.iter().map(|g| g.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(state.games[0].players, 4);
        assert_eq!(state.selected_game_id, None, "deleted game deselected");
    }

    #[test]
    fn test_game_updated_for_unknown_id_is_noop() {
        let state = run(&[LauncherEvent::GameUpdated { game: game(9, 1) }]);
        assert!(state.games.is_empty());
    }

    #[test]
    fn test_disconnect_clears_game_list() {
        let state = run(&[
            LauncherEvent::MasterServerConnected,
            LauncherEvent::GameListReceived {
                games: vec![game(1, 1)],
            },
            LauncherEvent::SelectGame { id: GameId(1) },
        ]);
        assert_eq!(
            state.master_server_connection_status,
            ConnectionStatus::Connected
        );

        let state = reduce(&state, &LauncherEvent::MasterServerDisconnected);
        assert_eq!(
            state.master_server_connection_status,
            ConnectionStatus::Disconnected
        );
        assert!(state.games.is_empty());
        assert_eq!(state.selected_game_id, None);
    }

    #[test]
    fn test_installed_mods_received_clears_discovery_failure() {
        let state = run(&[LauncherEvent::Failed {
            failure: FetchFailure::Discovery {
                reason: "denied".into(),
            },
        }]);
        assert_eq!(state.installed_mods, None);
        assert!(state.last_failure.is_some());

        let mods = vec![InstalledModInfo {
            name: "core".into(),
            path: "/mods/core".into(),
        }];
        let state = reduce(
            &state,
            &LauncherEvent::InstalledModsReceived { mods: mods.clone() },
        );
        assert_eq!(state.installed_mods, Some(mods));
        assert_eq!(state.last_failure, None);
    }

    #[test]
    fn test_unrelated_success_keeps_failure() {
        let state = run(&[
            LauncherEvent::Failed {
                failure: FetchFailure::Discovery {
                    reason: "denied".into(),
                },
            },
            LauncherEvent::EnterGameRoom,
            joined(),
            LauncherEvent::OpenSelectMapDialog,
            LauncherEvent::MapListReceived { maps: vec![] },
        ]);
        assert!(matches!(
            state.last_failure,
            Some(FetchFailure::Discovery { .. })
        ));
    }

    #[test]
    fn test_host_form_transitions() {
        let state = run(&[LauncherEvent::OpenHostForm]);
        assert_eq!(state.current_screen, Screen::HostForm);
        let state = reduce(&state, &LauncherEvent::CloseHostForm);
        assert_eq!(state.current_screen, Screen::default());
    }

    #[test]
    fn test_room_joined_after_enter() {
        let state = in_room();
        let room = state.room().expect("room joined");
        assert_eq!(room.local_player_id, Some(PlayerId(1)));
        assert_eq!(room.map_name.as_deref(), Some("Dump"));
        assert_eq!(room.players.len(), 2);
    }

    #[test]
    fn test_room_joined_without_pending_join_is_ignored() {
        let state = run(&[joined()]);
        assert!(state.room().is_none());
        assert_eq!(state.current_screen, Screen::default());
    }

    #[test]
    fn test_leave_room_drops_cache() {
        let state = reduce(
            &dialog_on("Dump"),
            &LauncherEvent::CombinedMapInfoReceived {
                map_name: "Dump".into(),
                info: info(),
                minimap_path: "/tmp/dump.png".into(),
            },
        );
        assert_eq!(state.room().unwrap().map_cache.len(), 1);

        let state = reduce(&state, &LauncherEvent::LeaveGameRoom);
        assert!(state.room().is_none());

        let state = reduce(&state, &LauncherEvent::EnterGameRoom);
        let state = reduce(&state, &joined());
        assert!(state.room().unwrap().map_cache.is_empty());
    }

    #[test]
    fn test_room_events_outside_room_are_noops() {
        let before = AppState::default();
        for event in [
            LauncherEvent::PlayersChanged { players: vec![] },
            LauncherEvent::AdminChanged { id: PlayerId(3) },
            LauncherEvent::MapChanged {
                map_name: Some("x".into()),
            },
            LauncherEvent::OpenSelectMapDialog,
            LauncherEvent::MapListReceived {
                maps: vec!["x".into()],
            },
        ] {
            assert_eq!(reduce(&before, &event), before, "{}", event.name());
        }
    }

    #[test]
    fn test_room_updates() {
        let state = reduce(
            &in_room(),
            &LauncherEvent::ChatMessageReceived {
                message: ChatMessage {
                    sender_name: Some("alice".into()),
                    message: "gl hf".into(),
                },
            },
        );
        let state = reduce(&state, &LauncherEvent::AdminChanged {
            id: PlayerId(2),
        });
        let state = reduce(&state, &LauncherEvent::RoomModsChanged {
            mods: vec!["core".into()],
        });
        let room = state.room().unwrap();
        assert_eq!(room.messages.len(), 1);
        assert_eq!(room.admin_player_id, Some(PlayerId(2)));
        assert_eq!(room.active_mods, vec!["core".to_string()]);
    }

    #[test]
    fn test_mods_dialog_follows_screen() {
        let state = run(&[LauncherEvent::OpenModsDialog]);
        assert_eq!(
            state.current_screen,
            Screen::Overview {
                dialog_open: false,
                mods_dialog_open: true
            }
        );

        let state = reduce(&in_room(), &LauncherEvent::OpenModsDialog);
        assert!(state.room().unwrap().mods_dialog_open);
        let state = reduce(&state, &LauncherEvent::CloseModsDialog);
        assert!(!state.room().unwrap().mods_dialog_open);
    }

    #[test]
    fn test_join_dialog_only_on_game_list() {
        let state = run(&[LauncherEvent::OpenJoinDialog]);
        assert_eq!(
            state.current_screen,
            Screen::Overview {
                dialog_open: true,
                mods_dialog_open: false
            }
        );
        let state = reduce(&state, &LauncherEvent::CloseJoinDialog);
        assert_eq!(state.current_screen, Screen::default());

        let state = reduce(&in_room(), &LauncherEvent::OpenJoinDialog);
        assert_eq!(state, in_room());
    }

    #[test]
    fn test_open_map_dialog_preselects_room_map() {
        let state = reduce(&in_room(), &LauncherEvent::OpenSelectMapDialog);
        let dialog = state.room().unwrap().map_dialog.clone().unwrap();
        assert_eq!(dialog.selected_map.as_deref(), Some("Dump"));
        assert_eq!(dialog.maps, None);
    }

    #[test]
    fn test_map_dialog_select_and_confirm() {
        let state = reduce(&in_room(), &LauncherEvent::OpenSelectMapDialog);
        let state = reduce(&state, &LauncherEvent::MapListReceived {
            maps: vec!["Dump".into(), "Lava Run".into()],
        });
        let state = reduce(&state, &LauncherEvent::DialogSelectMap {
            map_name: "Lava Run".into(),
        });
        assert_eq!(
            state.room().unwrap().dialog_selected_map(),
            Some("Lava Run")
        );

        let state = reduce(&state, &LauncherEvent::ConfirmSelectMap);
        let room = state.room().unwrap();
        assert_eq!(room.map_name.as_deref(), Some("Lava Run"));
        assert!(room.map_dialog.is_none());
    }

    #[test]
    fn test_close_map_dialog_keeps_room_map() {
        let state = reduce(&in_room(), &LauncherEvent::OpenSelectMapDialog);
        let state = reduce(&state, &LauncherEvent::DialogSelectMap {
            map_name: "Lava Run".into(),
        });
        let state = reduce(&state, &LauncherEvent::CloseSelectMapDialog);
        let room = state.room().unwrap();
        assert_eq!(room.map_name.as_deref(), Some("Dump"));
        assert!(room.map_dialog.is_none());
    }

    #[test]
    fn test_map_list_ignored_when_dialog_closed() {
        let state = reduce(&in_room(), &LauncherEvent::MapListReceived {
            maps: vec!["Dump".into()],
        });
        assert!(state.room().unwrap().map_dialog.is_none());
    }

    #[test]
    fn test_combined_map_info_creates_cache_entry_once() {
        let state = reduce(
            &dialog_on("Dump"),
            &LauncherEvent::CombinedMapInfoReceived {
                map_name: "Dump".into(),
                info: info(),
                minimap_path: "/tmp/first.png".into(),
            },
        );
        let state = reduce(
            &state,
            &LauncherEvent::CombinedMapInfoReceived {
                map_name: "Dump".into(),
                info: info(),
                minimap_path: "/tmp/second.png".into(),
            },
        );
        let entry = &state.room().unwrap().map_cache["Dump"];
        assert_eq!(entry.minimap.as_deref(), Some("/tmp/first.png"));
        assert_eq!(entry.number_of_players, "4");
    }

    #[test]
    fn test_combined_map_info_for_deselected_map_is_dropped() {
        let state = reduce(&dialog_on("Dump"), &LauncherEvent::DialogSelectMap {
            map_name: "Lava Run".into(),
        });
        let state = reduce(
            &state,
            &LauncherEvent::CombinedMapInfoReceived {
                map_name: "Dump".into(),
                info: info(),
                minimap_path: "/tmp/dump.png".into(),
            },
        );
        assert!(state.room().unwrap().map_cache.is_empty());
    }

    #[test]
    fn test_combined_map_info_without_dialog_is_dropped() {
        let state = reduce(
            &in_room(),
            &LauncherEvent::CombinedMapInfoReceived {
                map_name: "Dump".into(),
                info: info(),
                minimap_path: "/tmp/dump.png".into(),
            },
        );
        assert!(state.room().unwrap().map_cache.is_empty());
    }

    #[test]
    fn test_map_info_failure_cleared_only_for_same_map() {
        let failed = LauncherEvent::Failed {
            failure: FetchFailure::MapInfo {
                map_name: "Dump".into(),
                reason: "timeout".into(),
            },
        };
        let state = reduce(&dialog_on("Dump"), &failed);

        let other = reduce(
            &state,
            &LauncherEvent::CombinedMapInfoReceived {
                map_name: "Lava Run".into(),
                info: info(),
                minimap_path: "/tmp/lava.png".into(),
            },
        );
        assert!(other.last_failure.is_some());

        let same = reduce(
            &state,
            &LauncherEvent::CombinedMapInfoReceived {
                map_name: "Dump".into(),
                info: info(),
                minimap_path: "/tmp/dump.png".into(),
            },
        );
        assert_eq!(same.last_failure, None);
    }
}
