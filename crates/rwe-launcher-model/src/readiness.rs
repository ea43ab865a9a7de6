//! Readiness predicates: can the room start, can we join, can we launch.
//!
//! These are pure functions of a snapshot. Callers re-evaluate them on
//! every new snapshot; nothing here is cached.

use crate::{AppState, GameRoom, PlayerSlot};

/// Returns `true` if the local player may start the game in `room`.
///
/// Requires all of:
/// - the admin id equals the local id. Two absent ids compare equal, so a
///   room that has not reported either passes this check,
/// - the room has at least one slot,
/// - a map has been chosen,
/// - every slot is closed, or filled by a ready player who has all of the
///   room's active mods installed. An empty slot blocks the start.
pub fn can_start_game(room: &GameRoom) -> bool {
    if room.admin_player_id != room.local_player_id {
        return false;
    }
    if room.players.is_empty() {
        return false;
    }
    if room.map_name.is_none() {
        return false;
    }

    room.players.iter().all(|slot| match slot {
        PlayerSlot::Filled(player) => {
            player.ready && player.has_mods(&room.active_mods)
        }
        PlayerSlot::Closed => true,
        PlayerSlot::Empty => false,
    })
}

/// [`can_start_game`] for whatever room `state` is showing.
///
/// `false` when the launcher is not inside a joined room.
pub fn can_start_current_game(state: &AppState) -> bool {
    state.room().is_some_and(can_start_game)
}

/// Returns `true` if the selected game in the lobby list can be joined.
pub fn can_join_selected_game(state: &AppState) -> bool {
    if state.is_rwe_running {
        return false;
    }

    match state.selected_game() {
        Some(game) => !game.is_full(),
        None => false,
    }
}

/// Returns `true` if the game engine can be launched from the launcher.
pub fn can_launch_rwe(state: &AppState) -> bool {
    !state.is_rwe_running
}
