//! Domain model for the RWE launcher.
//!
//! This crate defines what the launcher knows about the world:
//!
//! - **Types** ([`AppState`], [`GameRoom`], [`PlayerSlot`], [`MapCacheValue`],
//!   etc.): the snapshot the UI renders.
//! - **Events** ([`LauncherEvent`]): the only inputs that change a snapshot.
//! - **Failures** ([`FetchFailure`]): what a failed background fetch looks
//!   like once it becomes an event.
//! - **Readiness** ([`can_start_game`], [`can_join_selected_game`],
//!   [`can_launch_rwe`]): pure predicates over a snapshot.
//!
//! It has no async code and no I/O. The store, the collaborator traits, and
//! the coordination processes all build on these types.

mod error;
mod event;
mod readiness;
mod types;

pub use error::FetchFailure;
pub use event::LauncherEvent;
pub use readiness::{
    can_join_selected_game, can_launch_rwe, can_start_current_game,
    can_start_game,
};
pub use types::{
    AppState, ChatMessage, ConnectionStatus, GameId, GameListEntry, GameRoom,
    InstalledModInfo, MapCacheValue, MapDialogState, MapInfo, PlayerColor,
    PlayerId, PlayerInfo, PlayerSide, PlayerSlot, Screen,
};
