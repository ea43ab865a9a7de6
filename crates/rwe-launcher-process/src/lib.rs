//! Long-running coordination processes for the RWE launcher.
//!
//! Processes observe the store and talk to the bridge. None of them mutate
//! state directly; everything they learn comes back as a
//! [`LauncherEvent`](rwe_launcher_model::LauncherEvent) on the store's
//! event channel.
//!
//! | Process | Observes | Emits |
//! |---------|----------|-------|
//! | [`MapInfoProcess`] | snapshots, reduced events | map info, `Failed` |
//! | [`ActionRouter`] | reduced events | `MapListReceived`, `Failed` |
//! | [`discover_mods`] | nothing (runs once) | installed mods, `Failed` |
//!
//! [`Coordinator`] starts all three against one store.
//!
//! # Integration
//!
//! ```ignore
//! let store = spawn_store(AppState::default(), StoreConfig::default());
//! let deps = LauncherDeps::new(bridge, FsModSource, "mods");
//! let mut processes = Coordinator::attach(&deps, &store);
//! // ... dispatch UI events through `store` ...
//! processes.shutdown();
//! store.shutdown();
//! ```

mod actions;
mod coordinator;
mod deps;
mod map_info;
mod mods;

pub use actions::ActionRouter;
pub use coordinator::Coordinator;
pub use deps::LauncherDeps;
pub use map_info::MapInfoProcess;
pub use mods::discover_mods;
