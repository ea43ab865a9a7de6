//! `Launcher` builder and handle.
//!
//! This is the entry point for embedding the launcher core. It ties the
//! layers together: the store owns the state, the coordinator runs the
//! processes against it, and the UI dispatches events and reads snapshots.

use std::sync::Arc;

use rwe_launcher_bridge::{BridgeService, ModSource};
use rwe_launcher_model::{
    can_join_selected_game, can_launch_rwe, can_start_current_game, AppState,
    LauncherEvent,
};
use rwe_launcher_process::{Coordinator, LauncherDeps};
use rwe_launcher_store::{spawn_store, StoreHandle};
use tokio::sync::{broadcast, watch};

use crate::{LauncherConfig, LauncherError};

/// Builder for configuring and starting a [`Launcher`].
///
/// # Example
///
/// ```rust,ignore
/// use rwe_launcher::prelude::*;
///
/// let launcher = Launcher::builder()
///     .config(LauncherConfig::load(Path::new("launcher.json"))?)
///     .build(my_bridge, FsModSource);
/// launcher.dispatch(LauncherEvent::EnterGameRoom).await?;
/// ```
#[derive(Debug, Default)]
pub struct LauncherBuilder {
    config: LauncherConfig,
    initial_state: AppState,
}

impl LauncherBuilder {
    /// Creates a builder with the default config and an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: LauncherConfig) -> Self {
        self.config = config;
        self
    }

    /// Seeds the store, e.g. with a state restored from disk.
    pub fn initial_state(mut self, state: AppState) -> Self {
        self.initial_state = state;
        self
    }

    /// Spawns the store and every process.
    ///
    /// Must be called from within a Tokio runtime. Mod discovery starts
    /// immediately against the configured mods path.
    pub fn build<B: BridgeService, M: ModSource>(
        self,
        bridge: B,
        mods: M,
    ) -> Launcher {
        let config = self.config.validated();
        let store = spawn_store(self.initial_state, config.store_config());
        let deps = LauncherDeps::new(bridge, mods, config.mods_path.clone());
        let processes = Coordinator::attach(&deps, &store);

        tracing::info!(
            mods_path = %config.mods_path.display(),
            "launcher started"
        );

        Launcher {
            config,
            store,
            processes,
        }
    }
}

/// A running launcher core.
pub struct Launcher {
    config: LauncherConfig,
    store: StoreHandle,
    processes: Coordinator,
}

impl Launcher {
    pub fn builder() -> LauncherBuilder {
        LauncherBuilder::new()
    }

    /// The config the launcher was started with, after validation.
    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    /// Sends a UI or lobby event to the store.
    pub async fn dispatch(
        &self,
        event: LauncherEvent,
    ) -> Result<(), LauncherError> {
        Ok(self.store.dispatch(event).await?)
    }

    /// The latest state snapshot.
    pub fn state(&self) -> Arc<AppState> {
        self.store.state()
    }

    /// A receiver notified on every new snapshot.
    pub fn watch_state(&self) -> watch::Receiver<Arc<AppState>> {
        self.store.watch_state()
    }

    /// Events as they are reduced, for UIs that react to intents.
    pub fn subscribe(&self) -> broadcast::Receiver<LauncherEvent> {
        self.store.subscribe()
    }

    /// Whether the local player may start the current room's game.
    pub fn can_start_game(&self) -> bool {
        can_start_current_game(&self.state())
    }

    pub fn can_join_selected_game(&self) -> bool {
        can_join_selected_game(&self.state())
    }

    pub fn can_launch_rwe(&self) -> bool {
        can_launch_rwe(&self.state())
    }

    /// Stops every process, then the store.
    ///
    /// In-flight bridge calls are abandoned; their results are never
    /// delivered.
    pub async fn shutdown(mut self) {
        self.processes.shutdown();
        self.processes.join().await;
        self.store.shutdown();
        tracing::info!("launcher stopped");
    }
}
