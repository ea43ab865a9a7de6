//! Root coordinator: runs every process against one merged event stream.
//!
//! Each process gets its own clone of the same `mpsc::Sender`. The channel
//! keeps each sender's events in the order they were sent, so a process's
//! own ordering survives the merge; events from different processes
//! interleave in whatever order they happen to arrive. The coordinator adds
//! no buffering of its own.

use std::sync::Arc;

use rwe_launcher_bridge::{BridgeService, ModSource};
use rwe_launcher_model::{AppState, LauncherEvent};
use rwe_launcher_store::{EventSender, StoreHandle};
use tokio::sync::{broadcast, watch};
use tokio::task::JoinSet;

use crate::{discover_mods, ActionRouter, LauncherDeps, MapInfoProcess};

/// The set of running coordination processes.
pub struct Coordinator {
    tasks: JoinSet<()>,
}

impl Coordinator {
    /// Starts every process.
    ///
    /// - `state`: snapshots to observe (map info process)
    /// - `actions`: reduced events (action router, map info retries);
    ///   each process gets its own subscription
    /// - `out`: the merged output stream
    pub fn start<B: BridgeService, M: ModSource>(
        deps: &LauncherDeps<B, M>,
        state: watch::Receiver<Arc<AppState>>,
        actions: broadcast::Receiver<LauncherEvent>,
        out: EventSender,
    ) -> Self {
        let mut tasks = JoinSet::new();

        let map_info = MapInfoProcess::new(
            Arc::clone(&deps.bridge),
            state,
            actions.resubscribe(),
            out.clone(),
        );
        tasks.spawn(map_info.run());
        tasks.spawn(
            ActionRouter::new(Arc::clone(&deps.bridge), actions, out.clone())
                .run(),
        );

        let mods = Arc::clone(&deps.mods);
        let mods_path = deps.mods_path.clone();
        tasks.spawn(async move {
            discover_mods(mods.as_ref(), &mods_path, &out).await;
        });

        tracing::info!(processes = tasks.len(), "coordinator started");
        Self { tasks }
    }

    /// Starts every process wired to `store`: observing its snapshots and
    /// reduced events, emitting into its event channel.
    pub fn attach<B: BridgeService, M: ModSource>(
        deps: &LauncherDeps<B, M>,
        store: &StoreHandle,
    ) -> Self {
        Self::start(
            deps,
            store.watch_state(),
            store.subscribe(),
            store.sender(),
        )
    }

    /// Stops every process. In-flight bridge calls are abandoned.
    pub fn shutdown(&mut self) {
        self.tasks.abort_all();
        tracing::info!("coordinator shut down");
    }

    /// Waits for every process to finish on its own.
    pub async fn join(mut self) {
        while let Some(result) = self.tasks.join_next().await {
            if let Err(e) = result {
                if e.is_panic() {
                    tracing::error!(error = %e, "process panicked");
                }
            }
        }
    }

    /// Number of processes that have not been joined yet. Dropping the
    /// coordinator aborts them.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
