//! Map info coordination: fetch info + minimap for the selected map.
//!
//! The process watches state snapshots through a [`MemoSelector`] over
//! [`map_selection`]. Whenever the selected map changes and is not cached,
//! it starts one fetch that runs the bridge's map info and minimap calls
//! concurrently and joins them.
//!
//! # Switch semantics
//!
//! Every change of the selection bumps a generation counter, and each fetch
//! remembers the generation it was started under. When a fetch finishes,
//! its result is forwarded only if that generation is still current.
//! Superseded fetches are not aborted; they run to completion and their
//! results, successful or not, are dropped here.
//!
//! ```text
//! select A ──→ gen 1, fetch(A) ·························· done(A, gen 1) ✗
//! select B ──────────→ gen 2, fetch(B) ····· done(B, gen 2) ✓
//! ```
//!
//! # Retry
//!
//! A failed fetch leaves the selection uncached, but the selection itself
//! has not changed, so snapshots alone never fetch it again. The process
//! also listens to reduced events: `DialogSelectMap` or
//! `OpenSelectMapDialog` arriving after a failure forgets the memoized
//! selection, and the next sync fetches it once more. Any other event,
//! such as a chat message, leaves the failure alone.

use std::sync::Arc;

use futures_util::future::try_join;
use rwe_launcher_bridge::{BridgeError, BridgeService, MapInfo, Minimap};
use rwe_launcher_model::{AppState, FetchFailure, LauncherEvent};
use rwe_launcher_store::{
    map_selection, EventSender, MapSelection, MemoSelector,
};
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, mpsc, watch};
use tracing::{debug, info, warn};

/// A finished fetch, reported back to the coordinating loop.
struct FetchOutcome {
    generation: u64,
    map_name: String,
    result: Result<(MapInfo, Minimap), BridgeError>,
}

impl FetchOutcome {
    fn into_event(self) -> LauncherEvent {
        match self.result {
            Ok((info, minimap)) => LauncherEvent::CombinedMapInfoReceived {
                map_name: self.map_name,
                info,
                minimap_path: minimap.path,
            },
            Err(e) => LauncherEvent::Failed {
                failure: FetchFailure::MapInfo {
                    map_name: self.map_name,
                    reason: e.to_string(),
                },
            },
        }
    }
}

/// The map info coordination process.
pub struct MapInfoProcess<B: BridgeService> {
    bridge: Arc<B>,
    state: watch::Receiver<Arc<AppState>>,
    actions: broadcast::Receiver<LauncherEvent>,
    out: EventSender,
    selection: MemoSelector<MapSelection>,
    /// Bumped on every selection change. Only the fetch started under the
    /// current value may publish.
    generation: u64,
    /// The fetch for the current generation finished with an error.
    failed: bool,
    done_tx: mpsc::UnboundedSender<FetchOutcome>,
    done_rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl<B: BridgeService> MapInfoProcess<B> {
    pub fn new(
        bridge: Arc<B>,
        state: watch::Receiver<Arc<AppState>>,
        actions: broadcast::Receiver<LauncherEvent>,
        out: EventSender,
    ) -> Self {
        let (done_tx, done_rx) = mpsc::unbounded_channel();
        Self {
            bridge,
            state,
            actions,
            out,
            selection: MemoSelector::new(),
            generation: 0,
            failed: false,
            done_tx,
            done_rx,
        }
    }

    /// Runs until the store stops publishing or stops accepting events.
    pub async fn run(mut self) {
        info!("map info process started");
        self.sync_with_latest();

        loop {
            tokio::select! {
                biased;
                changed = self.state.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    self.sync_with_latest();
                }
                action = self.actions.recv() => match action {
                    Ok(event) => self.on_action(&event),
                    Err(RecvError::Lagged(missed)) => {
                        warn!(missed, "map info process lagged");
                    }
                    Err(RecvError::Closed) => break,
                },
                Some(outcome) = self.done_rx.recv() => {
                    // Gate on the newest snapshot, not the last one we
                    // happened to look at.
                    self.sync_with_latest();
                    if outcome.generation != self.generation {
                        debug!(
                            map_name = %outcome.map_name,
                            generation = outcome.generation,
                            current = self.generation,
                            "discarding superseded map info"
                        );
                        continue;
                    }
                    if let Err(e) = &outcome.result {
                        warn!(
                            map_name = %outcome.map_name,
                            error = %e,
                            "map info fetch failed"
                        );
                        self.failed = true;
                    }
                    if self.out.send(outcome.into_event()).await.is_err() {
                        break;
                    }
                }
            }
        }

        info!("map info process stopped");
    }

    /// Re-arms a failed selection when the user picks or reopens it.
    fn on_action(&mut self, event: &LauncherEvent) {
        let retrigger = matches!(
            event,
            LauncherEvent::DialogSelectMap { .. }
                | LauncherEvent::OpenSelectMapDialog
        );
        if retrigger && self.failed {
            debug!(event = event.name(), "retrying failed map info");
            self.selection.reset();
        }
        self.sync_with_latest();
    }

    /// Feeds the latest snapshot through the selector, starting a fetch
    /// if the selection changed to an uncached map.
    fn sync_with_latest(&mut self) {
        let snapshot = Arc::clone(&self.state.borrow_and_update());
        let Some(selection) = self.selection.update(map_selection(&snapshot))
        else {
            return;
        };

        self.generation += 1;
        self.failed = false;
        if let Some(map_name) = selection.needs_fetch() {
            let map_name = map_name.to_string();
            self.spawn_fetch(map_name);
        }
    }

    fn spawn_fetch(&self, map_name: String) {
        let generation = self.generation;
        let bridge = Arc::clone(&self.bridge);
        let done = self.done_tx.clone();
        debug!(%map_name, generation, "fetching map info");

        tokio::spawn(async move {
            let result = try_join(
                bridge.get_map_info(&map_name),
                bridge.get_minimap(&map_name),
            )
            .await;
            // The loop is gone if this fails; nobody wants the result.
            let _ = done.send(FetchOutcome {
                generation,
                map_name,
                result,
            });
        });
    }
}
