//! Action dispatch router: turns one-shot UI intents into bridge fetches.
//!
//! The router listens to events after the store has reduced them. Only
//! `OpenSelectMapDialog` does anything: it fetches the map list and emits
//! `MapListReceived`. Each trigger gets its own fetch task, so a dialog
//! opened twice in quick succession produces two independent fetches whose
//! results may land in either order.

use std::sync::Arc;

use rwe_launcher_bridge::BridgeService;
use rwe_launcher_model::{FetchFailure, LauncherEvent};
use rwe_launcher_store::EventSender;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

/// The action dispatch router process.
pub struct ActionRouter<B: BridgeService> {
    bridge: Arc<B>,
    actions: broadcast::Receiver<LauncherEvent>,
    out: EventSender,
}

impl<B: BridgeService> ActionRouter<B> {
    pub fn new(
        bridge: Arc<B>,
        actions: broadcast::Receiver<LauncherEvent>,
        out: EventSender,
    ) -> Self {
        Self {
            bridge,
            actions,
            out,
        }
    }

    /// Runs until the store's event broadcast closes.
    pub async fn run(mut self) {
        info!("action router started");

        loop {
            match self.actions.recv().await {
                Ok(event) => self.route(&event),
                Err(RecvError::Lagged(missed)) => {
                    warn!(missed, "action router lagged, events skipped");
                }
                Err(RecvError::Closed) => break,
            }
        }

        info!("action router stopped");
    }

    /// Everything but `OpenSelectMapDialog` is ignored.
    fn route(&self, event: &LauncherEvent) {
        if matches!(event, LauncherEvent::OpenSelectMapDialog) {
            self.spawn_map_list_fetch();
        }
    }

    fn spawn_map_list_fetch(&self) {
        let bridge = Arc::clone(&self.bridge);
        let out = self.out.clone();
        debug!("fetching map list");

        tokio::spawn(async move {
            let event = match bridge.get_map_list().await {
                Ok(list) => LauncherEvent::MapListReceived {
                    maps: list.names(),
                },
                Err(e) => {
                    warn!(error = %e, "map list fetch failed");
                    LauncherEvent::Failed {
                        failure: FetchFailure::MapList {
                            reason: e.to_string(),
                        },
                    }
                }
            };
            if out.send(event).await.is_err() {
                warn!("store closed before the map list could be delivered");
            }
        });
    }
}
