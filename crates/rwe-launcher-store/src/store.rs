//! Store actor: a single Tokio task that owns the application state.
//!
//! Events arrive on an mpsc channel. For each one the actor applies
//! [`reduce`], publishes the new snapshot on a `watch` channel, and then
//! re-broadcasts the event so processes can react to it. Nobody else ever
//! holds a mutable reference to the state, so no locks are needed.

use std::sync::Arc;

use rwe_launcher_model::{AppState, LauncherEvent};
use tokio::sync::{broadcast, mpsc, watch, Notify};

use crate::{reduce, StoreConfig, StoreError};

/// Channel sender for delivering events to the store.
pub type EventSender = mpsc::Sender<LauncherEvent>;

/// Handle to a running store actor.
///
/// Cheap to clone; every clone talks to the same actor.
#[derive(Clone)]
pub struct StoreHandle {
    events: EventSender,
    state: watch::Receiver<Arc<AppState>>,
    actions: broadcast::Sender<LauncherEvent>,
    shutdown: Arc<Notify>,
}

impl StoreHandle {
    /// Sends an event to be reduced.
    ///
    /// Waits if the event channel is full.
    pub async fn dispatch(
        &self,
        event: LauncherEvent,
    ) -> Result<(), StoreError> {
        self.events
            .send(event)
            .await
            .map_err(|_| StoreError::Unavailable)
    }

    /// A sender for the inbound event stream, for processes to emit into.
    pub fn sender(&self) -> EventSender {
        self.events.clone()
    }

    /// The latest snapshot.
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state.borrow())
    }

    /// A receiver that is notified whenever a new snapshot is published.
    pub fn watch_state(&self) -> watch::Receiver<Arc<AppState>> {
        self.state.clone()
    }

    /// Subscribes to events after they have been reduced.
    ///
    /// A subscriber only sees events reduced after it subscribed.
    pub fn subscribe(&self) -> broadcast::Receiver<LauncherEvent> {
        self.actions.subscribe()
    }

    /// Tells the actor to stop. Events still queued are dropped.
    pub fn shutdown(&self) {
        self.shutdown.notify_one();
    }
}

/// The internal actor state. Runs inside a Tokio task.
struct StoreActor {
    state: Arc<AppState>,
    receiver: mpsc::Receiver<LauncherEvent>,
    snapshots: watch::Sender<Arc<AppState>>,
    actions: broadcast::Sender<LauncherEvent>,
    shutdown: Arc<Notify>,
}

impl StoreActor {
    /// Runs the actor loop until shutdown.
    async fn run(mut self) {
        tracing::info!("store actor started");

        loop {
            tokio::select! {
                biased;
                _ = self.shutdown.notified() => {
                    tracing::info!("store shutting down");
                    break;
                }
                event = self.receiver.recv() => match event {
                    Some(event) => self.handle_event(event),
                    // Every sender is gone; nothing can reach us anymore.
                    None => break,
                },
            }
        }

        tracing::info!("store actor stopped");
    }

    fn handle_event(&mut self, event: LauncherEvent) {
        tracing::debug!(event = event.name(), "reducing event");

        self.state = Arc::new(reduce(&self.state, &event));
        self.snapshots.send_replace(Arc::clone(&self.state));

        // No subscribers is fine.
        let _ = self.actions.send(event);
    }
}

/// Spawns a store actor seeded with `initial` and returns its handle.
pub fn spawn_store(initial: AppState, config: StoreConfig) -> StoreHandle {
    let (events_tx, events_rx) = mpsc::channel(config.event_channel_size);
    let initial = Arc::new(initial);
    let (snapshots_tx, snapshots_rx) = watch::channel(Arc::clone(&initial));
    let (actions_tx, _) = broadcast::channel(config.action_channel_size);
    let shutdown = Arc::new(Notify::new());

    let actor = StoreActor {
        state: initial,
        receiver: events_rx,
        snapshots: snapshots_tx,
        actions: actions_tx.clone(),
        shutdown: Arc::clone(&shutdown),
    };

    tokio::spawn(actor.run());

    StoreHandle {
        events: events_tx,
        state: snapshots_rx,
        actions: actions_tx,
        shutdown,
    }
}
