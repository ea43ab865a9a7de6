//! Error types for the store layer.

/// Errors that can occur when talking to the store actor.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store's event channel is closed: the actor has shut down.
    #[error("store is unavailable")]
    Unavailable,
}
