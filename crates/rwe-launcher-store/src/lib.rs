//! Application state store for the RWE launcher.
//!
//! The store is the single source of truth. It runs as an isolated Tokio
//! task (actor model) that owns the [`AppState`](rwe_launcher_model::AppState)
//! and changes it only by reducing events, one at a time, in arrival order.
//!
//! # Key types
//!
//! - [`spawn_store`] / [`StoreHandle`]: start the actor, dispatch events,
//!   read and watch snapshots, subscribe to reduced events
//! - [`reduce`]: the pure state transition function
//! - [`MemoSelector`] / [`map_selection`]: change-only derived values
//! - [`StoreConfig`]: channel sizes

mod config;
mod error;
mod reducer;
mod selector;
mod store;

pub use config::StoreConfig;
pub use error::StoreError;
pub use reducer::reduce;
pub use selector::{map_selection, MapSelection, MemoSelector};
pub use store::{spawn_store, EventSender, StoreHandle};
