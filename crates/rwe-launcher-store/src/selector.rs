//! Memoized selectors over state snapshots.
//!
//! A selector derives a small value from a large snapshot. Processes that
//! react to state changes only care when the derived value changes, not
//! when some unrelated part of the snapshot does (a chat message arriving,
//! say), so they run snapshots through a [`MemoSelector`].

use rwe_launcher_model::{AppState, MapCacheValue};

/// Remembers the last derived value and reports only changes.
///
/// Capacity is one: the previous value is all that is kept. Equality is by
/// value.
#[derive(Debug, Clone)]
pub struct MemoSelector<T> {
    last: Option<T>,
}

impl<T: PartialEq> MemoSelector<T> {
    /// Creates a selector that has seen nothing yet, so the first value
    /// is always reported.
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Feeds the next derived value.
    ///
    /// Returns `Some` with the value if it differs from the previous one,
    /// `None` if it is the same.
    pub fn update(&mut self, next: T) -> Option<&T> {
        if self.last.as_ref() == Some(&next) {
            return None;
        }
        self.last = Some(next);
        self.last.as_ref()
    }

    /// The last value reported, if any.
    pub fn current(&self) -> Option<&T> {
        self.last.as_ref()
    }

    /// Forgets the last value, so the next update is reported even if it
    /// is equal.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl<T: PartialEq> Default for MemoSelector<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The selected map of the open map dialog, paired with its cache entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapSelection {
    pub map_name: Option<String>,
    pub cache_entry: Option<MapCacheValue>,
}

impl MapSelection {
    /// The map whose info must be fetched: selected but not yet cached.
    pub fn needs_fetch(&self) -> Option<&str> {
        match (&self.map_name, &self.cache_entry) {
            (Some(name), None) => Some(name),
            _ => None,
        }
    }
}

/// Derives the [`MapSelection`] of a snapshot.
///
/// Empty when not in a room or when the map dialog is closed.
pub fn map_selection(state: &AppState) -> MapSelection {
    let Some(room) = state.room() else {
        return MapSelection::default();
    };
    let Some(map_name) = room.dialog_selected_map() else {
        return MapSelection::default();
    };

    MapSelection {
        map_name: Some(map_name.to_string()),
        cache_entry: room.map_cache.get(map_name).cloned(),
    }
}
