//! In-memory collaborators shared by the process tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rwe_launcher_bridge::{
    BridgeError, BridgeService, DiscoveryError, MapInfo, MapList, MapListEntry,
    Minimap, ModSource,
};
use rwe_launcher_model::{
    AppState, GameRoom, InstalledModInfo, LauncherEvent, MapCacheValue,
    MapDialogState, Screen,
};
use tokio::sync::{mpsc, Semaphore};

// =========================================================================
// Fake bridge
// =========================================================================

/// A bridge whose answers are derived from the map name.
///
/// Calls for a gated map block until the gate is opened. Every call is
/// recorded.
#[derive(Default)]
pub struct FakeBridge {
    maps: Vec<String>,
    gates: Mutex<HashMap<String, Arc<Semaphore>>>,
    failing_minimaps: Mutex<HashSet<String>>,
    failing_once: Mutex<HashSet<String>>,
    fail_map_list: AtomicBool,
    info_calls: Mutex<Vec<String>>,
    minimap_calls: Mutex<Vec<String>>,
    list_calls: AtomicUsize,
}

impl FakeBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_maps(maps: &[&str]) -> Self {
        Self {
            maps: maps.iter().map(|m| m.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Blocks both calls for `map_name` until [`Gate::open`].
    pub fn gate(&self, map_name: &str) -> Gate {
        let sem = Arc::new(Semaphore::new(0));
        self.gates
            .lock()
            .unwrap()
            .insert(map_name.to_string(), Arc::clone(&sem));
        Gate(sem)
    }

    pub fn fail_minimap(&self, map_name: &str) {
        self.failing_minimaps
            .lock()
            .unwrap()
            .insert(map_name.to_string());
    }

    /// Fails the next minimap call for `map_name`; later calls succeed.
    pub fn fail_minimap_once(&self, map_name: &str) {
        self.failing_once
            .lock()
            .unwrap()
            .insert(map_name.to_string());
    }

    pub fn fail_map_list(&self) {
        self.fail_map_list.store(true, Ordering::SeqCst);
    }

    pub fn info_calls(&self) -> Vec<String> {
        self.info_calls.lock().unwrap().clone()
    }

    pub fn minimap_calls(&self) -> Vec<String> {
        self.minimap_calls.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    async fn pass_gate(&self, map_name: &str) {
        let gate = self.gates.lock().unwrap().get(map_name).cloned();
        if let Some(gate) = gate {
            let _permit = gate.acquire().await;
        }
    }
}

impl BridgeService for FakeBridge {
    async fn get_map_info(
        &self,
        map_name: &str,
    ) -> Result<MapInfo, BridgeError> {
        self.info_calls.lock().unwrap().push(map_name.to_string());
        self.pass_gate(map_name).await;
        Ok(info_for(map_name))
    }

    async fn get_minimap(
        &self,
        map_name: &str,
    ) -> Result<Minimap, BridgeError> {
        self.minimap_calls.lock().unwrap().push(map_name.to_string());
        self.pass_gate(map_name).await;
        let fails = self.failing_minimaps.lock().unwrap().contains(map_name)
            || self.failing_once.lock().unwrap().remove(map_name);
        if fails {
            return Err(BridgeError::Request(format!(
                "cannot render minimap for {map_name}"
            )));
        }
        Ok(Minimap {
            path: minimap_for(map_name),
        })
    }

    async fn get_map_list(&self) -> Result<MapList, BridgeError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_map_list.load(Ordering::SeqCst) {
            return Err(BridgeError::Unreachable("bridge not running".into()));
        }
        Ok(MapList {
            maps: self
                .maps
                .iter()
                .map(|name| MapListEntry { name: name.clone() })
                .collect(),
        })
    }
}

/// Releases every call waiting on one map, now and later.
pub struct Gate(Arc<Semaphore>);

impl Gate {
    pub fn open(&self) {
        self.0.add_permits(1);
    }
}

pub fn info_for(map_name: &str) -> MapInfo {
    MapInfo {
        description: format!("{map_name} description"),
        memory: "32 MB".into(),
        number_of_players: "4".into(),
    }
}

pub fn minimap_for(map_name: &str) -> String {
    format!("/tmp/minimaps/{map_name}.png")
}

// =========================================================================
// Fake mod source
// =========================================================================

#[derive(Default)]
pub struct FakeMods {
    mods: Vec<InstalledModInfo>,
    fail: bool,
    requested: Mutex<Vec<PathBuf>>,
}

impl FakeMods {
    pub fn with_mods(names: &[&str]) -> Self {
        Self {
            mods: names
                .iter()
                .map(|name| InstalledModInfo {
                    name: name.to_string(),
                    path: format!("mods/{name}"),
                })
                .collect(),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn requested(&self) -> Vec<PathBuf> {
        self.requested.lock().unwrap().clone()
    }
}

impl ModSource for FakeMods {
    async fn installed_mods(
        &self,
        path: &Path,
    ) -> Result<Vec<InstalledModInfo>, DiscoveryError> {
        self.requested.lock().unwrap().push(path.to_path_buf());
        if self.fail {
            return Err(DiscoveryError::NotADirectory(path.to_path_buf()));
        }
        Ok(self.mods.clone())
    }
}

// =========================================================================
// State and channel helpers
// =========================================================================

pub fn cache_value(map_name: &str) -> MapCacheValue {
    MapCacheValue::from_parts(info_for(map_name), minimap_for(map_name))
}

/// In a room with the map dialog open on `selected`, with `cached` maps
/// already in the cache.
pub fn dialog_state(selected: Option<&str>, cached: &[&str]) -> AppState {
    let room = GameRoom {
        map_dialog: Some(MapDialogState {
            maps: None,
            selected_map: selected.map(String::from),
        }),
        map_cache: cached
            .iter()
            .map(|name| (name.to_string(), cache_value(name)))
            .collect(),
        ..GameRoom::default()
    };
    AppState {
        current_screen: Screen::GameRoom { room: Some(room) },
        ..AppState::default()
    }
}

/// Receives the next event, failing the test after a second.
pub async fn next_event(
    rx: &mut mpsc::Receiver<LauncherEvent>,
) -> LauncherEvent {
    tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("timed out waiting for an event")
        .expect("event channel closed")
}

/// Asserts nothing arrives for a short while.
pub async fn assert_quiet(rx: &mut mpsc::Receiver<LauncherEvent>) {
    let got = tokio::time::timeout(Duration::from_millis(100), rx.recv()).await;
    assert!(got.is_err(), "unexpected event: {got:?}");
}

/// Polls `cond` until it holds, failing the test after a second.
pub async fn wait_until(mut cond: impl FnMut() -> bool) {
    tokio::time::timeout(Duration::from_secs(1), async {
        while !cond() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("condition never held");
}
