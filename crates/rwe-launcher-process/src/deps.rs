//! Collaborators handed to every process.

use std::path::PathBuf;
use std::sync::Arc;

use rwe_launcher_bridge::{BridgeService, ModSource};

/// Everything the processes need from the outside world.
///
/// Built once by whoever wires the launcher together and cloned into each
/// process. Tests build one around fakes.
pub struct LauncherDeps<B: BridgeService, M: ModSource> {
    /// The game-engine bridge.
    pub bridge: Arc<B>,
    /// Local mod discovery.
    pub mods: Arc<M>,
    /// Directory scanned by [`ModSource::installed_mods`].
    pub mods_path: PathBuf,
}

impl<B: BridgeService, M: ModSource> LauncherDeps<B, M> {
    pub fn new(bridge: B, mods: M, mods_path: impl Into<PathBuf>) -> Self {
        Self {
            bridge: Arc::new(bridge),
            mods: Arc::new(mods),
            mods_path: mods_path.into(),
        }
    }
}

impl<B: BridgeService, M: ModSource> Clone for LauncherDeps<B, M> {
    fn clone(&self) -> Self {
        Self {
            bridge: Arc::clone(&self.bridge),
            mods: Arc::clone(&self.mods),
            mods_path: self.mods_path.clone(),
        }
    }
}
