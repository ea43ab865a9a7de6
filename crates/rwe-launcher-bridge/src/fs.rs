//! Filesystem mod discovery: one mod per sub-directory.

use std::path::Path;

use rwe_launcher_model::InstalledModInfo;

use crate::{DiscoveryError, ModSource};

/// Discovers mods by listing the immediate sub-directories of the mods path.
///
/// Plain files in the mods directory are ignored. Results are sorted by name
/// so repeated scans produce the same list.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsModSource;

impl ModSource for FsModSource {
    async fn installed_mods(
        &self,
        path: &Path,
    ) -> Result<Vec<InstalledModInfo>, DiscoveryError> {
        let metadata = tokio::fs::metadata(path).await?;
        if !metadata.is_dir() {
            return Err(DiscoveryError::NotADirectory(path.to_path_buf()));
        }

        let mut mods = Vec::new();
        let mut entries = tokio::fs::read_dir(path).await?;
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_dir() {
                continue;
            }
            mods.push(InstalledModInfo {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry.path().to_string_lossy().into_owned(),
            });
        }
        mods.sort_by(|a, b| a.name.cmp(&b.name));

        tracing::debug!(
            path = %path.display(),
            count = mods.len(),
            "scanned mods directory"
        );
        Ok(mods)
    }
}
