//! Mod discovery: enumerate installed mods once, at startup.

use std::path::Path;

use rwe_launcher_bridge::ModSource;
use rwe_launcher_model::{FetchFailure, LauncherEvent};
use rwe_launcher_store::EventSender;
use tracing::{info, warn};

/// Scans `path` with `source` and emits the result.
///
/// Emits exactly one event: `InstalledModsReceived` on success (possibly an
/// empty list) or `Failed` with [`FetchFailure::Discovery`]. There is no
/// retry.
pub async fn discover_mods<M: ModSource>(
    source: &M,
    path: &Path,
    out: &EventSender,
) {
    let event = match source.installed_mods(path).await {
        Ok(mods) => {
            info!(
                count = mods.len(),
                path = %path.display(),
                "mods discovered"
            );
            LauncherEvent::InstalledModsReceived { mods }
        }
        Err(e) => {
            warn!(error = %e, path = %path.display(), "mod discovery failed");
            LauncherEvent::Failed {
                failure: FetchFailure::Discovery {
                    reason: e.to_string(),
                },
            }
        }
    };

    if out.send(event).await.is_err() {
        warn!("store closed before mods could be delivered");
    }
}
