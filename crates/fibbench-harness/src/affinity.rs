//! Optional CPU pinning of the benchmark thread.

use tracing::{debug, warn};

/// Pin the calling thread to logical core `core`.
///
/// Returns `false` when the core does not exist or the OS refused; the run
/// then continues unpinned.
#[must_use]
pub fn pin_current_thread(core: usize) -> bool {
    let Some(ids) = core_affinity::get_core_ids() else {
        warn!(core, "Could not enumerate CPU cores, running unpinned");
        return false;
    };
    let Some(id) = ids.into_iter().find(|id| id.id == core) else {
        warn!(core, "No such CPU core, running unpinned");
        return false;
    };
    let pinned = core_affinity::set_for_current(id);
    if pinned {
        debug!(core, "Pinned benchmark thread");
    } else {
        warn!(core, "Failed to pin benchmark thread");
    }
    pinned
}
