//! Process-wide single instance, created lazily on first access.

#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use tracing::{debug, trace};

/// Capability exposed by the shared instance.
pub trait Singleton: Send + Sync {
    /// Does nothing. Never fails.
    fn do_work(&self);
}

#[derive(Debug)]
struct Worker;

impl Singleton for Worker {
    fn do_work(&self) {
        trace!("singleton: do_work");
    }
}

static INSTANCE: OnceLock<Worker> = OnceLock::new();
#[cfg(test)]
static CONSTRUCTED: AtomicUsize = AtomicUsize::new(0);

/// Return the shared instance, constructing it on the first call.
///
/// Concurrent first callers block until the winning initializer finishes and
/// then all observe the same instance.
pub fn instance() -> &'static dyn Singleton {
    INSTANCE.get_or_init(|| {
        #[cfg(test)]
        CONSTRUCTED.fetch_add(1, Ordering::SeqCst);
        debug!("singleton: instance constructed");
        Worker
    })
}
