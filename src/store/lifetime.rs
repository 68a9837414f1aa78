use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Disposal flag shared between a store, its runtime task and any
/// in-flight work spawned on its behalf.
#[derive(Clone)]
pub struct Lifetime {
    disposed: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl Lifetime {
    pub fn new() -> Self {
        Self {
            disposed: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Mark as disposed. Returns true only for the first call.
    pub fn dispose(&self) -> bool {
        if self.disposed.swap(true, Ordering::SeqCst) {
            return false;
        }
        self.notify.notify_waiters();
        true
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    /// Resolve once [`dispose`](Self::dispose) has been called.
    pub async fn disposed(&self) {
        // Register with Notify before reading the flag, otherwise a dispose()
        // landing between the check and the await would be missed.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_disposed() {
            return;
        }
        notified.await;
    }
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}
