//! Wiring between a store's effects and the outside world.
//!
//! An [`EffectBridge`] is a subscription task applying an [`EffectHandler`]
//! to every effect a store publishes. It lives exactly as long as the value
//! returned by [`EffectBridge::install`]: dropping it stops delivery, so a
//! disposed screen never drives its coordinator again.
//!
//! Delivery runs the handler while holding the bridge's `active` lock, and
//! teardown takes the same lock. Once teardown returns, no handler call is
//! in progress and none will start.

mod handler;
mod scope;

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;

use crate::mvi::Effect;

pub use handler::{handler_fn, EffectHandler, FnHandler};
pub use scope::ScreenScope;

/// Live subscription from an effect channel to a handler.
pub struct EffectBridge {
    label: &'static str,
    active: Arc<Mutex<bool>>,
    task: JoinHandle<()>,
}

impl EffectBridge {
    /// Start delivering effects from `effects` to `handler`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn install<E, H>(
        label: &'static str,
        mut effects: broadcast::Receiver<E>,
        mut handler: H,
    ) -> Self
    where
        E: Effect,
        H: EffectHandler<E>,
    {
        let active = Arc::new(Mutex::new(true));
        let flag = Arc::clone(&active);

        let task = tokio::spawn(async move {
            loop {
                match effects.recv().await {
                    Ok(effect) => {
                        let active = flag.lock();
                        if !*active {
                            tracing::trace!(
                                bridge = label,
                                ?effect,
                                "Effect dropped (bridge torn down)"
                            );
                            break;
                        }
                        tracing::debug!(bridge = label, ?effect, "Delivering effect");
                        handler.handle(effect);
                        drop(active);
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(
                            bridge = label,
                            skipped,
                            "Effect subscriber lagged, effects lost"
                        );
                    }
                    Err(RecvError::Closed) => {
                        tracing::debug!(bridge = label, "Effect channel closed");
                        break;
                    }
                }
            }
        });

        tracing::debug!(bridge = label, "Effect bridge installed");
        Self {
            label,
            active,
            task,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Whether effects are still being delivered.
    pub fn is_active(&self) -> bool {
        *self.active.lock() && !self.task.is_finished()
    }

    /// Stop delivery now. Same as dropping the bridge.
    pub fn teardown(self) {}
}

impl Drop for EffectBridge {
    fn drop(&mut self) {
        // Blocks while a handler call is in progress.
        let was_active = std::mem::replace(&mut *self.active.lock(), false);
        if was_active {
            tracing::debug!(bridge = self.label, "Effect bridge torn down");
        }
        self.task.abort();
    }
}
