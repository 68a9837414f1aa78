use crate::mvi::Feature;
use crate::store::Store;

use super::{EffectBridge, EffectHandler};

/// A screen's owned resources: its store and the bridge draining its effects.
///
/// Field order matters: the bridge drops first so no effect is delivered
/// while the store is being disposed.
pub struct ScreenScope<F: Feature> {
    bridge: EffectBridge,
    store: Store<F>,
}

impl<F: Feature> ScreenScope<F> {
    /// Subscribe `handler` to `store`'s effects and take ownership of both.
    pub fn open<H>(store: Store<F>, handler: H) -> Self
    where
        H: EffectHandler<F::Effect>,
    {
        let bridge = EffectBridge::install(F::NAME, store.subscribe_effects(), handler);
        Self { bridge, store }
    }

    pub fn store(&self) -> &Store<F> {
        &self.store
    }

    pub fn send(&self, intent: F::Intent) {
        self.store.send(intent);
    }

    pub fn is_bridged(&self) -> bool {
        self.bridge.is_active()
    }

    /// Tear down the bridge, then dispose the store.
    pub fn close(self) {
        let Self { bridge, store } = self;
        bridge.teardown();
        store.dispose();
    }
}
