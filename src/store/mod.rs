//! Intent/action/effect engine.
//!
//! A [`Store`] is an actor: one tokio task owns the feature state and drains a
//! single queue of intents and async results, so every reducer application
//! for a store is serialized. Observers get immutable snapshots through a
//! `watch` channel; effects go out on a `broadcast` channel and are lost when
//! nobody is subscribed.

mod lifetime;
mod runtime;

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, watch};
use tracing::Instrument;
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::mvi::Feature;

pub use lifetime::Lifetime;

use runtime::StoreRuntime;

/// Messages accepted by the store runtime.
pub(crate) enum Message<F: Feature> {
    Intent(F::Intent),
    Action(F::Action),
}

/// Owner handle of a running store.
///
/// Dropping it disposes the store: the runtime stops, later intents and late
/// async results are ignored, and effect subscribers see the channel close.
pub struct Store<F: Feature> {
    id: Uuid,
    inbox: mpsc::UnboundedSender<Message<F>>,
    state: watch::Receiver<Arc<F::State>>,
    effects: broadcast::Sender<F::Effect>,
    lifetime: Lifetime,
}

impl<F: Feature> Store<F> {
    /// Spawn a store starting from `F::State::default()`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(feature: F, config: &StoreConfig) -> Self {
        Self::with_state(feature, F::State::default(), config)
    }

    /// Spawn a store starting from `initial`.
    pub fn with_state(feature: F, initial: F::State, config: &StoreConfig) -> Self {
        let id = Uuid::new_v4();
        let (inbox, messages) = mpsc::unbounded_channel();
        let (publisher, state) = watch::channel(Arc::new(initial.clone()));
        let (effects, _) = broadcast::channel(config.effect_capacity.max(1));
        let lifetime = Lifetime::new();

        let runtime = StoreRuntime::new(
            feature,
            initial,
            publisher,
            effects.clone(),
            inbox.clone(),
            lifetime.clone(),
        );
        let span = tracing::debug_span!("store", feature = F::NAME, id = %id);
        tokio::spawn(runtime.run(messages).instrument(span));
        tracing::debug!(feature = F::NAME, id = %id, "Store spawned");

        Self {
            id,
            inbox,
            state,
            effects,
            lifetime,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Queue an intent. Fire-and-forget; ignored once disposed.
    pub fn send(&self, intent: F::Intent) {
        deliver::<F>(&self.inbox, &self.lifetime, Message::Intent(intent));
    }

    /// Cloneable write-only handle for the view layer.
    pub fn dispatcher(&self) -> Dispatcher<F> {
        Dispatcher {
            inbox: self.inbox.clone(),
            lifetime: self.lifetime.clone(),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> Arc<F::State> {
        self.state.borrow().clone()
    }

    /// Subscribe to state snapshots. A notification is raised for every
    /// reducer application that changed state; slow readers only see the latest.
    pub fn observe(&self) -> watch::Receiver<Arc<F::State>> {
        self.state.clone()
    }

    /// Subscribe to effects published from now on. No replay.
    pub fn subscribe_effects(&self) -> broadcast::Receiver<F::Effect> {
        self.effects.subscribe()
    }

    pub fn dispose(&self) {
        if self.lifetime.dispose() {
            tracing::debug!(feature = F::NAME, id = %self.id, "Store disposed");
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.lifetime.is_disposed()
    }
}

impl<F: Feature> Drop for Store<F> {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Write-only handle to a store's intake.
pub struct Dispatcher<F: Feature> {
    inbox: mpsc::UnboundedSender<Message<F>>,
    lifetime: Lifetime,
}

impl<F: Feature> Dispatcher<F> {
    pub fn send(&self, intent: F::Intent) {
        deliver::<F>(&self.inbox, &self.lifetime, Message::Intent(intent));
    }
}

impl<F: Feature> Clone for Dispatcher<F> {
    fn clone(&self) -> Self {
        Self {
            inbox: self.inbox.clone(),
            lifetime: self.lifetime.clone(),
        }
    }
}

fn deliver<F: Feature>(
    inbox: &mpsc::UnboundedSender<Message<F>>,
    lifetime: &Lifetime,
    message: Message<F>,
) {
    if lifetime.is_disposed() {
        tracing::trace!(feature = F::NAME, "Intent dropped (store disposed)");
        return;
    }
    if inbox.send(message).is_err() {
        tracing::trace!(feature = F::NAME, "Intent dropped (runtime gone)");
    }
}
