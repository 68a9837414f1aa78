use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, watch};
use tracing::Instrument;

use crate::mvi::{Feature, Reducer, Work};

use super::{Lifetime, Message};

/// Task-side half of a store. Owns the state; nothing else mutates it.
pub(super) struct StoreRuntime<F: Feature> {
    feature: F,
    state: F::State,
    publisher: watch::Sender<Arc<F::State>>,
    effects: broadcast::Sender<F::Effect>,
    inbox: mpsc::UnboundedSender<Message<F>>,
    lifetime: Lifetime,
    processed: u64,
}

impl<F: Feature> StoreRuntime<F> {
    pub(super) fn new(
        feature: F,
        state: F::State,
        publisher: watch::Sender<Arc<F::State>>,
        effects: broadcast::Sender<F::Effect>,
        inbox: mpsc::UnboundedSender<Message<F>>,
        lifetime: Lifetime,
    ) -> Self {
        Self {
            feature,
            state,
            publisher,
            effects,
            inbox,
            lifetime,
            processed: 0,
        }
    }

    pub(super) async fn run(mut self, mut messages: mpsc::UnboundedReceiver<Message<F>>) {
        let lifetime = self.lifetime.clone();
        loop {
            tokio::select! {
                biased;
                _ = lifetime.disposed() => break,
                message = messages.recv() => match message {
                    Some(message) => self.handle(message),
                    None => break,
                },
            }
        }
        tracing::debug!(processed = self.processed, "Store runtime stopped");
    }

    fn handle(&mut self, message: Message<F>) {
        match message {
            Message::Intent(intent) => {
                tracing::trace!(?intent, "Intent received");
                for action in F::actions(&self.state, intent) {
                    self.apply(action);
                }
            }
            Message::Action(action) => self.apply(action),
        }
    }

    fn apply(&mut self, action: F::Action) {
        tracing::debug!(?action, "Reducing action");
        let next =
            <F::Reducer as Reducer>::reduce(std::mem::take(&mut self.state), action.clone());
        self.publisher.send_if_modified(|current| {
            if **current == next {
                return false;
            }
            *current = Arc::new(next.clone());
            true
        });
        self.state = next;
        self.processed += 1;

        for effect in F::effects(&self.state, &action) {
            tracing::debug!(?effect, "Publishing effect");
            if self.effects.send(effect).is_err() {
                tracing::trace!("Effect dropped (no subscribers)");
            }
        }

        if let Some(work) = self.feature.work(&self.state, &action) {
            self.launch(work);
        }
    }

    fn launch(&self, work: Work<F::Action>) {
        let inbox = self.inbox.clone();
        let lifetime = self.lifetime.clone();
        tokio::spawn(
            async move {
                let outcome = work.await;
                if lifetime.is_disposed() {
                    tracing::trace!(?outcome, "Late action dropped (store disposed)");
                    return;
                }
                if inbox.send(Message::Action(outcome)).is_err() {
                    tracing::trace!("Late action dropped (runtime gone)");
                }
            }
            .instrument(tracing::Span::current()),
        );
    }
}
