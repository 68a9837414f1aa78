//! Feature definition tying intents, actions, effects and async work together.

use std::future::Future;
use std::pin::Pin;

use super::action::Action;
use super::effect::Effect;
use super::intent::Intent;
use super::reducer::Reducer;
use super::state::UiState;

/// Async operation launched by an action. Resolves to the action that
/// reports its outcome, which re-enters the store's queue.
pub type Work<A> = Pin<Box<dyn Future<Output = A> + Send + 'static>>;

/// One screen's behaviour, run by a [`Store`](crate::store::Store).
///
/// Everything here except [`work`](Feature::work) is a pure function of
/// its arguments. `work` may capture injected use cases from `self`.
pub trait Feature: Send + Sync + 'static {
    /// Name used in log output.
    const NAME: &'static str;

    type State: UiState;
    type Intent: Intent;
    type Action: Action;
    type Effect: Effect;
    type Reducer: Reducer<State = Self::State, Action = Self::Action>;

    /// Map an intent to the actions it produces, given the current state.
    fn actions(state: &Self::State, intent: Self::Intent) -> Vec<Self::Action>;

    /// Effects to publish after `action` has been reduced into `state`.
    fn effects(_state: &Self::State, _action: &Self::Action) -> Vec<Self::Effect> {
        Vec::new()
    }

    /// Async work started by `action`, if any. `state` is the reduced state.
    fn work(&self, _state: &Self::State, _action: &Self::Action) -> Option<Work<Self::Action>> {
        None
    }
}
