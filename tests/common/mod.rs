//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;
use std::time::Duration;

use navflow::app::{App, Dependencies, ToastLog};
use navflow::config::{Config, ServiceConfig};
use navflow::navigation::{NavigationState, Routes};
use navflow::usecase::memory::InMemoryServices;
use tokio::sync::watch;

pub const SETTLE_TIMEOUT: Duration = Duration::from_secs(2);

/// In-memory services with no latency.
pub fn services(failing_saves: u32, signed_in: bool, onboarded: bool) -> Arc<InMemoryServices> {
    Arc::new(InMemoryServices::new(&ServiceConfig {
        latency_ms: 0,
        failing_saves,
        signed_in,
        onboarded,
    }))
}

/// Default config with instant services.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.services.latency_ms = 0;
    config
}

/// App wired to `services`, plus the toast log it reports to.
pub fn app(services: Arc<InMemoryServices>) -> (App, Arc<ToastLog>) {
    let toasts = Arc::new(ToastLog::new());
    let app = App::compose(
        test_config(),
        Dependencies::in_memory(services, toasts.clone()),
    )
    .expect("default config is valid");
    (app, toasts)
}

/// Wait until the store snapshot satisfies `until`.
pub async fn settle<S>(
    states: &mut watch::Receiver<Arc<S>>,
    until: impl FnMut(&Arc<S>) -> bool,
) -> Arc<S> {
    tokio::time::timeout(SETTLE_TIMEOUT, states.wait_for(until))
        .await
        .expect("timed out waiting for state")
        .expect("store stopped")
        .clone()
}

/// Wait until the navigation state satisfies `until`.
pub async fn settle_navigation<R: Routes>(
    navigation: &mut watch::Receiver<NavigationState<R>>,
    until: impl FnMut(&NavigationState<R>) -> bool,
) -> NavigationState<R> {
    tokio::time::timeout(SETTLE_TIMEOUT, navigation.wait_for(until))
        .await
        .expect("timed out waiting for navigation")
        .expect("coordinator dropped")
        .clone()
}

/// Give spawned tasks a chance to run.
pub async fn idle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}
