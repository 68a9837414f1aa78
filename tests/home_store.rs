//! Home screen store against in-memory services.

mod common;

use std::sync::Arc;

use chrono::NaiveDate;
use navflow::config::StoreConfig;
use navflow::features::home::{HomeEffect, HomeFeature, HomeIntent};
use navflow::store::Store;
use navflow::usecase::memory::InMemoryServices;
use navflow::usecase::{DateRange, SessionStatus, SessionUseCase};

use common::{idle, services, settle};

fn spawn(services: &Arc<InMemoryServices>) -> Store<HomeFeature> {
    Store::spawn(
        HomeFeature::new(services.clone(), services.clone()),
        &StoreConfig::default(),
    )
}

/// Monday 3 March 2025 through Sunday 9 March.
fn week() -> DateRange {
    DateRange::week_from(NaiveDate::from_ymd_opt(2025, 3, 3).expect("valid date"))
}

#[tokio::test]
async fn appear_loads_weekday_schedules() {
    let services = services(0, true, true);
    let store = spawn(&services);
    let mut states = store.observe();

    store.send(HomeIntent::Appear { range: week() });
    let state = settle(&mut states, |s| s.range == Some(week()) && !s.is_loading).await;

    assert_eq!(state.schedules.len(), 5);
    assert!(state.schedules.iter().all(|s| week().contains(s.date)));
    assert!(state.error_message.is_none());
}

#[tokio::test]
async fn select_emits_detail_for_loaded_index() {
    let services = services(0, true, true);
    let store = spawn(&services);
    let mut states = store.observe();
    let mut effects = store.subscribe_effects();

    store.send(HomeIntent::Appear { range: week() });
    let state = settle(&mut states, |s| !s.schedules.is_empty()).await;

    store.send(HomeIntent::SelectSchedule { index: 99 });
    store.send(HomeIntent::SelectSchedule { index: 1 });

    let expected = state.schedules[1].id;
    assert_eq!(
        effects.recv().await.expect("effect"),
        HomeEffect::ShowScheduleDetail(expected)
    );
    let state = settle(&mut states, |s| s.selected.is_some()).await;
    assert_eq!(state.selected, Some(expected));
}

#[tokio::test]
async fn signed_out_load_fails_and_retry_is_available() {
    let services = services(0, false, false);
    let store = spawn(&services);
    let mut states = store.observe();
    let mut effects = store.subscribe_effects();

    store.send(HomeIntent::Appear { range: week() });
    let state = settle(&mut states, |s| s.error_message.is_some()).await;
    assert!(!state.is_loading);
    assert!(matches!(
        effects.recv().await.expect("effect"),
        HomeEffect::ShowError(_)
    ));

    store.send(HomeIntent::RetryLoad);
    assert!(matches!(
        effects.recv().await.expect("effect"),
        HomeEffect::ShowError(_)
    ));
    assert!(!store.state().is_loading);
}

#[tokio::test]
async fn logout_signs_out_and_emits() {
    let services = services(0, true, true);
    let store = spawn(&services);
    let mut states = store.observe();
    let mut effects = store.subscribe_effects();

    store.send(HomeIntent::Appear { range: week() });
    settle(&mut states, |s| !s.schedules.is_empty()).await;

    store.send(HomeIntent::Logout);
    assert_eq!(effects.recv().await.expect("effect"), HomeEffect::LoggedOut);
    assert_eq!(services.status(), SessionStatus::SignedOut);

    let state = settle(&mut states, |s| s.schedules.is_empty()).await;
    assert!(state.range.is_none());
}

#[tokio::test]
async fn refresh_is_ignored_while_loading() {
    let services = Arc::new(InMemoryServices::new(&navflow::config::ServiceConfig {
        latency_ms: 200,
        failing_saves: 0,
        signed_in: true,
        onboarded: true,
    }));
    let store = spawn(&services);
    let mut states = store.observe();

    store.send(HomeIntent::Appear { range: week() });
    settle(&mut states, |s| s.is_loading).await;
    store.send(HomeIntent::Refresh);
    idle().await;

    let state = settle(&mut states, |s| !s.is_loading && !s.schedules.is_empty()).await;
    assert_eq!(state.schedules.len(), 5);
}
