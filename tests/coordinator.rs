//! App-scope navigation through the coordinator.

mod common;

use navflow::app::{AppCoordinator, AppCover, AppRenderer, AppScreen, AppSheet, AppSheetId};
use navflow::navigation::RenderRoute;
use navflow::usecase::{ScheduleId, SessionStatus};

use common::settle_navigation;

fn signed_in() -> AppCoordinator {
    AppCoordinator::start(SessionStatus::SignedIn { onboarded: true })
}

#[test]
fn push_pop_scenario() {
    let coordinator = signed_in();

    coordinator.push(AppScreen::ScheduleDetail(ScheduleId(1)));
    coordinator.push(AppScreen::Profile);
    assert_eq!(
        coordinator.path(),
        vec![AppScreen::ScheduleDetail(ScheduleId(1)), AppScreen::Profile]
    );

    coordinator.pop();
    assert_eq!(coordinator.path(), vec![AppScreen::ScheduleDetail(ScheduleId(1))]);
    assert_eq!(coordinator.current_screen(), AppScreen::ScheduleDetail(ScheduleId(1)));

    coordinator.pop_to_root();
    assert!(coordinator.path().is_empty());
    assert_eq!(coordinator.current_screen(), AppScreen::Home);
}

#[test]
fn pop_on_root_is_noop() {
    let coordinator = signed_in();
    let before = coordinator.snapshot();
    coordinator.pop();
    coordinator.pop_to_root();
    assert_eq!(coordinator.snapshot(), before);
}

#[test]
fn modal_slots_are_replace_last_wins() {
    let coordinator = signed_in();

    coordinator.open_settings();
    coordinator.edit_schedule(ScheduleId(4));
    assert_eq!(coordinator.snapshot().sheet_id(), Some(AppSheetId::ScheduleEditor));

    coordinator.show_tutorial(0);
    coordinator.show_tutorial(1);
    assert_eq!(coordinator.cover(), Some(AppCover::Tutorial { page: 1 }));
    assert_eq!(coordinator.sheet(), Some(AppSheet::ScheduleEditor(ScheduleId(4))));

    coordinator.dismiss_cover();
    coordinator.dismiss_sheet();
    assert!(coordinator.cover().is_none());
    assert!(coordinator.sheet().is_none());
}

#[test]
fn renderer_covers_current_state() {
    let coordinator = signed_in();
    coordinator.show_schedule_detail(ScheduleId(8));
    coordinator.show_announcement(3);

    let state = coordinator.snapshot();
    let renderer = AppRenderer;
    let stack: Vec<String> = renderer
        .render_stack(&state)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(stack, vec!["HomeView", "ScheduleDetailView(#8)"]);
    assert_eq!(
        state.cover().map(|c| renderer.render_cover(c).to_string()),
        Some("AnnouncementCover(3)".to_string())
    );
}

#[tokio::test]
async fn observers_see_changes() {
    let coordinator = signed_in();
    let mut navigation = coordinator.observe();

    let other = coordinator.clone();
    tokio::spawn(async move {
        other.show_profile();
    });

    let state = settle_navigation(&mut navigation, |nav| nav.depth() == 1).await;
    assert_eq!(*state.current_screen(), AppScreen::Profile);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_pushes_are_all_applied() {
    let coordinator = signed_in();

    let mut tasks = Vec::new();
    for id in 0..16 {
        let coordinator = coordinator.clone();
        tasks.push(tokio::spawn(async move {
            coordinator.show_schedule_detail(ScheduleId(id));
        }));
    }
    for task in tasks {
        task.await.expect("push task");
    }

    let mut ids: Vec<u64> = coordinator
        .path()
        .into_iter()
        .filter_map(|screen| match screen {
            AppScreen::ScheduleDetail(id) => Some(id.0),
            _ => None,
        })
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..16).collect::<Vec<_>>());
}

#[test]
fn snapshot_serializes_to_json() {
    let coordinator = signed_in();
    coordinator.show_schedule_detail(ScheduleId(2));
    coordinator.open_settings();

    let json = serde_json::to_value(coordinator.snapshot()).expect("serialize");
    assert_eq!(json["root"], "home");
    assert_eq!(json["path"][0]["schedule_detail"], 2);
    assert_eq!(json["sheet"], "settings");
    assert!(json["cover"].is_null());
}
