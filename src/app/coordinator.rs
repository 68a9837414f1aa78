use std::ops::Deref;

use crate::navigation::Coordinator;
use crate::usecase::{DateRange, ScheduleId, SessionStatus};

use super::routes::{AppCover, AppRoutes, AppScreen, AppSheet};

/// App-level navigation: the generic coordinator plus the named transitions
/// effect routers call.
///
/// Derefs to [`Coordinator<AppRoutes>`] for the raw operation set.
#[derive(Clone)]
pub struct AppCoordinator {
    inner: Coordinator<AppRoutes>,
}

impl AppCoordinator {
    /// Start at the root implied by the session.
    pub fn start(session: SessionStatus) -> Self {
        let root = Self::root_for(session);
        tracing::info!(?session, ?root, "Starting navigation");
        Self {
            inner: Coordinator::new("app", root),
        }
    }

    pub fn root_for(session: SessionStatus) -> AppScreen {
        match session {
            SessionStatus::SignedOut => AppScreen::Login,
            SessionStatus::SignedIn { onboarded: false } => AppScreen::Onboarding,
            SessionStatus::SignedIn { onboarded: true } => AppScreen::Home,
        }
    }

    /// Onboarding done or login succeeded: reset to home.
    pub fn navigate_to_main(&self) {
        self.inner.set_root(AppScreen::Home);
    }

    /// Leave onboarding without finishing. Pops it when it was pushed,
    /// otherwise falls back to login.
    pub fn close_onboarding(&self) {
        let state = self.inner.snapshot();
        if *state.current_screen() != AppScreen::Onboarding {
            tracing::debug!(current = ?state.current_screen(), "Onboarding not shown");
            return;
        }
        if state.is_at_root() {
            self.inner.set_root(AppScreen::Login);
        } else {
            self.inner.pop();
        }
    }

    pub fn show_schedule_detail(&self, id: ScheduleId) {
        self.inner.push(AppScreen::ScheduleDetail(id));
    }

    pub fn show_profile(&self) {
        self.inner.push(AppScreen::Profile);
    }

    pub fn open_settings(&self) {
        self.inner.present_sheet(AppSheet::Settings);
    }

    pub fn edit_schedule(&self, id: ScheduleId) {
        self.inner.present_sheet(AppSheet::ScheduleEditor(id));
    }

    pub fn pick_dates(&self, range: DateRange) {
        self.inner.present_sheet(AppSheet::DatePicker(range));
    }

    pub fn show_tutorial(&self, page: u8) {
        self.inner.present_cover(AppCover::Tutorial { page });
    }

    pub fn show_announcement(&self, id: u32) {
        self.inner.present_cover(AppCover::Announcement(id));
    }

    /// Session ended: back to login with everything dismissed.
    pub fn sign_out(&self) {
        self.inner.set_root(AppScreen::Login);
    }
}

impl Deref for AppCoordinator {
    type Target = Coordinator<AppRoutes>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
