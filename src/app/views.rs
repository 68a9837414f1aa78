use std::fmt;

use serde::Serialize;

use crate::navigation::RenderRoute;

use super::routes::{AppCover, AppRoutes, AppScreen, AppSheet};

/// Opaque renderable unit produced for a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewHandle {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ViewHandle {
    fn plain(name: &'static str) -> Self {
        Self { name, detail: None }
    }

    fn with_detail(name: &'static str, detail: impl fmt::Display) -> Self {
        Self {
            name,
            detail: Some(detail.to_string()),
        }
    }
}

impl fmt::Display for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{}({})", self.name, detail),
            None => f.write_str(self.name),
        }
    }
}

/// Renderer for the app scope.
#[derive(Debug, Default, Clone, Copy)]
pub struct AppRenderer;

impl RenderRoute<AppRoutes> for AppRenderer {
    type View = ViewHandle;

    fn render_route(&self, screen: &AppScreen) -> ViewHandle {
        match screen {
            AppScreen::Login => ViewHandle::plain("LoginView"),
            AppScreen::Onboarding => ViewHandle::plain("OnboardingView"),
            AppScreen::Home => ViewHandle::plain("HomeView"),
            AppScreen::ScheduleDetail(id) => ViewHandle::with_detail("ScheduleDetailView", id),
            AppScreen::Profile => ViewHandle::plain("ProfileView"),
        }
    }

    fn render_sheet(&self, sheet: &AppSheet) -> ViewHandle {
        match sheet {
            AppSheet::Settings => ViewHandle::plain("SettingsSheet"),
            AppSheet::ScheduleEditor(id) => ViewHandle::with_detail("ScheduleEditorSheet", id),
            AppSheet::DatePicker(range) => ViewHandle::with_detail("DatePickerSheet", range),
        }
    }

    fn render_cover(&self, cover: &AppCover) -> ViewHandle {
        match cover {
            AppCover::Tutorial { page } => ViewHandle::with_detail("TutorialCover", page),
            AppCover::Announcement(id) => ViewHandle::with_detail("AnnouncementCover", id),
        }
    }
}
