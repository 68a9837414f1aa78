use serde::Serialize;

use crate::navigation::{ModalRoute, Route, Routes};
use crate::usecase::{DateRange, ScheduleId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AppScreen {
    Login,
    Onboarding,
    Home,
    ScheduleDetail(ScheduleId),
    Profile,
}

impl Route for AppScreen {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AppSheet {
    Settings,
    ScheduleEditor(ScheduleId),
    DatePicker(DateRange),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppSheetId {
    Settings,
    ScheduleEditor,
    DatePicker,
}

impl Route for AppSheet {}

impl ModalRoute for AppSheet {
    type Id = AppSheetId;

    fn id(&self) -> AppSheetId {
        match self {
            AppSheet::Settings => AppSheetId::Settings,
            AppSheet::ScheduleEditor(_) => AppSheetId::ScheduleEditor,
            AppSheet::DatePicker(_) => AppSheetId::DatePicker,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AppCover {
    /// First-run walkthrough, zero-based page.
    Tutorial { page: u8 },
    Announcement(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppCoverId {
    Tutorial,
    Announcement,
}

impl Route for AppCover {}

impl ModalRoute for AppCover {
    type Id = AppCoverId;

    fn id(&self) -> AppCoverId {
        match self {
            AppCover::Tutorial { .. } => AppCoverId::Tutorial,
            AppCover::Announcement(_) => AppCoverId::Announcement,
        }
    }
}

/// Route sets of the top-level app scope.
pub struct AppRoutes;

impl Routes for AppRoutes {
    type Screen = AppScreen;
    type Sheet = AppSheet;
    type Cover = AppCover;
}
