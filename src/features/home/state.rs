use crate::mvi::UiState;
use crate::usecase::{DateRange, Schedule, ScheduleId};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeState {
    /// Range of the last load request. `None` until the screen appears.
    pub range: Option<DateRange>,
    pub schedules: Vec<Schedule>,
    pub is_loading: bool,
    pub is_signing_out: bool,
    pub error_message: Option<String>,
    /// Last schedule the user opened.
    pub selected: Option<ScheduleId>,
}

impl UiState for HomeState {}

impl HomeState {
    pub fn schedule_at(&self, index: usize) -> Option<&Schedule> {
        self.schedules.get(index)
    }

    /// Nothing loaded, nothing loading, no error.
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty() && !self.is_loading && self.error_message.is_none()
    }

    /// A new request may start.
    pub fn is_idle(&self) -> bool {
        !self.is_loading && !self.is_signing_out
    }
}
