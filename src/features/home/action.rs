use crate::mvi::Action;
use crate::usecase::{DateRange, Schedule, ScheduleId, UseCaseError};

#[derive(Debug, Clone, PartialEq)]
pub enum HomeAction {
    LoadStarted(DateRange),
    LoadSucceeded {
        range: DateRange,
        schedules: Vec<Schedule>,
    },
    LoadFailed {
        range: DateRange,
        error: UseCaseError,
    },

    ScheduleSelected(ScheduleId),
    SettingsRequested,
    EditRequested(ScheduleId),

    LogoutStarted,
    LogoutSucceeded,
    LogoutFailed(UseCaseError),

    ErrorDismissed,
}

impl Action for HomeAction {}
