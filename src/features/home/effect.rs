use crate::mvi::Effect;
use crate::usecase::ScheduleId;

#[derive(Debug, Clone, PartialEq)]
pub enum HomeEffect {
    ShowScheduleDetail(ScheduleId),
    OpenSettings,
    EditSchedule(ScheduleId),
    ShowError(String),
    /// Session ended; return to login.
    LoggedOut,
}

impl Effect for HomeEffect {}
