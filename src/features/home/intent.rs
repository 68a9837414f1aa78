use crate::mvi::Intent;
use crate::usecase::DateRange;

#[derive(Debug, Clone)]
pub enum HomeIntent {
    /// Screen became visible for `range`.
    Appear { range: DateRange },

    /// Pull to refresh. Reloads the last range.
    Refresh,

    /// Retry button after a failed load.
    RetryLoad,

    SelectSchedule { index: usize },

    OpenSettings,

    EditSchedule { index: usize },

    Logout,

    DismissError,
}

impl Intent for HomeIntent {}
