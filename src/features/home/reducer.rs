use crate::mvi::Reducer;

use super::action::HomeAction;
use super::state::HomeState;

pub struct HomeReducer;

impl Reducer for HomeReducer {
    type State = HomeState;
    type Action = HomeAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        let mut state = state;
        match action {
            HomeAction::LoadStarted(range) => {
                if state.range != Some(range) {
                    state.schedules.clear();
                }
                state.range = Some(range);
                state.is_loading = true;
                state.error_message = None;
            }

            // Outcomes for a range the screen moved away from (or a state
            // reset by sign-out) are dropped.
            HomeAction::LoadSucceeded { range, schedules } => {
                if state.range == Some(range) {
                    state.schedules = schedules;
                    state.is_loading = false;
                }
            }

            HomeAction::LoadFailed { range, error } => {
                if state.range == Some(range) {
                    state.is_loading = false;
                    state.error_message =
                        Some(format!("Couldn't load schedules. {}", error.user_message()));
                }
            }

            HomeAction::ScheduleSelected(id) => {
                state.selected = Some(id);
            }

            HomeAction::SettingsRequested | HomeAction::EditRequested(_) => {}

            HomeAction::LogoutStarted => {
                state.is_signing_out = true;
                state.error_message = None;
            }

            HomeAction::LogoutSucceeded => {
                state = HomeState::default();
            }

            HomeAction::LogoutFailed(err) => {
                state.is_signing_out = false;
                state.error_message = Some(format!("Couldn't sign out. {}", err.user_message()));
            }

            HomeAction::ErrorDismissed => {
                state.error_message = None;
            }
        }
        state
    }
}
