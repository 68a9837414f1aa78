//! Reducer for the onboarding flow.

use crate::mvi::Reducer;

use super::action::OnboardingAction;
use super::state::OnboardingState;
use super::validation::{filter_birth_year, filter_nickname, INTERESTS_LIMIT, MAX_INTERESTS};

/// Reducer for onboarding state transitions.
///
/// Pure function. Saves are started by the feature after the reducer marks
/// `is_saving`; their outcomes come back as `*Succeeded`/`*Failed` actions.
pub struct OnboardingReducer;

impl Reducer for OnboardingReducer {
    type State = OnboardingState;
    type Action = OnboardingAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        let mut state = state;
        match action {
            OnboardingAction::NicknameChanged(raw) => {
                let input = filter_nickname(&raw);
                state.nickname = input.value;
                state.nickname_error = input.error;
            }

            OnboardingAction::BirthYearChanged(raw) => {
                let input = filter_birth_year(&raw);
                state.birth_year = input.value;
                state.birth_year_error = input.error;
            }

            OnboardingAction::InterestToggled(tag) => {
                if let Some(position) = state.interests.iter().position(|t| *t == tag) {
                    state.interests.remove(position);
                    state.interests_error = None;
                } else if state.interests.len() >= MAX_INTERESTS {
                    state.interests_error = Some(INTERESTS_LIMIT);
                } else {
                    state.interests.push(tag);
                    state.interests_error = None;
                }
            }

            OnboardingAction::StepAdvanced => {
                if state.is_current_step_valid() && !state.is_saving {
                    if let Some(next) = state.step.next() {
                        state.step = next;
                    }
                }
            }

            OnboardingAction::StepReturned => {
                if !state.is_saving {
                    if let Some(previous) = state.step.previous() {
                        state.step = previous;
                        state.error_message = None;
                    }
                }
            }

            OnboardingAction::ProfileSaveStarted(_)
            | OnboardingAction::InterestsSaveStarted(_) => {
                state.is_saving = true;
                state.error_message = None;
            }

            OnboardingAction::ProfileSaveSucceeded => {
                state.is_saving = false;
                if let Some(next) = state.step.next() {
                    state.step = next;
                }
            }

            OnboardingAction::ProfileSaveFailed(err) => {
                state.is_saving = false;
                state.error_message =
                    Some(format!("Couldn't save your profile. {}", err.user_message()));
            }

            OnboardingAction::InterestsSaveSucceeded => {
                state.is_saving = false;
                state.is_completed = true;
            }

            OnboardingAction::InterestsSaveFailed(err) => {
                state.is_saving = false;
                state.error_message =
                    Some(format!("Couldn't save your interests. {}", err.user_message()));
            }

            OnboardingAction::ErrorDismissed => {
                state.error_message = None;
            }

            OnboardingAction::Exited => {}
        }

        state.is_next_button_enabled = state.is_current_step_valid() && !state.is_saving;
        state
    }
}
