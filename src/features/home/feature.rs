use std::sync::Arc;

use crate::mvi::{Feature, Work};
use crate::usecase::{ScheduleUseCase, SessionUseCase};

use super::action::HomeAction;
use super::effect::HomeEffect;
use super::intent::HomeIntent;
use super::reducer::HomeReducer;
use super::state::HomeState;

pub struct HomeFeature {
    schedules: Arc<dyn ScheduleUseCase>,
    session: Arc<dyn SessionUseCase>,
}

impl HomeFeature {
    pub fn new(schedules: Arc<dyn ScheduleUseCase>, session: Arc<dyn SessionUseCase>) -> Self {
        Self { schedules, session }
    }

    fn reload(state: &HomeState) -> Vec<HomeAction> {
        match state.range {
            Some(range) if state.is_idle() => vec![HomeAction::LoadStarted(range)],
            Some(_) => Vec::new(),
            None => {
                tracing::debug!("Reload before first appearance ignored");
                Vec::new()
            }
        }
    }
}

impl Feature for HomeFeature {
    const NAME: &'static str = "home";

    type State = HomeState;
    type Intent = HomeIntent;
    type Action = HomeAction;
    type Effect = HomeEffect;
    type Reducer = HomeReducer;

    fn actions(state: &HomeState, intent: HomeIntent) -> Vec<HomeAction> {
        match intent {
            HomeIntent::Appear { range } => {
                // A different range supersedes a running load; its result is
                // dropped by the reducer.
                if state.is_signing_out || (state.is_loading && state.range == Some(range)) {
                    Vec::new()
                } else {
                    vec![HomeAction::LoadStarted(range)]
                }
            }
            HomeIntent::Refresh => Self::reload(state),
            HomeIntent::RetryLoad => {
                if state.error_message.is_some() {
                    Self::reload(state)
                } else {
                    Vec::new()
                }
            }
            HomeIntent::SelectSchedule { index } => match state.schedule_at(index) {
                Some(schedule) => vec![HomeAction::ScheduleSelected(schedule.id)],
                None => {
                    tracing::debug!(index, count = state.schedules.len(), "Select out of range");
                    Vec::new()
                }
            },
            HomeIntent::OpenSettings => vec![HomeAction::SettingsRequested],
            HomeIntent::EditSchedule { index } => match state.schedule_at(index) {
                Some(schedule) => vec![HomeAction::EditRequested(schedule.id)],
                None => {
                    tracing::debug!(index, count = state.schedules.len(), "Edit out of range");
                    Vec::new()
                }
            },
            HomeIntent::Logout => {
                if state.is_signing_out {
                    Vec::new()
                } else {
                    vec![HomeAction::LogoutStarted]
                }
            }
            HomeIntent::DismissError => {
                if state.error_message.is_some() {
                    vec![HomeAction::ErrorDismissed]
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn effects(state: &HomeState, action: &HomeAction) -> Vec<HomeEffect> {
        match action {
            HomeAction::ScheduleSelected(id) => vec![HomeEffect::ShowScheduleDetail(*id)],
            HomeAction::SettingsRequested => vec![HomeEffect::OpenSettings],
            HomeAction::EditRequested(id) => vec![HomeEffect::EditSchedule(*id)],
            HomeAction::LoadFailed { range, .. } if state.range != Some(*range) => Vec::new(),
            HomeAction::LoadFailed { .. } | HomeAction::LogoutFailed(_) => state
                .error_message
                .clone()
                .map(HomeEffect::ShowError)
                .into_iter()
                .collect(),
            HomeAction::LogoutSucceeded => vec![HomeEffect::LoggedOut],
            _ => Vec::new(),
        }
    }

    fn work(&self, _state: &HomeState, action: &HomeAction) -> Option<Work<HomeAction>> {
        match action {
            HomeAction::LoadStarted(range) => {
                let schedules = Arc::clone(&self.schedules);
                let range = *range;
                Some(Box::pin(async move {
                    match schedules.schedules(range).await {
                        Ok(schedules) => HomeAction::LoadSucceeded { range, schedules },
                        Err(error) => {
                            tracing::warn!(%error, %range, "Schedule load failed");
                            HomeAction::LoadFailed { range, error }
                        }
                    }
                }))
            }
            HomeAction::LogoutStarted => {
                let session = Arc::clone(&self.session);
                Some(Box::pin(async move {
                    match session.sign_out().await {
                        Ok(()) => HomeAction::LogoutSucceeded,
                        Err(err) => {
                            tracing::warn!(error = %err, "Sign-out failed");
                            HomeAction::LogoutFailed(err)
                        }
                    }
                }))
            }
            _ => None,
        }
    }
}
