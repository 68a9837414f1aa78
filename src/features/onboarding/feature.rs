use std::sync::Arc;

use crate::mvi::{Feature, Work};
use crate::usecase::{InterestUseCase, ProfileUseCase};

use super::action::OnboardingAction;
use super::effect::OnboardingEffect;
use super::intent::OnboardingIntent;
use super::reducer::OnboardingReducer;
use super::state::{OnboardingState, OnboardingStep};

pub struct OnboardingFeature {
    profiles: Arc<dyn ProfileUseCase>,
    interests: Arc<dyn InterestUseCase>,
}

impl OnboardingFeature {
    pub fn new(profiles: Arc<dyn ProfileUseCase>, interests: Arc<dyn InterestUseCase>) -> Self {
        Self {
            profiles,
            interests,
        }
    }

    /// Actions for submitting the current step. Re-checks validity first.
    fn submit(state: &OnboardingState) -> Vec<OnboardingAction> {
        if state.is_saving || state.is_completed || !state.is_current_step_valid() {
            tracing::debug!(step = ?state.step, "Submit ignored");
            return Vec::new();
        }
        match state.step {
            OnboardingStep::Nickname => vec![OnboardingAction::StepAdvanced],
            OnboardingStep::BirthYear => state
                .profile_draft()
                .map(OnboardingAction::ProfileSaveStarted)
                .into_iter()
                .collect(),
            OnboardingStep::Interests => {
                vec![OnboardingAction::InterestsSaveStarted(state.interests.clone())]
            }
        }
    }
}

impl Feature for OnboardingFeature {
    const NAME: &'static str = "onboarding";

    type State = OnboardingState;
    type Intent = OnboardingIntent;
    type Action = OnboardingAction;
    type Effect = OnboardingEffect;
    type Reducer = OnboardingReducer;

    fn actions(state: &OnboardingState, intent: OnboardingIntent) -> Vec<OnboardingAction> {
        match intent {
            OnboardingIntent::UpdateNickname(raw) => vec![OnboardingAction::NicknameChanged(raw)],
            OnboardingIntent::UpdateBirthYear(raw) => {
                vec![OnboardingAction::BirthYearChanged(raw)]
            }
            OnboardingIntent::ToggleInterest(tag) => {
                if state.is_saving {
                    Vec::new()
                } else {
                    vec![OnboardingAction::InterestToggled(tag)]
                }
            }
            OnboardingIntent::Next => Self::submit(state),
            OnboardingIntent::RetryCurrentStep => {
                if state.error_message.is_some() {
                    Self::submit(state)
                } else {
                    Vec::new()
                }
            }
            OnboardingIntent::Back => {
                if state.is_saving {
                    Vec::new()
                } else if state.step.previous().is_some() {
                    vec![OnboardingAction::StepReturned]
                } else {
                    vec![OnboardingAction::Exited]
                }
            }
            OnboardingIntent::DismissError => {
                if state.error_message.is_some() {
                    vec![OnboardingAction::ErrorDismissed]
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn effects(state: &OnboardingState, action: &OnboardingAction) -> Vec<OnboardingEffect> {
        match action {
            OnboardingAction::ProfileSaveFailed(err) | OnboardingAction::InterestsSaveFailed(err) => {
                let message = state
                    .error_message
                    .clone()
                    .unwrap_or_else(|| err.user_message().to_string());
                vec![OnboardingEffect::ShowError(message)]
            }
            OnboardingAction::InterestsSaveSucceeded => vec![OnboardingEffect::NavigateToHome],
            OnboardingAction::Exited => vec![OnboardingEffect::Close],
            _ => Vec::new(),
        }
    }

    fn work(
        &self,
        _state: &OnboardingState,
        action: &OnboardingAction,
    ) -> Option<Work<OnboardingAction>> {
        match action {
            OnboardingAction::ProfileSaveStarted(draft) => {
                let profiles = Arc::clone(&self.profiles);
                let draft = draft.clone();
                Some(Box::pin(async move {
                    match profiles.save_profile(draft).await {
                        Ok(()) => OnboardingAction::ProfileSaveSucceeded,
                        Err(err) => {
                            tracing::warn!(error = %err, "Profile save failed");
                            OnboardingAction::ProfileSaveFailed(err)
                        }
                    }
                }))
            }
            OnboardingAction::InterestsSaveStarted(tags) => {
                let interests = Arc::clone(&self.interests);
                let tags = tags.clone();
                Some(Box::pin(async move {
                    match interests.save_interests(tags).await {
                        Ok(()) => OnboardingAction::InterestsSaveSucceeded,
                        Err(err) => {
                            tracing::warn!(error = %err, "Interests save failed");
                            OnboardingAction::InterestsSaveFailed(err)
                        }
                    }
                }))
            }
            _ => None,
        }
    }
}
