//! Actions for the onboarding flow.

use crate::mvi::Action;
use crate::usecase::{InterestTag, ProfileDraft, UseCaseError};

#[derive(Debug, Clone, PartialEq)]
pub enum OnboardingAction {
    /// Raw nickname input; the reducer filters and validates it.
    NicknameChanged(String),

    /// Raw birth year input; the reducer filters and validates it.
    BirthYearChanged(String),

    InterestToggled(InterestTag),

    StepAdvanced,
    StepReturned,

    /// Starts the async profile save.
    ProfileSaveStarted(ProfileDraft),
    ProfileSaveSucceeded,
    ProfileSaveFailed(UseCaseError),

    /// Starts the async interests save.
    InterestsSaveStarted(Vec<InterestTag>),
    InterestsSaveSucceeded,
    InterestsSaveFailed(UseCaseError),

    ErrorDismissed,

    /// Back pressed on the first step.
    Exited,
}

impl Action for OnboardingAction {}
