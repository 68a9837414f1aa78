//! Intents for the onboarding flow.

use crate::mvi::Intent;
use crate::usecase::InterestTag;

#[derive(Debug, Clone)]
pub enum OnboardingIntent {
    /// Nickname text field changed (raw, unfiltered input).
    UpdateNickname(String),

    /// Birth year text field changed (raw, unfiltered input).
    UpdateBirthYear(String),

    /// Interest chip tapped.
    ToggleInterest(InterestTag),

    /// Next / Done button.
    Next,

    /// Back button. Leaves onboarding when on the first step.
    Back,

    /// Retry button shown after a failed save.
    RetryCurrentStep,

    DismissError,
}

impl Intent for OnboardingIntent {}
