use crate::mvi::Effect;

#[derive(Debug, Clone, PartialEq)]
pub enum OnboardingEffect {
    /// Onboarding finished; leave for the main screen.
    NavigateToHome,

    /// Transient error notification.
    ShowError(String),

    /// User backed out of the first step.
    Close,
}

impl Effect for OnboardingEffect {}
