//! State for the onboarding flow.

use crate::mvi::UiState;
use crate::usecase::{InterestTag, ProfileDraft};

use super::validation::{birth_year_error, interests_valid, nickname_error, parse_birth_year};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnboardingStep {
    #[default]
    Nickname,
    BirthYear,
    Interests,
}

impl OnboardingStep {
    /// Zero-based position, as shown by the progress indicator.
    pub fn index(&self) -> usize {
        match self {
            Self::Nickname => 0,
            Self::BirthYear => 1,
            Self::Interests => 2,
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Nickname => Some(Self::BirthYear),
            Self::BirthYear => Some(Self::Interests),
            Self::Interests => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::Nickname => None,
            Self::BirthYear => Some(Self::Nickname),
            Self::Interests => Some(Self::BirthYear),
        }
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

/// Onboarding form.
///
/// Defaults: first step, every field empty, no errors shown yet, nothing in
/// flight, next button disabled.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OnboardingState {
    pub step: OnboardingStep,
    pub nickname: String,
    pub nickname_error: Option<&'static str>,
    pub birth_year: String,
    pub birth_year_error: Option<&'static str>,
    pub interests: Vec<InterestTag>,
    pub interests_error: Option<&'static str>,
    /// A save is in flight.
    pub is_saving: bool,
    /// Interests were saved; the flow is over.
    pub is_completed: bool,
    /// Last async failure, shown until dismissed or retried.
    pub error_message: Option<String>,
    /// Always `is_current_step_valid() && !is_saving`; recomputed by the reducer.
    pub is_next_button_enabled: bool,
}

impl UiState for OnboardingState {}

impl OnboardingState {
    pub fn is_nickname_valid(&self) -> bool {
        self.nickname_error.is_none() && nickname_error(&self.nickname).is_none()
    }

    pub fn is_birth_year_valid(&self) -> bool {
        birth_year_error(&self.birth_year).is_none()
    }

    pub fn is_interests_valid(&self) -> bool {
        interests_valid(&self.interests)
    }

    /// Required fields of the current step pass validation.
    pub fn is_current_step_valid(&self) -> bool {
        match self.step {
            OnboardingStep::Nickname => self.is_nickname_valid(),
            OnboardingStep::BirthYear => self.is_birth_year_valid(),
            OnboardingStep::Interests => self.is_interests_valid(),
        }
    }

    /// Every field of every step passes validation.
    pub fn is_form_valid(&self) -> bool {
        self.is_nickname_valid() && self.is_birth_year_valid() && self.is_interests_valid()
    }

    /// Profile payload, available once nickname and birth year are valid.
    pub fn profile_draft(&self) -> Option<ProfileDraft> {
        if !self.is_nickname_valid() {
            return None;
        }
        let birth_year = parse_birth_year(&self.birth_year)?;
        Some(ProfileDraft {
            nickname: self.nickname.clone(),
            birth_year,
        })
    }

    pub fn is_selected(&self, tag: InterestTag) -> bool {
        self.interests.contains(&tag)
    }
}
