//! Intake filters and field rules for the onboarding form.
//!
//! Filters run on every keystroke; the same predicates guard submission.

use std::ops::RangeInclusive;

use crate::usecase::InterestTag;

pub const NICKNAME_MAX_LEN: usize = 6;
pub const BIRTH_YEAR_LEN: usize = 4;
pub const BIRTH_YEAR_RANGE: RangeInclusive<u16> = 1900..=2025;
pub const MIN_INTERESTS: usize = 1;
pub const MAX_INTERESTS: usize = 3;

pub const NICKNAME_REQUIRED: &str = "Please enter a nickname.";
pub const NICKNAME_TOO_LONG: &str = "Nickname can be at most 6 characters.";
pub const BIRTH_YEAR_REQUIRED: &str = "Please enter your birth year.";
pub const BIRTH_YEAR_INCOMPLETE: &str = "Enter a 4-digit year.";
pub const BIRTH_YEAR_OUT_OF_RANGE: &str = "Enter a year between 1900 and 2025.";
pub const INTERESTS_LIMIT: &str = "You can choose up to 3 interests.";

/// Filtered field value plus the error derived from the raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInput {
    pub value: String,
    pub error: Option<&'static str>,
}

/// Keep letters and digits, cap at [`NICKNAME_MAX_LEN`].
///
/// Input longer than the cap is truncated and flagged.
pub fn filter_nickname(raw: &str) -> FieldInput {
    let accepted: Vec<char> = raw.chars().filter(|c| c.is_alphanumeric()).collect();
    let value: String = accepted.iter().take(NICKNAME_MAX_LEN).collect();
    let error = if accepted.len() > NICKNAME_MAX_LEN {
        Some(NICKNAME_TOO_LONG)
    } else {
        nickname_error(&value)
    };
    FieldInput { value, error }
}

pub fn nickname_error(value: &str) -> Option<&'static str> {
    let len = value.chars().count();
    if len == 0 {
        Some(NICKNAME_REQUIRED)
    } else if len > NICKNAME_MAX_LEN {
        Some(NICKNAME_TOO_LONG)
    } else {
        None
    }
}

/// Keep digits only, cap at [`BIRTH_YEAR_LEN`].
pub fn filter_birth_year(raw: &str) -> FieldInput {
    let value: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(BIRTH_YEAR_LEN)
        .collect();
    let error = birth_year_error(&value);
    FieldInput { value, error }
}

pub fn birth_year_error(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some(BIRTH_YEAR_REQUIRED);
    }
    if value.len() < BIRTH_YEAR_LEN {
        return Some(BIRTH_YEAR_INCOMPLETE);
    }
    match parse_birth_year(value) {
        Some(_) => None,
        None => Some(BIRTH_YEAR_OUT_OF_RANGE),
    }
}

/// Parsed year when `value` is a valid birth year.
pub fn parse_birth_year(value: &str) -> Option<u16> {
    if value.len() != BIRTH_YEAR_LEN || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    value
        .parse::<u16>()
        .ok()
        .filter(|year| BIRTH_YEAR_RANGE.contains(year))
}

pub fn interests_valid(interests: &[InterestTag]) -> bool {
    (MIN_INTERESTS..=MAX_INTERESTS).contains(&interests.len())
}
