//! Onboarding feature module.
//!
//! Three-step profile setup: nickname, birth year, interests. The profile is
//! saved when leaving the birth-year step and the interests when finishing.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Form state and step validity
//! - `intent.rs` - User requests
//! - `action.rs` - State transition events, including async outcomes
//! - `effect.rs` - One-shot notifications (navigation, errors)
//! - `validation.rs` - Intake filters and field rules
//! - `reducer.rs` - State transitions
//! - `feature.rs` - Intent mapping, effects and async saves

mod action;
mod effect;
mod feature;
mod intent;
mod reducer;
mod state;
pub mod validation;

pub use action::OnboardingAction;
pub use effect::OnboardingEffect;
pub use feature::OnboardingFeature;
pub use intent::OnboardingIntent;
pub use reducer::OnboardingReducer;
pub use state::{OnboardingState, OnboardingStep};
