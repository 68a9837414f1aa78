//! Base trait for intents (user/system requests) in MVI architecture.

use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (text edits, button taps)
/// - Environment events (screen appeared)
///
/// Intents are mapped to actions by [`Feature::actions`](super::Feature::actions);
/// they never touch state directly.
pub trait Intent: Debug + Send + 'static {}
