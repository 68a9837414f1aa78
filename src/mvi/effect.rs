//! Base trait for effects in MVI architecture.

use std::fmt::Debug;

/// Marker trait for effect objects.
///
/// Effects are one-shot notifications (navigate, show a toast). They are
/// broadcast to whoever is subscribed at the time and are not part of state.
pub trait Effect: Clone + Debug + Send + 'static {}
