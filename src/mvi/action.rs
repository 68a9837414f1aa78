//! Base trait for actions in MVI architecture.

use std::fmt::Debug;

/// Marker trait for action objects.
///
/// Actions are the only input of a reducer. They are produced either
/// synchronously from an intent or by async work reporting its outcome.
pub trait Action: Clone + Debug + Send + 'static {}
