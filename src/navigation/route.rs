//! Route traits implemented by each navigation scope's closed enums.

use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for a destination value.
pub trait Route: Clone + PartialEq + Debug + Send + Sync + 'static {}

/// A route shown in a modal slot.
///
/// The identity key tells "a sheet is shown" apart from "which sheet": two
/// values with the same id are the same presentation with different payloads.
pub trait ModalRoute: Route {
    type Id: Copy + Eq + Hash + Debug + Send + Sync;

    fn id(&self) -> Self::Id;
}

/// The three closed route sets of one navigation scope.
pub trait Routes: Send + Sync + 'static {
    type Screen: Route;
    type Sheet: ModalRoute;
    type Cover: ModalRoute;
}
