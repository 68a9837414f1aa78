//! Home feature module.
//!
//! Schedule list for a date range, with entry points to detail, settings,
//! the schedule editor and sign-out.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Loaded schedules and load status
//! - `intent.rs` - User requests
//! - `action.rs` - State transition events
//! - `effect.rs` - Navigation requests and errors
//! - `reducer.rs` - State transitions
//! - `feature.rs` - Intent mapping, effects and async loads

mod action;
mod effect;
mod feature;
mod intent;
mod reducer;
mod state;

pub use action::HomeAction;
pub use effect::HomeEffect;
pub use feature::HomeFeature;
pub use intent::HomeIntent;
pub use reducer::HomeReducer;
pub use state::HomeState;
