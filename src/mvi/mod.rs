//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the base traits every feature screen is built from.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Action ──→ Reducer ──→ State ──→ View
//!              │  ↑                            │
//!              │  └── async work ──┐           │
//!              ↓                   │           │
//!            Effect ──→ Bridge ──→ Coordinator ┘
//! ```
//!
//! - **State**: Immutable snapshot owned by a store
//! - **Intent**: What the user or environment requested
//! - **Action**: A state transition event, direct or from async work
//! - **Effect**: One-shot notification to the outside world
//! - **Reducer**: Pure function that folds actions into state
//! - **Feature**: Ties the above together for one screen

mod action;
mod effect;
mod feature;
mod intent;
mod reducer;
mod state;

pub use action::Action;
pub use effect::Effect;
pub use feature::{Feature, Work};
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
