//! Typed navigation state machine.
//!
//! A [`Coordinator`] owns one navigation scope: a root screen, a back stack of
//! screens pushed above it, and two independent modal slots (sheet and
//! full-screen cover). Every operation is synchronous and total; none of them
//! can fail.

mod coordinator;
mod render;
mod route;
mod state;

pub use coordinator::Coordinator;
pub use render::RenderRoute;
pub use route::{ModalRoute, Route, Routes};
pub use state::NavigationState;
