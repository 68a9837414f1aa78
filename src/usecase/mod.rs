//! Use-case seams consumed by feature stores.
//!
//! Stores receive these as `Arc<dyn …>` constructor arguments; nothing in a
//! feature resolves its own dependencies.

mod error;
pub mod memory;
mod model;

use async_trait::async_trait;

pub use error::UseCaseError;
pub use model::{DateRange, InterestTag, ProfileDraft, Schedule, ScheduleId, SessionStatus};

/// Persists the onboarding profile.
#[async_trait]
pub trait ProfileUseCase: Send + Sync {
    async fn save_profile(&self, profile: ProfileDraft) -> Result<(), UseCaseError>;
}

/// Persists the user's selected interests.
#[async_trait]
pub trait InterestUseCase: Send + Sync {
    async fn save_interests(&self, tags: Vec<InterestTag>) -> Result<(), UseCaseError>;
}

/// Reads the user's schedules.
#[async_trait]
pub trait ScheduleUseCase: Send + Sync {
    /// Schedules dated within `range` (inclusive), ordered by date.
    async fn schedules(&self, range: DateRange) -> Result<Vec<Schedule>, UseCaseError>;
}

/// Session token checks and sign-out.
#[async_trait]
pub trait SessionUseCase: Send + Sync {
    /// Current session status. Synchronous: read from local storage.
    fn status(&self) -> SessionStatus;

    async fn sign_out(&self) -> Result<(), UseCaseError>;
}
