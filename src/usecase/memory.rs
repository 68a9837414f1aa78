//! In-memory implementations of every use case.
//!
//! Used by the demo binary and integration tests. Calls sleep for the
//! configured latency, and the first `failing_saves` save calls fail with a
//! network error so retry flows can be exercised.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Datelike;
use parking_lot::Mutex;

use crate::config::ServiceConfig;

use super::{
    DateRange, InterestTag, InterestUseCase, ProfileDraft, ProfileUseCase, Schedule, ScheduleId,
    ScheduleUseCase, SessionStatus, SessionUseCase, UseCaseError,
};

/// Longest range a schedule query may cover.
pub const MAX_RANGE_DAYS: u32 = 62;

pub struct InMemoryServices {
    latency: Duration,
    failing_saves: AtomicU32,
    session: Mutex<SessionStatus>,
    profile: Mutex<Option<ProfileDraft>>,
    interests: Mutex<Vec<InterestTag>>,
}

impl InMemoryServices {
    pub fn new(config: &ServiceConfig) -> Self {
        let session = if config.signed_in {
            SessionStatus::SignedIn {
                onboarded: config.onboarded,
            }
        } else {
            SessionStatus::SignedOut
        };

        Self {
            latency: Duration::from_millis(config.latency_ms),
            failing_saves: AtomicU32::new(config.failing_saves),
            session: Mutex::new(session),
            profile: Mutex::new(None),
            interests: Mutex::new(Vec::new()),
        }
    }

    pub fn profile(&self) -> Option<ProfileDraft> {
        self.profile.lock().clone()
    }

    pub fn interests(&self) -> Vec<InterestTag> {
        self.interests.lock().clone()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// Consume one scripted failure, if any remain.
    fn scripted_failure(&self, operation: &str) -> Result<(), UseCaseError> {
        let remaining = self
            .failing_saves
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
        match remaining {
            Ok(before) => {
                tracing::info!(operation, remaining = before - 1, "Simulated save failure");
                Err(UseCaseError::Network {
                    message: format!("{} timed out", operation),
                })
            }
            Err(_) => Ok(()),
        }
    }

    fn require_session(&self) -> Result<(), UseCaseError> {
        match *self.session.lock() {
            SessionStatus::SignedIn { .. } => Ok(()),
            SessionStatus::SignedOut => Err(UseCaseError::Unauthorized),
        }
    }
}

#[async_trait]
impl ProfileUseCase for InMemoryServices {
    async fn save_profile(&self, profile: ProfileDraft) -> Result<(), UseCaseError> {
        self.simulate_latency().await;
        self.require_session()?;
        self.scripted_failure("save_profile")?;
        tracing::info!(nickname = %profile.nickname, "Profile saved");
        *self.profile.lock() = Some(profile);
        Ok(())
    }
}

#[async_trait]
impl InterestUseCase for InMemoryServices {
    async fn save_interests(&self, tags: Vec<InterestTag>) -> Result<(), UseCaseError> {
        self.simulate_latency().await;
        self.require_session()?;
        self.scripted_failure("save_interests")?;
        if self.profile.lock().is_none() {
            return Err(UseCaseError::Rejected {
                reason: "profile must be saved first".to_string(),
            });
        }
        tracing::info!(count = tags.len(), "Interests saved");
        *self.interests.lock() = tags;
        *self.session.lock() = SessionStatus::SignedIn { onboarded: true };
        Ok(())
    }
}

#[async_trait]
impl ScheduleUseCase for InMemoryServices {
    async fn schedules(&self, range: DateRange) -> Result<Vec<Schedule>, UseCaseError> {
        self.simulate_latency().await;
        self.require_session()?;
        if range.len_days() > MAX_RANGE_DAYS {
            return Err(UseCaseError::Rejected {
                reason: format!("range {} exceeds {} days", range, MAX_RANGE_DAYS),
            });
        }
        // Weekdays get one entry each.
        let schedules = range
            .days()
            .filter(|day| day.weekday().number_from_monday() <= 5)
            .map(|day| Schedule {
                id: ScheduleId(u64::from(day.num_days_from_ce().unsigned_abs())),
                title: format!("Plan for {}", day.format("%a %d %b")),
                date: day,
            })
            .collect();
        Ok(schedules)
    }
}

#[async_trait]
impl SessionUseCase for InMemoryServices {
    fn status(&self) -> SessionStatus {
        *self.session.lock()
    }

    async fn sign_out(&self) -> Result<(), UseCaseError> {
        self.simulate_latency().await;
        *self.session.lock() = SessionStatus::SignedOut;
        tracing::info!("Signed out");
        Ok(())
    }
}
