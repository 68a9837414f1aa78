use std::sync::Arc;

use crate::bridge::ScreenScope;
use crate::config::{Config, ConfigError};
use crate::features::home::{HomeFeature, HomeIntent};
use crate::features::onboarding::OnboardingFeature;
use crate::store::Store;
use crate::usecase::memory::InMemoryServices;
use crate::usecase::{DateRange, InterestUseCase, ProfileUseCase, ScheduleUseCase, SessionUseCase};

use super::bridges::{HomeEffectRouter, OnboardingEffectRouter};
use super::coordinator::AppCoordinator;
use super::toast::Toaster;

/// Collaborators injected into feature stores and effect routers.
#[derive(Clone)]
pub struct Dependencies {
    pub profiles: Arc<dyn ProfileUseCase>,
    pub interests: Arc<dyn InterestUseCase>,
    pub schedules: Arc<dyn ScheduleUseCase>,
    pub session: Arc<dyn SessionUseCase>,
    pub toaster: Arc<dyn Toaster>,
}

impl Dependencies {
    /// Every use case served by one in-memory backend.
    pub fn in_memory(services: Arc<InMemoryServices>, toaster: Arc<dyn Toaster>) -> Self {
        Self {
            profiles: services.clone(),
            interests: services.clone(),
            schedules: services.clone(),
            session: services,
            toaster,
        }
    }
}

/// Composition root. Owns the app coordinator and builds screen scopes.
pub struct App {
    config: Config,
    deps: Dependencies,
    coordinator: AppCoordinator,
}

impl App {
    /// Validate `config` and start navigation at the session's root.
    pub fn compose(config: Config, deps: Dependencies) -> Result<Self, ConfigError> {
        config.validate()?;
        let coordinator = AppCoordinator::start(deps.session.status());
        Ok(Self {
            config,
            deps,
            coordinator,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn coordinator(&self) -> &AppCoordinator {
        &self.coordinator
    }

    /// Must be called from within a tokio runtime.
    pub fn open_onboarding(&self) -> ScreenScope<OnboardingFeature> {
        let feature = OnboardingFeature::new(
            Arc::clone(&self.deps.profiles),
            Arc::clone(&self.deps.interests),
        );
        let store = Store::spawn(feature, &self.config.store);
        let router = OnboardingEffectRouter::new(
            self.coordinator.clone(),
            Arc::clone(&self.deps.toaster),
        );
        ScreenScope::open(store, router)
    }

    /// Open the home screen and start loading `range`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn open_home(&self, range: DateRange) -> ScreenScope<HomeFeature> {
        let feature = HomeFeature::new(
            Arc::clone(&self.deps.schedules),
            Arc::clone(&self.deps.session),
        );
        let store = Store::spawn(feature, &self.config.store);
        let router =
            HomeEffectRouter::new(self.coordinator.clone(), Arc::clone(&self.deps.toaster));
        let scope = ScreenScope::open(store, router);
        scope.send(HomeIntent::Appear { range });
        scope
    }
}
