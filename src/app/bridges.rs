use std::sync::Arc;

use crate::bridge::EffectHandler;
use crate::features::home::HomeEffect;
use crate::features::onboarding::OnboardingEffect;

use super::coordinator::AppCoordinator;
use super::toast::{Toast, Toaster};

/// Routes onboarding effects to app navigation and toasts.
pub struct OnboardingEffectRouter {
    coordinator: AppCoordinator,
    toaster: Arc<dyn Toaster>,
}

impl OnboardingEffectRouter {
    pub fn new(coordinator: AppCoordinator, toaster: Arc<dyn Toaster>) -> Self {
        Self {
            coordinator,
            toaster,
        }
    }
}

impl EffectHandler<OnboardingEffect> for OnboardingEffectRouter {
    fn handle(&mut self, effect: OnboardingEffect) {
        match effect {
            OnboardingEffect::NavigateToHome => self.coordinator.navigate_to_main(),
            OnboardingEffect::ShowError(message) => self.toaster.show(Toast::error(message)),
            OnboardingEffect::Close => self.coordinator.close_onboarding(),
        }
    }
}

/// Routes home effects to app navigation and toasts.
pub struct HomeEffectRouter {
    coordinator: AppCoordinator,
    toaster: Arc<dyn Toaster>,
}

impl HomeEffectRouter {
    pub fn new(coordinator: AppCoordinator, toaster: Arc<dyn Toaster>) -> Self {
        Self {
            coordinator,
            toaster,
        }
    }
}

impl EffectHandler<HomeEffect> for HomeEffectRouter {
    fn handle(&mut self, effect: HomeEffect) {
        match effect {
            HomeEffect::ShowScheduleDetail(id) => self.coordinator.show_schedule_detail(id),
            HomeEffect::OpenSettings => self.coordinator.open_settings(),
            HomeEffect::EditSchedule(id) => self.coordinator.edit_schedule(id),
            HomeEffect::ShowError(message) => self.toaster.show(Toast::error(message)),
            HomeEffect::LoggedOut => self.coordinator.sign_out(),
        }
    }
}
