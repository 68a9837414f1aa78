//! Onboarding running in a store against in-memory services.

mod common;

use navflow::config::StoreConfig;
use navflow::features::onboarding::{
    OnboardingEffect, OnboardingFeature, OnboardingIntent, OnboardingStep,
};
use navflow::store::Store;
use navflow::usecase::memory::InMemoryServices;
use navflow::usecase::{InterestTag, SessionStatus, SessionUseCase};
use std::sync::Arc;

use common::{services, settle};

fn spawn(services: &Arc<InMemoryServices>) -> Store<OnboardingFeature> {
    Store::spawn(
        OnboardingFeature::new(services.clone(), services.clone()),
        &StoreConfig::default(),
    )
}

#[tokio::test]
async fn completes_and_navigates_home() {
    let services = services(0, true, false);
    let store = spawn(&services);
    let mut states = store.observe();
    let mut effects = store.subscribe_effects();

    store.send(OnboardingIntent::UpdateNickname("mina".to_string()));
    store.send(OnboardingIntent::Next);
    store.send(OnboardingIntent::UpdateBirthYear("1994".to_string()));
    store.send(OnboardingIntent::Next);

    let state = settle(&mut states, |s| s.step == OnboardingStep::Interests).await;
    assert!(!state.is_saving);
    assert!(!state.is_next_button_enabled);
    assert_eq!(services.profile().map(|p| p.birth_year), Some(1994));

    store.send(OnboardingIntent::ToggleInterest(InterestTag::Cooking));
    store.send(OnboardingIntent::ToggleInterest(InterestTag::Reading));
    store.send(OnboardingIntent::Next);

    let state = settle(&mut states, |s| s.is_completed).await;
    assert!(!state.is_saving);
    assert_eq!(effects.recv().await.expect("effect"), OnboardingEffect::NavigateToHome);
    assert_eq!(
        services.interests(),
        vec![InterestTag::Cooking, InterestTag::Reading]
    );
    assert_eq!(services.status(), SessionStatus::SignedIn { onboarded: true });
}

#[tokio::test]
async fn failed_save_can_be_retried() {
    let services = services(1, true, false);
    let store = spawn(&services);
    let mut states = store.observe();
    let mut effects = store.subscribe_effects();

    store.send(OnboardingIntent::UpdateNickname("mina".to_string()));
    store.send(OnboardingIntent::Next);
    store.send(OnboardingIntent::UpdateBirthYear("1994".to_string()));
    store.send(OnboardingIntent::Next);

    let state = settle(&mut states, |s| s.error_message.is_some()).await;
    assert_eq!(state.step, OnboardingStep::BirthYear);
    assert!(!state.is_saving);
    assert!(state.is_next_button_enabled);
    assert!(matches!(
        effects.recv().await.expect("effect"),
        OnboardingEffect::ShowError(message) if message.starts_with("Couldn't save your profile.")
    ));

    store.send(OnboardingIntent::RetryCurrentStep);
    let state = settle(&mut states, |s| s.step == OnboardingStep::Interests).await;
    assert!(state.error_message.is_none());
    assert!(services.profile().is_some());
}

#[tokio::test]
async fn back_from_first_step_closes() {
    let services = services(0, true, false);
    let store = spawn(&services);
    let mut effects = store.subscribe_effects();

    store.send(OnboardingIntent::Back);
    assert_eq!(effects.recv().await.expect("effect"), OnboardingEffect::Close);
}

#[tokio::test]
async fn signed_out_save_reports_unauthorized() {
    let services = services(0, false, false);
    let store = spawn(&services);
    let mut states = store.observe();

    store.send(OnboardingIntent::UpdateNickname("mina".to_string()));
    store.send(OnboardingIntent::Next);
    store.send(OnboardingIntent::UpdateBirthYear("1994".to_string()));
    store.send(OnboardingIntent::Next);

    let state = settle(&mut states, |s| s.error_message.is_some()).await;
    assert_eq!(
        state.error_message.as_deref(),
        Some("Couldn't save your profile. Please sign in again.")
    );
}
