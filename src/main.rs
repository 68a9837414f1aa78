//! Demo walk-through of the onboarding and home screens against in-memory
//! services.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use serde::Serialize;

use navflow::app::{App, AppRenderer, AppRoutes, AppScreen, Dependencies, ToastLog, ViewHandle};
use navflow::bridge::ScreenScope;
use navflow::config::Config;
use navflow::features::home::HomeIntent;
use navflow::features::onboarding::{
    OnboardingFeature, OnboardingIntent, OnboardingState, OnboardingStep,
};
use navflow::logging::init_tracing;
use navflow::mvi::Feature;
use navflow::navigation::{NavigationState, RenderRoute};
use navflow::usecase::memory::InMemoryServices;
use navflow::usecase::{DateRange, InterestTag};

/// Walk onboarding and home against in-memory services.
#[derive(Parser, Debug)]
#[command(name = "navflow")]
#[command(about = "Navigation and store demo")]
struct Args {
    /// Config file (default: ~/.config/navflow/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulated latency of every service call
    #[arg(long)]
    latency_ms: Option<u64>,

    /// Number of saves that fail before saves succeed
    #[arg(long)]
    fail_saves: Option<u32>,

    /// Start without a session
    #[arg(long)]
    signed_out: bool,

    /// Print the final report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    navigation: NavigationState<AppRoutes>,
    stack: Vec<ViewHandle>,
    sheet: Option<ViewHandle>,
    cover: Option<ViewHandle>,
    toasts: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(latency_ms) = args.latency_ms {
        config.services.latency_ms = latency_ms;
    }
    if let Some(fail_saves) = args.fail_saves {
        config.services.failing_saves = fail_saves;
    }
    if args.signed_out {
        config.services.signed_in = false;
    }

    init_tracing(&config.logging);

    let wait = Duration::from_millis(config.services.latency_ms) + Duration::from_secs(5);
    let max_attempts = config.services.failing_saves + 1;

    let services = Arc::new(InMemoryServices::new(&config.services));
    let toasts = Arc::new(ToastLog::new());
    let app = App::compose(
        config,
        Dependencies::in_memory(Arc::clone(&services), toasts.clone()),
    )?;

    match app.coordinator().current_screen() {
        AppScreen::Login => tracing::info!("No session; staying on login"),
        AppScreen::Onboarding => {
            run_onboarding(&app, wait, max_attempts).await?;
            run_home(&app, wait).await?;
        }
        _ => run_home(&app, wait).await?,
    }

    let navigation = app.coordinator().snapshot();
    let renderer = AppRenderer;
    let report = Report {
        stack: renderer.render_stack(&navigation),
        sheet: navigation.sheet().map(|s| renderer.render_sheet(s)),
        cover: navigation.cover().map(|c| renderer.render_cover(c)),
        toasts: toasts.shown().into_iter().map(|t| t.message).collect(),
        navigation,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let stack: Vec<String> = report.stack.iter().map(ToString::to_string).collect();
        println!("stack:  {}", stack.join(" > "));
        if let Some(sheet) = &report.sheet {
            println!("sheet:  {}", sheet);
        }
        if let Some(cover) = &report.cover {
            println!("cover:  {}", cover);
        }
        for toast in &report.toasts {
            println!("toast:  {}", toast);
        }
    }

    Ok(())
}

async fn run_onboarding(app: &App, wait: Duration, max_attempts: u32) -> anyhow::Result<()> {
    let scope = app.open_onboarding();

    scope.send(OnboardingIntent::UpdateNickname("Demo".to_string()));
    submit_step(&scope, OnboardingStep::Nickname, wait, max_attempts).await?;

    scope.send(OnboardingIntent::UpdateBirthYear("1990".to_string()));
    submit_step(&scope, OnboardingStep::BirthYear, wait, max_attempts).await?;

    scope.send(OnboardingIntent::ToggleInterest(InterestTag::Music));
    scope.send(OnboardingIntent::ToggleInterest(InterestTag::Travel));
    submit_step(&scope, OnboardingStep::Interests, wait, max_attempts).await?;

    await_navigation(app, wait, |nav| *nav.root() == AppScreen::Home).await?;
    scope.close();
    Ok(())
}

/// Submit `step`, retrying failed saves until it is left or attempts run out.
async fn submit_step(
    scope: &ScreenScope<OnboardingFeature>,
    step: OnboardingStep,
    wait: Duration,
    max_attempts: u32,
) -> anyhow::Result<()> {
    let mut intent = OnboardingIntent::Next;
    for attempt in 1..=max_attempts {
        let state = drive(scope, intent, wait, |s: &OnboardingState| {
            s.step != step || s.is_completed || (!s.is_saving && s.error_message.is_some())
        })
        .await?;

        if state.step != step || state.is_completed {
            tracing::info!(?step, attempt, "Step completed");
            return Ok(());
        }
        tracing::info!(?step, attempt, error = ?state.error_message, "Step failed, retrying");
        intent = OnboardingIntent::RetryCurrentStep;
    }
    bail!("{:?} step failed after {} attempts", step, max_attempts)
}

async fn run_home(app: &App, wait: Duration) -> anyhow::Result<()> {
    let range = DateRange::week_from(chrono::Local::now().date_naive());
    let scope = app.open_home(range);

    let mut states = scope.store().observe();
    let loaded = tokio::time::timeout(
        wait,
        states.wait_for(|s| s.range == Some(range) && !s.is_loading),
    )
    .await
    .context("Timed out loading schedules")?
    .context("Home store stopped")?
    .clone();

    if let Some(error) = &loaded.error_message {
        tracing::warn!(%error, "Schedules unavailable");
        scope.close();
        return Ok(());
    }
    tracing::info!(%range, count = loaded.schedules.len(), "Schedules loaded");

    if !loaded.schedules.is_empty() {
        scope.send(HomeIntent::SelectSchedule { index: 0 });
        await_navigation(app, wait, |nav| {
            matches!(nav.current_screen(), AppScreen::ScheduleDetail(_))
        })
        .await?;
        app.coordinator().pop();

        scope.send(HomeIntent::EditSchedule { index: 0 });
        await_navigation(app, wait, |nav| nav.sheet().is_some()).await?;
    }

    scope.close();
    Ok(())
}

/// Send `intent` and wait for the first later state matching `until`.
async fn drive<F: Feature>(
    scope: &ScreenScope<F>,
    intent: F::Intent,
    wait: Duration,
    until: impl Fn(&F::State) -> bool,
) -> anyhow::Result<Arc<F::State>> {
    let mut states = scope.store().observe();
    states.borrow_and_update();
    scope.send(intent);

    tokio::time::timeout(wait, async {
        loop {
            states.changed().await?;
            let state = states.borrow_and_update().clone();
            if until(&*state) {
                return anyhow::Ok(state);
            }
        }
    })
    .await
    .context("Timed out waiting for store")?
}

async fn await_navigation(
    app: &App,
    wait: Duration,
    until: impl FnMut(&NavigationState<AppRoutes>) -> bool,
) -> anyhow::Result<()> {
    let mut navigation = app.coordinator().observe();
    tokio::time::timeout(wait, navigation.wait_for(until))
        .await
        .context("Timed out waiting for navigation")?
        .context("Coordinator dropped")?;
    Ok(())
}
