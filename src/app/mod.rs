//! Application scope: route sets, the app coordinator, the renderer and the
//! composition root wiring feature stores to navigation.

mod bridges;
mod composition;
mod coordinator;
mod routes;
mod toast;
mod views;

pub use bridges::{HomeEffectRouter, OnboardingEffectRouter};
pub use composition::{App, Dependencies};
pub use coordinator::AppCoordinator;
pub use routes::{AppCover, AppCoverId, AppRoutes, AppScreen, AppSheet, AppSheetId};
pub use toast::{Toast, ToastKind, ToastLog, Toaster};
pub use views::{AppRenderer, ViewHandle};
