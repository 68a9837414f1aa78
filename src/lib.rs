//! Typed navigation coordinators and intent/action/effect stores.
//!
//! - [`navigation`] - per-scope navigation state machine over closed route enums
//! - [`store`] - serialized state engine running a [`mvi::Feature`]
//! - [`bridge`] - delivery of store effects to coordinators and collaborators
//! - [`features`] - onboarding and home screens
//! - [`app`] - app routes and the composition root

pub mod app;
pub mod bridge;
pub mod config;
pub mod features;
pub mod logging;
pub mod mvi;
pub mod navigation;
pub mod store;
pub mod usecase;
