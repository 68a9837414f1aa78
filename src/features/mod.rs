//! Screen features. Each one is a [`crate::mvi::Feature`] run by a
//! [`crate::store::Store`].

pub mod home;
pub mod onboarding;
