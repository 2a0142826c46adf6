//! Remote-call boundary for account and settings operations.
//!
//! There is no backend: `MockApi` answers every call from local fixtures after
//! a fixed simulated latency (hydrate builds only; SSR and tests resolve
//! immediately). Pages depend on the `AuthApi` / `SettingsApi` traits, so a
//! real HTTP client can replace the mock without touching call sites.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `ApiError`. Callers log them and show a message on
//! the form; nothing retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::User;
use crate::mock;
use crate::state::admin::settings::SystemSettings;

/// Simulated round-trip time for mock calls.
pub const MOCK_LATENCY_MS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("email and password are required")]
    MissingCredentials,
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(ApiError::MissingCredentials);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Account operations.
pub trait AuthApi {
    /// Exchange credentials for the account they belong to.
    fn login(&self, request: LoginRequest) -> impl Future<Output = Result<User, ApiError>>;

    /// Create an account and sign in to it.
    fn register(&self, request: RegisterRequest) -> impl Future<Output = Result<User, ApiError>>;
}

/// Back-office settings persistence.
pub trait SettingsApi {
    fn save_settings(&self, settings: &SystemSettings) -> impl Future<Output = Result<(), ApiError>>;
}

/// Fixture-backed implementation of every remote call.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockApi;

async fn simulate_latency() {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::TimeoutFuture::new(MOCK_LATENCY_MS).await;
}

impl AuthApi for MockApi {
    fn login(&self, request: LoginRequest) -> impl Future<Output = Result<User, ApiError>> {
        async move {
            request.validate()?;
            simulate_latency().await;
            log::debug!("mock login for {}", request.email);
            Ok(mock::session::user_for_email(&request.email))
        }
    }

    fn register(&self, request: RegisterRequest) -> impl Future<Output = Result<User, ApiError>> {
        // Registration has no account store behind it; it signs in as the
        // account the email resolves to.
        let RegisterRequest { username, email, password } = request;
        async move {
            log::info!("mock registration for {username}");
            self.login(LoginRequest { email, password }).await
        }
    }
}

impl SettingsApi for MockApi {
    fn save_settings(&self, settings: &SystemSettings) -> impl Future<Output = Result<(), ApiError>> {
        let site_name = settings.branding.site_name.clone();
        async move {
            simulate_latency().await;
            log::info!("saved system settings for {site_name}");
            Ok(())
        }
    }
}
