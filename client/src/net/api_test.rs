use futures::executor::block_on;

use super::*;
use crate::net::types::UserRole;

fn login(email: &str, password: &str) -> Result<User, ApiError> {
    block_on(MockApi.login(LoginRequest { email: email.to_owned(), password: password.to_owned() }))
}

// =============================================================
// AuthApi::login
// =============================================================

#[test]
fn login_with_admin_email_returns_admin_account() {
    let user = login("admin@cybernet.dev", "hunter2").unwrap();
    assert_eq!(user.id, "admin1");
    assert_eq!(user.role, UserRole::Admin);
}

#[test]
fn login_with_other_email_returns_regular_account() {
    let user = login("neo@cybernet.dev", "hunter2").unwrap();
    assert_eq!(user.id, "user1");
    assert_eq!(user.role, UserRole::User);
}

#[test]
fn login_requires_both_fields() {
    assert_eq!(login("", "pw"), Err(ApiError::MissingCredentials));
    assert_eq!(login("   ", "pw"), Err(ApiError::MissingCredentials));
    assert_eq!(login("a@b.c", ""), Err(ApiError::MissingCredentials));
}

// =============================================================
// AuthApi::register
// =============================================================

#[test]
fn register_signs_in_as_resolved_account() {
    let user = block_on(MockApi.register(RegisterRequest {
        username: "neo".to_owned(),
        email: "neo@cybernet.dev".to_owned(),
        password: "pw".to_owned(),
    }))
    .unwrap();
    assert_eq!(user.id, "user1");
}

// =============================================================
// SettingsApi
// =============================================================

#[test]
fn save_settings_succeeds() {
    let settings = crate::mock::admin::system_settings();
    assert_eq!(block_on(MockApi.save_settings(&settings)), Ok(()));
}
