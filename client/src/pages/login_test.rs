use super::*;

// =============================================================
// Login input
// =============================================================

#[test]
fn login_input_trims_email() {
    let request = validate_login_input("  sarah@cyber.net ", "hunter2").unwrap();
    assert_eq!(request.email, "sarah@cyber.net");
    assert_eq!(request.password, "hunter2");
}

#[test]
fn login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter both email and password."));
}

#[test]
fn login_input_keeps_password_whitespace() {
    let request = validate_login_input("a@b.com", " spaced ").unwrap();
    assert_eq!(request.password, " spaced ");
}

// =============================================================
// Register input
// =============================================================

#[test]
fn register_input_requires_every_field() {
    let err = Err("Username, email and password are all required.");
    assert_eq!(validate_register_input("", "a@b.com", "pw"), err);
    assert_eq!(validate_register_input("neo", " ", "pw"), err);
    assert_eq!(validate_register_input("neo", "a@b.com", ""), err);
}

#[test]
fn register_input_trims_username_and_email() {
    let request = validate_register_input(" neo ", " neo@cyber.net ", "pw").unwrap();
    assert_eq!(request.username, "neo");
    assert_eq!(request.email, "neo@cyber.net");
}
