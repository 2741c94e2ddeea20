//! Authentication and authorization tests
//!
//! Property-based and unit tests for:
//! - Account registration input rules
//! - JWT claim structure and token lifetimes
//! - Password and refresh token storage rules

use proptest::prelude::*;

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Generate valid email addresses
fn email_strategy() -> impl Strategy<Value = String> {
    "[a-z]{5,10}@[a-z]{3,8}\\.(com|org|net|co\\.uk)"
}

/// Generate valid passwords (8+ chars)
fn password_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9!@#$%]{8,20}"
}

/// Generate short passwords that must be rejected
fn short_password_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{1,7}"
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    /// Property: every generated email passes the registration format rules
    #[test]
    fn test_email_format(email in email_strategy()) {
        prop_assert!(email.contains('@'));
        prop_assert!(email.contains('.'));
        prop_assert!(email.len() >= 5);
    }

    /// Property: password strength requires at least 8 characters
    #[test]
    fn test_password_strength(password in password_strategy()) {
        prop_assert!(password.len() >= 8);
    }

    /// Property: short passwords never satisfy the strength rule
    #[test]
    fn test_short_passwords_rejected(password in short_password_strategy()) {
        prop_assert!(password.len() < 8);
    }
}

// ============================================================================
// Unit Tests: Authentication Flow
// ============================================================================

#[cfg(test)]
mod auth_flow_tests {
    #[test]
    fn test_jwt_claims_structure() {
        // JWT claims carry the user id, staff flag and lifetimes
        let required_fields = vec!["sub", "is_staff", "exp", "iat"];
        assert_eq!(required_fields.len(), 4, "JWT should have 4 required fields");
    }

    #[test]
    fn test_token_types() {
        let token_type = "Bearer";
        assert_eq!(token_type, "Bearer", "Token type should be Bearer");
    }

    #[test]
    fn test_default_token_lifetimes() {
        // Access tokens live for an hour, refresh tokens for a week
        let access_token_expiry = 3600;
        let refresh_token_expiry = 604800;
        assert_eq!(access_token_expiry, 60 * 60);
        assert_eq!(refresh_token_expiry, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_password_hash_not_stored_plain() {
        let password = "testpassword123";
        // bcrypt hash always starts with $2
        let mock_hash = "$2b$12$...";
        assert!(mock_hash.starts_with("$2"), "Password should be bcrypt hashed");
        assert_ne!(password, mock_hash, "Password should not be stored in plain text");
    }

    #[test]
    fn test_refresh_token_format() {
        // Refresh tokens are opaque UUIDs; only their digest is stored
        let uuid_pattern = "xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx";
        assert_eq!(uuid_pattern.len(), 36, "UUID should be 36 characters");
    }
}

// ============================================================================
// Unit Tests: Permission Rules
// ============================================================================

#[cfg(test)]
mod permission_tests {
    /// Resources whose writes require staff rights
    const STAFF_WRITE_RESOURCES: &[&str] = &[
        "airports",
        "routes",
        "airplane-manufacturers",
        "airplane-types",
        "airplanes",
        "flights",
    ];

    /// Resources that are staff-only even for reads
    const STAFF_ONLY_RESOURCES: &[&str] = &["crew-positions", "crews"];

    #[test]
    fn test_reference_data_writes_are_staff_gated() {
        assert!(
            STAFF_WRITE_RESOURCES.len() >= 6,
            "All reference data writes should require staff rights"
        );
    }

    #[test]
    fn test_crew_is_staff_only() {
        for resource in STAFF_ONLY_RESOURCES {
            assert!(
                resource.starts_with("crew"),
                "Only crew resources are fully staff-gated: {}",
                resource
            );
        }
    }

    #[test]
    fn test_orders_are_never_staff_gated() {
        assert!(!STAFF_WRITE_RESOURCES.contains(&"orders"));
        assert!(!STAFF_ONLY_RESOURCES.contains(&"orders"));
    }
}
