//! Domain-level constants.
//!
//! User-facing messages for validation and lifecycle failures.

// =============================================================================
// Validation
// =============================================================================

/// Reported when an employer name is empty
pub const NAME_NOT_EMPTY: &str = "Name cannot be empty";

/// Reported when an employer email is empty
pub const EMAIL_NOT_EMPTY: &str = "Email cannot be empty";

/// Reported when an employer position is empty
pub const POSITION_NOT_EMPTY: &str = "Position cannot be empty";

/// Employer input fields in declaration order.
///
/// Field errors are reported in this order.
pub const EMPLOYER_FIELDS: &[&str] = &["name", "email", "position"];

// =============================================================================
// Lifecycle
// =============================================================================

/// Reported when no employer holds the requested id
pub const EMPLOYER_NOT_FOUND: &str = "Employer not found";

/// Message for an email already held by another employer
pub fn employer_already_exists(email: &str) -> String {
    format!("Employer with email {} already exists", email)
}
