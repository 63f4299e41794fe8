//! Domain-level errors.
//!
//! These errors represent business rule violations in the employer lifecycle.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more fields failed validation (message lists every field)
    #[error("{0}")]
    Validation(String),

    /// Email already held by another employer
    #[error("Employer with email {0} already exists")]
    AlreadyExists(String),

    /// No employer with the requested id
    #[error("Employer not found")]
    NotFound,
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Create an already-exists error for an email
    pub fn already_exists(email: impl Into<String>) -> Self {
        DomainError::AlreadyExists(email.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{employer_already_exists, EMPLOYER_NOT_FOUND};

    #[test]
    fn test_messages_match_constants() {
        assert_eq!(DomainError::NotFound.to_string(), EMPLOYER_NOT_FOUND);
        assert_eq!(
            DomainError::already_exists("john@example.com").to_string(),
            employer_already_exists("john@example.com")
        );
    }
}
