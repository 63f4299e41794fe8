//! Domain layer - Employer records and the rules that govern them.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the employer record, input validation and the email uniqueness policy.

pub mod constants;
pub mod employer;
pub mod error;
pub mod uniqueness;
pub mod validation;

pub use constants::*;
pub use employer::{Employer, EmployerInput, EmployerResponse};
pub use error::{DomainError, DomainResult};
pub use uniqueness::is_conflicting;
pub use validation::{describe_validation_errors, validate_input};
