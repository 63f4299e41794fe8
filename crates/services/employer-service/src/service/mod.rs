//! Application services layer - employer lifecycle use cases.

mod employer_service;

pub use employer_service::{EmployerManager, EmployerService};
