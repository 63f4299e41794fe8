//! Repository layer for data access.

mod employer_repository;
pub mod entities;

pub use employer_repository::{EmployerRepository, EmployerStore};

#[cfg(any(test, feature = "test-utils"))]
pub use employer_repository::MockEmployerRepository;
