//! Employer service - Create, read, update, delete and list employers.
//!
//! Validation and the email uniqueness check always run before any write.
//! The pre-check is not atomic with the write; the store's unique constraint
//! settles races, and its violation is reported as `AlreadyExists` too.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{is_conflicting, validate_input, Employer, EmployerInput};

use crate::repository::EmployerRepository;

/// Employer service trait for dependency injection.
#[async_trait]
pub trait EmployerService: Send + Sync {
    /// Create an employer with a store-assigned id
    async fn create_employer(&self, input: EmployerInput) -> AppResult<Employer>;

    /// Overwrite name, email and position of an existing employer
    async fn update_employer(&self, id: i64, input: EmployerInput) -> AppResult<Employer>;

    /// Remove an employer
    async fn delete_employer(&self, id: i64) -> AppResult<()>;

    /// Get employer by ID
    async fn get_employer(&self, id: i64) -> AppResult<Employer>;

    /// List all employers in insertion order
    async fn list_employers(&self) -> AppResult<Vec<Employer>>;
}

/// Concrete implementation of EmployerService using repository.
pub struct EmployerManager {
    repo: Arc<dyn EmployerRepository>,
}

impl EmployerManager {
    /// Create new employer service instance with repository
    pub fn new(repo: Arc<dyn EmployerRepository>) -> Self {
        Self { repo }
    }

    /// Apply the uniqueness policy to whoever currently holds `email`.
    async fn email_conflicts(&self, email: &str, current_id: Option<i64>) -> AppResult<bool> {
        let holder = self.repo.find_by_email(email).await?;
        Ok(is_conflicting(holder.as_ref(), current_id))
    }
}

/// A unique constraint violation at write time means the email was taken
/// after the pre-check passed.
fn relabel_duplicate(err: AppError, email: &str) -> AppError {
    match err {
        AppError::DuplicateKey(_) => AppError::already_exists(email),
        other => other,
    }
}

#[async_trait]
impl EmployerService for EmployerManager {
    async fn create_employer(&self, input: EmployerInput) -> AppResult<Employer> {
        validate_input(&input)?;

        if self.email_conflicts(&input.email, None).await? {
            tracing::debug!(email = %input.email, "Create rejected: email already in use");
            return Err(AppError::already_exists(input.email));
        }

        let email = input.email.clone();
        let employer = self
            .repo
            .insert(input)
            .await
            .map_err(|e| relabel_duplicate(e, &email))?;

        tracing::info!(id = employer.id, "Employer created");
        Ok(employer)
    }

    async fn update_employer(&self, id: i64, input: EmployerInput) -> AppResult<Employer> {
        validate_input(&input)?;

        let mut employer = self.repo.find_by_id(id).await?.ok_or_not_found()?;

        // Keeping one's own email is never a conflict
        if !employer.has_email(&input.email) && self.email_conflicts(&input.email, Some(id)).await? {
            tracing::debug!(id, email = %input.email, "Update rejected: email already in use");
            return Err(AppError::already_exists(input.email));
        }

        let email = input.email.clone();
        employer.apply(input);
        let employer = self
            .repo
            .update(employer)
            .await
            .map_err(|e| relabel_duplicate(e, &email))?;

        tracing::info!(id = employer.id, "Employer updated");
        Ok(employer)
    }

    async fn delete_employer(&self, id: i64) -> AppResult<()> {
        if !self.repo.exists(id).await? {
            return Err(AppError::NotFound);
        }

        self.repo.delete(id).await?;

        tracing::info!(id, "Employer deleted");
        Ok(())
    }

    async fn get_employer(&self, id: i64) -> AppResult<Employer> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_employers(&self) -> AppResult<Vec<Employer>> {
        self.repo.list().await
    }
}
