//! Employer repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, SqlErr,
};

use super::entities::employer::{self, ActiveModel, Entity as EmployerEntity};
use common::{AppError, AppResult};
use domain::{Employer, EmployerInput};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employer repository trait for dependency injection.
///
/// Writes that violate the unique email constraint fail with
/// `AppError::DuplicateKey`; writes that hit no row fail with
/// `AppError::NotFound`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployerRepository: Send + Sync {
    /// Find employer by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Employer>>;

    /// Find employer by exact email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employer>>;

    /// Check whether an employer with this ID exists
    async fn exists(&self, id: i64) -> AppResult<bool>;

    /// Insert a new employer; the store assigns the id
    async fn insert(&self, input: EmployerInput) -> AppResult<Employer>;

    /// Overwrite name, email and position of an existing employer
    async fn update(&self, employer: Employer) -> AppResult<Employer>;

    /// Delete employer by ID
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// List all employers in insertion order
    async fn list(&self) -> AppResult<Vec<Employer>>;
}

/// Concrete implementation of EmployerRepository backed by SeaORM
pub struct EmployerStore {
    db: DatabaseConnection,
}

impl EmployerStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Translate a failed write, surfacing unique constraint violations
fn write_error(err: DbErr) -> AppError {
    match err {
        DbErr::RecordNotUpdated => AppError::NotFound,
        err => match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => AppError::DuplicateKey(detail),
            _ => AppError::from(err),
        },
    }
}

#[async_trait]
impl EmployerRepository for EmployerStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Employer>> {
        let result = EmployerEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Employer::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employer>> {
        let result = EmployerEntity::find()
            .filter(employer::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Employer::from))
    }

    async fn exists(&self, id: i64) -> AppResult<bool> {
        let count = EmployerEntity::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }

    async fn insert(&self, input: EmployerInput) -> AppResult<Employer> {
        let model = ActiveModel::from(input)
            .insert(&self.db)
            .await
            .map_err(write_error)?;

        Ok(Employer::from(model))
    }

    async fn update(&self, employer: Employer) -> AppResult<Employer> {
        let model = ActiveModel::from(employer)
            .update(&self.db)
            .await
            .map_err(write_error)?;

        Ok(Employer::from(model))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = EmployerEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Employer>> {
        let models = EmployerEntity::find()
            .order_by_asc(employer::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Employer::from).collect())
    }
}
