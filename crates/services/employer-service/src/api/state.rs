//! Application state for dependency injection.

use std::sync::Arc;

use crate::infra::Database;
use crate::repository::EmployerStore;
use crate::service::{EmployerManager, EmployerService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Employer lifecycle service
    pub employer_service: Arc<dyn EmployerService>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the SeaORM-backed store and lifecycle manager over a database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let repo = Arc::new(EmployerStore::new(database.get_connection()));
        let employer_service = Arc::new(EmployerManager::new(repo));

        Self::new(employer_service, database)
    }

    /// Create new application state with manually injected services.
    pub fn new(employer_service: Arc<dyn EmployerService>, database: Arc<Database>) -> Self {
        Self {
            employer_service,
            database,
        }
    }
}
