//! Employer Service Library
//!
//! CRUD REST service for employer records backed by a relational store.
//!
//! # Architecture Layers
//!
//! - **config**: Service configuration from the environment
//! - **infra**: Database connection and schema migrations
//! - **repository**: SeaORM-backed employer store
//! - **service**: Employer lifecycle use cases
//! - **api**: HTTP handlers, routes and OpenAPI documentation

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::EmployerServiceConfig;
use crate::infra::Database;

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Connect, apply pending migrations and serve HTTP until Ctrl+C.
pub async fn run_server(config: EmployerServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let database = Arc::new(Database::connect(&config.database).await?);
    let state = AppState::from_database(database);
    let app = create_router(state);

    let addr: SocketAddr = config.server_addr().parse()?;
    info!("Employer service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Employer service stopped");
    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    action: MigrateAction,
    config: EmployerServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Resetting database and running all migrations...");
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Received shutdown signal, stopping server...");
}
