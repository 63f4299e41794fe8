//! Employer handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};

use common::AppResult;
use domain::{EmployerInput, EmployerResponse};

use crate::api::extractors::{IdPath, ValidatedJson};
use crate::api::AppState;

/// Create employer routes
pub fn employer_routes() -> Router<AppState> {
    Router::new()
        .route("/api/employers/", get(list_employers))
        .route("/api/employers/add", post(add_employer))
        .route("/api/employers/update/:id", put(update_employer))
        .route("/api/employers/delete/:id", delete(delete_employer))
        .route("/api/employers/:id", get(get_employer))
}

/// Add employer
#[utoipa::path(
    post,
    path = "/api/employers/add",
    tag = "Employers",
    request_body = EmployerInput,
    responses(
        (status = 201, description = "Created employer successfully", body = EmployerResponse),
        (status = 400, description = "Validation error or email already in use")
    )
)]
pub async fn add_employer(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<EmployerInput>,
) -> AppResult<(StatusCode, Json<EmployerResponse>)> {
    let employer = state.employer_service.create_employer(payload).await?;

    Ok((StatusCode::CREATED, Json(EmployerResponse::from(employer))))
}

/// Update employer
#[utoipa::path(
    put,
    path = "/api/employers/update/{id}",
    tag = "Employers",
    params(
        ("id" = i64, Path, description = "Employer ID")
    ),
    request_body = EmployerInput,
    responses(
        (status = 200, description = "Updated employer successfully", body = EmployerResponse),
        (status = 400, description = "Validation error or email already in use"),
        (status = 404, description = "Employer not found")
    )
)]
pub async fn update_employer(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
    ValidatedJson(payload): ValidatedJson<EmployerInput>,
) -> AppResult<Json<EmployerResponse>> {
    let employer = state.employer_service.update_employer(id, payload).await?;

    Ok(Json(EmployerResponse::from(employer)))
}

/// Delete employer
#[utoipa::path(
    delete,
    path = "/api/employers/delete/{id}",
    tag = "Employers",
    params(
        ("id" = i64, Path, description = "Employer ID")
    ),
    responses(
        (status = 204, description = "Deleted employer successfully"),
        (status = 404, description = "Employer not found")
    )
)]
pub async fn delete_employer(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> AppResult<StatusCode> {
    state.employer_service.delete_employer(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get employer by id
#[utoipa::path(
    get,
    path = "/api/employers/{id}",
    tag = "Employers",
    params(
        ("id" = i64, Path, description = "Employer ID")
    ),
    responses(
        (status = 200, description = "Found employer by id successfully", body = EmployerResponse),
        (status = 404, description = "Employer not found")
    )
)]
pub async fn get_employer(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> AppResult<Json<EmployerResponse>> {
    let employer = state.employer_service.get_employer(id).await?;

    Ok(Json(EmployerResponse::from(employer)))
}

/// Get all employers
#[utoipa::path(
    get,
    path = "/api/employers/",
    tag = "Employers",
    responses(
        (status = 200, description = "Found all employers successfully", body = Vec<EmployerResponse>)
    )
)]
pub async fn list_employers(State(state): State<AppState>) -> AppResult<Json<Vec<EmployerResponse>>> {
    let employers = state.employer_service.list_employers().await?;

    Ok(Json(employers.into_iter().map(EmployerResponse::from).collect()))
}
