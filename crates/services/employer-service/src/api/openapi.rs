//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::{EmployerInput, EmployerResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employer Management API",
        description = "REST API documentation of the employer management service",
        version = "1.0"
    ),
    paths(
        crate::api::handlers::employer_handler::add_employer,
        crate::api::handlers::employer_handler::update_employer,
        crate::api::handlers::employer_handler::delete_employer,
        crate::api::handlers::employer_handler::get_employer,
        crate::api::handlers::employer_handler::list_employers,
    ),
    components(
        schemas(
            EmployerInput,
            EmployerResponse,
        )
    ),
    tags(
        (name = "Employers", description = "CRUD REST APIs - Create / Read / Update / Delete employers"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_employer_path() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/employers/add",
            "/api/employers/update/{id}",
            "/api/employers/delete/{id}",
            "/api/employers/{id}",
            "/api/employers/",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing path {}",
                expected
            );
        }
        assert_eq!(doc.info.title, "Employer Management API");
    }
}
