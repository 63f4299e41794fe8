//! HTTP request handlers.

pub mod employer_handler;
pub mod health_handler;

pub use employer_handler::employer_routes;
pub use health_handler::health_routes;
