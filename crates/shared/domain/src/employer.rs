//! Employer domain entity and related types.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Employer domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employer {
    /// Store-assigned identifier, immutable once assigned
    pub id: i64,
    pub name: String,
    /// Unique across all employers
    pub email: String,
    pub position: String,
}

impl Employer {
    /// Build an employer from a stored id and validated input
    pub fn new(id: i64, input: EmployerInput) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            position: input.position,
        }
    }

    /// Check whether this employer currently holds `email`
    pub fn has_email(&self, email: &str) -> bool {
        self.email == email
    }

    /// Overwrite name, email and position. The id is kept.
    pub fn apply(&mut self, input: EmployerInput) {
        self.name = input.name;
        self.email = input.email;
        self.position = input.position;
    }
}

/// Employer data transfer object for create and update requests.
///
/// Missing and `null` fields deserialize as empty strings so they are
/// reported by validation rather than rejected by the JSON parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EmployerInput {
    /// Name of the employer
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[cfg_attr(feature = "openapi", schema(example = "John Doe"))]
    pub name: String,
    /// Email of the employer
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Email cannot be empty"))]
    #[cfg_attr(feature = "openapi", schema(example = "john@example.com"))]
    pub email: String,
    /// Position of the employer
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Position cannot be empty"))]
    #[cfg_attr(feature = "openapi", schema(example = "Software Engineer"))]
    pub position: String,
}

impl EmployerInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            position: position.into(),
        }
    }
}

/// Employer response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EmployerResponse {
    /// Unique employer identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i64,
    /// Name of the employer
    #[cfg_attr(feature = "openapi", schema(example = "John Doe"))]
    pub name: String,
    /// Email of the employer
    #[cfg_attr(feature = "openapi", schema(example = "john@example.com"))]
    pub email: String,
    /// Position of the employer
    #[cfg_attr(feature = "openapi", schema(example = "Software Engineer"))]
    pub position: String,
}

impl From<Employer> for EmployerResponse {
    fn from(employer: Employer) -> Self {
        Self {
            id: employer.id,
            name: employer.name,
            email: employer.email,
            position: employer.position,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> Employer {
        Employer::new(
            1,
            EmployerInput::new("John Doe", "john@example.com", "Engineer"),
        )
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut employer = john();
        employer.apply(EmployerInput::new("Jane Roe", "jane@example.com", "Lead"));

        assert_eq!(employer.id, 1);
        assert_eq!(employer.name, "Jane Roe");
        assert_eq!(employer.email, "jane@example.com");
        assert_eq!(employer.position, "Lead");
    }

    #[test]
    fn test_has_email_is_exact() {
        let employer = john();
        assert!(employer.has_email("john@example.com"));
        assert!(!employer.has_email("John@example.com"));
    }

    #[test]
    fn test_input_missing_fields_default_to_empty() {
        let input: EmployerInput = serde_json::from_str(r#"{"name":"John Doe"}"#).unwrap();
        assert_eq!(input.name, "John Doe");
        assert!(input.email.is_empty());
        assert!(input.position.is_empty());
    }

    #[test]
    fn test_input_null_fields_default_to_empty() {
        let input: EmployerInput =
            serde_json::from_str(r#"{"name":null,"email":"a@b.c","position":null}"#).unwrap();
        assert!(input.name.is_empty());
        assert_eq!(input.email, "a@b.c");
        assert!(input.position.is_empty());
    }

    #[test]
    fn test_input_ignores_client_id() {
        let input: EmployerInput = serde_json::from_str(
            r#"{"id":42,"name":"John Doe","email":"john@example.com","position":"Engineer"}"#,
        )
        .unwrap();
        assert_eq!(
            input,
            EmployerInput::new("John Doe", "john@example.com", "Engineer")
        );
    }

    #[test]
    fn test_response_from_employer() {
        let response = EmployerResponse::from(john());
        assert_eq!(response.id, 1);
        assert_eq!(response.email, "john@example.com");

        let json = serde_json::to_value(EmployerResponse::from(john())).unwrap();
        assert_eq!(json["name"], "John Doe");
        assert_eq!(json["position"], "Engineer");
    }
}
