//! Input validation for employer requests.

use validator::{Validate, ValidationErrors};

use crate::constants::EMPLOYER_FIELDS;
use crate::employer::EmployerInput;
use crate::error::{DomainError, DomainResult};

/// Validate employer input, reporting every empty field at once.
pub fn validate_input(input: &EmployerInput) -> DomainResult<()> {
    input
        .validate()
        .map_err(|e| DomainError::validation(describe_validation_errors(&e)))
}

/// Format validation errors as `field: message, field: message`.
///
/// Known employer fields come first in declaration order; anything else
/// follows alphabetically.
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<(String, String)> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                (field.clone(), message)
            })
        })
        .collect();

    messages.sort_by(|(a, _), (b, _)| field_rank(a).cmp(&field_rank(b)).then_with(|| a.cmp(b)));

    messages
        .into_iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join(", ")
}

fn field_rank(field: &str) -> usize {
    EMPLOYER_FIELDS
        .iter()
        .position(|known| *known == field)
        .unwrap_or(EMPLOYER_FIELDS.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EMAIL_NOT_EMPTY, NAME_NOT_EMPTY, POSITION_NOT_EMPTY};

    #[test]
    fn test_complete_input_is_valid() {
        let input = EmployerInput::new("John Doe", "john@example.com", "Engineer");
        assert!(validate_input(&input).is_ok());
    }

    #[test]
    fn test_single_empty_field() {
        let input = EmployerInput::new("John Doe", "", "Engineer");
        let err = validate_input(&input).unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation(format!("email: {}", EMAIL_NOT_EMPTY))
        );
    }

    #[test]
    fn test_all_empty_fields_joined_in_declaration_order() {
        let err = validate_input(&EmployerInput::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!(
                "name: {}, email: {}, position: {}",
                NAME_NOT_EMPTY, EMAIL_NOT_EMPTY, POSITION_NOT_EMPTY
            )
        );
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        let input = EmployerInput::new(" ", "john@example.com", "Engineer");
        assert!(validate_input(&input).is_ok());
    }
}
