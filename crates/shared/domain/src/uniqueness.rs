//! Email uniqueness policy.
//!
//! The caller looks up the employer currently holding a candidate email and
//! passes it here together with the id of the employer being updated, if any.

use crate::employer::Employer;

/// Decide whether a candidate email conflicts with an existing employer.
///
/// `holder` is the employer that currently has the candidate email, if any.
/// `current_id` is the id of the employer being updated (`None` on create).
/// An employer never conflicts with itself.
pub fn is_conflicting(holder: Option<&Employer>, current_id: Option<i64>) -> bool {
    match (holder, current_id) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some(holder), Some(id)) => holder.id != id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employer::EmployerInput;

    fn holder(id: i64) -> Employer {
        Employer::new(
            id,
            EmployerInput::new("John Doe", "john@example.com", "Engineer"),
        )
    }

    #[test]
    fn test_free_email_never_conflicts() {
        assert!(!is_conflicting(None, None));
        assert!(!is_conflicting(None, Some(7)));
    }

    #[test]
    fn test_taken_email_conflicts_on_create() {
        assert!(is_conflicting(Some(&holder(1)), None));
    }

    #[test]
    fn test_own_email_does_not_conflict() {
        assert!(!is_conflicting(Some(&holder(1)), Some(1)));
    }

    #[test]
    fn test_other_holder_conflicts_on_update() {
        assert!(is_conflicting(Some(&holder(1)), Some(2)));
    }
}
