//! Workspace validation

use crate::domain::ids::{ProjectId, UserId};
use crate::domain::rules;
use crate::result::DomainResult;

const MIN_TITLE_LEN: usize = 3;
const MAX_TITLE_LEN: usize = 100;

/// Validator for workspace properties
pub struct WorkspaceValidator;

impl WorkspaceValidator {
    /// Validate a workspace title (3 to 100 characters)
    pub fn validate_title(title: &str) -> DomainResult<&str> {
        rules::bounded_text(title, "title", "Workspace title", "title", MIN_TITLE_LEN, MAX_TITLE_LEN)
    }

    pub fn validate_add_contact(contact: &UserId, contacts: &[UserId]) -> DomainResult {
        rules::can_add(contact, contacts, "contacts", "contact")
    }

    pub fn validate_remove_contact(contact: &UserId, contacts: &[UserId]) -> DomainResult {
        rules::can_remove(contact, contacts, "contacts", "contact")
    }

    pub fn validate_add_project(project: &ProjectId, projects: &[ProjectId]) -> DomainResult {
        rules::can_add(project, projects, "projects", "project")
    }

    pub fn validate_remove_project(project: &ProjectId, projects: &[ProjectId]) -> DomainResult {
        rules::can_remove(project, projects, "projects", "project")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title() {
        assert!(WorkspaceValidator::validate_title("Eng").is_ok());
        assert!(WorkspaceValidator::validate_title(&"w".repeat(100)).is_ok());
        assert!(WorkspaceValidator::validate_title("En").unwrap_err().mentions("at least 3"));
        assert!(WorkspaceValidator::validate_title(&"w".repeat(101)).unwrap_err().mentions("at most 100"));
    }

    #[test]
    fn test_validate_contacts() {
        let contact = UserId::new();
        assert!(WorkspaceValidator::validate_add_contact(&contact, &[]).is_ok());
        let errors = WorkspaceValidator::validate_add_contact(&contact, &[contact]).unwrap_err();
        assert_eq!(errors.first().field(), Some("contacts"));
        assert!(WorkspaceValidator::validate_remove_contact(&contact, &[]).is_err());
    }
}
