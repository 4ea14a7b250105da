//! Project activity validation

use super::entity::ProjectActivityType;
use crate::domain::ids::WorkItemId;
use crate::domain::rules;
use crate::result::DomainResult;

const MIN_TITLE_LEN: usize = 3;
const MAX_TITLE_LEN: usize = 75;

/// Validator for milestone and iteration properties
pub struct ProjectActivityValidator;

impl ProjectActivityValidator {
    /// Validate an activity title (3 to 75 characters)
    pub fn validate_title(title: &str) -> DomainResult<&str> {
        rules::bounded_text(title, "title", "Activity title", "title", MIN_TITLE_LEN, MAX_TITLE_LEN)
    }

    pub fn validate_description(description: &str) -> DomainResult<&str> {
        rules::description(description, "Activity")
    }

    pub fn validate_type(activity_type: Option<ProjectActivityType>) -> DomainResult<ProjectActivityType> {
        rules::required(activity_type, "type", "Activity type", "type")
    }

    pub fn validate_add_work_item(item: &WorkItemId, items: &[WorkItemId]) -> DomainResult {
        rules::can_add(item, items, "work_items", "work item")
    }

    pub fn validate_remove_work_item(item: &WorkItemId, items: &[WorkItemId]) -> DomainResult {
        rules::can_remove(item, items, "work_items", "work item")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title() {
        assert!(ProjectActivityValidator::validate_title("v1.0").is_ok());
        assert!(ProjectActivityValidator::validate_title("abc").is_ok());
        assert!(ProjectActivityValidator::validate_title(&"a".repeat(75)).is_ok());
        assert!(ProjectActivityValidator::validate_title("v1").unwrap_err().mentions("at least 3"));
        assert!(ProjectActivityValidator::validate_title(&"a".repeat(76)).is_err());
    }

    #[test]
    fn test_validate_type() {
        assert_eq!(
            ProjectActivityValidator::validate_type(Some(ProjectActivityType::Iteration)),
            Ok(ProjectActivityType::Iteration)
        );
        let errors = ProjectActivityValidator::validate_type(None).unwrap_err();
        assert_eq!(
            errors.first().to_string(),
            "Activity type cannot be empty, please provide a type."
        );
    }

    #[test]
    fn test_validate_description() {
        assert!(ProjectActivityValidator::validate_description(&"d".repeat(501))
            .unwrap_err()
            .mentions("Activity description is too long"));
    }
}
