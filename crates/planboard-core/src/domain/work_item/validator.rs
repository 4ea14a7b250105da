//! Work item validation
//!
//! Field checks plus the structural rules of the subitem tree.

use super::entity::{ItemType, WorkItem};
use crate::domain::ids::{ProjectActivityId, ResourceId};
use crate::domain::project::Project;
use crate::domain::rules;
use crate::domain::shared::{Priority, Status};
use crate::domain::user::User;
use crate::error::DomainError;
use crate::result::{DomainResult, ErrorCollector};

const MIN_TITLE_LEN: usize = 3;
const MAX_TITLE_LEN: usize = 75;

/// Validator for work item properties
pub struct WorkItemValidator;

impl WorkItemValidator {
    /// Validate a work item title (3 to 75 characters)
    pub fn validate_title(title: &str) -> DomainResult<&str> {
        rules::bounded_text(title, "title", "Work item title", "title", MIN_TITLE_LEN, MAX_TITLE_LEN)
    }

    pub fn validate_description(description: &str) -> DomainResult<&str> {
        rules::description(description, "Work item")
    }

    pub fn validate_status(status: Option<Status>) -> DomainResult<Status> {
        rules::required(status, "status", "Work item status", "status")
    }

    pub fn validate_priority(priority: Option<Priority>) -> DomainResult<Priority> {
        rules::required(priority, "priority", "Work item priority", "priority")
    }

    pub fn validate_type(item_type: Option<ItemType>) -> DomainResult<ItemType> {
        rules::required(item_type, "type", "Work item type", "type")
    }

    pub fn validate_assigned_to(assignee: Option<&User>) -> DomainResult<&User> {
        rules::required(assignee, "assigned_to", "Work item assigned to", "user")
    }

    /// Validate making `child` a subitem of `parent` inside `project`
    ///
    /// Rules (all violations are reported):
    /// - `child` is not already in the subitem list
    /// - `child` is not `parent` itself, nor any of `parent`'s ancestors
    /// - `child` has no parent yet
    /// - both belong to `project`
    pub fn validate_add_subitem(project: &Project, parent: &WorkItem, child: &WorkItem) -> DomainResult {
        let mut errors = ErrorCollector::new();
        errors.check(rules::can_add(&child.id(), parent.subitems(), "subitems", "subitem"));

        if child.id() == parent.id() {
            errors.push(DomainError::invalid_argument(
                "subitems",
                "A work item cannot be a subitem of itself.",
            ));
        } else if parent.parent_id() == Some(child.id()) {
            errors.push(DomainError::invalid_argument(
                "subitems",
                "The provided subitem is the parent of this work item.",
            ));
        } else if project.ancestors_of(parent.id()).contains(&child.id()) {
            errors.push(DomainError::invalid_argument(
                "subitems",
                "The provided subitem is an ancestor of this work item.",
            ));
        }

        if child.parent_id().is_some() && !parent.subitems().contains(&child.id()) {
            errors.push(DomainError::invalid_argument(
                "parent",
                "The provided subitem already has a parent.",
            ));
        }

        errors.check(rules::belongs_to(
            &parent.project_id(),
            &project.id(),
            "subitems",
            "work item",
            "project",
        ));
        errors.check(rules::belongs_to(
            &child.project_id(),
            &parent.project_id(),
            "subitems",
            "subitem",
            "project",
        ));
        errors.finish(())
    }

    /// Validate detaching `child` from `parent` inside `project`
    pub fn validate_remove_subitem(project: &Project, parent: &WorkItem, child: &WorkItem) -> DomainResult {
        rules::can_remove(&child.id(), parent.subitems(), "subitems", "subitem")?;
        rules::belongs_to(&parent.project_id(), &project.id(), "subitems", "work item", "project")?;
        rules::belongs_to(&child.parent_id(), &Some(parent.id()), "parent", "subitem", "work item")
    }

    pub fn validate_add_resource(resource: &ResourceId, resources: &[ResourceId]) -> DomainResult {
        rules::can_add(resource, resources, "resources", "resource")
    }

    pub fn validate_remove_resource(resource: &ResourceId, resources: &[ResourceId]) -> DomainResult {
        rules::can_remove(resource, resources, "resources", "resource")
    }

    pub fn validate_add_activity(
        activity: &ProjectActivityId,
        activities: &[ProjectActivityId],
    ) -> DomainResult {
        rules::can_add(activity, activities, "activities", "activity")
    }

    pub fn validate_remove_activity(
        activity: &ProjectActivityId,
        activities: &[ProjectActivityId],
    ) -> DomainResult {
        rules::can_remove(activity, activities, "activities", "activity")
    }
}
