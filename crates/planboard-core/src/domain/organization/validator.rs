//! Organization validation

use crate::domain::ids::{UserId, WorkspaceId};
use crate::domain::rules;
use crate::result::DomainResult;

const MIN_NAME_LEN: usize = 2;
const MAX_NAME_LEN: usize = 100;

/// Validator for organization properties
pub struct OrganizationValidator;

impl OrganizationValidator {
    /// Validate an organization name
    ///
    /// Rules:
    /// - Must not be blank
    /// - Between 2 and 100 characters
    pub fn validate_name(name: &str) -> DomainResult<&str> {
        rules::bounded_text(name, "name", "Organization name", "name", MIN_NAME_LEN, MAX_NAME_LEN)
    }

    pub fn validate_add_member(member: &UserId, members: &[UserId]) -> DomainResult {
        rules::can_add(member, members, "members", "member")
    }

    pub fn validate_remove_member(member: &UserId, members: &[UserId]) -> DomainResult {
        rules::can_remove(member, members, "members", "member")
    }

    pub fn validate_add_workspace(workspace: &WorkspaceId, workspaces: &[WorkspaceId]) -> DomainResult {
        rules::can_add(workspace, workspaces, "workspaces", "workspace")
    }

    pub fn validate_remove_workspace(
        workspace: &WorkspaceId,
        workspaces: &[WorkspaceId],
    ) -> DomainResult {
        rules::can_remove(workspace, workspaces, "workspaces", "workspace")
    }
}
