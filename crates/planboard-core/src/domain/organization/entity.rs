//! Organization Entity

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::validator::OrganizationValidator;
use crate::domain::audit::AuditInfo;
use crate::domain::ids::{OrganizationId, ResourceId, UserId, WorkspaceId};
use crate::domain::resource::{owner, Resource, ResourceOwner, ResourceOwnerRef};
use crate::domain::rules;
use crate::domain::user::{User, UserValidator};
use crate::domain::workspace::Workspace;
use crate::result::{DomainResult, ErrorCollector};

/// Top-level grouping of users and workspaces
///
/// The owner is fixed at creation. Members are users that joined the
/// organization; the owner is not implicitly a member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    id: OrganizationId,
    audit: AuditInfo,
    name: String,
    owner_id: UserId,
    members: Vec<UserId>,
    workspaces: Vec<WorkspaceId>,
    resources: Vec<ResourceId>,
}

impl Organization {
    /// Create a new organization owned by `owner`
    ///
    /// The organization is recorded in the owner's owned list.
    pub fn create(name: &str, owner: &mut User) -> DomainResult<Self> {
        OrganizationValidator::validate_name(name)?;

        let organization = Self {
            id: OrganizationId::new(),
            audit: AuditInfo::created_by(owner.email()),
            name: name.to_string(),
            owner_id: owner.id(),
            members: Vec::new(),
            workspaces: Vec::new(),
            resources: Vec::new(),
        };
        owner.add_owned_organization(organization.id);

        debug!(organization_id = %organization.id, owner_id = %owner.id(), "Created organization");
        Ok(organization)
    }

    pub fn id(&self) -> OrganizationId {
        self.id
    }

    pub fn audit(&self) -> &AuditInfo {
        &self.audit
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }

    pub fn members(&self) -> &[UserId] {
        &self.members
    }

    pub fn workspaces(&self) -> &[WorkspaceId] {
        &self.workspaces
    }

    pub fn update_name(&mut self, name: &str) -> DomainResult {
        OrganizationValidator::validate_name(name)?;
        self.name = name.to_string();
        Ok(())
    }

    /// Add a member, recording the membership on the user as well
    pub fn add_member(&mut self, member: &mut User) -> DomainResult {
        let mut errors = ErrorCollector::new();
        errors.check(OrganizationValidator::validate_add_member(&member.id(), &self.members));
        errors.check(UserValidator::validate_join_organization(&self.id, member.memberships()));
        errors.finish(())?;

        member.join_organization(self.id)?;
        self.members.push(member.id());

        debug!(organization_id = %self.id, user_id = %member.id(), "Added member");
        Ok(())
    }

    /// Remove a member, dropping the membership on the user as well
    pub fn remove_member(&mut self, member: &mut User) -> DomainResult {
        let mut errors = ErrorCollector::new();
        errors.check(OrganizationValidator::validate_remove_member(&member.id(), &self.members));
        errors.check(UserValidator::validate_leave_organization(&self.id, member.memberships()));
        errors.finish(())?;

        member.leave_organization(self.id)?;
        let id = member.id();
        self.members.retain(|m| *m != id);

        debug!(organization_id = %self.id, user_id = %id, "Removed member");
        Ok(())
    }

    /// Register a workspace that belongs to this organization
    pub fn add_workspace(&mut self, workspace: &Workspace) -> DomainResult {
        let id = workspace.id();
        OrganizationValidator::validate_add_workspace(&id, &self.workspaces)?;
        rules::belongs_to(&workspace.owner_id(), &self.id, "workspaces", "workspace", "organization")?;
        self.workspaces.push(id);
        Ok(())
    }

    pub fn remove_workspace(&mut self, workspace: &Workspace) -> DomainResult {
        let id = workspace.id();
        OrganizationValidator::validate_remove_workspace(&id, &self.workspaces)?;
        self.workspaces.retain(|w| *w != id);
        Ok(())
    }
}

impl ResourceOwner for Organization {
    fn owner_ref(&self) -> ResourceOwnerRef {
        ResourceOwnerRef::Organization(self.id)
    }

    fn resources(&self) -> &[ResourceId] {
        &self.resources
    }

    fn add_resource(&mut self, resource: &Resource) -> DomainResult {
        owner::attach(self.owner_ref(), &mut self.resources, resource)
    }

    fn remove_resource(&mut self, resource: &Resource) -> DomainResult {
        owner::detach(&mut self.resources, resource)
    }
}
