//! Workspace Entity

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::validator::WorkspaceValidator;
use crate::domain::audit::AuditInfo;
use crate::domain::ids::{OrganizationId, ProjectId, ResourceId, UserId, WorkspaceId};
use crate::domain::organization::Organization;
use crate::domain::project::Project;
use crate::domain::resource::{owner, Resource, ResourceOwner, ResourceOwnerRef};
use crate::domain::rules;
use crate::domain::user::User;
use crate::result::DomainResult;

/// A team space inside an organization, holding projects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    id: WorkspaceId,
    audit: AuditInfo,
    owner_id: OrganizationId,
    title: String,
    contacts: Vec<UserId>,
    projects: Vec<ProjectId>,
    resources: Vec<ResourceId>,
}

impl Workspace {
    /// Create a new workspace and register it with `organization`
    pub fn create(organization: &mut Organization, title: &str) -> DomainResult<Self> {
        WorkspaceValidator::validate_title(title)?;

        let workspace = Self {
            id: WorkspaceId::new(),
            audit: AuditInfo::created_by(organization.audit().created_by.clone()),
            owner_id: organization.id(),
            title: title.to_string(),
            contacts: Vec::new(),
            projects: Vec::new(),
            resources: Vec::new(),
        };
        organization.add_workspace(&workspace)?;

        debug!(workspace_id = %workspace.id, organization_id = %workspace.owner_id, "Created workspace");
        Ok(workspace)
    }

    pub fn id(&self) -> WorkspaceId {
        self.id
    }

    pub fn audit(&self) -> &AuditInfo {
        &self.audit
    }

    /// The organization this workspace belongs to
    pub fn owner_id(&self) -> OrganizationId {
        self.owner_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Users to reach out to about this workspace
    pub fn contacts(&self) -> &[UserId] {
        &self.contacts
    }

    pub fn projects(&self) -> &[ProjectId] {
        &self.projects
    }

    pub fn update_title(&mut self, title: &str) -> DomainResult {
        WorkspaceValidator::validate_title(title)?;
        self.title = title.to_string();
        Ok(())
    }

    pub fn add_contact(&mut self, contact: &User) -> DomainResult {
        let id = contact.id();
        WorkspaceValidator::validate_add_contact(&id, &self.contacts)?;
        self.contacts.push(id);
        Ok(())
    }

    pub fn remove_contact(&mut self, contact: &User) -> DomainResult {
        let id = contact.id();
        WorkspaceValidator::validate_remove_contact(&id, &self.contacts)?;
        self.contacts.retain(|c| *c != id);
        Ok(())
    }

    /// Register a project that belongs to this workspace
    pub fn add_project(&mut self, project: &Project) -> DomainResult {
        let id = project.id();
        WorkspaceValidator::validate_add_project(&id, &self.projects)?;
        rules::belongs_to(&project.workspace_id(), &self.id, "projects", "project", "workspace")?;
        self.projects.push(id);
        Ok(())
    }

    pub fn remove_project(&mut self, project: &Project) -> DomainResult {
        let id = project.id();
        WorkspaceValidator::validate_remove_project(&id, &self.projects)?;
        self.projects.retain(|p| *p != id);
        Ok(())
    }
}

impl ResourceOwner for Workspace {
    fn owner_ref(&self) -> ResourceOwnerRef {
        ResourceOwnerRef::Workspace(self.id)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resource::ResourceLevel;

    fn acme() -> (User, Organization) {
        let mut owner = User::create("Ada", "Lovelace", "ada@x.com").unwrap();
        let org = Organization::create("Acme", &mut owner).unwrap();
        (owner, org)
    }

    #[test]
    fn test_create_workspace() {
        let (_, mut org) = acme();
        let eng = Workspace::create(&mut org, "Eng").unwrap();

        assert_eq!(eng.title(), "Eng");
        assert_eq!(eng.owner_id(), org.id());
        assert_eq!(eng.audit().created_by, "ada@x.com");
        assert_eq!(org.workspaces(), &[eng.id()]);
    }

    #[test]
    fn test_create_rejects_short_title() {
        let (_, mut org) = acme();
        let errors = Workspace::create(&mut org, "En").unwrap_err();
        assert_eq!(
            errors.first().to_string(),
            "Workspace title is too short, please provide a title with at least 3 characters."
        );
        assert!(org.workspaces().is_empty());
    }

    #[test]
    fn test_update_title() {
        let (_, mut org) = acme();
        let mut eng = Workspace::create(&mut org, "Eng").unwrap();
        eng.update_title("Engineering").unwrap();
        assert_eq!(eng.title(), "Engineering");
        assert!(eng.update_title("").is_err());
        assert_eq!(eng.title(), "Engineering");
    }

    #[test]
    fn test_contacts() {
        let (owner, mut org) = acme();
        let mut eng = Workspace::create(&mut org, "Eng").unwrap();

        eng.add_contact(&owner).unwrap();
        assert!(eng.add_contact(&owner).unwrap_err().mentions("already exists"));
        assert_eq!(eng.contacts(), &[owner.id()]);

        eng.remove_contact(&owner).unwrap();
        assert!(eng.contacts().is_empty());
        assert!(eng.remove_contact(&owner).unwrap_err().mentions("does not exist"));
    }

    #[test]
    fn test_projects() {
        let (_, mut org) = acme();
        let mut eng = Workspace::create(&mut org, "Eng").unwrap();
        let mut ops = Workspace::create(&mut org, "Ops").unwrap();
        let launch = Project::create(&mut eng, "Launch").unwrap();

        assert_eq!(eng.projects(), &[launch.id()]);
        assert!(eng.add_project(&launch).is_err());
        assert!(ops.add_project(&launch).unwrap_err().mentions("does not belong to this workspace"));

        eng.remove_project(&launch).unwrap();
        assert!(eng.projects().is_empty());
        assert!(eng.remove_project(&launch).is_err());
    }

    #[test]
    fn test_resources() {
        let (_, mut org) = acme();
        let mut eng = Workspace::create(&mut org, "Eng").unwrap();
        let wiki = Resource::create(
            "Wiki",
            "http://wiki",
            eng.id().as_uuid(),
            Some(ResourceLevel::Workspace),
        )
        .unwrap();
        let foreign = Resource::create(
            "Wiki",
            "http://wiki",
            org.id().as_uuid(),
            Some(ResourceLevel::Organization),
        )
        .unwrap();

        eng.add_resource(&wiki).unwrap();
        assert!(eng.add_resource(&foreign).is_err());
        assert_eq!(eng.resources(), &[wiki.id()]);
        eng.remove_resource(&wiki).unwrap();
        assert!(eng.remove_resource(&wiki).is_err());
    }
}
