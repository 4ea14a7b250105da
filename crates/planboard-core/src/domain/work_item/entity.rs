//! Work Item Entity
//!
//! Work items form a forest inside a project: each item has at most one
//! parent and any number of subitems. They can also be grouped into
//! activities; that link is driven from
//! [`crate::domain::activity::ProjectActivity::add_work_item`].

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::validator::WorkItemValidator;
use crate::domain::activity::ProjectActivityType;
use crate::domain::audit::AuditInfo;
use crate::domain::ids::{ProjectActivityId, ProjectId, ResourceId, UserId, WorkItemId};
use crate::domain::project::Project;
use crate::domain::resource::Resource;
use crate::domain::shared::{Priority, Status};
use crate::domain::user::User;
use crate::result::DomainResult;

/// Kind of work a work item represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Task,
    Bug,
    Feature,
    Story,
    Epic,
}

impl ItemType {
    /// Parse from string representation
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "task" => Some(Self::Task),
            "bug" => Some(Self::Bug),
            "feature" => Some(Self::Feature),
            "story" | "user_story" => Some(Self::Story),
            "epic" => Some(Self::Epic),
            _ => None,
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Bug => "bug",
            Self::Feature => "feature",
            Self::Story => "story",
            Self::Epic => "epic",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A task, bug or other trackable piece of work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    id: WorkItemId,
    audit: AuditInfo,
    project_id: ProjectId,
    title: String,
    description: String,
    status: Option<Status>,
    priority: Option<Priority>,
    item_type: Option<ItemType>,
    assigned_to: Option<UserId>,
    parent: Option<WorkItemId>,
    subitems: Vec<WorkItemId>,
    resources: Vec<ResourceId>,
    activities: Vec<ProjectActivityId>,
}

impl WorkItem {
    /// Create a new work item and register it with `project`
    pub fn create(project: &mut Project, title: &str) -> DomainResult<Self> {
        WorkItemValidator::validate_title(title)?;

        let item = Self {
            id: WorkItemId::new(),
            audit: AuditInfo::created_by(project.audit().created_by.clone()),
            project_id: project.id(),
            title: title.to_string(),
            description: String::new(),
            status: None,
            priority: None,
            item_type: None,
            assigned_to: None,
            parent: None,
            subitems: Vec::new(),
            resources: Vec::new(),
            activities: Vec::new(),
        };
        project.add_work_item(&item)?;

        debug!(work_item_id = %item.id, project_id = %item.project_id, "Created work item");
        Ok(item)
    }

    pub fn id(&self) -> WorkItemId {
        self.id
    }

    pub fn audit(&self) -> &AuditInfo {
        &self.audit
    }

    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> Option<Status> {
        self.status
    }

    pub fn priority(&self) -> Option<Priority> {
        self.priority
    }

    pub fn item_type(&self) -> Option<ItemType> {
        self.item_type
    }

    pub fn assigned_to(&self) -> Option<UserId> {
        self.assigned_to
    }

    pub fn parent_id(&self) -> Option<WorkItemId> {
        self.parent
    }

    pub fn subitems(&self) -> &[WorkItemId] {
        &self.subitems
    }

    pub fn resources(&self) -> &[ResourceId] {
        &self.resources
    }

    /// Activities (milestones and iterations) this item belongs to
    pub fn activities(&self) -> &[ProjectActivityId] {
        &self.activities
    }

    /// Milestones this item belongs to, resolved through the owning project
    pub fn milestones(&self, project: &Project) -> Vec<ProjectActivityId> {
        self.activities_of(project, ProjectActivityType::Milestone)
    }

    /// Iterations this item belongs to, resolved through the owning project
    pub fn iterations(&self, project: &Project) -> Vec<ProjectActivityId> {
        self.activities_of(project, ProjectActivityType::Iteration)
    }

    fn activities_of(
        &self,
        project: &Project,
        activity_type: ProjectActivityType,
    ) -> Vec<ProjectActivityId> {
        self.activities
            .iter()
            .copied()
            .filter(|id| project.activity_type(*id) == Some(activity_type))
            .collect()
    }

    pub fn update_title(&mut self, title: &str) -> DomainResult {
        WorkItemValidator::validate_title(title)?;
        self.title = title.to_string();
        Ok(())
    }

    pub fn update_description(&mut self, description: &str) -> DomainResult {
        WorkItemValidator::validate_description(description)?;
        self.description = description.to_string();
        Ok(())
    }

    pub fn update_status(&mut self, status: Option<Status>) -> DomainResult {
        self.status = Some(WorkItemValidator::validate_status(status)?);
        Ok(())
    }

    pub fn update_priority(&mut self, priority: Option<Priority>) -> DomainResult {
        self.priority = Some(WorkItemValidator::validate_priority(priority)?);
        Ok(())
    }

    pub fn update_type(&mut self, item_type: Option<ItemType>) -> DomainResult {
        self.item_type = Some(WorkItemValidator::validate_type(item_type)?);
        Ok(())
    }

    /// Assign the item to a user; `None` is rejected rather than unassigning
    pub fn update_assigned_to(&mut self, assignee: Option<&User>) -> DomainResult {
        let user = WorkItemValidator::validate_assigned_to(assignee)?;
        self.assigned_to = Some(user.id());
        Ok(())
    }

    /// Make `child` a subitem of this item, setting its parent pointer
    ///
    /// `project` holds the forest used to reject cycles of any length.
    pub fn add_subitem(&mut self, project: &mut Project, child: &mut WorkItem) -> DomainResult {
        WorkItemValidator::validate_add_subitem(project, self, child)?;

        child.parent = Some(self.id);
        self.subitems.push(child.id);
        project.link_subitem(self.id, child.id);

        debug!(work_item_id = %self.id, subitem_id = %child.id, "Added subitem");
        Ok(())
    }

    /// Detach `child` from this item, clearing its parent pointer
    pub fn remove_subitem(&mut self, project: &mut Project, child: &mut WorkItem) -> DomainResult {
        WorkItemValidator::validate_remove_subitem(project, self, child)?;

        child.parent = None;
        let id = child.id;
        self.subitems.retain(|s| *s != id);
        project.unlink_subitem(id);

        debug!(work_item_id = %self.id, subitem_id = %id, "Removed subitem");
        Ok(())
    }

    pub fn add_resource(&mut self, resource: &Resource) -> DomainResult {
        let id = resource.id();
        WorkItemValidator::validate_add_resource(&id, &self.resources)?;
        self.resources.push(id);
        Ok(())
    }

    pub fn remove_resource(&mut self, resource: &Resource) -> DomainResult {
        let id = resource.id();
        WorkItemValidator::validate_remove_resource(&id, &self.resources)?;
        self.resources.retain(|r| *r != id);
        Ok(())
    }

    /// Back-reference half of `ProjectActivity::add_work_item`
    pub(crate) fn add_activity(&mut self, activity: ProjectActivityId) -> DomainResult {
        WorkItemValidator::validate_add_activity(&activity, &self.activities)?;
        self.activities.push(activity);
        Ok(())
    }

    /// Back-reference half of `ProjectActivity::remove_work_item`
    pub(crate) fn remove_activity(&mut self, activity: ProjectActivityId) -> DomainResult {
        WorkItemValidator::validate_remove_activity(&activity, &self.activities)?;
        self.activities.retain(|a| *a != activity);
        Ok(())
    }
}
