//! Project Entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::validator::ProjectValidator;
use crate::domain::activity::{ProjectActivity, ProjectActivityType};
use crate::domain::audit::AuditInfo;
use crate::domain::ids::{ProjectActivityId, ProjectId, ResourceId, WorkItemId, WorkspaceId};
use crate::domain::resource::{owner, Resource, ResourceOwner, ResourceOwnerRef};
use crate::domain::rules;
use crate::domain::shared::{Priority, Status};
use crate::domain::work_item::WorkItem;
use crate::domain::workspace::Workspace;
use crate::result::DomainResult;

/// An activity registered with a project, with its flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: ProjectActivityId,
    pub activity_type: ProjectActivityType,
}

/// A parent link between two work items of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubitemLink {
    pub parent: WorkItemId,
    pub child: WorkItemId,
}

/// A unit of planned work inside a workspace
///
/// Status, priority and the scheduling window start out unset and are only
/// filled in through their `update_*` methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    audit: AuditInfo,
    workspace_id: WorkspaceId,
    title: String,
    description: String,
    status: Option<Status>,
    priority: Option<Priority>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    work_items: Vec<WorkItemId>,
    activities: Vec<ActivityEntry>,
    #[serde(default)]
    subitem_links: Vec<SubitemLink>,
    resources: Vec<ResourceId>,
}

impl Project {
    /// Create a new project and register it with `workspace`
    pub fn create(workspace: &mut Workspace, title: &str) -> DomainResult<Self> {
        ProjectValidator::validate_title(title)?;

        let project = Self {
            id: ProjectId::new(),
            audit: AuditInfo::created_by(workspace.audit().created_by.clone()),
            workspace_id: workspace.id(),
            title: title.to_string(),
            description: String::new(),
            status: None,
            priority: None,
            start: None,
            end: None,
            work_items: Vec::new(),
            activities: Vec::new(),
            subitem_links: Vec::new(),
            resources: Vec::new(),
        };
        workspace.add_project(&project)?;

        debug!(project_id = %project.id, workspace_id = %project.workspace_id, "Created project");
        Ok(project)
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn audit(&self) -> &AuditInfo {
        &self.audit
    }

    pub fn workspace_id(&self) -> WorkspaceId {
        self.workspace_id
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

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.start
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    pub fn work_items(&self) -> &[WorkItemId] {
        &self.work_items
    }

    /// Every activity of this project in creation order
    pub fn activities(&self) -> &[ActivityEntry] {
        &self.activities
    }

    /// Flavor of a registered activity
    pub fn activity_type(&self, activity: ProjectActivityId) -> Option<ProjectActivityType> {
        self.activities
            .iter()
            .find(|entry| entry.id == activity)
            .map(|entry| entry.activity_type)
    }

    pub fn milestones(&self) -> Vec<ProjectActivityId> {
        self.activities_of(ProjectActivityType::Milestone)
    }

    pub fn iterations(&self) -> Vec<ProjectActivityId> {
        self.activities_of(ProjectActivityType::Iteration)
    }

    fn activities_of(&self, activity_type: ProjectActivityType) -> Vec<ProjectActivityId> {
        self.activities
            .iter()
            .filter(|entry| entry.activity_type == activity_type)
            .map(|entry| entry.id)
            .collect()
    }

    /// Parent of a work item in this project's subitem forest
    pub fn parent_of(&self, item: WorkItemId) -> Option<WorkItemId> {
        self.subitem_links
            .iter()
            .find(|link| link.child == item)
            .map(|link| link.parent)
    }

    /// Chain of parents above `item`, nearest first
    pub fn ancestors_of(&self, item: WorkItemId) -> Vec<WorkItemId> {
        let mut chain = Vec::new();
        let mut current = item;
        while let Some(parent) = self.parent_of(current) {
            // A well-formed forest never has more ancestors than links.
            if chain.contains(&parent) || chain.len() >= self.subitem_links.len() {
                break;
            }
            chain.push(parent);
            current = parent;
        }
        chain
    }

    fn activity_ids(&self) -> Vec<ProjectActivityId> {
        self.activities.iter().map(|entry| entry.id).collect()
    }

    pub fn update_title(&mut self, title: &str) -> DomainResult {
        ProjectValidator::validate_title(title)?;
        self.title = title.to_string();
        Ok(())
    }

    pub fn update_description(&mut self, description: &str) -> DomainResult {
        ProjectValidator::validate_description(description)?;
        self.description = description.to_string();
        Ok(())
    }

    pub fn update_status(&mut self, status: Option<Status>) -> DomainResult {
        self.status = Some(ProjectValidator::validate_status(status)?);
        Ok(())
    }

    pub fn update_priority(&mut self, priority: Option<Priority>) -> DomainResult {
        self.priority = Some(ProjectValidator::validate_priority(priority)?);
        Ok(())
    }

    /// Set the scheduling window, judged against the current UTC date
    pub fn update_time_range(
        &mut self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> DomainResult {
        self.update_time_range_on(start, end, Utc::now().date_naive())
    }

    /// Set the scheduling window, judged against the given calendar day
    pub fn update_time_range_on(
        &mut self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        today: NaiveDate,
    ) -> DomainResult {
        let (start, end) = ProjectValidator::validate_time_range_on(start, end, today)?;
        self.start = Some(start);
        self.end = Some(end);
        Ok(())
    }

    /// Register a work item that belongs to this project
    pub fn add_work_item(&mut self, item: &WorkItem) -> DomainResult {
        let id = item.id();
        ProjectValidator::validate_add_work_item(&id, &self.work_items)?;
        rules::belongs_to(&item.project_id(), &self.id, "work_items", "work item", "project")?;
        self.work_items.push(id);
        Ok(())
    }

    pub fn remove_work_item(&mut self, item: &WorkItem) -> DomainResult {
        let id = item.id();
        ProjectValidator::validate_remove_work_item(&id, &self.work_items)?;
        self.work_items.retain(|w| *w != id);
        Ok(())
    }

    /// Register an activity that belongs to this project
    pub fn add_activity(&mut self, activity: &ProjectActivity) -> DomainResult {
        let id = activity.id();
        ProjectValidator::validate_add_activity(&id, &self.activity_ids())?;
        rules::belongs_to(&activity.project_id(), &self.id, "activities", "activity", "project")?;
        self.activities.push(ActivityEntry {
            id,
            activity_type: activity.activity_type(),
        });
        Ok(())
    }

    pub fn remove_activity(&mut self, activity: &ProjectActivity) -> DomainResult {
        let id = activity.id();
        ProjectValidator::validate_remove_activity(&id, &self.activity_ids())?;
        self.activities.retain(|entry| entry.id != id);
        Ok(())
    }

    /// Keep the forest in step with `WorkItem::add_subitem`
    pub(crate) fn link_subitem(&mut self, parent: WorkItemId, child: WorkItemId) {
        self.subitem_links.retain(|link| link.child != child);
        self.subitem_links.push(SubitemLink { parent, child });
    }

    /// Keep the forest in step with `WorkItem::remove_subitem`
    pub(crate) fn unlink_subitem(&mut self, child: WorkItemId) {
        self.subitem_links.retain(|link| link.child != child);
    }

    /// Keep the index in step with `ProjectActivity::update_type`
    pub(crate) fn retag_activity(&mut self, activity: ProjectActivityId, activity_type: ProjectActivityType) {
        if let Some(entry) = self.activities.iter_mut().find(|entry| entry.id == activity) {
            entry.activity_type = activity_type;
        }
    }
}

impl ResourceOwner for Project {
    fn owner_ref(&self) -> ResourceOwnerRef {
        ResourceOwnerRef::Project(self.id)
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
