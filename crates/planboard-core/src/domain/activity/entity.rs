//! Project Activity Entity
//!
//! Milestones and iterations group work items within a project. A work
//! item can sit in several activities at once; both sides of that link are
//! kept in step by [`ProjectActivity::add_work_item`] and
//! [`ProjectActivity::remove_work_item`].

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::validator::ProjectActivityValidator;
use crate::domain::audit::AuditInfo;
use crate::domain::ids::{ProjectActivityId, ProjectId, WorkItemId};
use crate::domain::project::Project;
use crate::domain::rules;
use crate::domain::work_item::{WorkItem, WorkItemValidator};
use crate::result::{DomainResult, ErrorCollector};

/// Flavor of a project activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectActivityType {
    Milestone,
    Iteration,
}

impl ProjectActivityType {
    /// Parse from string representation
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "milestone" => Some(Self::Milestone),
            "iteration" | "sprint" => Some(Self::Iteration),
            _ => None,
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Milestone => "milestone",
            Self::Iteration => "iteration",
        }
    }
}

impl fmt::Display for ProjectActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A milestone or iteration of a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectActivity {
    id: ProjectActivityId,
    audit: AuditInfo,
    project_id: ProjectId,
    title: String,
    description: String,
    activity_type: ProjectActivityType,
    work_items: Vec<WorkItemId>,
}

impl ProjectActivity {
    /// Create a new activity and register it with `project`
    ///
    /// Title and type are validated together. Prefer the
    /// [`super::ProjectActivityBuilder`] helpers when the flavor is fixed.
    pub fn create(
        project: &mut Project,
        title: &str,
        activity_type: Option<ProjectActivityType>,
    ) -> DomainResult<Self> {
        let mut errors = ErrorCollector::new();
        let title = errors.check(ProjectActivityValidator::validate_title(title));
        let activity_type = errors.check(ProjectActivityValidator::validate_type(activity_type));
        let (Some(title), Some(activity_type)) = (title, activity_type) else {
            return errors.fail();
        };

        let activity = Self {
            id: ProjectActivityId::new(),
            audit: AuditInfo::created_by(project.audit().created_by.clone()),
            project_id: project.id(),
            title: title.to_string(),
            description: String::new(),
            activity_type,
            work_items: Vec::new(),
        };
        project.add_activity(&activity)?;

        debug!(
            activity_id = %activity.id,
            project_id = %activity.project_id,
            activity_type = %activity.activity_type,
            "Created project activity"
        );
        Ok(activity)
    }

    pub fn id(&self) -> ProjectActivityId {
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

    pub fn activity_type(&self) -> ProjectActivityType {
        self.activity_type
    }

    pub fn is_milestone(&self) -> bool {
        self.activity_type == ProjectActivityType::Milestone
    }

    pub fn work_items(&self) -> &[WorkItemId] {
        &self.work_items
    }

    pub fn update_title(&mut self, title: &str) -> DomainResult {
        ProjectActivityValidator::validate_title(title)?;
        self.title = title.to_string();
        Ok(())
    }

    pub fn update_description(&mut self, description: &str) -> DomainResult {
        ProjectActivityValidator::validate_description(description)?;
        self.description = description.to_string();
        Ok(())
    }

    /// Switch between milestone and iteration
    ///
    /// `project` must be the owning project; its activity index is updated
    /// in the same call.
    pub fn update_type(
        &mut self,
        project: &mut Project,
        activity_type: Option<ProjectActivityType>,
    ) -> DomainResult {
        let mut errors = ErrorCollector::new();
        let activity_type = errors.check(ProjectActivityValidator::validate_type(activity_type));
        let owned = errors.check(rules::belongs_to(
            &self.project_id,
            &project.id(),
            "project",
            "activity",
            "project",
        ));
        let (Some(activity_type), Some(())) = (activity_type, owned) else {
            return errors.fail();
        };

        self.activity_type = activity_type;
        project.retag_activity(self.id, activity_type);
        Ok(())
    }

    /// Add a work item to this activity
    ///
    /// The work item must belong to the same project. Its activity list is
    /// updated in the same call; nothing changes if either side rejects.
    pub fn add_work_item(&mut self, item: &mut WorkItem) -> DomainResult {
        let id = item.id();
        let mut errors = ErrorCollector::new();
        errors.check(ProjectActivityValidator::validate_add_work_item(&id, &self.work_items));
        errors.check(WorkItemValidator::validate_add_activity(&self.id, item.activities()));
        errors.check(rules::belongs_to(
            &item.project_id(),
            &self.project_id,
            "work_items",
            "work item",
            "project",
        ));
        errors.finish(())?;

        item.add_activity(self.id)?;
        self.work_items.push(id);

        debug!(activity_id = %self.id, work_item_id = %id, "Added work item to activity");
        Ok(())
    }

    /// Remove a work item from this activity, updating both sides
    pub fn remove_work_item(&mut self, item: &mut WorkItem) -> DomainResult {
        let id = item.id();
        let mut errors = ErrorCollector::new();
        errors.check(ProjectActivityValidator::validate_remove_work_item(&id, &self.work_items));
        errors.check(WorkItemValidator::validate_remove_activity(&self.id, item.activities()));
        errors.finish(())?;

        item.remove_activity(self.id)?;
        self.work_items.retain(|w| *w != id);

        debug!(activity_id = %self.id, work_item_id = %id, "Removed work item from activity");
        Ok(())
    }
}
