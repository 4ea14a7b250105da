//! Named constructors for project activities

use super::entity::{ProjectActivity, ProjectActivityType};
use crate::domain::project::Project;
use crate::result::DomainResult;

/// Creates milestones and iterations with the flavor fixed by the call
pub struct ProjectActivityBuilder;

impl ProjectActivityBuilder {
    pub fn build_milestone(project: &mut Project, title: &str) -> DomainResult<ProjectActivity> {
        ProjectActivity::create(project, title, Some(ProjectActivityType::Milestone))
    }

    pub fn build_iteration(project: &mut Project, title: &str) -> DomainResult<ProjectActivity> {
        ProjectActivity::create(project, title, Some(ProjectActivityType::Iteration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::organization::Organization;
    use crate::domain::user::User;
    use crate::domain::workspace::Workspace;

    fn project() -> Project {
        let mut owner = User::create("Ada", "Lovelace", "ada@x.com").unwrap();
        let mut org = Organization::create("Acme", &mut owner).unwrap();
        let mut workspace = Workspace::create(&mut org, "Eng").unwrap();
        Project::create(&mut workspace, "Launch").unwrap()
    }

    #[test]
    fn test_build_milestone() {
        let mut project = project();
        let milestone = ProjectActivityBuilder::build_milestone(&mut project, "v1.0").unwrap();
        assert_eq!(milestone.activity_type(), ProjectActivityType::Milestone);
        assert_eq!(project.milestones(), vec![milestone.id()]);
    }

    #[test]
    fn test_build_iteration() {
        let mut project = project();
        let iteration = ProjectActivityBuilder::build_iteration(&mut project, "Sprint 1").unwrap();
        assert_eq!(iteration.activity_type(), ProjectActivityType::Iteration);
        assert_eq!(project.iterations(), vec![iteration.id()]);
        assert!(project.milestones().is_empty());
    }

    #[test]
    fn test_build_propagates_validation_errors() {
        let mut project = project();
        assert!(ProjectActivityBuilder::build_milestone(&mut project, "v1").is_err());
        assert!(project.activities().is_empty());
    }
}
