//! Planboard Core Library
//!
//! Domain model for project planning:
//! - Users, organizations and workspaces
//! - Projects with work items, milestones and iterations
//! - Resources owned by organizations, workspaces or projects
//! - Validation results that report every failing field at once
//! - Configuration and logging bootstrap

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod result;

pub use error::DomainError;
pub use result::{DomainResult, Errors};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::domain::activity::{ProjectActivity, ProjectActivityBuilder, ProjectActivityType};
    pub use crate::domain::ids::*;
    pub use crate::domain::organization::Organization;
    pub use crate::domain::project::Project;
    pub use crate::domain::resource::{Resource, ResourceLevel, ResourceOwner, ResourceType};
    pub use crate::domain::shared::{Priority, Status};
    pub use crate::domain::user::User;
    pub use crate::domain::work_item::{ItemType, WorkItem};
    pub use crate::domain::workspace::Workspace;
    pub use crate::error::DomainError;
    pub use crate::result::{DomainResult, Errors};
}
