//! Typed entity identifiers
//!
//! Each aggregate gets its own id newtype over a v4 UUID so a `ProjectId`
//! can never be passed where a `WorkspaceId` is expected. Relationships
//! between entities are stored as these ids, never as live references.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;
use crate::result::{DomainResult, fail};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> Uuid {
                self.0
            }

            /// Parse an identifier from its textual form
            pub fn parse(value: &str) -> DomainResult<Self> {
                match Uuid::parse_str(value.trim()) {
                    Ok(uuid) => Ok(Self(uuid)),
                    Err(_) => fail(DomainError::invalid_argument(
                        "id",
                        format!("The provided {} id '{}' is not a valid identifier.", $label, value),
                    )),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

entity_id!(
    /// Identifier of a [`crate::domain::user::User`]
    UserId,
    "user"
);
entity_id!(
    /// Identifier of a [`crate::domain::organization::Organization`]
    OrganizationId,
    "organization"
);
entity_id!(
    /// Identifier of a [`crate::domain::workspace::Workspace`]
    WorkspaceId,
    "workspace"
);
entity_id!(
    /// Identifier of a [`crate::domain::project::Project`]
    ProjectId,
    "project"
);
entity_id!(
    /// Identifier of a [`crate::domain::activity::ProjectActivity`]
    ProjectActivityId,
    "project activity"
);
entity_id!(
    /// Identifier of a [`crate::domain::work_item::WorkItem`]
    WorkItemId,
    "work item"
);
entity_id!(
    /// Identifier of a [`crate::domain::resource::Resource`]
    ResourceId,
    "resource"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(ProjectId::new(), ProjectId::new());
    }

    #[test]
    fn test_parse_round_trips_display() {
        let id = WorkItemId::new();
        let parsed = WorkItemId::parse(&id.to_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        let errors = UserId::parse("not-a-guid").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.mentions("user id"));
        assert_eq!(errors.first().field(), Some("id"));
    }

    #[test]
    fn test_id_serializes_as_plain_uuid() {
        let uuid = Uuid::new_v4();
        let id = OrganizationId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }
}
