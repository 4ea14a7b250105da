//! Resource Entity
//!
//! Links and attachments owned by an organization, workspace or project.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

use super::validator::ResourceValidator;
use crate::domain::audit::{AuditInfo, SYSTEM_ACTOR};
use crate::domain::ids::{OrganizationId, ProjectId, ResourceId, WorkspaceId};
use crate::result::{DomainResult, ErrorCollector};

/// What kind of content a resource points to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Image,
    Video,
    Audio,
    Document,
    Spreadsheet,
    Presentation,
    Code,
    Archive,
    Other,
}

impl ResourceType {
    /// Parse from string representation
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "image" => Some(Self::Image),
            "video" => Some(Self::Video),
            "audio" => Some(Self::Audio),
            "document" | "doc" => Some(Self::Document),
            "spreadsheet" => Some(Self::Spreadsheet),
            "presentation" => Some(Self::Presentation),
            "code" => Some(Self::Code),
            "archive" => Some(Self::Archive),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Document => "document",
            Self::Spreadsheet => "spreadsheet",
            Self::Presentation => "presentation",
            Self::Code => "code",
            Self::Archive => "archive",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which kind of aggregate owns a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceLevel {
    Organization,
    Workspace,
    Project,
}

impl ResourceLevel {
    /// Parse from string representation
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "organization" | "org" => Some(Self::Organization),
            "workspace" => Some(Self::Workspace),
            "project" => Some(Self::Project),
            _ => None,
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Organization => "organization",
            Self::Workspace => "workspace",
            Self::Project => "project",
        }
    }
}

impl fmt::Display for ResourceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Typed reference to the owner of a resource
///
/// The set of owner kinds is closed, so the owner is a tagged id rather
/// than a live reference. Callers switch on it to load the right aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "level", content = "owner_id", rename_all = "snake_case")]
pub enum ResourceOwnerRef {
    Organization(OrganizationId),
    Workspace(WorkspaceId),
    Project(ProjectId),
}

impl ResourceOwnerRef {
    /// Build the owner reference for a raw id at the given level
    pub fn new(owner_id: Uuid, level: ResourceLevel) -> Self {
        match level {
            ResourceLevel::Organization => Self::Organization(OrganizationId::from_uuid(owner_id)),
            ResourceLevel::Workspace => Self::Workspace(WorkspaceId::from_uuid(owner_id)),
            ResourceLevel::Project => Self::Project(ProjectId::from_uuid(owner_id)),
        }
    }

    pub fn level(&self) -> ResourceLevel {
        match self {
            Self::Organization(_) => ResourceLevel::Organization,
            Self::Workspace(_) => ResourceLevel::Workspace,
            Self::Project(_) => ResourceLevel::Project,
        }
    }

    pub fn owner_id(&self) -> Uuid {
        match self {
            Self::Organization(id) => id.as_uuid(),
            Self::Workspace(id) => id.as_uuid(),
            Self::Project(id) => id.as_uuid(),
        }
    }
}

impl fmt::Display for ResourceOwnerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.level(), self.owner_id())
    }
}

/// A link or attachment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    id: ResourceId,
    audit: AuditInfo,
    title: String,
    description: String,
    url: String,
    kind: Option<ResourceType>,
    owner: ResourceOwnerRef,
}

impl Resource {
    /// Create a new resource for the owner identified by `owner_id` and `level`
    ///
    /// Title, url and level are validated together and all failures are
    /// returned. The resource is not attached to its owner here, that is
    /// done through [`super::ResourceOwner::add_resource`].
    pub fn create(
        title: &str,
        url: &str,
        owner_id: Uuid,
        level: Option<ResourceLevel>,
    ) -> DomainResult<Self> {
        let mut errors = ErrorCollector::new();
        let title = errors.check(ResourceValidator::validate_title(title));
        let url = errors.check(ResourceValidator::validate_url(url));
        let level = errors.check(ResourceValidator::validate_level(level));
        let (Some(title), Some(url), Some(level)) = (title, url, level) else {
            return errors.fail();
        };

        let resource = Self {
            id: ResourceId::new(),
            audit: AuditInfo::created_by(SYSTEM_ACTOR),
            title: title.to_string(),
            description: String::new(),
            url: url.to_string(),
            kind: None,
            owner: ResourceOwnerRef::new(owner_id, level),
        };
        debug!(resource_id = %resource.id, owner = %resource.owner, "Created resource");
        Ok(resource)
    }

    pub fn id(&self) -> ResourceId {
        self.id
    }

    pub fn audit(&self) -> &AuditInfo {
        &self.audit
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Content type, `None` until one is set
    pub fn kind(&self) -> Option<ResourceType> {
        self.kind
    }

    pub fn owner(&self) -> ResourceOwnerRef {
        self.owner
    }

    pub fn owner_id(&self) -> Uuid {
        self.owner.owner_id()
    }

    pub fn level(&self) -> ResourceLevel {
        self.owner.level()
    }

    pub fn update_title(&mut self, title: &str) -> DomainResult {
        ResourceValidator::validate_title(title)?;
        self.title = title.to_string();
        Ok(())
    }

    pub fn update_description(&mut self, description: &str) -> DomainResult {
        ResourceValidator::validate_description(description)?;
        self.description = description.to_string();
        Ok(())
    }

    pub fn update_url(&mut self, url: &str) -> DomainResult {
        ResourceValidator::validate_url(url)?;
        self.url = url.to_string();
        Ok(())
    }

    pub fn update_type(&mut self, kind: Option<ResourceType>) -> DomainResult {
        self.kind = Some(ResourceValidator::validate_type(kind)?);
        Ok(())
    }

    /// Re-tag the owner kind, keeping the owner id
    ///
    /// Moving the resource between owner lists is the caller's job.
    pub fn update_level(&mut self, level: Option<ResourceLevel>) -> DomainResult {
        let level = ResourceValidator::validate_level(level)?;
        self.owner = ResourceOwnerRef::new(self.owner.owner_id(), level);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_resource() {
        let project = ProjectId::new();
        let resource = Resource::create(
            "Doc",
            "http://x",
            project.as_uuid(),
            Some(ResourceLevel::Project),
        )
        .unwrap();

        assert_eq!(resource.title(), "Doc");
        assert_eq!(resource.url(), "http://x");
        assert_eq!(resource.description(), "");
        assert_eq!(resource.kind(), None);
        assert_eq!(resource.level(), ResourceLevel::Project);
        assert_eq!(resource.owner(), ResourceOwnerRef::Project(project));
        assert_eq!(resource.audit().created_by, SYSTEM_ACTOR);
    }

    #[test]
    fn test_create_collects_all_errors() {
        let errors = Resource::create("D", "", Uuid::new_v4(), None).unwrap_err();
        assert_eq!(errors.len(), 3);
        let fields: Vec<_> = errors.iter().filter_map(|e| e.field()).collect();
        assert_eq!(fields, vec!["title", "url", "level"]);
    }

    #[test]
    fn test_create_with_only_missing_level() {
        let errors = Resource::create("Doc", "http://x", Uuid::new_v4(), None).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().field(), Some("level"));
    }

    #[test]
    fn test_updates() {
        let mut resource =
            Resource::create("Doc", "http://x", Uuid::new_v4(), Some(ResourceLevel::Workspace))
                .unwrap();

        resource.update_title("Design doc").unwrap();
        resource.update_description("The design").unwrap();
        resource.update_url("https://docs.example.com").unwrap();
        resource.update_type(Some(ResourceType::Document)).unwrap();

        assert_eq!(resource.title(), "Design doc");
        assert_eq!(resource.description(), "The design");
        assert_eq!(resource.url(), "https://docs.example.com");
        assert_eq!(resource.kind(), Some(ResourceType::Document));

        assert!(resource.update_type(None).is_err());
        assert_eq!(resource.kind(), Some(ResourceType::Document));
        assert!(resource.update_url("").is_err());
        assert!(resource.update_title("x").is_err());
        assert_eq!(resource.title(), "Design doc");
    }

    #[test]
    fn test_update_level_keeps_owner_id() {
        let owner = Uuid::new_v4();
        let mut resource =
            Resource::create("Doc", "http://x", owner, Some(ResourceLevel::Workspace)).unwrap();

        resource.update_level(Some(ResourceLevel::Organization)).unwrap();
        assert_eq!(resource.level(), ResourceLevel::Organization);
        assert_eq!(resource.owner_id(), owner);

        assert!(resource.update_level(None).is_err());
        assert_eq!(resource.level(), ResourceLevel::Organization);
    }

    #[test]
    fn test_level_and_type_parse() {
        assert_eq!(ResourceLevel::parse("Project"), Some(ResourceLevel::Project));
        assert_eq!(ResourceLevel::parse("none"), None);
        assert_eq!(ResourceType::parse("SPREADSHEET"), Some(ResourceType::Spreadsheet));
        assert_eq!(ResourceType::parse("binary"), None);
    }

    #[test]
    fn test_owner_ref_serializes_with_level_tag() {
        let id = WorkspaceId::new();
        let json = serde_json::to_value(ResourceOwnerRef::Workspace(id)).unwrap();
        assert_eq!(json["level"], "workspace");
        assert_eq!(json["owner_id"], id.to_string());
    }
}
