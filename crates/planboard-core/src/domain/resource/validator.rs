//! Resource validation

use super::entity::{ResourceLevel, ResourceType};
use crate::domain::ids::ResourceId;
use crate::domain::rules;
use crate::error::DomainError;
use crate::result::{DomainResult, fail};

const MIN_TITLE_LEN: usize = 3;
const MAX_TITLE_LEN: usize = 75;

/// Validator for resource properties and resource lists
pub struct ResourceValidator;

impl ResourceValidator {
    /// Validate a resource title (3 to 75 characters)
    pub fn validate_title(title: &str) -> DomainResult<&str> {
        rules::bounded_text(title, "title", "Resource title", "title", MIN_TITLE_LEN, MAX_TITLE_LEN)
    }

    /// Validate a resource description (at most 500 characters)
    pub fn validate_description(description: &str) -> DomainResult<&str> {
        rules::description(description, "Resource")
    }

    /// Validate a resource url, which only has to be non-blank
    pub fn validate_url(url: &str) -> DomainResult<&str> {
        if url.trim().is_empty() {
            return fail(DomainError::invalid_argument(
                "url",
                "Resource URL cannot be empty, please provide a URL.",
            ));
        }
        Ok(url)
    }

    pub fn validate_type(kind: Option<ResourceType>) -> DomainResult<ResourceType> {
        rules::required(kind, "type", "Resource type", "type")
    }

    pub fn validate_level(level: Option<ResourceLevel>) -> DomainResult<ResourceLevel> {
        rules::required(level, "level", "Resource level", "level")
    }

    /// Validate attaching a resource to an owner's list
    pub fn validate_add_resource(resource: &ResourceId, resources: &[ResourceId]) -> DomainResult {
        rules::can_add(resource, resources, "resources", "resource")
    }

    /// Validate detaching a resource from an owner's list
    pub fn validate_remove_resource(resource: &ResourceId, resources: &[ResourceId]) -> DomainResult {
        rules::can_remove(resource, resources, "resources", "resource")
    }
}
