//! Resource ownership
//!
//! Organizations, workspaces and projects can all hold resources. The
//! attach/detach rules are identical, so they live in one trait with the
//! list handling shared through [`attach`] and [`detach`].

use tracing::debug;

use super::entity::{Resource, ResourceOwnerRef};
use super::validator::ResourceValidator;
use crate::domain::ids::ResourceId;
use crate::domain::rules;
use crate::result::DomainResult;

/// An aggregate that can hold resources
pub trait ResourceOwner {
    /// Reference under which this aggregate owns resources
    fn owner_ref(&self) -> ResourceOwnerRef;

    /// Ids of the attached resources, in insertion order
    fn resources(&self) -> &[ResourceId];

    /// Attach a resource created for this owner
    ///
    /// Fails when the resource is already attached or was created for
    /// another owner.
    fn add_resource(&mut self, resource: &Resource) -> DomainResult;

    /// Detach a resource, failing when it is not attached
    fn remove_resource(&mut self, resource: &Resource) -> DomainResult;
}

pub(crate) fn attach(
    owner: ResourceOwnerRef,
    resources: &mut Vec<ResourceId>,
    resource: &Resource,
) -> DomainResult {
    let id = resource.id();
    ResourceValidator::validate_add_resource(&id, resources)?;
    rules::belongs_to(
        &resource.owner(),
        &owner,
        "resources",
        "resource",
        owner.level().as_str(),
    )?;
    resources.push(id);
    debug!(resource_id = %id, owner = %owner, "Attached resource");
    Ok(())
}

pub(crate) fn detach(resources: &mut Vec<ResourceId>, resource: &Resource) -> DomainResult {
    let id = resource.id();
    ResourceValidator::validate_remove_resource(&id, resources)?;
    resources.retain(|r| *r != id);
    Ok(())
}
