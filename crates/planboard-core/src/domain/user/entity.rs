//! User Entity

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::validator::UserValidator;
use crate::domain::audit::AuditInfo;
use crate::domain::ids::{OrganizationId, UserId};
use crate::result::{DomainResult, ErrorCollector};

/// A person using the system
///
/// Users own organizations and can be members of others. Membership is
/// driven from the organization side, see
/// [`crate::domain::organization::Organization::add_member`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    audit: AuditInfo,
    first_name: String,
    last_name: String,
    email: String,
    owned_organizations: Vec<OrganizationId>,
    memberships: Vec<OrganizationId>,
}

impl User {
    /// Create a new user
    ///
    /// All three fields are validated; every failing field is reported.
    pub fn create(first_name: &str, last_name: &str, email: &str) -> DomainResult<Self> {
        let mut errors = ErrorCollector::new();
        errors.check(UserValidator::validate_first_name(first_name));
        errors.check(UserValidator::validate_last_name(last_name));
        errors.check(UserValidator::validate_email(email));
        errors.finish(())?;

        let user = Self {
            id: UserId::new(),
            audit: AuditInfo::created_by(email),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            owned_organizations: Vec::new(),
            memberships: Vec::new(),
        };
        debug!(user_id = %user.id, "Created user");
        Ok(user)
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn audit(&self) -> &AuditInfo {
        &self.audit
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// First and last name joined by a space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Organizations this user created and owns
    pub fn owned_organizations(&self) -> &[OrganizationId] {
        &self.owned_organizations
    }

    /// Organizations this user is a member of
    pub fn memberships(&self) -> &[OrganizationId] {
        &self.memberships
    }

    pub fn update_first_name(&mut self, first_name: &str) -> DomainResult {
        UserValidator::validate_first_name(first_name)?;
        self.first_name = first_name.to_string();
        self.touch();
        Ok(())
    }

    pub fn update_last_name(&mut self, last_name: &str) -> DomainResult {
        UserValidator::validate_last_name(last_name)?;
        self.last_name = last_name.to_string();
        self.touch();
        Ok(())
    }

    pub fn update_email(&mut self, email: &str) -> DomainResult {
        UserValidator::validate_email(email)?;
        self.email = email.to_string();
        self.touch();
        Ok(())
    }

    /// Back-reference half of `Organization::add_member`
    pub(crate) fn join_organization(&mut self, organization: OrganizationId) -> DomainResult {
        UserValidator::validate_join_organization(&organization, &self.memberships)?;
        self.memberships.push(organization);
        self.touch();
        Ok(())
    }

    /// Back-reference half of `Organization::remove_member`
    pub(crate) fn leave_organization(&mut self, organization: OrganizationId) -> DomainResult {
        UserValidator::validate_leave_organization(&organization, &self.memberships)?;
        self.memberships.retain(|id| *id != organization);
        self.touch();
        Ok(())
    }

    pub(crate) fn add_owned_organization(&mut self, organization: OrganizationId) {
        if !self.owned_organizations.contains(&organization) {
            self.owned_organizations.push(organization);
        }
    }

    fn touch(&mut self) {
        let actor = self.email.clone();
        self.audit.touch(actor);
    }
}
