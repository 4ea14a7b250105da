//! User validation
//!
//! Validates user names and email addresses.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::ids::OrganizationId;
use crate::domain::rules;
use crate::error::DomainError;
use crate::result::{DomainResult, fail};

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern is valid"));

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

const MIN_NAME_LEN: usize = 2;
const MAX_FIRST_NAME_LEN: usize = 50;
const MAX_LAST_NAME_LEN: usize = 60;
const MAX_EMAIL_LOCAL_LEN: usize = 30;
const MAX_EMAIL_LEN: usize = 254;
const MAX_DOMAIN_LABEL_LEN: usize = 63;

/// Validator for user properties
pub struct UserValidator;

impl UserValidator {
    /// Validate a first name
    ///
    /// Rules:
    /// - Must not be blank
    /// - ASCII letters and whitespace only
    /// - No leading, trailing or doubled spaces
    /// - Between 2 and 50 characters
    pub fn validate_first_name(first_name: &str) -> DomainResult<&str> {
        validate_name(first_name, "first_name", "First name", MAX_FIRST_NAME_LEN)
    }

    /// Validate a last name
    ///
    /// Same rules as the first name, up to 60 characters.
    pub fn validate_last_name(last_name: &str) -> DomainResult<&str> {
        validate_name(last_name, "last_name", "Last name", MAX_LAST_NAME_LEN)
    }

    /// Validate an email address
    ///
    /// Rules:
    /// - Must not be blank
    /// - `local@domain.tld` shape with a 2+ letter top-level domain
    /// - Local part at most 30 characters, whole address at most 254
    /// - No `..` anywhere, local part must not start or end with `.`
    /// - Every domain label at most 63 characters
    pub fn validate_email(email: &str) -> DomainResult<&str> {
        if email.trim().is_empty() {
            return fail(DomainError::invalid_argument(
                "email",
                "Email cannot be empty, please provide an email.",
            ));
        }

        if !is_well_formed_email(email) {
            return fail(DomainError::invalid_argument(
                "email",
                "Email is invalid, please provide a valid email.",
            ));
        }

        Ok(email)
    }

    /// Validate joining an organization
    pub fn validate_join_organization(
        organization: &OrganizationId,
        memberships: &[OrganizationId],
    ) -> DomainResult {
        rules::can_add(organization, memberships, "memberships", "organization")
    }

    /// Validate leaving an organization
    pub fn validate_leave_organization(
        organization: &OrganizationId,
        memberships: &[OrganizationId],
    ) -> DomainResult {
        rules::can_remove(organization, memberships, "memberships", "organization")
    }
}

fn validate_name<'a>(value: &'a str, field: &'static str, subject: &str, max: usize) -> DomainResult<&'a str> {
    if value.trim().is_empty() {
        return fail(DomainError::invalid_argument(
            field,
            format!("{subject} cannot be empty, please provide a {}.", subject.to_lowercase()),
        ));
    }

    if !NAME_PATTERN.is_match(value) {
        return fail(DomainError::invalid_argument(
            field,
            format!("{subject} can only contain alphabetic characters and spaces."),
        ));
    }

    if value.trim() != value || value.contains("  ") {
        return fail(DomainError::invalid_argument(
            field,
            format!("{subject} cannot contain leading, trailing, or multiple consecutive spaces."),
        ));
    }

    rules::bounded_text(value, field, subject, &subject.to_lowercase(), MIN_NAME_LEN, max)
}

fn is_well_formed_email(value: &str) -> bool {
    if !EMAIL_PATTERN.is_match(value) {
        return false;
    }

    let parts: Vec<&str> = value.split('@').collect();
    if parts.len() != 2 {
        return false;
    }
    let (local, domain) = (parts[0], parts[1]);

    if local.len() > MAX_EMAIL_LOCAL_LEN || value.len() > MAX_EMAIL_LEN {
        return false;
    }

    if local.contains("..") || domain.contains("..") {
        return false;
    }

    if local.starts_with('.') || local.ends_with('.') {
        return false;
    }

    domain.split('.').all(|label| label.len() <= MAX_DOMAIN_LABEL_LEN)
}
