//! Rule helpers reused by every entity validator
//!
//! The per-entity validators only differ in bounds and wording, so the
//! actual checks live here once.

use crate::error::DomainError;
use crate::result::{DomainResult, fail};

/// Maximum length of any free-text description
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Check a required text field against inclusive length bounds
///
/// `subject` names the field in messages ("Project title"), `noun` is what
/// the caller is asked to provide ("title"). Length is counted in chars.
pub(crate) fn bounded_text<'a>(
    value: &'a str,
    field: &'static str,
    subject: &str,
    noun: &str,
    min: usize,
    max: usize,
) -> DomainResult<&'a str> {
    if value.trim().is_empty() {
        return fail(DomainError::invalid_argument(
            field,
            format!("{subject} cannot be empty, please provide a {noun}."),
        ));
    }

    let len = value.chars().count();
    if len < min {
        return fail(DomainError::invalid_argument(
            field,
            format!("{subject} is too short, please provide a {noun} with at least {min} characters."),
        ));
    }
    if len > max {
        return fail(DomainError::invalid_argument(
            field,
            format!("{subject} is too long, please provide a {noun} with at most {max} characters."),
        ));
    }

    Ok(value)
}

/// Check an optional description; empty is allowed
pub(crate) fn description<'a>(value: &'a str, subject: &str) -> DomainResult<&'a str> {
    if value.chars().count() > MAX_DESCRIPTION_LEN {
        return fail(DomainError::invalid_argument(
            "description",
            format!(
                "{subject} description is too long, please provide a description with at most {MAX_DESCRIPTION_LEN} characters."
            ),
        ));
    }
    Ok(value)
}

/// Reject a value that was never provided
pub(crate) fn required<T>(
    value: Option<T>,
    field: &'static str,
    subject: &str,
    noun: &str,
) -> DomainResult<T> {
    match value {
        Some(value) => Ok(value),
        None => fail(DomainError::invalid_argument(
            field,
            format!("{subject} cannot be empty, please provide a {noun}."),
        )),
    }
}

/// Adding fails when the item is already in the list
pub(crate) fn can_add<Id: PartialEq>(item: &Id, items: &[Id], field: &'static str, label: &str) -> DomainResult {
    if items.contains(item) {
        return fail(DomainError::invalid_argument(
            field,
            format!("The provided {label} already exists in the list."),
        ));
    }
    Ok(())
}

/// Removing fails when the item is not in the list
pub(crate) fn can_remove<Id: PartialEq>(item: &Id, items: &[Id], field: &'static str, label: &str) -> DomainResult {
    if !items.contains(item) {
        return fail(DomainError::invalid_argument(
            field,
            format!("The provided {label} does not exist in the list."),
        ));
    }
    Ok(())
}

/// Ownership check for owning-side `add_*` operations
pub(crate) fn belongs_to<Id: PartialEq>(
    actual: &Id,
    expected: &Id,
    field: &'static str,
    label: &str,
    owner: &str,
) -> DomainResult {
    if actual != expected {
        return fail(DomainError::invalid_argument(
            field,
            format!("The provided {label} does not belong to this {owner}."),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_text_boundaries() {
        assert!(bounded_text("abc", "title", "Thing title", "title", 3, 5).is_ok());
        assert!(bounded_text("abcde", "title", "Thing title", "title", 3, 5).is_ok());

        let short = bounded_text("ab", "title", "Thing title", "title", 3, 5).unwrap_err();
        assert!(short.mentions("too short"));
        let long = bounded_text("abcdef", "title", "Thing title", "title", 3, 5).unwrap_err();
        assert!(long.mentions("at most 5"));
    }

    #[test]
    fn test_bounded_text_rejects_blank() {
        let errors = bounded_text("   ", "title", "Thing title", "title", 1, 5).unwrap_err();
        assert!(errors.mentions("cannot be empty"));
    }

    #[test]
    fn test_bounded_text_counts_chars_not_bytes() {
        assert!(bounded_text("äöü", "title", "Thing title", "title", 3, 3).is_ok());
    }

    #[test]
    fn test_description_limit() {
        assert!(description("", "Thing").is_ok());
        assert!(description(&"d".repeat(500), "Thing").is_ok());
        assert!(description(&"d".repeat(501), "Thing").is_err());
    }

    #[test]
    fn test_membership_checks() {
        let items = vec![1, 2];
        assert!(can_add(&3, &items, "item", "item").is_ok());
        assert!(can_add(&1, &items, "item", "item").unwrap_err().mentions("already exists"));
        assert!(can_remove(&2, &items, "item", "item").is_ok());
        assert!(can_remove(&3, &items, "item", "item").unwrap_err().mentions("does not exist"));
    }

    #[test]
    fn test_required() {
        assert_eq!(required(Some(4), "type", "Thing type", "type"), Ok(4));
        assert!(required::<u8>(None, "type", "Thing type", "type").is_err());
    }
}
