//! Success/failure container for domain operations
//!
//! `DomainResult<T>` is a plain `Result` whose error side is [`Errors`], a
//! non-empty collection of [`DomainError`]s. Validators that find several
//! independent problems report all of them, which is what
//! [`ErrorCollector`] is for.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::DomainError;

/// Result type for every domain operation
pub type DomainResult<T = ()> = std::result::Result<T, Errors>;

/// One or more domain errors returned by a failed operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Errors(Vec<DomainError>);

impl Errors {
    /// Create a collection holding a single error
    pub fn new(error: DomainError) -> Self {
        Self(vec![error])
    }

    /// Build a collection from a list, `None` when the list is empty
    pub fn from_vec(errors: Vec<DomainError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    /// Number of errors (always at least one)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false, an `Errors` value is never empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first recorded error
    pub fn first(&self) -> &DomainError {
        &self.0[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &DomainError> {
        self.0.iter()
    }

    /// Append all errors of another collection
    pub fn merge(&mut self, other: Errors) {
        self.0.extend(other.0);
    }

    /// Check whether any error message contains the given text
    pub fn mentions(&self, text: &str) -> bool {
        self.0.iter().any(|e| e.to_string().contains(text))
    }

    pub fn into_vec(self) -> Vec<DomainError> {
        self.0
    }
}

impl From<DomainError> for Errors {
    fn from(error: DomainError) -> Self {
        Self::new(error)
    }
}

impl IntoIterator for Errors {
    type Item = DomainError;
    type IntoIter = std::vec::IntoIter<DomainError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a DomainError;
    type IntoIter = std::slice::Iter<'a, DomainError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for Errors {}

/// Shorthand for a failed result carrying a single error
pub fn fail<T>(error: DomainError) -> DomainResult<T> {
    Err(Errors::new(error))
}

/// Accumulates failures from independent checks
///
/// ```
/// use planboard_core::result::ErrorCollector;
/// use planboard_core::domain::project::ProjectValidator;
///
/// let mut errors = ErrorCollector::new();
/// errors.check(ProjectValidator::validate_title(""));
/// errors.check(ProjectValidator::validate_description(&"x".repeat(501)));
/// assert_eq!(errors.finish(()).unwrap_err().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<DomainError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the errors of a failed result, pass a success through
    pub fn check<T>(&mut self, result: DomainResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(errors) => {
                self.errors.extend(errors);
                None
            }
        }
    }

    /// Record a single error directly
    pub fn push(&mut self, error: DomainError) {
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// `Ok(value)` if nothing was recorded, otherwise every recorded error
    pub fn finish<T>(self, value: T) -> DomainResult<T> {
        match Errors::from_vec(self.errors) {
            Some(errors) => {
                debug!(errors = errors.len(), "Validation rejected");
                Err(errors)
            }
            None => Ok(value),
        }
    }

    /// Fail with every recorded error
    ///
    /// For callers whose checks left a required value unset. If nothing was
    /// recorded the failure is reported as a failed operation.
    pub fn fail<T>(self) -> DomainResult<T> {
        let errors = Errors::from_vec(self.errors).unwrap_or_else(|| {
            Errors::new(DomainError::failed_operation(
                "Validation failed without reporting an error.",
            ))
        });
        debug!(errors = errors.len(), "Validation rejected");
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid(message: &str) -> DomainError {
        DomainError::invalid_argument("field", message)
    }

    #[test]
    fn test_errors_is_never_empty() {
        assert!(Errors::from_vec(Vec::new()).is_none());

        let errors = Errors::new(invalid("first"));
        assert_eq!(errors.len(), 1);
        assert!(!errors.is_empty());
        assert_eq!(errors.first().to_string(), "first");
    }

    #[test]
    fn test_errors_display_joins_messages() {
        let mut errors = Errors::new(invalid("first"));
        errors.merge(Errors::new(invalid("second")));
        assert_eq!(errors.to_string(), "first; second");
        assert!(errors.mentions("second"));
        assert!(!errors.mentions("third"));
    }

    #[test]
    fn test_collector_keeps_every_failure_in_order() {
        let mut collector = ErrorCollector::new();
        assert_eq!(collector.check::<u8>(Ok(7)), Some(7));
        assert_eq!(collector.check::<u8>(fail(invalid("a"))), None);
        collector.push(invalid("b"));
        assert!(collector.has_errors());

        let errors = collector.finish(()).unwrap_err();
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        assert_eq!(messages, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_collector_fail_without_records_is_failed_operation() {
        let collector = ErrorCollector::new();
        let errors = collector.fail::<()>().unwrap_err();
        assert_eq!(errors.first().code(), "E300");

        let mut collector = ErrorCollector::new();
        collector.push(invalid("a"));
        assert_eq!(collector.fail::<()>().unwrap_err().len(), 1);
    }

    #[test]
    fn test_collector_without_failures_succeeds() {
        let collector = ErrorCollector::new();
        assert_eq!(collector.finish("value"), Ok("value"));
    }
}
