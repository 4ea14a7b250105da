//! Project validation
//!
//! Besides plain field checks this covers the scheduling window. The time
//! range checks compare against a calendar day so callers can pin "today"
//! to a configured offset, see [`crate::config::ScheduleConfig::today`].

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::domain::ids::{ProjectActivityId, WorkItemId};
use crate::domain::rules;
use crate::domain::shared::{Priority, Status};
use crate::error::DomainError;
use crate::result::{DomainResult, fail};

const MIN_TITLE_LEN: usize = 3;
const MAX_TITLE_LEN: usize = 75;

/// Validator for project properties
pub struct ProjectValidator;

impl ProjectValidator {
    /// Validate a project title (3 to 75 characters)
    pub fn validate_title(title: &str) -> DomainResult<&str> {
        rules::bounded_text(title, "title", "Project title", "title", MIN_TITLE_LEN, MAX_TITLE_LEN)
    }

    /// Validate a project description (at most 500 characters, may be empty)
    pub fn validate_description(description: &str) -> DomainResult<&str> {
        rules::description(description, "Project")
    }

    pub fn validate_status(status: Option<Status>) -> DomainResult<Status> {
        rules::required(status, "status", "Project status", "status")
    }

    pub fn validate_priority(priority: Option<Priority>) -> DomainResult<Priority> {
        rules::required(priority, "priority", "Project priority", "priority")
    }

    /// Validate a scheduling window against the current UTC date
    pub fn validate_time_range(
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> DomainResult<(DateTime<Utc>, DateTime<Utc>)> {
        Self::validate_time_range_on(start, end, Utc::now().date_naive())
    }

    /// Validate a scheduling window against a given calendar day
    ///
    /// Rules, checked in order:
    /// - Both ends must be set
    /// - Start must not be before the start of `today`
    /// - Start must be strictly before end
    pub fn validate_time_range_on(
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        today: NaiveDate,
    ) -> DomainResult<(DateTime<Utc>, DateTime<Utc>)> {
        let (Some(start), Some(end)) = (start, end) else {
            return fail(time_range_error(
                "Project time range is invalid, please provide a valid time range.",
            ));
        };

        if start < today.and_time(NaiveTime::MIN).and_utc() {
            return fail(time_range_error(
                "Project start date is in the past, please provide a valid start date.",
            ));
        }

        if start > end {
            return fail(time_range_error(
                "Project start date is after the end date, please provide a valid start date.",
            ));
        }

        if start == end {
            return fail(time_range_error(
                "Project start date is the same as the end date, please provide a valid start date.",
            ));
        }

        Ok((start, end))
    }

    pub fn validate_add_work_item(item: &WorkItemId, items: &[WorkItemId]) -> DomainResult {
        rules::can_add(item, items, "work_items", "work item")
    }

    pub fn validate_remove_work_item(item: &WorkItemId, items: &[WorkItemId]) -> DomainResult {
        rules::can_remove(item, items, "work_items", "work item")
    }

    pub fn validate_add_activity(
        activity: &ProjectActivityId,
        activities: &[ProjectActivityId],
    ) -> DomainResult {
        rules::can_add(activity, activities, "activities", "activity")
    }

    pub fn validate_remove_activity(
        activity: &ProjectActivityId,
        activities: &[ProjectActivityId],
    ) -> DomainResult {
        rules::can_remove(activity, activities, "activities", "activity")
    }
}

fn time_range_error(message: &str) -> DomainError {
    DomainError::invalid_argument("time_range", message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn day(date: NaiveDate) -> DateTime<Utc> {
        Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 5, 10).unwrap()
    }

    #[test]
    fn test_validate_title_boundaries() {
        assert!(ProjectValidator::validate_title("Abc").is_ok());
        assert!(ProjectValidator::validate_title(&"p".repeat(75)).is_ok());
        assert!(ProjectValidator::validate_title("Ab").is_err());
        let errors = ProjectValidator::validate_title(&"p".repeat(76)).unwrap_err();
        assert_eq!(
            errors.first().to_string(),
            "Project title is too long, please provide a title with at most 75 characters."
        );
    }

    #[test]
    fn test_validate_description() {
        assert!(ProjectValidator::validate_description("").is_ok());
        assert!(ProjectValidator::validate_description(&"d".repeat(500)).is_ok());
        assert!(ProjectValidator::validate_description(&"d".repeat(501)).is_err());
    }

    #[test]
    fn test_validate_status_and_priority() {
        assert_eq!(ProjectValidator::validate_status(Some(Status::Open)), Ok(Status::Open));
        let errors = ProjectValidator::validate_status(None).unwrap_err();
        assert_eq!(
            errors.first().to_string(),
            "Project status cannot be empty, please provide a status."
        );
        assert!(ProjectValidator::validate_priority(None).unwrap_err().mentions("Project priority"));
    }

    #[test]
    fn test_time_range_today_to_tomorrow() {
        let start = day(today());
        let end = start + Duration::days(1);
        assert_eq!(
            ProjectValidator::validate_time_range_on(Some(start), Some(end), today()),
            Ok((start, end))
        );
    }

    #[test]
    fn test_time_range_start_in_past() {
        let start = day(today()) - Duration::days(1);
        let end = day(today()) + Duration::days(1);
        let errors =
            ProjectValidator::validate_time_range_on(Some(start), Some(end), today()).unwrap_err();
        assert!(errors.mentions("start date is in the past"));
    }

    #[test]
    fn test_time_range_start_after_end() {
        let start = day(today()) + Duration::days(2);
        let end = day(today()) + Duration::days(1);
        let errors =
            ProjectValidator::validate_time_range_on(Some(start), Some(end), today()).unwrap_err();
        assert!(errors.mentions("start date is after the end date"));
    }

    #[test]
    fn test_time_range_equal_dates() {
        let x = day(today()) + Duration::days(3);
        let errors = ProjectValidator::validate_time_range_on(Some(x), Some(x), today()).unwrap_err();
        assert!(errors.mentions("same as the end date"));
    }

    #[test]
    fn test_time_range_unset() {
        let x = day(today()) + Duration::days(3);
        assert!(ProjectValidator::validate_time_range_on(None, Some(x), today())
            .unwrap_err()
            .mentions("time range is invalid"));
        assert!(ProjectValidator::validate_time_range_on(Some(x), None, today()).is_err());
    }

    #[test]
    fn test_time_range_against_current_date() {
        let start = Utc::now() + Duration::hours(1);
        let end = start + Duration::days(7);
        assert!(ProjectValidator::validate_time_range(Some(start), Some(end)).is_ok());
    }

    #[test]
    fn test_validate_work_items_and_activities() {
        let item = WorkItemId::new();
        assert!(ProjectValidator::validate_add_work_item(&item, &[]).is_ok());
        assert!(ProjectValidator::validate_add_work_item(&item, &[item])
            .unwrap_err()
            .mentions("The provided work item already exists"));

        let activity = ProjectActivityId::new();
        assert!(ProjectValidator::validate_remove_activity(&activity, &[])
            .unwrap_err()
            .mentions("The provided activity does not exist"));
    }
}
