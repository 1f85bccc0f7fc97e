//! Shared test utilities for dkt-db tests.

pub(crate) mod helpers {
    use chrono::NaiveDate;
    use dkt_core::dates;
    use dkt_core::enums::TaskStatus;
    use dkt_core::limits::TaskLimits;
    use dkt_core::validate::{NewTask, TaskPayload};

    use crate::DocketDb;
    use crate::service::TaskService;

    /// In-memory service with default limits.
    pub async fn test_service() -> TaskService {
        let db = DocketDb::open_local(":memory:").await.unwrap();
        TaskService::from_db(db, TaskLimits::default())
    }

    /// Today's local calendar date shifted by `days` (negative for the past).
    pub fn days_ahead(days: i64) -> NaiveDate {
        dates::today() + chrono::TimeDelta::days(days)
    }

    /// A store-level draft that satisfies every schema constraint.
    pub fn draft_task(title: &str) -> NewTask {
        NewTask {
            title: title.to_owned(),
            description: "something to do".to_owned(),
            long_description: String::new(),
            start_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2026, 9, 5).unwrap(),
            status: TaskStatus::NotStarted,
        }
    }

    /// A service-level payload that passes validation on any test day.
    pub fn valid_payload(title: &str) -> TaskPayload {
        TaskPayload {
            title: Some(title.to_owned()),
            description: Some("something to do".to_owned()),
            start_date: Some(days_ahead(1).to_string()),
            due_date: Some(days_ahead(5).to_string()),
            ..TaskPayload::default()
        }
    }
}
