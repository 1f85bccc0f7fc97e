//! Entity structs for Docket domain objects.
//!
//! The persisted values keep their real types here (`NaiveDate` for calendar
//! dates, `DateTime<Utc>` for instants); display formatting happens in
//! `responses`, never in storage.

mod task;

pub use task::Task;
