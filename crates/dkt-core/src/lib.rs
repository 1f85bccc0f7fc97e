//! # dkt-core
//!
//! Core domain types and validation for Docket.
//!
//! This crate provides everything the persistence and HTTP layers share:
//! - The `Task` entity and its status enum
//! - Calendar-date parsing, today-or-later comparison, and display formatting
//! - The validation pipeline (required fields, length bounds, date rules,
//!   sanitization) with field-scoped and request-scoped failure reporting
//! - The authenticated-user identity passed between layers
//! - Response shapes (task views with display-formatted dates, delete
//!   acknowledgment)

pub mod dates;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod limits;
pub mod responses;
pub mod sanitize;
pub mod validate;
