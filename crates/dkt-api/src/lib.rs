//! # dkt-api
//!
//! HTTP surface for the Docket task service.
//!
//! Routes map one-to-one onto the task operations in `dkt-db`, wrapped in
//! three request-scoped middlewares (in execution order): identity
//! resolution against the external auth service, double-submit anti-forgery
//! checking, and per-user rate limiting. The `docketd` binary wires this
//! router to configuration and serves it with graceful shutdown.

pub mod cookies;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod middleware;
pub mod routes;
pub mod state;
