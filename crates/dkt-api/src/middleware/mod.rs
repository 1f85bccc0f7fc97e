//! Request middleware.
//!
//! Layered so that identity resolution runs first, then the anti-forgery
//! check, then rate limiting. Handlers behind the stack can rely on an
//! [`dkt_core::identity::AuthUser`] extension being present.

pub mod auth;
pub mod csrf;
pub mod rate_limit;
