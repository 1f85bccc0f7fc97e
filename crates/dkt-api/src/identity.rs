//! Identity resolution against the external auth service.
//!
//! Docket does not manage accounts. The session token from the `token`
//! cookie is forwarded to the identity service's profile endpoint; a
//! successful response names the caller, anything else is an authentication
//! failure. The profile body comes in two shapes (`{ data: { user } }` or
//! `{ user }`) and the user's id may be under `_id` or `id`.

use std::time::Duration;

use reqwest::header;
use thiserror::Error;

use dkt_core::identity::AuthUser;

/// Authentication failures. Every variant rejects the request with 401;
/// the distinction is kept for logging.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No `token` cookie on the request.
    #[error("token missing")]
    TokenMissing,

    /// The identity service did not accept the token.
    #[error("invalid token")]
    TokenRejected,

    /// The identity service could not be reached (includes timeouts).
    #[error("identity service unreachable: {0}")]
    Unreachable(String),

    /// The identity service answered with a body naming no user.
    #[error("identity service returned an unreadable profile")]
    MalformedResponse,
}

/// Client for the identity service's profile endpoint.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    base_url: String,
}

impl IdentityClient {
    /// Build a client for the service at `base_url` with a per-call timeout.
    ///
    /// # Errors
    ///
    /// Returns `reqwest::Error` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(base_url: &str, timeout: Duration) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Resolve a session token to the user it belongs to.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenRejected` on a non-success status,
    /// `AuthError::Unreachable` when the call fails or times out, and
    /// `AuthError::MalformedResponse` when the body names no user.
    pub async fn resolve(&self, token: &str) -> Result<AuthUser, AuthError> {
        let url = format!("{}/users/profile", self.base_url);
        let response = self
            .http
            .get(&url)
            .header(header::COOKIE, format!("token={token}"))
            .send()
            .await
            .map_err(|err| AuthError::Unreachable(err.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::TokenRejected);
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|_| AuthError::MalformedResponse)?;
        extract_user(&body).ok_or(AuthError::MalformedResponse)
    }
}

/// Pull the user out of a profile body, tolerating both known shapes.
fn extract_user(body: &serde_json::Value) -> Option<AuthUser> {
    let user = body.pointer("/data/user").or_else(|| body.get("user"))?;
    let id = user.get("_id").or_else(|| user.get("id"))?.as_str()?;
    let email = user
        .get("email")
        .and_then(serde_json::Value::as_str)
        .map(String::from);
    Some(AuthUser {
        id: id.to_owned(),
        email,
    })
}
