//! Double-submit anti-forgery protection.
//!
//! Safe requests get a fresh token set as the `XSRF-TOKEN` cookie.
//! Mutating requests must echo that cookie's value back in the
//! `X-XSRF-TOKEN` header; a missing or mismatched pair is rejected
//! with 403 before the handler runs.

use std::fmt::Write;

use axum::extract::Request;
use axum::http::{HeaderValue, Method, header};
use axum::middleware::Next;
use axum::response::Response;

use crate::cookies::{cookie_value, site_cookie};
use crate::error::ApiError;

pub const CSRF_COOKIE: &str = "XSRF-TOKEN";
pub const CSRF_HEADER: &str = "X-XSRF-TOKEN";

/// Enforce the double-submit check on mutating methods; mint a token on
/// everything else.
///
/// # Errors
///
/// Returns `ApiError::CsrfRejected` (403) when a mutating request carries
/// no token pair or a mismatched one.
pub async fn protect(request: Request, next: Next) -> Result<Response, ApiError> {
    let mutating = matches!(
        *request.method(),
        Method::POST | Method::PUT | Method::DELETE | Method::PATCH
    );

    if mutating {
        let cookie = cookie_value(request.headers(), CSRF_COOKIE);
        let header = request
            .headers()
            .get(CSRF_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        return match (cookie, header) {
            (Some(cookie), Some(header)) if !cookie.is_empty() && cookie == header => {
                Ok(next.run(request).await)
            }
            _ => Err(ApiError::CsrfRejected),
        };
    }

    let mut response = next.run(request).await;
    match issue_token() {
        Ok(token) => {
            if let Ok(value) = HeaderValue::from_str(&site_cookie(CSRF_COOKIE, &token)) {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
        }
        Err(err) => tracing::warn!(reason = %err, "could not mint csrf token"),
    }
    Ok(response)
}

/// Mint a 32-hex-char token from 16 random bytes.
fn issue_token() -> Result<String, getrandom::Error> {
    let mut bytes = [0u8; 16];
    getrandom::fill(&mut bytes)?;
    let mut token = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(token, "{byte:02x}");
    }
    Ok(token)
}
