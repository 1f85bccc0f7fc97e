//! Fixed-window per-user rate limiting.
//!
//! Each authenticated user gets a counter that resets when its window
//! elapses. The limiter sits behind authentication, so the user id is
//! always available as the throttling key.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use axum::extract::{Request, State};
use axum::http::{HeaderValue, header::HeaderName};
use axum::middleware::Next;
use axum::response::Response;

use dkt_core::identity::AuthUser;

use crate::error::ApiError;
use crate::identity::AuthError;
use crate::state::AppState;

const LIMIT_HEADER: HeaderName = HeaderName::from_static("x-ratelimit-limit");
const REMAINING_HEADER: HeaderName = HeaderName::from_static("x-ratelimit-remaining");

/// Outcome of an admitted request, echoed back in response headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateStatus {
    pub limit: u32,
    pub remaining: u32,
}

/// Outcome of a rejected request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateExceeded {
    pub retry_after_secs: u64,
}

struct Window {
    started: Instant,
    count: u32,
}

pub struct RateLimiter {
    window: Duration,
    max_requests: u32,
    windows: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    #[must_use]
    pub fn new(window: Duration, max_requests: u32) -> Self {
        Self {
            window,
            max_requests,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Record one request for `client` and report whether it is admitted.
    ///
    /// # Errors
    ///
    /// Returns [`RateExceeded`] with the seconds left in the window once
    /// the client has used up its budget.
    pub fn check(&self, client: &str) -> Result<RateStatus, RateExceeded> {
        let now = Instant::now();
        let mut windows = self
            .windows
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let window = windows.entry(client.to_owned()).or_insert(Window {
            started: now,
            count: 0,
        });

        if now.duration_since(window.started) >= self.window {
            window.started = now;
            window.count = 0;
        }

        if window.count >= self.max_requests {
            let elapsed = now.duration_since(window.started);
            let retry_after_secs = self.window.saturating_sub(elapsed).as_secs().max(1);
            return Err(RateExceeded { retry_after_secs });
        }

        window.count += 1;
        Ok(RateStatus {
            limit: self.max_requests,
            remaining: self.max_requests - window.count,
        })
    }
}

/// Throttle the authenticated caller, tagging admitted responses with
/// `X-RateLimit-Limit` and `X-RateLimit-Remaining`.
///
/// # Errors
///
/// Returns 429 via [`ApiError::RateLimited`] when the caller's window is
/// spent, or 401 if no authenticated user reached this layer.
pub async fn throttle(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(user) = request.extensions().get::<AuthUser>() else {
        return Err(AuthError::TokenMissing.into());
    };
    let client = user.id.clone();

    match state.limiter().check(&client) {
        Ok(status) => {
            let mut response = next.run(request).await;
            append_rate_headers(&mut response, status);
            Ok(response)
        }
        Err(exceeded) => {
            tracing::warn!(user = %client, "rate limit exceeded");
            Err(ApiError::RateLimited {
                retry_after_secs: exceeded.retry_after_secs,
            })
        }
    }
}

fn append_rate_headers(response: &mut Response, status: RateStatus) {
    if let Ok(value) = HeaderValue::from_str(&status.limit.to_string()) {
        response.headers_mut().insert(LIMIT_HEADER, value);
    }
    if let Ok(value) = HeaderValue::from_str(&status.remaining.to_string()) {
        response.headers_mut().insert(REMAINING_HEADER, value);
    }
}
