//! Session-cookie authentication.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::cookies::cookie_value;
use crate::error::ApiError;
use crate::identity::AuthError;
use crate::state::AppState;

/// Name of the session cookie carrying the identity token.
pub const TOKEN_COOKIE: &str = "token";

/// Resolve the caller from the `token` cookie and stash the resulting
/// [`dkt_core::identity::AuthUser`] in request extensions.
///
/// # Errors
///
/// Returns 401 via [`ApiError`] when the cookie is absent or the identity
/// service rejects the token.
pub async fn require_user(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token =
        cookie_value(request.headers(), TOKEN_COOKIE).ok_or(AuthError::TokenMissing)?;
    let user = state.identity().resolve(&token).await?;
    tracing::debug!(user = %user.id, "caller authenticated");
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
