//! Router assembly.
//!
//! `/health` is open; everything under `/tasks` sits behind the
//! middleware stack. Layers run outermost-first, so the task routes see
//! authentication, then the anti-forgery check, then rate limiting.

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{health, tasks};
use crate::middleware::{auth, csrf, rate_limit};
use crate::state::AppState;

/// Build the application router.
#[must_use]
pub fn app(state: AppState, allowed_origins: &[String]) -> Router {
    let task_routes = Router::new()
        .route("/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route("/tasks/by-title/{title}", get(tasks::get_task_by_title))
        .route(
            "/tasks/{id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .layer(from_fn_with_state(state.clone(), rate_limit::throttle))
        .layer(from_fn(csrf::protect))
        .layer(from_fn_with_state(state.clone(), auth::require_user));

    let router = Router::new()
        .route("/health", get(health::health))
        .merge(task_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if allowed_origins.is_empty() {
        router
    } else {
        router.layer(build_cors_layer(allowed_origins))
    }
}

/// Browser clients send credentials, so origins must be echoed exactly
/// rather than wildcarded.
fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!("ignoring invalid CORS origin '{origin}': {err}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-xsrf-token"),
        ])
        .allow_origin(origins)
        .allow_credentials(true)
}
