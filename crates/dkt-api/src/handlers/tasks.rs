//! Task CRUD handlers.
//!
//! Every handler reads the authenticated caller from the request
//! extensions installed by the auth middleware and scopes its work to
//! that user. Bodies are parsed leniently into [`TaskPayload`]; the
//! service layer owns validation.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;

use dkt_core::identity::AuthUser;
use dkt_core::responses::{DeleteAck, TaskView};
use dkt_core::validate::TaskPayload;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /tasks`
///
/// # Errors
///
/// Returns `ApiError::Internal` if the store fails.
pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<TaskView>>, ApiError> {
    let tasks = state.service().list_tasks(&user.id).await?;
    Ok(Json(tasks))
}

/// `GET /tasks/{id}`
///
/// # Errors
///
/// Returns `ApiError::NotFound` when the caller owns no task with that id.
pub async fn get_task(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<TaskView>, ApiError> {
    let task = state.service().get_task(&user.id, &id).await?;
    Ok(Json(task))
}

/// `GET /tasks/by-title/{title}`
///
/// # Errors
///
/// Returns `ApiError::NotFound` when the caller owns no task with that
/// title.
pub async fn get_task_by_title(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(title): Path<String>,
) -> Result<Json<TaskView>, ApiError> {
    let task = state.service().get_task_by_title(&user.id, &title).await?;
    Ok(Json(task))
}

/// `POST /tasks`
///
/// # Errors
///
/// Returns `ApiError::BadRequest` when the body is not JSON and
/// `ApiError::Validation` when it fails the field rules.
pub async fn create_task(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskView>), ApiError> {
    let Json(payload) =
        payload.map_err(|_| ApiError::BadRequest("invalid request body".into()))?;
    let task = state.service().create_task(&user.id, &payload).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `PUT /tasks/{id}`
///
/// # Errors
///
/// Returns `ApiError::Validation` for bad fields and `ApiError::NotFound`
/// when the caller owns no task with that id.
pub async fn update_task(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> Result<Json<TaskView>, ApiError> {
    let Json(payload) =
        payload.map_err(|_| ApiError::BadRequest("invalid request body".into()))?;
    let task = state.service().update_task(&user.id, &id, &payload).await?;
    Ok(Json(task))
}

/// `DELETE /tasks/{id}`
///
/// # Errors
///
/// Returns `ApiError::NotFound` when the caller owns no task with that id.
pub async fn delete_task(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>, ApiError> {
    let ack = state.service().delete_task(&user.id, &id).await?;
    Ok(Json(ack))
}
