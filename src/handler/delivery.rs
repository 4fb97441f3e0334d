// handler/delivery.rs
use std::sync::Arc;

use axum::{
    extract::Path,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    db::deliverydb::DeliveryExt,
    dtos::deliverydtos::{CreateTaskDto, TaskListResponseDto, TaskResponseDto},
    dtos::userdtos::OutcomeResponseDto,
    error::HttpError,
    middleware::SessionAuth,
    AppState,
};

pub fn delivery_handler() -> Router {
    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route("/:task_id/accept", post(accept_task))
}

pub async fn list_tasks(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let tasks = app_state
        .db_client
        .get_tasks()
        .await
        .map_err(HttpError::from)?;

    Ok(Json(TaskListResponseDto {
        status: "success".to_string(),
        results: tasks.len(),
        tasks,
    }))
}

pub async fn create_task(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<SessionAuth>,
    Json(body): Json<CreateTaskDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let task = app_state
        .db_client
        .create_task(body, &auth.user)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(TaskResponseDto {
        status: "success".to_string(),
        task,
    }))
}

pub async fn accept_task(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(task_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let accepted = app_state
        .db_client
        .accept_task(&task_id)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(OutcomeResponseDto {
        status: "success".to_string(),
        success: accepted,
    }))
}
