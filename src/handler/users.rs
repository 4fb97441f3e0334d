// handler/users.rs
use std::sync::Arc;

use axum::{
    extract::Path,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    db::userdb::UserExt,
    dtos::userdtos::{UpdateUserProfileDto, UserData, UserResponseDto},
    error::HttpError,
    middleware::SessionAuth,
    AppState,
};

pub fn users_handler() -> Router {
    Router::new()
        .route("/me", get(get_me).put(update_me))
        .route("/:user_id", get(get_user_profile))
}

pub async fn get_me(
    Extension(auth): Extension<SessionAuth>,
) -> Result<impl IntoResponse, HttpError> {
    Ok(Json(UserResponseDto {
        status: "success".to_string(),
        data: UserData { user: auth.user },
    }))
}

pub async fn update_me(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<SessionAuth>,
    Json(body): Json<UpdateUserProfileDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let user = app_state
        .db_client
        .update_user(&auth.user.id, body.name, body.bio, body.avatar)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(UserResponseDto {
        status: "success".to_string(),
        data: UserData { user },
    }))
}

/// Profile card lookup. Best-effort by design: unknown ids come back as
/// the placeholder profile instead of a 404.
pub async fn get_user_profile(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let user = app_state
        .db_client
        .resolve_user(&user_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(UserResponseDto {
        status: "success".to_string(),
        data: UserData { user },
    }))
}
