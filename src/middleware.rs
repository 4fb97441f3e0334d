// middleware.rs
use std::sync::Arc;

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::IntoResponse,
    Extension,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    db::userdb::UserExt,
    error::{ErrorMessage, HttpError},
    models::usermodel::User,
    AppState,
};

/// Durable client-side session slot: holds the signed-in user's id, no
/// expiry. Hardening this is an explicit non-goal.
pub const SESSION_COOKIE: &str = "campus_connect_user_id";

#[derive(Debug, Clone)]
pub struct SessionAuth {
    pub user: User,
}

pub async fn auth(
    cookie_jar: CookieJar,
    Extension(app_state): Extension<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let user_id = cookie_jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| {
                    if auth_value.starts_with("Bearer ") {
                        Some(auth_value[7..].to_owned())
                    } else {
                        None
                    }
                })
        });

    let user_id = user_id.ok_or_else(|| {
        HttpError::unauthorized(ErrorMessage::SessionNotProvided.to_string())
    })?;

    // Session restore mirrors the client's lookup: best-effort, so stale
    // slots degrade to the placeholder user instead of a hard failure.
    let user = app_state
        .db_client
        .resolve_user(&user_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    req.extensions_mut().insert(SessionAuth { user });

    Ok(next.run(req).await)
}
