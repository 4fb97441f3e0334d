// handler/auth.rs
use std::sync::Arc;

use axum::{
    http::{header, HeaderMap},
    response::IntoResponse,
    routing::post,
    Extension, Json, Router,
};
use axum_extra::extract::cookie::Cookie;
use validator::Validate;

use crate::{
    db::userdb::UserExt,
    dtos::userdtos::{LoginUserDto, RegisterUserDto, Response, UserData, UserResponseDto},
    error::{ErrorMessage, HttpError},
    middleware::SESSION_COOKIE,
    models::usermodel::User,
    AppState,
};

pub fn auth_handler() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
}

fn session_response(user: User) -> Result<axum::response::Response, HttpError> {
    let cookie = Cookie::build((SESSION_COOKIE, user.id.clone()))
        .path("/")
        .max_age(time::Duration::days(365))
        .http_only(true)
        .build();

    let response = Json(UserResponseDto {
        status: "success".to_string(),
        data: UserData { user },
    });

    let mut headers = HeaderMap::new();
    headers.append(
        header::SET_COOKIE,
        cookie
            .to_string()
            .parse()
            .map_err(|_| HttpError::server_error("Failed to build session cookie"))?,
    );

    let mut response = response.into_response();
    response.headers_mut().extend(headers);

    Ok(response)
}

pub async fn register(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let existing = app_state
        .db_client
        .get_user(None, Some(&body.email))
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if existing.is_some() {
        return Err(HttpError::unique_constraint_violation(
            ErrorMessage::EmailExist.to_string(),
        ));
    }

    let user = app_state
        .db_client
        .save_user(&body.name, &body.email)
        .await
        .map_err(HttpError::from)?;

    tracing::info!("new user registered: {}", user.id);

    session_response(user)
}

pub async fn login(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<LoginUserDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let result = app_state
        .db_client
        .get_user(None, Some(&body.email))
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let user = result.ok_or(HttpError::not_found(ErrorMessage::UserNotFound.to_string()))?;

    session_response(user)
}

pub async fn logout() -> Result<impl IntoResponse, HttpError> {
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .max_age(time::Duration::seconds(0))
        .http_only(true)
        .build();

    let response = Json(Response {
        status: "success",
        message: "Signed out".to_string(),
    });

    let mut headers = HeaderMap::new();
    headers.append(
        header::SET_COOKIE,
        cookie
            .to_string()
            .parse()
            .map_err(|_| HttpError::server_error("Failed to build session cookie"))?,
    );

    let mut response = response.into_response();
    response.headers_mut().extend(headers);

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::db::db::DBClient;
    use crate::db::local::LocalStore;
    use crate::handler::dashboard::DashboardStats;
    use crate::service::refresh::spawn_refresh_loop;
    use axum::http::StatusCode;

    async fn scratch_state() -> Arc<AppState> {
        let dir = std::env::temp_dir().join(format!("campus_connect_test_{}", uuid::Uuid::new_v4()));
        let store = LocalStore::open(&dir).await.unwrap();
        let stats = Arc::new(spawn_refresh_loop(
            "test-stats",
            tokio::time::Duration::from_secs(3600),
            DashboardStats::default(),
            || async { Ok(DashboardStats::default()) },
        ));
        Arc::new(AppState {
            env: Config::init(),
            db_client: Arc::new(DBClient::new(Arc::new(store))),
            stats,
        })
    }

    fn register_dto(name: &str, email: &str) -> RegisterUserDto {
        RegisterUserDto {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_registration_conflicts_regardless_of_casing() {
        let state = scratch_state().await;

        register(Extension(state.clone()), Json(register_dto("Priya", "priya@campus.edu")))
            .await
            .unwrap();

        let err = register(
            Extension(state),
            Json(register_dto("Someone Else", "PRIYA@CAMPUS.EDU")),
        )
        .await
        .err()
        .unwrap();
        assert_eq!(err.status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_login_with_unknown_email_is_not_found() {
        let state = scratch_state().await;

        let err = login(
            Extension(state),
            Json(LoginUserDto {
                email: "ghost@campus.edu".to_string(),
            }),
        )
        .await
        .err()
        .unwrap();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_login_matches_any_casing_of_a_registered_email() {
        let state = scratch_state().await;
        register(Extension(state.clone()), Json(register_dto("Priya", "priya@campus.edu")))
            .await
            .unwrap();

        let response = login(
            Extension(state),
            Json(LoginUserDto {
                email: "PRIYA@Campus.EDU".to_string(),
            }),
        )
        .await;
        assert!(response.is_ok());
    }
}
