// handler/pooling.rs
use std::sync::Arc;

use axum::{
    extract::Path,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    db::ridedb::RideExt,
    dtos::ridedtos::{CreateRideDto, RideListResponseDto, RideResponseDto},
    dtos::userdtos::OutcomeResponseDto,
    error::HttpError,
    middleware::SessionAuth,
    AppState,
};

pub fn pooling_handler() -> Router {
    Router::new()
        .route("/", get(list_rides).post(create_ride))
        .route("/:ride_id/join", post(join_ride))
}

pub async fn list_rides(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let rides = app_state
        .db_client
        .get_rides()
        .await
        .map_err(HttpError::from)?;

    Ok(Json(RideListResponseDto {
        status: "success".to_string(),
        results: rides.len(),
        rides,
    }))
}

pub async fn create_ride(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<SessionAuth>,
    Json(body): Json<CreateRideDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let ride = app_state
        .db_client
        .create_ride(body, &auth.user)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(RideResponseDto {
        status: "success".to_string(),
        ride,
    }))
}

/// The outcome label ("joined" vs "passenger accepted") is the caller's
/// business; the state change is the same for offers and requests.
pub async fn join_ride(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(ride_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let joined = app_state
        .db_client
        .join_ride(&ride_id)
        .await
        .map_err(HttpError::from)?;

    if !joined {
        tracing::debug!("join rejected for ride '{}'", ride_id);
    }

    Ok(Json(OutcomeResponseDto {
        status: "success".to_string(),
        success: joined,
    }))
}
