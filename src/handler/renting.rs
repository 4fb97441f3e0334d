// handler/renting.rs
use std::sync::Arc;

use axum::{
    extract::Path,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    db::rentaldb::RentalExt,
    dtos::rentaldtos::{CreateItemDto, ItemListResponseDto, ItemResponseDto},
    dtos::userdtos::OutcomeResponseDto,
    error::HttpError,
    middleware::SessionAuth,
    AppState,
};

pub fn renting_handler() -> Router {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:item_id/book", post(book_item))
}

pub async fn list_items(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let items = app_state
        .db_client
        .get_items()
        .await
        .map_err(HttpError::from)?;

    Ok(Json(ItemListResponseDto {
        status: "success".to_string(),
        results: items.len(),
        items,
    }))
}

pub async fn create_item(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<SessionAuth>,
    Json(body): Json<CreateItemDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let item = app_state
        .db_client
        .create_item(body, &auth.user)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(ItemResponseDto {
        status: "success".to_string(),
        item,
    }))
}

pub async fn book_item(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(item_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let booked = app_state
        .db_client
        .book_item(&item_id)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(OutcomeResponseDto {
        status: "success".to_string(),
        success: booked,
    }))
}
