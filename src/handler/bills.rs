// handler/bills.rs
use std::sync::Arc;

use axum::{
    extract::Path,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::{
    db::billdb::BillExt,
    dtos::billdtos::BillListResponseDto,
    dtos::userdtos::OutcomeResponseDto,
    error::HttpError,
    middleware::SessionAuth,
    AppState,
};

pub fn bills_handler() -> Router {
    Router::new()
        .route("/", get(list_bills))
        .route("/:bill_id/pay", post(pay_bill))
}

pub async fn list_bills(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<SessionAuth>,
) -> Result<impl IntoResponse, HttpError> {
    let bills = app_state
        .db_client
        .get_bills(&auth.user.id)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(BillListResponseDto {
        status: "success".to_string(),
        results: bills.len(),
        bills,
    }))
}

/// Settlement is a status flip, not a payment flow.
pub async fn pay_bill(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(bill_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let paid = app_state
        .db_client
        .pay_bill(&bill_id)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(OutcomeResponseDto {
        status: "success".to_string(),
        success: paid,
    }))
}
