// handler/dashboard.rs
use std::sync::Arc;

use axum::{response::IntoResponse, routing::get, Extension, Json, Router};
use serde::{Deserialize, Serialize};

use crate::{
    db::db::DBClient,
    db::deliverydb::DeliveryExt,
    db::rentaldb::RentalExt,
    db::ridedb::RideExt,
    db::store::StoreError,
    error::HttpError,
    models::deliverymodel::TaskStatus,
    models::rentalmodel::ItemStatus,
    AppState,
};

/// Headline counts for the dashboard screen. Served from the refresh
/// loop's latest snapshot, so the numbers move without any push channel.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub active_rides: usize,
    pub available_items: usize,
    pub open_tasks: usize,
}

pub async fn collect_stats(db_client: Arc<DBClient>) -> Result<DashboardStats, StoreError> {
    let rides = db_client.get_rides().await?;
    let items = db_client.get_items().await?;
    let tasks = db_client.get_tasks().await?;

    Ok(DashboardStats {
        active_rides: rides.iter().filter(|r| r.seats_available > 0).count(),
        available_items: items
            .iter()
            .filter(|i| i.status == ItemStatus::Available)
            .count(),
        open_tasks: tasks.iter().filter(|t| t.status == TaskStatus::Open).count(),
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponseDto {
    pub status: String,
    pub stats: DashboardStats,
}

pub fn dashboard_handler() -> Router {
    Router::new().route("/stats", get(get_stats))
}

pub async fn get_stats(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    Ok(Json(DashboardResponseDto {
        status: "success".to_string(),
        stats: app_state.stats.latest(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::local::LocalStore;
    use crate::db::seed;

    #[tokio::test]
    async fn test_stats_count_only_actionable_listings() {
        let dir = std::env::temp_dir().join(format!("campus_connect_test_{}", uuid::Uuid::new_v4()));
        let store = LocalStore::open(&dir).await.unwrap();
        let client = Arc::new(DBClient::new(Arc::new(store)));

        let stats = collect_stats(client.clone()).await.unwrap();
        assert_eq!(stats.active_rides, seed::seed_rides().len());
        assert_eq!(stats.available_items, seed::seed_items().len());
        assert_eq!(stats.open_tasks, seed::seed_tasks().len());

        // Booking an item and accepting a task shrink the counts.
        client.book_item("i1").await.unwrap();
        client.accept_task("t1").await.unwrap();

        let stats = collect_stats(client).await.unwrap();
        assert_eq!(stats.available_items, seed::seed_items().len() - 1);
        assert_eq!(stats.open_tasks, seed::seed_tasks().len() - 1);
    }
}
