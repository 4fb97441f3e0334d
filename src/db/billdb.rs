// db/billdb.rs
use async_trait::async_trait;
use chrono::Utc;

use super::db::DBClient;
use super::seed;
use super::store::{Collection, StoreError};
use crate::models::billmodel::{Bill, BillStatus};

#[async_trait]
pub trait BillExt {
    /// Bills owed by one user.
    async fn get_bills(&self, user_id: &str) -> Result<Vec<Bill>, StoreError>;

    /// Flips the bill to paid and stamps `paid_at` with the current time.
    /// There is no already-paid guard: re-paying re-stamps `paid_at`.
    /// False only when the id is unknown.
    async fn pay_bill(&self, bill_id: &str) -> Result<bool, StoreError>;
}

#[async_trait]
impl BillExt for DBClient {
    async fn get_bills(&self, user_id: &str) -> Result<Vec<Bill>, StoreError> {
        let bills = self
            .load_collection(Collection::Bills, seed::seed_bills)
            .await?;
        Ok(bills.into_iter().filter(|b| b.user_id == user_id).collect())
    }

    async fn pay_bill(&self, bill_id: &str) -> Result<bool, StoreError> {
        let _guard = self.transition().await;

        let mut bills = self
            .load_collection(Collection::Bills, seed::seed_bills)
            .await?;

        let bill = match bills.iter_mut().find(|b| b.id == bill_id) {
            Some(bill) => bill,
            None => return Ok(false),
        };

        bill.status = BillStatus::Paid;
        bill.paid_at = Some(Utc::now());
        self.save_collection(Collection::Bills, &bills).await?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::local::LocalStore;
    use std::sync::Arc;

    async fn scratch_client() -> DBClient {
        let dir = std::env::temp_dir().join(format!("campus_connect_test_{}", uuid::Uuid::new_v4()));
        let store = LocalStore::open(&dir).await.unwrap();
        DBClient::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_get_bills_filters_to_the_owner() {
        let client = scratch_client().await;
        let bills = client.get_bills(seed::SEED_USER_ID).await.unwrap();
        assert_eq!(bills.len(), seed::seed_bills().len());

        let none = client.get_bills("someone-else").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_pay_pending_bill_stamps_paid_at_and_keeps_fields() {
        let client = scratch_client().await;

        // Seed bill b1: pending, 250 owed for the airport ride.
        assert!(client.pay_bill("b1").await.unwrap());

        let bills = client.get_bills(seed::SEED_USER_ID).await.unwrap();
        let bill = bills.iter().find(|b| b.id == "b1").unwrap();
        assert_eq!(bill.status, BillStatus::Paid);
        assert!(bill.paid_at.is_some());
        assert_eq!(bill.amount, 250.0);
        assert_eq!(bill.title, "Ride to Airport");
    }

    #[tokio::test]
    async fn test_repaying_restamps_paid_at() {
        let client = scratch_client().await;
        assert!(client.pay_bill("b1").await.unwrap());
        let first = client.get_bills(seed::SEED_USER_ID).await.unwrap();
        let first_stamp = first.iter().find(|b| b.id == "b1").unwrap().paid_at;

        assert!(client.pay_bill("b1").await.unwrap());
        let second = client.get_bills(seed::SEED_USER_ID).await.unwrap();
        let second_stamp = second.iter().find(|b| b.id == "b1").unwrap().paid_at;

        assert!(second_stamp >= first_stamp);
    }

    #[tokio::test]
    async fn test_pay_missing_bill_returns_false() {
        let client = scratch_client().await;
        assert!(!client.pay_bill("missing").await.unwrap());
    }
}
