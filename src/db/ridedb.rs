// db/ridedb.rs
use async_trait::async_trait;

use super::db::DBClient;
use super::seed;
use super::store::{Collection, StoreError};
use crate::dtos::ridedtos::CreateRideDto;
use crate::models::ridemodel::Ride;
use crate::models::usermodel::User;
use crate::utils::id;

#[async_trait]
pub trait RideExt {
    async fn get_rides(&self) -> Result<Vec<Ride>, StoreError>;

    async fn create_ride(&self, dto: CreateRideDto, creator: &User) -> Result<Ride, StoreError>;

    /// Takes one seat. True only when the ride exists and still has a
    /// seat; false otherwise, with nothing written. Repeating until zero
    /// fails closed — seats never go negative.
    async fn join_ride(&self, ride_id: &str) -> Result<bool, StoreError>;
}

#[async_trait]
impl RideExt for DBClient {
    async fn get_rides(&self) -> Result<Vec<Ride>, StoreError> {
        self.load_collection(Collection::Rides, seed::seed_rides)
            .await
    }

    async fn create_ride(&self, dto: CreateRideDto, creator: &User) -> Result<Ride, StoreError> {
        let _guard = self.transition().await;

        let ride = Ride {
            id: id::generate(),
            driver: creator.clone(),
            origin: dto.origin,
            destination: dto.destination,
            date: dto.date,
            time: dto.time,
            seats_available: dto.seats_available,
            cost_per_person: dto.cost_per_person,
            vehicle: dto.vehicle,
            mode: dto.mode,
        };

        let mut rides = self
            .load_collection(Collection::Rides, seed::seed_rides)
            .await?;
        rides.insert(0, ride.clone());
        self.save_collection(Collection::Rides, &rides).await?;

        Ok(ride)
    }

    async fn join_ride(&self, ride_id: &str) -> Result<bool, StoreError> {
        let _guard = self.transition().await;

        let mut rides = self
            .load_collection(Collection::Rides, seed::seed_rides)
            .await?;

        let ride = match rides.iter_mut().find(|r| r.id == ride_id) {
            Some(ride) => ride,
            None => return Ok(false),
        };
        if ride.seats_available == 0 {
            return Ok(false);
        }

        ride.seats_available -= 1;
        self.save_collection(Collection::Rides, &rides).await?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::local::LocalStore;
    use crate::models::ridemodel::VehicleType;
    use crate::models::ListingMode;
    use std::sync::Arc;

    async fn scratch_client() -> DBClient {
        let dir = std::env::temp_dir().join(format!("campus_connect_test_{}", uuid::Uuid::new_v4()));
        let store = LocalStore::open(&dir).await.unwrap();
        DBClient::new(Arc::new(store))
    }

    fn offer_dto(seats: u32) -> CreateRideDto {
        CreateRideDto {
            origin: "Campus".to_string(),
            destination: "Station".to_string(),
            date: "Today".to_string(),
            time: "5:00 PM".to_string(),
            seats_available: seats,
            cost_per_person: 80.0,
            vehicle: VehicleType::Car,
            mode: ListingMode::Offer,
        }
    }

    #[tokio::test]
    async fn test_create_ride_attaches_creator_and_prepends() {
        let client = scratch_client().await;
        let creator = seed::seed_user();

        let ride = client.create_ride(offer_dto(3), &creator).await.unwrap();
        assert_eq!(ride.driver.id, creator.id);

        let rides = client.get_rides().await.unwrap();
        assert_eq!(rides[0].id, ride.id);
        assert_eq!(rides.len(), seed::seed_rides().len() + 1);
    }

    #[tokio::test]
    async fn test_join_decrements_until_full_then_fails_closed() {
        let client = scratch_client().await;
        let ride = client
            .create_ride(offer_dto(2), &seed::seed_user())
            .await
            .unwrap();

        assert!(client.join_ride(&ride.id).await.unwrap());
        assert!(client.join_ride(&ride.id).await.unwrap());
        assert!(!client.join_ride(&ride.id).await.unwrap());

        let rides = client.get_rides().await.unwrap();
        let stored = rides.iter().find(|r| r.id == ride.id).unwrap();
        assert_eq!(stored.seats_available, 0);
    }

    #[tokio::test]
    async fn test_join_missing_ride_returns_false_without_mutation() {
        let client = scratch_client().await;
        let before = client.get_rides().await.unwrap();

        assert!(!client.join_ride("missing").await.unwrap());
        assert_eq!(client.get_rides().await.unwrap(), before);
    }
}
