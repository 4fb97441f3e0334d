// dtos/ridedtos.rs
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::ridemodel::{Ride, VehicleType};
use crate::models::ListingMode;

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRideDto {
    #[validate(length(min = 1, message = "Origin is required"))]
    pub origin: String,

    #[validate(length(min = 1, message = "Destination is required"))]
    pub destination: String,

    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,

    #[validate(length(min = 1, message = "Time is required"))]
    pub time: String,

    pub seats_available: u32,

    #[validate(range(min = 0.0, message = "Cost cannot be negative"))]
    pub cost_per_person: f64,

    #[serde(rename = "type")]
    pub vehicle: VehicleType,

    pub mode: ListingMode,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RideResponseDto {
    pub status: String,
    pub ride: Ride,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RideListResponseDto {
    pub status: String,
    pub rides: Vec<Ride>,
    pub results: usize,
}
