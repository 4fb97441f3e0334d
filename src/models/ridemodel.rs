// models/ridemodel.rs
use serde::{Deserialize, Serialize};

use super::usermodel::User;
use super::ListingMode;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Car,
    Bike,
}

impl VehicleType {
    pub fn to_str(&self) -> &str {
        match self {
            VehicleType::Car => "car",
            VehicleType::Bike => "bike",
        }
    }
}

/// A pooling listing. `driver` is the creator: the driver for offers, the
/// requester for requests.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    pub id: String,
    pub driver: User,
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub time: String,
    pub seats_available: u32,
    pub cost_per_person: f64,
    #[serde(rename = "type")]
    pub vehicle: VehicleType,
    pub mode: ListingMode,
}
