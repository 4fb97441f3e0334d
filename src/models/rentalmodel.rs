// models/rentalmodel.rs
use serde::{Deserialize, Serialize};

use super::usermodel::User;
use super::ListingMode;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub enum ItemCategory {
    Academic,
    Electronics,
    Appliances,
    Sports,
    Misc,
}

impl ItemCategory {
    pub fn to_str(&self) -> &str {
        match self {
            ItemCategory::Academic => "Academic",
            ItemCategory::Electronics => "Electronics",
            ItemCategory::Appliances => "Appliances",
            ItemCategory::Sports => "Sports",
            ItemCategory::Misc => "Misc",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RateUnit {
    Hour,
    Day,
    Week,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Available,
    Rented,
}

impl ItemStatus {
    pub fn to_str(&self) -> &str {
        match self {
            ItemStatus::Available => "available",
            ItemStatus::Rented => "rented",
        }
    }
}

/// A renting listing. Price 0 means free/share. `owner` is the creator.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RentalItem {
    pub id: String,
    pub owner: User,
    pub title: String,
    pub category: ItemCategory,
    pub price: f64,
    pub rate_unit: RateUnit,
    pub image: String,
    pub status: ItemStatus,
    pub mode: ListingMode,
}
