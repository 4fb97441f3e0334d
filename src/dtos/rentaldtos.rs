// dtos/rentaldtos.rs
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::rentalmodel::{ItemCategory, RateUnit, RentalItem};
use crate::models::ListingMode;

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemDto {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    pub category: ItemCategory,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,

    pub rate_unit: RateUnit,

    pub mode: ListingMode,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemResponseDto {
    pub status: String,
    pub item: RentalItem,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemListResponseDto {
    pub status: String,
    pub items: Vec<RentalItem>,
    pub results: usize,
}
