pub mod billmodel;
pub mod chatmodel;
pub mod deliverymodel;
pub mod rentalmodel;
pub mod ridemodel;
pub mod usermodel;

use serde::{Deserialize, Serialize};

/// Marks whether a listing represents supply (offer) or demand (request).
/// Only a classification label; the record shape is identical either way.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ListingMode {
    Offer,
    Request,
}

impl ListingMode {
    pub fn to_str(&self) -> &str {
        match self {
            ListingMode::Offer => "offer",
            ListingMode::Request => "request",
        }
    }
}
