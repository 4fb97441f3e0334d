// models/deliverymodel.rs
use serde::{Deserialize, Serialize};

use super::usermodel::User;
use super::ListingMode;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Open,
    Assigned,
    Completed,
}

impl TaskStatus {
    pub fn to_str(&self) -> &str {
        match self {
            TaskStatus::Open => "open",
            TaskStatus::Assigned => "assigned",
            TaskStatus::Completed => "completed",
        }
    }
}

/// A delivery errand. `requester` is the creator: the requester for
/// requests, the runner for offers. `deadline` doubles as the departure
/// time for offers.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryTask {
    pub id: String,
    pub requester: User,
    pub title: String,
    pub description: String,
    pub pickup: String,
    pub dropoff: String,
    pub offer_amount: f64,
    pub status: TaskStatus,
    pub deadline: String,
    pub mode: ListingMode,
}
