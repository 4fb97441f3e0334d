// dtos/deliverydtos.rs
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::deliverymodel::DeliveryTask;
use crate::models::ListingMode;

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskDto {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "Pickup location is required"))]
    pub pickup: String,

    #[validate(length(min = 1, message = "Dropoff location is required"))]
    pub dropoff: String,

    #[validate(range(min = 0.0, message = "Offer amount cannot be negative"))]
    pub offer_amount: f64,

    #[validate(length(min = 1, message = "Deadline is required"))]
    pub deadline: String,

    pub mode: ListingMode,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TaskResponseDto {
    pub status: String,
    pub task: DeliveryTask,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TaskListResponseDto {
    pub status: String,
    pub tasks: Vec<DeliveryTask>,
    pub results: usize,
}
