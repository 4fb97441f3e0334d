// models/usermodel.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    #[serde(default)]
    pub bio: String,
    pub rating: f64,
    pub verified: bool,
    pub current_streak: u32,
    /// Days on which the user was active, one entry per day.
    pub activity_log: Vec<NaiveDate>,
}
