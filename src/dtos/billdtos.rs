// dtos/billdtos.rs
use serde::{Deserialize, Serialize};

use crate::models::billmodel::Bill;

#[derive(Debug, Serialize, Deserialize)]
pub struct BillListResponseDto {
    pub status: String,
    pub bills: Vec<Bill>,
    pub results: usize,
}
