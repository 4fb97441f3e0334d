pub mod auth;
pub mod bills;
pub mod chat;
pub mod dashboard;
pub mod delivery;
pub mod pooling;
pub mod renting;
pub mod users;
