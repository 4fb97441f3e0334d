pub mod billdb;
pub mod chatdb;
pub mod db;
pub mod deliverydb;
pub mod local;
pub mod remote;
pub mod rentaldb;
pub mod ridedb;
pub mod seed;
pub mod store;
pub mod userdb;
