pub mod inventory;
pub mod location;
pub mod units;
