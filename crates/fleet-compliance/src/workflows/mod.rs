pub mod fleet;
pub mod inventory;
