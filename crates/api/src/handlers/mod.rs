pub mod landlord;
pub mod property;
pub mod tenant;
