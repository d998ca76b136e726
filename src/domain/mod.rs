pub mod locations;
pub mod property;
pub mod query;
pub mod suggestions;
