pub mod connection;
pub mod properties;
