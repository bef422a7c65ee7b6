pub mod connection;
pub mod guarantees;
pub mod preferences;
