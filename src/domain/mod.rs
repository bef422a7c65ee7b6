pub mod filter;
pub mod guarantee;
pub mod logic;
pub mod reminders;
pub mod seed;
pub mod sort;
pub mod stats;
pub mod upload;
pub mod view;
