pub mod client;
pub mod compare;
pub mod config;
pub mod form;
pub mod payload;
pub mod units;
