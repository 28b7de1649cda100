pub mod batch;
pub mod config;
pub mod kinds;
pub mod solve;
