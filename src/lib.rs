//! Sum Cache - memoized sums over HTTP
//!
//! Sums the integers 1..=n and memoizes each result in a key-value store.

pub mod api;
pub mod calc;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use error::{Result, SumError};
