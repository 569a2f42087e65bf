//! Request and Response models for the sum service API
//!
//! This module defines the query and body types exchanged over HTTP.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CalculateQuery, ParseMode};
pub use responses::HealthResponse;
