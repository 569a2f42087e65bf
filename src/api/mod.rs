//! API Module
//!
//! HTTP handlers and routing for the sum service.
//!
//! # Endpoints
//! - `GET /api/calculate?len=n` - Sum 1..=n, memoized in the store
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
