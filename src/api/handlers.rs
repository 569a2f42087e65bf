//! API Handlers
//!
//! HTTP request handlers for each endpoint of the sum service.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use tracing::info;

use crate::calc::{resolve, SumStrategy};
use crate::config::Config;
use crate::error::Result;
use crate::models::{CalculateQuery, HealthResponse, ParseMode};
use crate::render;
use crate::store::{FileStore, MemoryStore, SumStore};

/// Application state shared across all handlers.
///
/// The store is built once per process and handed to every request.
#[derive(Clone)]
pub struct AppState {
    /// Key-value store the sums are memoized in
    pub store: Arc<dyn SumStore>,
    /// How sums are computed on a miss
    pub sum_strategy: SumStrategy,
    /// How strictly `len` is parsed
    pub parse_mode: ParseMode,
}

impl AppState {
    /// Creates a new AppState around the given store with default options.
    pub fn new(store: impl SumStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
            sum_strategy: SumStrategy::default(),
            parse_mode: ParseMode::default(),
        }
    }

    /// Sets the sum strategy.
    pub fn with_sum_strategy(mut self, strategy: SumStrategy) -> Self {
        self.sum_strategy = strategy;
        self
    }

    /// Sets the parse mode.
    pub fn with_parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = mode;
        self
    }

    /// Creates a new AppState from configuration.
    ///
    /// Opens a [`FileStore`] when `store_path` is set, otherwise a [`MemoryStore`].
    pub async fn from_config(config: &Config) -> Result<Self> {
        let state = match &config.store_path {
            Some(dir) => {
                info!("Using file store in {}", dir.display());
                Self::new(FileStore::open(dir, config.table_name.clone()).await?)
            }
            None => {
                info!("Using in-memory store");
                Self::new(MemoryStore::new(config.table_name.clone()))
            }
        };

        Ok(state
            .with_sum_strategy(config.sum_strategy)
            .with_parse_mode(config.parse_mode))
    }
}

/// Handler for GET /api/calculate?len=n
///
/// Validates `len`, then serves the sum of 1..=n from the store or computes it.
pub async fn calculate_handler(
    State(state): State<AppState>,
    Query(query): Query<CalculateQuery>,
) -> Result<Html<String>> {
    let n = query.parse_len(state.parse_mode)?;
    let resolution = resolve(state.store.as_ref(), &n, state.sum_strategy).await?;

    Ok(Html(render::result_page(&n, &resolution)))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.store.table()))
}
