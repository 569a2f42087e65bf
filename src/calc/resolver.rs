//! Cache-Or-Compute Resolver
//!
//! Serves a sum from the store, computing and storing it on a miss.

use std::time::Instant;

use num_bigint::BigUint;
use tracing::{debug, info};

use crate::calc::SumStrategy;
use crate::error::{Result, SumError};
use crate::store::{key_for, CachedSum, SumStore};

// == Outcome ==
/// Where a resolved sum came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Read from the store
    Fetched,
    /// Computed by this request and written to the store
    Computed,
}

// == Resolution ==
/// A resolved sum with timing metadata.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// The stored (or newly stored) record
    pub record: CachedSum,
    /// Whether the record was fetched or computed
    pub outcome: Outcome,
    /// Milliseconds spent on the store lookup
    pub lookup_ms: u64,
}

/// Resolves the sum for `n` against the store.
///
/// No lock is held between the lookup and the write. Two first requests for
/// the same `n` may both compute and both write; the results are identical.
pub async fn resolve(
    store: &dyn SumStore,
    n: &BigUint,
    strategy: SumStrategy,
) -> Result<Resolution> {
    let id = key_for(n);

    let lookup_start = Instant::now();
    let existing = store.get(&id).await?;
    let lookup_ms = elapsed_ms(lookup_start);

    if let Some(record) = existing {
        debug!(table = store.table(), %id, lookup_ms, "cache hit");
        return Ok(Resolution {
            record,
            outcome: Outcome::Fetched,
            lookup_ms,
        });
    }
    debug!(table = store.table(), %id, lookup_ms, "cache miss");

    let (result, calc_time) = compute(n, strategy).await?;
    let record = CachedSum::new(n, result, calc_time);
    store.put(record.clone()).await?;
    info!(table = store.table(), %id, calc_time, "stored new sum");

    Ok(Resolution {
        record,
        outcome: Outcome::Computed,
        lookup_ms,
    })
}

/// Runs the strategy and returns the sum with its duration in milliseconds.
async fn compute(n: &BigUint, strategy: SumStrategy) -> Result<(BigUint, u64)> {
    if strategy.is_blocking() {
        let n = n.clone();
        tokio::task::spawn_blocking(move || timed(&n, strategy))
            .await
            .map_err(|e| SumError::Internal(format!("sum task failed: {e}")))
    } else {
        Ok(timed(n, strategy))
    }
}

fn timed(n: &BigUint, strategy: SumStrategy) -> (BigUint, u64) {
    let start = Instant::now();
    let result = strategy.sum(n);
    (result, elapsed_ms(start))
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
