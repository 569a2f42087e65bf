//! Stored Record Module
//!
//! Defines the persisted sum record and the canonical key it is stored under.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

// == Cached Sum ==
/// A memoized sum as persisted in the store.
///
/// Serialized as `{ "id": ..., "result": "<decimal>", "calcTime": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedSum {
    /// Canonical key derived from `n`
    pub id: String,
    /// Sum of the integers 1..=n
    #[serde(with = "decimal")]
    pub result: BigUint,
    /// Milliseconds spent computing `result`
    pub calc_time: u64,
}

impl CachedSum {
    // == Constructor ==
    /// Creates the record for `n` with its computed result and duration.
    pub fn new(n: &BigUint, result: BigUint, calc_time: u64) -> Self {
        Self {
            id: key_for(n),
            result,
            calc_time,
        }
    }
}

// == Key Derivation ==
/// Returns the canonical store key for `n`, the JSON text `{"len":n}`.
pub fn key_for(n: &BigUint) -> String {
    format!("{{\"len\":{n}}}")
}

/// Writes a `BigUint` as a decimal string; reads a decimal string or a JSON integer.
mod decimal {
    use std::fmt;

    use num_bigint::BigUint;
    use serde::{de, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        deserializer.deserialize_any(DecimalVisitor)
    }

    struct DecimalVisitor;

    impl<'de> de::Visitor<'de> for DecimalVisitor {
        type Value = BigUint;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a non-negative decimal integer")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<BigUint, E> {
            Ok(BigUint::from(v))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<BigUint, E> {
            if v.is_empty() || !v.bytes().all(|b| b.is_ascii_digit()) {
                return Err(E::invalid_value(de::Unexpected::Str(v), &self));
            }
            v.parse().map_err(E::custom)
        }
    }
}
