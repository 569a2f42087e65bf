//! Request models for the sum service API
//!
//! Defines the query string of the calculate endpoint and its validation.

use std::str::FromStr;

use num_bigint::BigUint;
use serde::Deserialize;

use crate::error::{Result, SumError};

// == Parse Mode ==
/// How strictly the `len` parameter is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// The whole parameter must be decimal digits
    #[default]
    Strict,
    /// A leading integer is taken and any trailing text ignored
    Lenient,
}

impl FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ParseMode::Strict),
            "lenient" => Ok(ParseMode::Lenient),
            other => Err(format!("unknown parse mode '{other}'")),
        }
    }
}

/// Query string for GET /api/calculate
///
/// # Fields
/// - `len`: upper bound `n` of the sum, a positive integer
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculateQuery {
    /// Raw `len` parameter
    #[serde(default)]
    pub len: Option<String>,
}

impl CalculateQuery {
    /// Validates `len` and returns it as `n`.
    ///
    /// Any positive integer is accepted; there is no upper bound.
    pub fn parse_len(&self, mode: ParseMode) -> Result<BigUint> {
        let raw = match self.len.as_deref() {
            None | Some("") => return Err(invalid("len is required")),
            Some(raw) => raw,
        };

        let n = match mode {
            ParseMode::Strict => parse_strict(raw)?,
            ParseMode::Lenient => parse_leading(raw)?,
        };

        if n.bits() == 0 {
            return Err(invalid("len must be greater than zero"));
        }
        Ok(n)
    }
}

fn parse_strict(raw: &str) -> Result<BigUint> {
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("len must be a positive integer"));
    }
    parse_digits(raw)
}

/// Takes the integer at the start of `raw`, skipping leading whitespace.
fn parse_leading(raw: &str) -> Result<BigUint> {
    let rest = raw.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];

    if digits.is_empty() {
        return Err(invalid("len must be a positive integer"));
    }
    if negative && digits.bytes().any(|b| b != b'0') {
        return Err(invalid("len must be greater than zero"));
    }
    parse_digits(digits)
}

/// `digits` is non-empty and all ASCII digits.
fn parse_digits(digits: &str) -> Result<BigUint> {
    BigUint::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| invalid("len must be a positive integer"))
}

fn invalid(reason: &str) -> SumError {
    SumError::InvalidInput(reason.to_string())
}
