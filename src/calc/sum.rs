//! Sum Module
//!
//! Computes the sum of the integers 1..=n exactly, for any n.

use std::str::FromStr;

use num_bigint::BigUint;

// == Sum Strategy ==
/// How the sum is computed on a cache miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SumStrategy {
    /// `n * (n + 1) / 2`
    #[default]
    ClosedForm,
    /// Adds 1, 2, ..., n one at a time
    Accumulate,
}

impl SumStrategy {
    /// Sums 1..=n with this strategy.
    pub fn sum(self, n: &BigUint) -> BigUint {
        match self {
            SumStrategy::ClosedForm => closed_form(n),
            SumStrategy::Accumulate => accumulate(n),
        }
    }

    /// True when the work grows with `n` and belongs off the async workers.
    pub fn is_blocking(self) -> bool {
        matches!(self, SumStrategy::Accumulate)
    }
}

impl FromStr for SumStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "closed-form" | "closed_form" | "closedform" => Ok(SumStrategy::ClosedForm),
            "accumulate" | "linear" => Ok(SumStrategy::Accumulate),
            other => Err(format!("unknown sum strategy '{other}'")),
        }
    }
}

/// `n * (n + 1) / 2`.
pub fn closed_form(n: &BigUint) -> BigUint {
    (n * (n + 1u32)) >> 1u32
}

/// `1 + 2 + ... + n` by linear accumulation.
pub fn accumulate(n: &BigUint) -> BigUint {
    let mut acc = BigUint::default();
    let mut i = BigUint::from(1u32);
    while &i <= n {
        acc += &i;
        i += 1u32;
    }
    acc
}
