//! Calc Module
//!
//! Sum computation and the cache-or-compute resolver.

mod resolver;
mod sum;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use resolver::{resolve, Outcome, Resolution};
pub use sum::{accumulate, closed_form, SumStrategy};
