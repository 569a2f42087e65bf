//! Property-Based Tests for the Calc Module
//!
//! Uses proptest to check the sum, key and memoization properties.

use num_bigint::BigUint;
use proptest::prelude::*;

use crate::calc::{accumulate, closed_form, resolve, Outcome, SumStrategy};
use crate::models::{CalculateQuery, ParseMode};
use crate::store::{key_for, MemoryStore, SumStore};

// == Strategies ==
/// Decimal digits of a positive integer, up to 60 digits long
fn positive_decimal_strategy() -> impl Strategy<Value = String> {
    "[1-9][0-9]{0,59}".prop_map(|s| s)
}

/// Digits followed by at least one non-digit character
fn digits_with_suffix_strategy() -> impl Strategy<Value = String> {
    "[1-9][0-9]{0,30}[a-zA-Z .+-][a-zA-Z0-9]{0,4}".prop_map(|s| s)
}

fn big(n: u64) -> BigUint {
    BigUint::from(n)
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For every positive n, accumulating 1..=n equals n(n+1)/2.
    #[test]
    fn prop_accumulate_equals_closed_form(n in 1u64..20_000) {
        prop_assert_eq!(accumulate(&big(n)), closed_form(&big(n)));
    }

    // The closed form matches u128 arithmetic across the whole u64 range.
    #[test]
    fn prop_closed_form_matches_u128(n in any::<u64>()) {
        let wide = n as u128;
        prop_assert_eq!(closed_form(&big(n)), BigUint::from(wide * (wide + 1) / 2));
    }

    // Successive sums differ by exactly n, however large n is.
    #[test]
    fn prop_closed_form_step(raw in positive_decimal_strategy()) {
        let n: BigUint = raw.parse().unwrap();
        let prev = &n - 1u32;
        prop_assert_eq!(closed_form(&n) - closed_form(&prev), n);
    }

    // key(n) is stable and distinct n never share a key.
    #[test]
    fn prop_key_deterministic_and_injective(a in positive_decimal_strategy(), b in positive_decimal_strategy()) {
        let a: BigUint = a.parse().unwrap();
        let b: BigUint = b.parse().unwrap();
        prop_assert_eq!(key_for(&a), key_for(&a));
        prop_assert_eq!(a == b, key_for(&a) == key_for(&b));
    }

    // Strict parsing accepts every positive decimal integer, with no upper bound.
    #[test]
    fn prop_strict_accepts_positive(raw in positive_decimal_strategy()) {
        let query = CalculateQuery { len: Some(raw.clone()) };
        let n = query.parse_len(ParseMode::Strict).unwrap();
        prop_assert_eq!(n.to_string(), raw);
    }

    // Strict parsing rejects trailing garbage that lenient parsing ignores.
    #[test]
    fn prop_strict_rejects_suffix(raw in digits_with_suffix_strategy()) {
        let query = CalculateQuery { len: Some(raw.clone()) };
        prop_assert!(query.parse_len(ParseMode::Strict).is_err());

        let leading: String = raw.chars().take_while(|c| c.is_ascii_digit()).collect();
        let n = query.parse_len(ParseMode::Lenient).unwrap();
        prop_assert_eq!(n.to_string(), leading);
    }

    // Repeated resolution never changes the stored result.
    #[test]
    fn prop_memoization_idempotent(raw in positive_decimal_strategy(), repeats in 2usize..6) {
        let n: BigUint = raw.parse().unwrap();
        let store = MemoryStore::new("sumtable");
        let first = block_on(resolve(&store, &n, SumStrategy::ClosedForm)).unwrap();
        prop_assert_eq!(first.outcome, Outcome::Computed);

        for _ in 1..repeats {
            let again = block_on(resolve(&store, &n, SumStrategy::ClosedForm)).unwrap();
            prop_assert_eq!(again.outcome, Outcome::Fetched);
            prop_assert_eq!(&again.record, &first.record);
        }

        let stored = block_on(store.get(&key_for(&n))).unwrap();
        prop_assert_eq!(stored.map(|r| r.result), Some(closed_form(&n)));
    }
}
