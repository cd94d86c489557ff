//! Property tests for is_prime
//!
//! Tests invariants for:
//! - Known primes below 1000 are accepted and have no proper divisor
//! - Composites and perfect squares are rejected
//! - Every value <= 1 is rejected
//! - Agreement with a naive reference on 1000..=10000

use mathfn::is_prime;
use mathfn_property_tests::strategies::{
    diverse_composite_numbers, diverse_prime_numbers, has_small_divisor, PRIMES_BELOW_1000,
};
use proptest::prelude::*;

proptest! {
    /// Primes are accepted and no integer in [2, p-1] divides them
    #[test]
    fn prime_has_no_divisors(p in diverse_prime_numbers()) {
        prop_assert!(is_prime(p), "{} should be prime", p);
        for d in 2..p {
            prop_assert_ne!(p % d, 0, "Prime {} divisible by {}", p, d);
        }
    }

    /// Composites are rejected
    #[test]
    fn prime_rejects_composites(c in diverse_composite_numbers()) {
        prop_assert!(!is_prime(c), "Composite {} reported prime", c);
    }

    /// Every n <= 1 is rejected
    #[test]
    fn prime_rejects_at_most_one(n in i32::MIN..=1) {
        prop_assert!(!is_prime(n), "{} <= 1 reported prime", n);
    }

    /// Accepted values in 1000..=10000 have no divisor up to sqrt(n)
    #[test]
    fn prime_large_numbers(n in 1000i32..=10_000) {
        if is_prime(n) {
            let mut d = 2;
            while d * d <= n {
                prop_assert_ne!(n % d, 0, "{} reported prime but divisible by {}", n, d);
                d += 1;
            }
        }
    }

    /// Agreement with the naive reference
    #[test]
    fn prime_matches_reference(n in 2i32..=100_000) {
        prop_assert_eq!(is_prime(n), !has_small_divisor(n));
    }

    /// Perfect squares are never prime
    #[test]
    fn prime_rejects_squares(base in 2i32..=100) {
        let square = base * base;
        prop_assert!(!is_prime(square), "Square {} reported prime", square);
    }

    /// Squares near the top of the i32 range are rejected without overflow
    #[test]
    fn prime_rejects_large_squares(base in 40_000i32..=46_340) {
        prop_assert!(!is_prime(base * base));
    }
}

#[test]
fn prime_count_below_1000() {
    let count = (0..1000).filter(|&n| is_prime(n)).count();
    assert_eq!(count, PRIMES_BELOW_1000.len());
}

#[test]
fn prime_examples() {
    assert!(is_prime(17));
    assert!(!is_prime(1));
    assert!(!is_prime(0));
    assert!(!is_prime(-7));
}
