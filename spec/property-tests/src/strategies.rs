//! Shared proptest strategies
//!
//! Each strategy mixes wide random ranges with hand-picked edge values
//! (`0`, `±1`, `i32::MIN`, `i32::MAX`) so shrinking and coverage both reach
//! the overflow boundaries.

use proptest::collection::vec;
use proptest::prelude::*;
use proptest::sample::select;

/// All primes below 1000
pub const PRIMES_BELOW_1000: [i32; 168] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293, 307,
    311, 313, 317, 331, 337, 347, 349, 353, 359, 367, 373, 379, 383, 389, 397, 401, 409, 419, 421,
    431, 433, 439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503, 509, 521, 523, 541, 547,
    557, 563, 569, 571, 577, 587, 593, 599, 601, 607, 613, 617, 619, 631, 641, 643, 647, 653, 659,
    661, 673, 677, 683, 691, 701, 709, 719, 727, 733, 739, 743, 751, 757, 761, 769, 773, 787, 797,
    809, 811, 821, 823, 827, 829, 839, 853, 857, 859, 863, 877, 881, 883, 887, 907, 911, 919, 929,
    937, 941, 947, 953, 967, 971, 977, 983, 991, 997,
];

/// Composite numbers from 4 to 116
pub const SMALL_COMPOSITES: [i32; 85] = [
    4, 6, 8, 9, 10, 12, 14, 15, 16, 18, 20, 21, 22, 24, 25, 26, 27, 28, 30, 32, 33, 34, 35, 36, 38,
    39, 40, 42, 44, 45, 46, 48, 49, 50, 51, 52, 54, 55, 56, 57, 58, 60, 62, 63, 64, 65, 66, 68, 69,
    70, 72, 74, 75, 76, 77, 78, 80, 81, 82, 84, 85, 86, 87, 88, 90, 91, 92, 93, 94, 95, 96, 98, 99,
    100, 102, 104, 105, 106, 108, 110, 111, 112, 114, 115, 116,
];

const EDGE_VALUES: [i32; 5] = [i32::MIN, i32::MAX, 0, 1, -1];

/// Reference check: `n` has a divisor in `2..=sqrt(n)`.
///
/// Deliberately naive, so composite generation does not depend on the
/// function under test.
pub fn has_small_divisor(n: i32) -> bool {
    let n = i64::from(n);
    (2i64..).take_while(|d| d * d <= n).any(|d| n % d == 0)
}

// ============================================================================
// Scalars
// ============================================================================

/// Integers for multiplication tables: small ranges, signs, and both extremes
pub fn diverse_numbers() -> impl Strategy<Value = i32> {
    prop_oneof![
        -10_000i32..=10_000,
        select(vec![0, 1, -1]),
        select(vec![i32::MAX, i32::MIN]),
        -100i32..=100,
        select(vec![42, -42, 100, -100, 1000, -1000]),
    ]
}

/// Primes below 1000
pub fn diverse_prime_numbers() -> impl Strategy<Value = i32> {
    select(PRIMES_BELOW_1000.to_vec())
}

/// Composite numbers up to 10000
pub fn diverse_composite_numbers() -> impl Strategy<Value = i32> {
    prop_oneof![
        select(SMALL_COMPOSITES.to_vec()),
        (100i32..=1000).prop_filter("must be composite", |n| has_small_divisor(*n)),
        (1000i32..=10_000).prop_filter("must be divisible by 2, 3 or 5", |n| {
            n % 2 == 0 || n % 3 == 0 || n % 5 == 0
        }),
    ]
}

/// Single values for mean tests, including 16-bit and 8-bit boundaries
pub fn extreme_values() -> impl Strategy<Value = i32> {
    prop_oneof![
        select(EDGE_VALUES.to_vec()),
        select(vec![32767, -32768, 127, -128]),
        -1_000_000i32..=1_000_000,
    ]
}

/// Values repeated to build constant arrays
pub fn diverse_values() -> impl Strategy<Value = i32> {
    prop_oneof![
        -100_000i32..=100_000,
        select(vec![0, 1, -1, 42, -42]),
        select(vec![i32::MAX, i32::MIN]),
        -10i32..=10,
    ]
}

// ============================================================================
// Arrays
// ============================================================================

/// Non-empty arrays of mixed ranges, some made only of edge values
pub fn diverse_int_arrays() -> impl Strategy<Value = Vec<i32>> {
    prop_oneof![
        vec(-1000i32..=1000, 1..=50),
        vec(-100i32..=100, 1..=20),
        vec(select(EDGE_VALUES.to_vec()), 1..=10),
        vec(-10i32..=10, 1..=100),
    ]
}

/// Absent or empty input
pub fn absent_or_empty_arrays() -> impl Strategy<Value = Option<Vec<i32>>> {
    prop_oneof![Just(None::<Vec<i32>>), Just(Some(Vec::new()))]
}

/// Small-valued arrays used for order-independence checks
pub fn symmetric_arrays() -> impl Strategy<Value = Vec<i32>> {
    vec(-100i32..=100, 1..=30)
}

/// Arrays whose sum overflows `i32` when accumulated naively
pub fn extreme_value_arrays() -> impl Strategy<Value = Vec<i32>> {
    prop_oneof![
        vec(select(vec![i32::MAX, i32::MIN, 0]), 1..=10),
        vec((i32::MIN / 2)..=(i32::MAX / 2), 1..=20),
        vec(select(vec![1_000_000, -1_000_000, 500_000, -500_000]), 1..=15),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prime_table_is_consistent() {
        assert_eq!(PRIMES_BELOW_1000.len(), 168);
        assert!(PRIMES_BELOW_1000.windows(2).all(|w| w[0] < w[1]));
        assert!(PRIMES_BELOW_1000.iter().all(|p| !has_small_divisor(*p)));
    }

    #[test]
    fn test_composite_table_is_consistent() {
        assert!(SMALL_COMPOSITES.iter().all(|c| has_small_divisor(*c)));
        let expected = (4..=116).filter(|n| has_small_divisor(*n)).count();
        assert_eq!(SMALL_COMPOSITES.len(), expected);
    }
}
