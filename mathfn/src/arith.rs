//! Wrapping integer arithmetic
//!
//! All operations here follow native 32-bit two's-complement semantics:
//! results that leave the `i32` range wrap modulo 2^32 instead of panicking,
//! in debug and release builds alike.

use tracing::{debug, warn};

use crate::error::{MathError, Result};

/// Double `n`, wrapping on overflow.
///
/// The result is always even, since `2n mod 2^32` keeps the low bit clear.
///
/// ```
/// assert_eq!(mathfn::multiply_by_two(5), 10);
/// assert_eq!(mathfn::multiply_by_two(i32::MAX), -2);
/// ```
#[inline]
pub const fn multiply_by_two(n: i32) -> i32 {
    n.wrapping_mul(2)
}

/// First `limit` multiples of `n`: element `i` is `n * (i + 1)`, wrapping.
///
/// Consecutive elements differ by exactly `n` (mod 2^32).
///
/// # Errors
///
/// [`MathError::InvalidArgument`] when `limit <= 0`.
///
/// ```
/// let table = mathfn::generate_multiplication_table(3, 4).unwrap();
/// assert_eq!(table, vec![3, 6, 9, 12]);
/// ```
pub fn generate_multiplication_table(n: i32, limit: i32) -> Result<Vec<i32>> {
    if limit <= 0 {
        warn!(n, limit, "multiplication table rejected: non-positive limit");
        return Err(MathError::InvalidArgument("limit must be at least 1"));
    }

    debug!(n, limit, "generating multiplication table");

    let table = core::iter::successors(Some(n), |prev| Some(prev.wrapping_add(n)))
        .take(limit as usize)
        .collect();
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiply_by_two() {
        assert_eq!(multiply_by_two(0), 0);
        assert_eq!(multiply_by_two(5), 10);
        assert_eq!(multiply_by_two(-7), -14);
    }

    #[test]
    fn test_multiply_by_two_wraps() {
        assert_eq!(multiply_by_two(i32::MAX), -2);
        assert_eq!(multiply_by_two(i32::MIN), 0);
        assert_eq!(multiply_by_two(i32::MAX / 2 + 1), i32::MIN);
    }

    #[test]
    fn test_table_basic() {
        assert_eq!(generate_multiplication_table(3, 4).unwrap(), vec![3, 6, 9, 12]);
        assert_eq!(generate_multiplication_table(-2, 3).unwrap(), vec![-2, -4, -6]);
        assert_eq!(generate_multiplication_table(7, 1).unwrap(), vec![7]);
    }

    #[test]
    fn test_table_wraps() {
        let table = generate_multiplication_table(i32::MAX, 3).unwrap();
        assert_eq!(table, vec![i32::MAX, -2, i32::MAX - 2]);
        for (i, value) in table.iter().enumerate() {
            assert_eq!(*value, i32::MAX.wrapping_mul(i as i32 + 1));
        }
    }

    #[test]
    fn test_table_rejects_non_positive_limit() {
        assert_eq!(
            generate_multiplication_table(3, 0),
            Err(MathError::InvalidArgument("limit must be at least 1"))
        );
        assert!(generate_multiplication_table(3, -5).is_err());
        assert!(generate_multiplication_table(0, i32::MIN).is_err());
    }
}
