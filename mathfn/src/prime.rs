//! Primality testing by trial division

/// True iff `n` is prime. Every `n <= 1` is not prime.
///
/// Trial division by 2, then by odd candidates up to `floor(sqrt(n))`.
///
/// ```
/// assert!(mathfn::is_prime(17));
/// assert!(!mathfn::is_prime(1));
/// ```
pub fn is_prime(n: i32) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    // u32 holds d * d for every d <= sqrt(i32::MAX) + 2
    let n = n as u32;
    let mut d: u32 = 3;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        let primes = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31];
        for n in -5..=31 {
            assert_eq!(is_prime(n), primes.contains(&n), "n = {}", n);
        }
    }

    #[test]
    fn test_negative_and_extremes() {
        assert!(!is_prime(i32::MIN));
        assert!(!is_prime(-2));
        assert!(!is_prime(-17));
        // 2^31 - 1 is a Mersenne prime
        assert!(is_prime(i32::MAX));
        assert!(!is_prime(i32::MAX - 1));
    }

    #[test]
    fn test_squares_of_primes() {
        assert!(!is_prime(9));
        assert!(!is_prime(25));
        assert!(!is_prime(49));
        assert!(!is_prime(97 * 97));
        // largest prime below sqrt(i32::MAX), squared
        assert!(!is_prime(46_337 * 46_337));
    }
}
