//! Prime helpers used to size the table and bound the probe stride

/// Floor for every value returned by [`next_prime`].
///
/// Keeping capacities at 3 or above guarantees that the probe bound derived from
/// `capacity / 2` is itself at least 3, so the stride can take more than one value.
pub const MIN_PRIME: usize = 3;

/// Largest prime representable as a `usize`
#[cfg(target_pointer_width = "64")]
pub const MAX_PRIME: usize = 18_446_744_073_709_551_557;
/// Largest prime representable as a `usize`
#[cfg(target_pointer_width = "32")]
pub const MAX_PRIME: usize = 4_294_967_291;
/// Largest prime representable as a `usize`
#[cfg(target_pointer_width = "16")]
pub const MAX_PRIME: usize = 65_521;

/// Returns the smallest odd prime that is greater than or equal to `start`.
///
/// Even inputs are bumped to the next odd candidate before testing, and the result is
/// never below [`MIN_PRIME`]. Inputs above [`MAX_PRIME`] return [`MAX_PRIME`].
#[must_use]
pub fn next_prime(start: usize) -> usize {
    checked_next_prime(start).unwrap_or(MAX_PRIME)
}

/// Returns the smallest odd prime that is greater than or equal to `start`, or `None`
/// if no such prime fits in a `usize`.
#[must_use]
pub fn checked_next_prime(start: usize) -> Option<usize> {
    let candidate = if start & 1 == 0 { start.checked_add(1)? } else { start };
    let mut candidate = candidate.max(MIN_PRIME);

    while !is_prime(candidate) {
        candidate = candidate.checked_add(2)?;
    }
    Some(candidate)
}

/// Returns true if `n` is prime, by trial division with odd divisors up to `sqrt(n)`.
#[must_use]
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n & 1 == 0 {
        return n == 2;
    }

    let mut divisor: usize = 3;
    while divisor.checked_mul(divisor).is_some_and(|square| square <= n) {
        if n.checked_rem(divisor) == Some(0) {
            return false;
        }
        divisor = divisor.saturating_add(2);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime_small_values() {
        let primes: Vec<usize> = (0..40).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37]);
    }

    #[test]
    fn test_is_prime_squares_of_primes() {
        assert!(!is_prime(9));
        assert!(!is_prime(25));
        assert!(!is_prime(49));
        assert!(!is_prime(10_201)); // 101 * 101
        assert!(is_prime(10_007));
    }

    #[test]
    fn test_next_prime_keeps_primes() {
        assert_eq!(next_prime(5), 5);
        assert_eq!(next_prime(13), 13);
        assert_eq!(next_prime(97), 97);
    }

    #[test]
    fn test_next_prime_bumps_even_and_composite() {
        assert_eq!(next_prime(8), 11);
        assert_eq!(next_prime(9), 11);
        assert_eq!(next_prime(14), 17);
        assert_eq!(next_prime(100), 101);
        assert_eq!(next_prime(114), 127);
    }

    #[test]
    fn test_next_prime_floor() {
        assert_eq!(next_prime(0), MIN_PRIME);
        assert_eq!(next_prime(1), MIN_PRIME);
        assert_eq!(next_prime(2), MIN_PRIME);
        assert_eq!(next_prime(3), 3);
    }

    #[test]
    fn test_next_prime_stops_at_the_end_of_the_range() {
        assert_eq!(checked_next_prime(usize::MAX), None);
        assert_eq!(checked_next_prime(usize::MAX.saturating_sub(1)), None);
        assert_eq!(next_prime(usize::MAX), MAX_PRIME);
        assert_eq!(checked_next_prime(100), Some(101));
    }
}
