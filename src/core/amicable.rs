//! # Amicable Numbers
//!
//! Divisor enumeration and the amicable-pair predicate.
//!
//! ## Definitions
//!
//! - **Divisor set of n**: every positive d in [1, n] with n mod d == 0.
//!   1 and n are always members for n >= 1.
//! - **Aliquot sum of n**: sum of the divisor set minus n itself.
//! - **Amicable pair**: each number's aliquot sum equals the other.
//!
//! ```text
//! 220 -> divisors: 1, 2, 4, 5, 10, 11, 20, 22, 44, 55, 110 (+ 220)
//!        aliquot sum = 284
//! 284 -> divisors: 1, 2, 4, 71, 142 (+ 284)
//!        aliquot sum = 220
//! => 220 and 284 are amicable.
//! ```
//!
//! Everything here is pure and stateless. Each call is independent and safe
//! to make from any number of threads.

/// All positive divisors of `n`, ascending, including `n` itself.
///
/// Exhaustive scan of 1..=n. O(n), which is fine at the input scales this
/// library targets; callers only ever sum the result.
///
/// `n` must be positive. Callers enforce this before calling (see
/// [`are_amicable`]); `divisors(0)` returns an empty vec rather than
/// panicking, but no consumer relies on that.
pub fn divisors(n: u64) -> Vec<u64> {
    (1..=n).filter(|d| n % d == 0).collect()
}

/// Sum of the divisors of `n` excluding `n` itself.
pub fn aliquot_sum(n: u64) -> u64 {
    divisors(n).iter().sum::<u64>() - n
}

/// Whether `a` and `b` form an amicable pair.
///
/// Non-positive inputs are not an error: the function simply returns `false`
/// without computing any divisors.
///
/// `a == b` is permitted and returns `true` exactly when the number is
/// perfect (equal to its own aliquot sum) -- a direct consequence of the
/// formula, not a special case.
pub fn are_amicable(a: i64, b: i64) -> bool {
    if a <= 0 || b <= 0 {
        return false;
    }

    let (a, b) = (a as u64, b as u64);
    aliquot_sum(a) == b && aliquot_sum(b) == a
}

/// Whether `n` equals its own aliquot sum.
pub fn is_perfect(n: u64) -> bool {
    n > 0 && aliquot_sum(n) == n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divisors_of_one() {
        assert_eq!(divisors(1), vec![1]);
    }

    #[test]
    fn test_divisors_of_28() {
        assert_eq!(divisors(28), vec![1, 2, 4, 7, 14, 28]);
    }

    #[test]
    fn test_divisors_of_prime() {
        assert_eq!(divisors(13), vec![1, 13]);
    }

    #[test]
    fn test_divisors_deterministic() {
        // Re-running yields the same set, same order
        assert_eq!(divisors(220), divisors(220));
    }

    #[test]
    fn test_aliquot_sum_220() {
        // 1+2+4+5+10+11+20+22+44+55+110 = 284
        assert_eq!(aliquot_sum(220), 284);
    }

    #[test]
    fn test_28_is_perfect() {
        assert_eq!(aliquot_sum(28), 28);
        assert!(is_perfect(28));
    }

    #[test]
    fn test_amicable_220_284() {
        assert!(are_amicable(220, 284));
    }

    #[test]
    fn test_amicable_is_symmetric() {
        assert!(are_amicable(284, 220));
    }

    #[test]
    fn test_amicable_larger_pair() {
        assert!(are_amicable(17296, 18416));
    }

    #[test]
    fn test_not_amicable() {
        assert!(!are_amicable(15, 75));
        assert!(!are_amicable(220, 285));
    }

    #[test]
    fn test_non_positive_guard() {
        assert!(!are_amicable(0, 5));
        assert!(!are_amicable(-3, 5));
        assert!(!are_amicable(5, 0));
        assert!(!are_amicable(-1, -1));
    }

    #[test]
    fn test_perfect_number_self_pair() {
        // 6 = 1+2+3, so (6, 6) satisfies the formula
        assert!(are_amicable(6, 6));
        assert!(!are_amicable(7, 7));
    }
}
