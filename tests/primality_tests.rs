// tests/primality_tests.rs

use num::BigInt;
use ntheory::integer_math::primality::{is_prime, is_probable_prime, DEFAULT_PRECISION};
use ntheory::integer_math::prime_factory;

#[test]
fn test_is_prime_rejects_nonpositive() {
    assert!(is_prime(&BigInt::from(0), DEFAULT_PRECISION).is_err());
    assert!(is_prime(&BigInt::from(-7), DEFAULT_PRECISION).is_err());
}

#[test]
fn test_known_verdicts() {
    assert!(is_prime(&BigInt::from(97), DEFAULT_PRECISION).unwrap());
    assert!(!is_prime(&BigInt::from(100), DEFAULT_PRECISION).unwrap());
}

#[test]
fn test_agrees_with_naive_division_below_cache() {
    // Exhaustive cross-check over a slice of the cached range: is_prime is
    // an exact table lookup here, so there must be zero disagreements.
    for n in 1u64..2000 {
        let naive = n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0);
        let verdict = is_prime(&BigInt::from(n), DEFAULT_PRECISION).unwrap();
        assert_eq!(verdict, naive, "disagreement at {}", n);
    }
}

#[test]
fn test_cache_boundary_handoff() {
    // 99991 is the largest prime below the table bound; 100003 is the first
    // prime above it and is answered by Miller-Rabin.
    assert!(is_prime(&BigInt::from(99_991), DEFAULT_PRECISION).unwrap());
    assert!(is_prime(&BigInt::from(100_003), DEFAULT_PRECISION).unwrap());
    assert!(!is_prime(&BigInt::from(100_000), DEFAULT_PRECISION).unwrap());
    assert!(!is_prime(&BigInt::from(100_001), DEFAULT_PRECISION).unwrap());
}

#[test]
fn test_large_primes_and_composites() {
    assert!(is_prime(&BigInt::from(1_000_000_007u64), DEFAULT_PRECISION).unwrap());
    assert!(is_prime(&BigInt::from(2_305_843_009_213_693_951u64), DEFAULT_PRECISION).unwrap());

    // 1000730021 = 31193 x 32069
    assert!(!is_prime(&BigInt::from(1_000_730_021u64), DEFAULT_PRECISION).unwrap());
    // square of a prime above the cache bound
    let square = BigInt::from(100_003u64) * BigInt::from(100_003u64);
    assert!(!is_prime(&square, DEFAULT_PRECISION).unwrap());
}

#[test]
fn test_precision_one_still_rejects_obvious_composites() {
    // Even a single round never misclassifies an even number or a number
    // with a tiny factor hit by the witness arithmetic.
    assert!(!is_prime(&BigInt::from(100_000_002u64), 1).unwrap());
}

#[test]
fn test_probable_prime_matches_randomized_test() {
    for n in [99_991u64, 100_003, 6857, 1_000_000_007] {
        let n = BigInt::from(n);
        assert!(is_probable_prime(&n));
        assert!(is_prime(&n, DEFAULT_PRECISION).unwrap());
    }
    for n in [8051u64, 100_001, 561, 1_000_730_021] {
        let n = BigInt::from(n);
        assert!(!is_probable_prime(&n));
        assert!(!is_prime(&n, DEFAULT_PRECISION).unwrap());
    }
}

#[test]
fn test_next_prime_crosses_cache_boundary() {
    assert_eq!(
        prime_factory::next_prime(&BigInt::from(99_991)),
        BigInt::from(100_003)
    );
}
