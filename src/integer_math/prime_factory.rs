// src/integer_math/prime_factory.rs

use lazy_static::lazy_static;
use num::{BigInt, Integer};

use crate::integer_math::primality;
use crate::integer_math::prime_sieve;

/// Upper bound of the shared small-prime table. Values below this are
/// answered exactly; trial division draws its divisors from the same table.
pub const SMALL_PRIME_LIMIT: u64 = 100_000;

lazy_static! {
    static ref SMALL_PRIMES: Vec<u64> = prime_sieve::sieve_upto(SMALL_PRIME_LIMIT);
}

/// The process-wide table of primes below [`SMALL_PRIME_LIMIT`], built once
/// on first use and read-only thereafter.
pub fn small_primes() -> &'static [u64] {
    &SMALL_PRIMES
}

/// Exact membership test against the shared table. Only meaningful for
/// values below [`SMALL_PRIME_LIMIT`].
pub fn is_small_prime(value: u64) -> bool {
    SMALL_PRIMES.binary_search(&value).is_ok()
}

/// Smallest probable prime strictly greater than `from_value`.
pub fn next_prime(from_value: &BigInt) -> BigInt {
    let mut result: BigInt = from_value + 1;
    if result <= BigInt::from(2) {
        return BigInt::from(2);
    }
    if result.is_even() {
        result += 1;
    }
    while !primality::is_probable_prime(&result) {
        result += 2;
    }
    result
}

/// Successive probable primes strictly greater than `start`, produced by
/// the next-prime walk. Unbounded; callers limit consumption.
pub fn primes_from(start: &BigInt) -> impl Iterator<Item = BigInt> {
    let mut current = start.clone();
    std::iter::from_fn(move || {
        current = next_prime(&current);
        Some(current.clone())
    })
}
