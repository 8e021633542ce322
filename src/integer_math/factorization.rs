// src/integer_math/factorization.rs
//
// Complete factorization: trial division by the shared small-prime table,
// then Brent's variant of Pollard's rho for whatever survives it.

use log::debug;
use num::{BigInt, Integer, One, Signed, ToPrimitive, Zero};

use crate::core::factor_counts::FactorCounts;
use crate::core::static_random::StaticRandom;
use crate::error::{NtError, Result};
use crate::integer_math::primality;
use crate::integer_math::prime_factory::{self, SMALL_PRIME_LIMIT};

/// Prime factors of `n` with multiplicity; their product equals `n`.
///
/// Small primes are divided out of `n` in ascending order while the
/// candidate's square is at most the remainder, so factors found on this
/// path come out sorted. A remainder still above the table's reach is
/// decomposed through the rho fallback, whose factors arrive in no
/// particular order; use [`prime_factors_sorted`] when ordering matters.
///
/// `prime_factors(1)` is the empty list. Fails for `n < 1`.
///
/// # Examples
/// ```
/// use num::BigInt;
/// use ntheory::integer_math::factorization::prime_factors;
///
/// let factors = prime_factors(&BigInt::from(12)).unwrap();
/// assert_eq!(factors, vec![BigInt::from(2), BigInt::from(2), BigInt::from(3)]);
/// ```
pub fn prime_factors(n: &BigInt) -> Result<Vec<BigInt>> {
    if n < &BigInt::one() {
        return Err(NtError::InvalidArgument(format!(
            "cannot factor {}, argument must be > 0",
            n
        )));
    }

    let mut factors = Vec::new();
    let mut remaining = n.clone();
    if remaining.is_one() {
        return Ok(factors);
    }

    for &p in prime_factory::small_primes() {
        let prime = BigInt::from(p);
        if &prime * &prime > remaining {
            break;
        }
        while remaining.is_multiple_of(&prime) {
            factors.push(prime.clone());
            remaining /= &prime;
        }
    }

    if remaining.is_one() {
        return Ok(factors);
    }

    // Everything at or below the table bound has been divided out. A
    // remainder under the bound's square therefore has no divisor besides
    // itself; anything larger goes to the rho fallback.
    let limit = BigInt::from(SMALL_PRIME_LIMIT);
    if remaining < &limit * &limit {
        factors.push(remaining);
        return Ok(factors);
    }

    debug!("trial division left residue {}, switching to rho", remaining);
    factors.extend(factor_residue(&remaining));
    Ok(factors)
}

/// [`prime_factors`] with the ascending-order guarantee restored.
pub fn prime_factors_sorted(n: &BigInt) -> Result<Vec<BigInt>> {
    let mut factors = prime_factors(n)?;
    factors.sort();
    Ok(factors)
}

/// Factorization of `n` in prime -> exponent form.
pub fn factor_counts(n: &BigInt) -> Result<FactorCounts> {
    Ok(FactorCounts::from_factors(&prime_factors(n)?))
}

/// Work-list decomposition of a residue with no small-prime divisor.
/// Probable-prime values are complete factors; composites are split with
/// [`find_factor`] and both halves go back on the list. A work list rather
/// than recursion, so a long chain of rho splits cannot exhaust the stack.
fn factor_residue(n: &BigInt) -> Vec<BigInt> {
    let mut factors = Vec::new();
    let mut pending = vec![n.clone()];

    while let Some(value) = pending.pop() {
        if primality::is_probable_prime(&value) {
            factors.push(value);
            continue;
        }
        let factor = find_factor(&value);
        let quotient = &value / &factor;
        debug!("rho split {} into {} x {}", value, factor, quotient);
        pending.push(quotient);
        pending.push(factor);
    }

    factors
}

/// One nontrivial factor of a composite `n`, not necessarily prime.
///
/// Even inputs yield 2 immediately. Otherwise runs Brent's cycle-detection
/// variant of Pollard's rho: a pseudo-random sequence y -> y^2 + c (mod n)
/// is walked in doubling windows, a running product of |x - y| values is
/// collected per batch, and the batch gcd against `n` exposes a factor once
/// the sequence cycles modulo one of n's divisors. If the batch gcd
/// collapses to `n` itself, the walk is replayed from the last checkpoint
/// one gcd at a time.
///
/// Termination relies on `n` actually being composite: a prime input loops
/// forever. Callers route primes to the probable-prime leaf test first.
pub fn find_factor(n: &BigInt) -> BigInt {
    if n.is_even() {
        return BigInt::from(2);
    }

    let mut rng = StaticRandom::new();
    loop {
        if let Some(factor) = brent_attempt(n, &mut rng) {
            return factor;
        }
        debug!("degenerate rho cycle on {}, redrawing parameters", n);
    }
}

/// A single Brent run with freshly drawn y, c and batch bound m.
/// Returns None when even the checkpoint replay only finds `n` itself.
fn brent_attempt(n: &BigInt, rng: &mut StaticRandom) -> Option<BigInt> {
    let one = BigInt::one();
    let draw_upper = n - &one;

    let mut y = rng.next_bigint(&one, &draw_upper);
    let c = rng.next_bigint(&one, &draw_upper);
    let m = rng
        .next_bigint(&one, &draw_upper)
        .to_u64()
        .unwrap_or(u64::MAX);

    let mut g = BigInt::one();
    let mut q = BigInt::one();
    let mut r: u64 = 1;
    let mut x = BigInt::zero();
    let mut ys = BigInt::zero();

    while g.is_one() {
        x = y.clone();
        for _ in 0..r {
            y = step(&y, &c, n);
        }

        let mut k: u64 = 0;
        while k < r && g.is_one() {
            ys = y.clone();
            for _ in 0..m.min(r - k) {
                y = step(&y, &c, n);
                q = (&q * (&x - &y).abs()) % n;
            }
            g = q.gcd(n);
            k = k.saturating_add(m);
        }
        r *= 2;
    }

    if &g == n {
        // The batched product swallowed every factor at once; replay from
        // the checkpoint with a gcd per step.
        loop {
            ys = step(&ys, &c, n);
            g = (&x - &ys).abs().gcd(n);
            if !g.is_one() {
                break;
            }
        }
    }

    if &g < n {
        Some(g)
    } else {
        None
    }
}

fn step(y: &BigInt, c: &BigInt, n: &BigInt) -> BigInt {
    (y * y + c) % n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trial_division_path_is_sorted() {
        let factors = prime_factors(&BigInt::from(600)).unwrap();
        let expected: Vec<BigInt> = [2u32, 2, 2, 3, 5, 5].iter().map(|&p| BigInt::from(p)).collect();
        assert_eq!(factors, expected);
    }

    #[test]
    fn test_factor_of_one_is_empty() {
        assert!(prime_factors(&BigInt::one()).unwrap().is_empty());
    }

    #[test]
    fn test_factor_of_zero_is_rejected() {
        assert!(prime_factors(&BigInt::zero()).is_err());
    }

    #[test]
    fn test_factor_of_prime_is_itself() {
        assert_eq!(
            prime_factors(&BigInt::from(97)).unwrap(),
            vec![BigInt::from(97)]
        );
    }

    #[test]
    fn test_find_factor_even() {
        assert_eq!(find_factor(&BigInt::from(1000)), BigInt::from(2));
    }

    #[test]
    fn test_find_factor_semiprime() {
        // 8051 = 83 x 97
        let factor = find_factor(&BigInt::from(8051));
        assert!(factor == BigInt::from(83) || factor == BigInt::from(97));
    }

    #[test]
    fn test_factor_counts_display() {
        let counts = factor_counts(&BigInt::from(600)).unwrap();
        assert_eq!(counts.to_string(), "2^3 * 3 * 5^2");
        assert_eq!(counts.product(), BigInt::from(600));
    }
}
