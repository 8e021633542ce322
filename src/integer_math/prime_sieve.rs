// src/integer_math/prime_sieve.rs
//
// Two prime generation strategies:
//   - sieve_upto: bounded Sieve of Eratosthenes over [2, limit)
//   - gen_primes: unbounded incremental sieve, memory proportional to the
//     count of primes discovered so far rather than to the search range

use bitvec::prelude::*;
use log::debug;
use std::collections::HashMap;

/// All primes below `limit`, ascending.
///
/// Classic mark-and-skip: one bit per candidate, each surviving value marks
/// its multiples starting at its square. O(limit log log limit) time,
/// O(limit) memory.
///
/// # Examples
/// ```
/// use ntheory::integer_math::prime_sieve::sieve_upto;
///
/// assert_eq!(sieve_upto(20), vec![2, 3, 5, 7, 11, 13, 17, 19]);
/// assert!(sieve_upto(2).is_empty());
/// ```
pub fn sieve_upto(limit: u64) -> Vec<u64> {
    if limit <= 2 {
        return Vec::new();
    }

    let len = limit as usize;
    let mut composite = bitvec![0; len];
    let mut primes = Vec::new();

    for value in 2..len {
        if composite[value] {
            continue;
        }
        primes.push(value as u64);

        let mut multiple = value * value;
        while multiple < len {
            composite.set(multiple, true);
            multiple += value;
        }
    }

    debug!("sieve_upto({}) found {} primes", limit, primes.len());
    primes
}

/// Unbounded lazy prime sequence.
///
/// Each fresh stream restarts from 2; the sequence is ascending with no
/// duplicates and never ends on its own, so callers bound consumption with
/// `take` or `take_while`.
pub fn gen_primes() -> PrimeStream {
    PrimeStream {
        witnesses: HashMap::new(),
        cursor: 2,
    }
}

/// Iterator state for the incremental sieve: an integer cursor plus a map
/// from each upcoming composite to the primes that divide it.
///
/// A prime is registered at its square when discovered; when the cursor
/// reaches a mapped composite, every witness is advanced to its next
/// multiple and the spent entry is dropped. Each discovered prime owns
/// exactly one live entry, so the map grows with the count of primes found
/// so far, never with the number of candidates examined.
pub struct PrimeStream {
    witnesses: HashMap<u64, Vec<u64>>,
    cursor: u64,
}

impl PrimeStream {
    /// Number of live witness entries, exposed for the memory-bound tests.
    pub fn table_len(&self) -> usize {
        self.witnesses.len()
    }
}

impl Iterator for PrimeStream {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        loop {
            let q = self.cursor;
            self.cursor += 1;

            match self.witnesses.remove(&q) {
                None => {
                    // q is a newly discovered prime; the first composite it
                    // must mark is its own square
                    self.witnesses.insert(q * q, vec![q]);
                    return Some(q);
                }
                Some(primes) => {
                    for p in primes {
                        self.witnesses.entry(p + q).or_default().push(p);
                    }
                }
            }
        }
    }
}
