// src/core/static_random.rs

use num::bigint::Sign;
use num::BigInt;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8-backed randomness source for the probabilistic algorithms.
/// Miller-Rabin draws witness bases from it; Pollard's rho draws its
/// starting value and polynomial constant.
pub struct StaticRandom {
    rng: ChaCha8Rng,
}

impl StaticRandom {
    pub fn new() -> Self {
        StaticRandom {
            rng: ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }

    /// Fixed-seed source, for reproducible runs.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        StaticRandom {
            rng: ChaCha8Rng::from_seed(seed),
        }
    }

    pub fn next_u64_range(&mut self, min_value: u64, max_value: u64) -> u64 {
        self.rng.random_range(min_value..max_value)
    }

    pub fn next_bytes(&mut self, bytes: &mut [u8]) {
        self.rng.fill_bytes(bytes);
    }

    /// Uniform draw from the inclusive range [lower, upper].
    ///
    /// Draws an offset below the range's span: random bytes are masked down
    /// to the span's bit length, so a draw lands inside the span with
    /// probability > 1/2 and the expected number of rejections is below one.
    pub fn next_bigint(&mut self, lower: &BigInt, upper: &BigInt) -> BigInt {
        if lower > upper {
            panic!("empty draw range [{}, {}]", lower, upper);
        }

        // count of values in the range; always >= 1
        let span: BigInt = upper - lower + 1;
        let bits = span.bits();
        let width = ((bits + 7) / 8) as usize;
        let slack = (width as u64 * 8 - bits) as u32;
        let mut buffer = vec![0u8; width];

        loop {
            self.next_bytes(&mut buffer);
            // clear the slack bits so the draw stays below 2^bits
            buffer[0] &= 0xffu8 >> slack;
            let offset = BigInt::from_bytes_be(Sign::Plus, &buffer);
            if offset < span {
                return lower + offset;
            }
        }
    }
}
