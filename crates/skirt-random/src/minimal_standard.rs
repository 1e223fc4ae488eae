//! Park & Miller "minimal standard" generator.
//!
//! Prime modulus multiplicative linear congruential generator (Lehmer) with
//! multiplier 16807 and modulus 2^31 - 1, from "Random Number Generators: Good
//! Ones are Hard to Find", CACM 31(10), 1988. The integer update uses Schrage's
//! factorisation so it never overflows 32 bits.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::RandomSequence;

const MULTIPLIER: i32 = 16807;
const MODULUS: i32 = 2_147_483_647;
/// `MODULUS / MULTIPLIER`
const QUOTIENT: i32 = 127_773;
/// `MODULUS % MULTIPLIER`
const REMAINDER: i32 = 2836;

/// Largest valid seed, 2^31 - 2.
pub const MAX_SEED: i32 = MODULUS - 1;

/// Loaded seeds are normalised like [`set_seed_only`](Self::set_seed_only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSeed")]
pub struct MinimalStandardRandomSequence {
    seed: i32,
}

#[derive(Deserialize)]
struct RawSeed {
    seed: i32,
}

impl From<RawSeed> for MinimalStandardRandomSequence {
    fn from(raw: RawSeed) -> Self {
        Self {
            seed: normalize_seed(raw.seed),
        }
    }
}

impl MinimalStandardRandomSequence {
    pub fn new() -> Self {
        Self { seed: 1 }
    }

    /// Sequence seeded with [`set_seed`](Self::set_seed).
    pub fn with_seed(value: i32) -> Self {
        let mut rng = Self::new();
        rng.set_seed(value);
        rng
    }

    /// Normalise `value` into `[1, MAX_SEED]` and advance three times, so the
    /// first value is not proportional to the seed.
    pub fn set_seed(&mut self, value: i32) {
        self.set_seed_only(value);
        for _ in 0..3 {
            RandomSequence::next(self);
        }
    }

    /// Normalise `value` into `[1, MAX_SEED]` without advancing.
    ///
    /// Non-positive values get `MAX_SEED` added, `2^31 - 1` becomes 1.
    pub fn set_seed_only(&mut self, value: i32) {
        self.seed = normalize_seed(value);
    }

    pub fn seed(&self) -> i32 {
        self.seed
    }
}

fn normalize_seed(value: i32) -> i32 {
    let max = i64::from(MAX_SEED);
    let mut seed = i64::from(value);
    if seed < 1 {
        seed += max;
    }
    if seed == i64::from(MODULUS) {
        seed = 1;
    }
    if seed < 1 {
        // Only values below -2^31 + 2 get here.
        seed = seed.rem_euclid(max);
        if seed == 0 {
            seed = max;
        }
    }
    seed as i32
}

impl RandomSequence for MinimalStandardRandomSequence {
    fn value(&self) -> f64 {
        f64::from(self.seed) / f64::from(MODULUS)
    }

    fn next(&mut self) {
        let hi = self.seed / QUOTIENT;
        let lo = self.seed % QUOTIENT;
        let mut seed = MULTIPLIER * lo - REMAINDER * hi;
        if seed <= 0 {
            seed += MODULUS;
        }
        self.seed = seed;
    }
}

impl Default for MinimalStandardRandomSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MinimalStandardRandomSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MinimalStandardRandomSequence (seed: {})", self.seed)
    }
}
