// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;
use num_traits::Zero;

use crate::error::{Error, Result};
use crate::key::{self, KeyPair};
use crate::search;

/// Smallest accepted modulus size. Each prime search needs at least 96 bits
/// to work with, so the modulus must provide two such halves.
pub const MIN_MODULUS_BITS: usize = 192;

/// Number of seed bytes consumed. Longer seeds are accepted; the tail is
/// ignored.
pub const SEED_BYTES: usize = 32;

/// Default public exponent, F4.
pub const DEFAULT_EXPONENT: u32 = 65537;

const DEFAULT_BITS: usize = 2048;

/// Minimum recommended for production (NIST/ENISA standard)
const MIN_SECURE_BITS: usize = 2048;

/// Deterministically derives an RSA key pair from `seed`.
///
/// The first 16 seed bytes drive the search for `p`, the next 16 the search
/// for `q`. Both searches run in parallel; because they are seeded from
/// disjoint bytes and share no state, a sequential run produces the
/// identical key. Repeated calls with the same `(bits, seed, exponent)`
/// return byte-identical key material.
///
/// ## Errors
///
/// - [`Error::InvalidBits`] if `bits` is not a multiple of 32 or is below
///   [`MIN_MODULUS_BITS`].
/// - [`Error::InvalidSeed`] if `seed` holds fewer than [`SEED_BYTES`]
///   bytes, or if either 16-byte half is entirely zero. The all-zero state
///   is a fixed point of xoshiro128**, so a zero half would pin the search
///   on a handful of candidates forever.
/// - [`Error::NotCoprime`] if `exponent` is even or below 3. An even
///   exponent always shares the factor 2 with `phi(n)`, and the search
///   filters candidates against the exponent, so this is caught up front
///   rather than looping forever.
/// - [`Error::DegeneratePrimes`] if both halves select the same prime,
///   which is guaranteed when the two halves hold identical bytes.
pub fn generate(bits: usize, seed: &[u8], exponent: &BigUint) -> Result<KeyPair> {
    if bits % 32 != 0 || bits < MIN_MODULUS_BITS {
        return Err(Error::InvalidBits {
            min: MIN_MODULUS_BITS,
            actual: bits,
        });
    }
    if seed.len() < SEED_BYTES
        || seed[..16].iter().all(|&b| b == 0)
        || seed[16..32].iter().all(|&b| b == 0)
    {
        return Err(Error::InvalidSeed {
            min: SEED_BYTES,
            actual: seed.len(),
        });
    }
    if (exponent % 2u32).is_zero() || exponent < &BigUint::from(3u32) {
        return Err(Error::NotCoprime);
    }

    let p_bits = bits / 2;
    let q_bits = bits - p_bits;

    // two CPU-bound tasks, joined; no shared mutable state
    let (p, q) = rayon::join(
        || search::find_prime(p_bits, &seed[..16], exponent),
        || search::find_prime(q_bits, &seed[16..32], exponent),
    );

    key::assemble(p, q, exponent.clone(), bits)
}

impl KeyPair {
    /// Derive a key pair from `seed` with default parameters (2048-bit
    /// modulus, exponent 65537).
    pub fn derive(seed: &[u8]) -> Result<Self> {
        KeyPairBuilder::new().derive(seed)
    }

    /// Derive a key pair from `seed` with a custom modulus size.
    pub fn derive_with_size(bits: usize, seed: &[u8]) -> Result<Self> {
        KeyPairBuilder::new().bits(bits).derive(seed)
    }
}

/// Builder for deriving key pairs with configurable parameters.
#[derive(Debug, Clone)]
pub struct KeyPairBuilder {
    bits: usize,
    exponent: BigUint,
}

impl KeyPairBuilder {
    /// Create a builder with default parameters.
    pub fn new() -> Self {
        Self {
            bits: DEFAULT_BITS,
            exponent: BigUint::from(DEFAULT_EXPONENT),
        }
    }

    /// Set the desired modulus bit length.
    pub fn bits(mut self, bits: usize) -> Self {
        self.bits = bits;
        self
    }

    /// Set the public exponent.
    pub fn exponent(mut self, exponent: BigUint) -> Self {
        self.exponent = exponent;
        self
    }

    /// Derive the key pair from `seed`.
    pub fn derive(self, seed: &[u8]) -> Result<KeyPair> {
        // Loud warning for weak keys
        if self.bits < MIN_SECURE_BITS {
            eprintln!(
                "⚠️  SECURITY WARNING: {}-bit key is cryptographically weak!",
                self.bits
            );
            eprintln!("⚠️  Use {} bits minimum for production", MIN_SECURE_BITS);
        }

        generate(self.bits, seed, &self.exponent)
    }
}

impl Default for KeyPairBuilder {
    fn default() -> Self {
        Self::new()
    }
}
