// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Seeded RSA Key Derivation
//!
//! Deterministically derives an RSA key pair from a caller-supplied byte
//! seed: the same seed, modulus size and public exponent always yield the
//! same `(n, e, d, p, q, dp, dq, qi)`. Intended for reproducible key
//! material, e.g. reconstructing a key from a memorized high-entropy seed.
//!
//! The first 16 seed bytes drive the search for `p`, the next 16 the search
//! for `q`; the two searches share no state and run in parallel. Encoding
//! the resulting big-integer fields (JWK, DER, PEM, ...) is the caller's
//! responsibility.
//!
//! ## Security
//!
//! The seed is the *only* source of randomness: a weak seed means a weak
//! key. The algorithms are timing-variable; no side-channel resistance is
//! provided. Private key material is zeroized on drop via the `zeroize`
//! crate.

mod candidate;
mod derive;
mod error;
mod key;
mod primality;
mod prng;
mod search;
mod util;

pub use derive::*;
pub use error::*;
pub use key::*;
