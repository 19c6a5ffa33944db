// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Errors that can occur during key derivation.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid modulus size: must be a multiple of 32 and at least {min} bits, got {actual}")]
    InvalidBits { min: usize, actual: usize },

    #[error("seed must hold at least {min} bytes with entropy in each 16-byte half, got {actual}")]
    InvalidSeed { min: usize, actual: usize },

    #[error("public exponent must be odd, at least 3, and coprime with phi(n)")]
    NotCoprime,

    #[error("modulus has {actual} bits, expected {expected}")]
    ModulusLengthMismatch { expected: usize, actual: usize },

    #[error("prime searches returned identical primes")]
    DegeneratePrimes,
}

pub type Result<T> = std::result::Result<T, Error>;
