// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::mem;

use num_bigint_dig::BigUint;
use num_traits::One;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};
use crate::util;

/// Public half of a derived key pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) n: BigUint,
    pub(crate) e: BigUint,
    pub(crate) bits: usize,
}

impl PublicKey {
    /// Return the modulus `n`.
    #[inline]
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Return the public exponent `e`.
    #[inline]
    pub fn e(&self) -> &BigUint {
        &self.e
    }

    /// Return the modulus bit length.
    #[inline]
    pub fn bits(&self) -> usize {
        self.bits
    }
}

/// Secret key material.
///
/// Holds the private exponent, the prime factors and the CRT parameters.
/// Sensitive fields are zeroized on drop; `num-bigint-dig` implements
/// `Zeroize` for `BigUint`, which wipes the underlying digit vectors.
#[allow(missing_debug_implementations)]
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "expose-secret", derive(Debug))]
pub struct PrivateKey {
    #[zeroize(skip)]
    pub(crate) public_key: PublicKey,

    /// Private exponent, `d = e^-1 mod (p-1)(q-1)`.
    pub(crate) d: BigUint,

    /// Larger prime factor.
    pub(crate) p: BigUint,

    /// Smaller prime factor.
    pub(crate) q: BigUint,

    /// `d mod (p-1)`.
    pub(crate) dp: BigUint,

    /// `d mod (q-1)`.
    pub(crate) dq: BigUint,

    /// `q^-1 mod p`.
    pub(crate) qi: BigUint,
}

impl PrivateKey {
    /// Return a reference to the associated public key.
    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Return the private exponent `d`.
    #[inline]
    pub fn d(&self) -> &BigUint {
        &self.d
    }

    /// Return the larger prime factor `p`.
    #[inline]
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Return the smaller prime factor `q`.
    #[inline]
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// Return the CRT exponent `dp = d mod (p-1)`.
    #[inline]
    pub fn dp(&self) -> &BigUint {
        &self.dp
    }

    /// Return the CRT exponent `dq = d mod (q-1)`.
    #[inline]
    pub fn dq(&self) -> &BigUint {
        &self.dq
    }

    /// Return the CRT coefficient `qi = q^-1 mod p`.
    #[inline]
    pub fn qi(&self) -> &BigUint {
        &self.qi
    }
}

/// A complete key pair consisting of public and private components.
///
/// Secret material is zeroized when dropped.
#[allow(missing_debug_implementations)]
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "expose-secret", derive(Debug))]
pub struct KeyPair {
    #[zeroize(skip)]
    pub(crate) public: PublicKey,
    pub(crate) secret: PrivateKey,
}

impl KeyPair {
    /// Return the public key.
    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Return the private key.
    #[inline]
    pub fn private_key(&self) -> &PrivateKey {
        &self.secret
    }
}

/// Assembles a key pair from two probable primes and the public exponent.
///
/// Verifies the modulus size and coprimality invariants (both are
/// re-assertions: the prime search already guarantees them), canonicalizes
/// `p > q`, then derives `d` and the CRT parameters.
pub(crate) fn assemble(
    mut p: BigUint,
    mut q: BigUint,
    e: BigUint,
    bits: usize,
) -> Result<KeyPair> {
    let n = &p * &q;
    if n.bits() != bits {
        return Err(Error::ModulusLengthMismatch {
            expected: bits,
            actual: n.bits(),
        });
    }

    let phi = (&p - BigUint::one()) * (&q - BigUint::one());
    if !util::gcd(&phi, &e).is_one() {
        return Err(Error::NotCoprime);
    }

    if p == q {
        return Err(Error::DegeneratePrimes);
    }

    // canonical ordering; which search finished first does not matter
    if p < q {
        mem::swap(&mut p, &mut q);
    }

    let d = util::mod_inverse(&e, &phi).ok_or(Error::NotCoprime)?;

    let dp = &d % (&p - BigUint::one());
    let dq = &d % (&q - BigUint::one());
    // q < p and both are prime, so the inverse exists; None here would mean
    // the searches handed us bad primes
    let qi = util::mod_inverse(&q, &p).ok_or(Error::DegeneratePrimes)?;

    let public = PublicKey { n, e, bits };
    let secret = PrivateKey {
        public_key: public.clone(),
        d,
        p,
        q,
        dp,
        dq,
        qi,
    };

    Ok(KeyPair { public, secret })
}
