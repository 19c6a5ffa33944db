// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;
use num_traits::One;

use crate::candidate;
use crate::primality;
use crate::prng::Xoshiro128;

/// Deterministically finds a probable prime of exactly `bits` bits from a
/// 16-byte seed half.
///
/// The search draws one initial candidate and then, on every rejection,
/// toggles a single PRNG-chosen interior bit instead of resampling. The
/// toggled position is `(word mod (bits - 3)) + 1`, which can never touch
/// the forced top bit pair or the low bit. Rerolling this way keeps the
/// expensive high bits, advances the PRNG deterministically, and converges
/// in O(bits) iterations in practice.
///
/// The loop is unbounded; for `bits >= 96` non-termination has negligible
/// probability, so no retry cap is imposed. The seed half must not be all
/// zeros (the PRNG's zero state is absorbing); the driver validates this
/// before searching.
pub(crate) fn find_prime(bits: usize, seed: &[u8], e: &BigUint) -> BigUint {
    let mut rng = Xoshiro128::from_seed(seed);
    let mut candidate = candidate::draw(&mut rng, bits);

    loop {
        if primality::is_probable_prime(&candidate, bits, e, &mut rng) {
            return candidate;
        }

        let word = rng.next_u32();
        let shift = (word as usize % (bits - 3)) + 1;
        candidate ^= BigUint::one() << shift;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint_dig::prime::probably_prime;
    use num_traits::ToPrimitive;

    fn e() -> BigUint {
        BigUint::from(65537u32)
    }

    #[test]
    fn finds_a_probable_prime() {
        let seed = [0x11u8; 16];
        let p = find_prime(96, &seed, &e());

        assert_eq!(p.bits(), 96);
        assert!((&p % 2u32).is_one());
        assert!(probably_prime(&p, 64));
    }

    #[test]
    fn result_is_coprime_with_exponent() {
        let seed: Vec<u8> = (0u8..16).collect();
        let p = find_prime(128, &seed, &e());
        assert!(crate::util::gcd(&(&p - BigUint::one()), &e()).is_one());
    }

    #[test]
    fn same_seed_same_prime() {
        let seed = [0xE7u8; 16];
        assert_eq!(find_prime(128, &seed, &e()), find_prime(128, &seed, &e()));
    }

    #[test]
    fn different_seeds_different_primes() {
        let a = find_prime(96, &[0x01u8; 16], &e());
        let b = find_prime(96, &[0x02u8; 16], &e());
        assert_ne!(a, b);
    }

    #[test]
    fn rerolls_preserve_the_forced_bits() {
        // every returned prime keeps the top bit pair regardless of how many
        // rerolls the seed forced
        for byte in 1u8..16 {
            let p = find_prime(96, &[byte; 16], &e());
            assert_eq!((&p >> 94usize).to_u32(), Some(3));
            assert!((&p % 2u32).is_one());
        }
    }
}
