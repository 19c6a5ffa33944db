// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;
use num_traits::{One, Zero};

use crate::prng::Xoshiro128;

/// Assembles a fresh candidate of exactly `bits` bits from the PRNG.
///
/// Words are drawn most-significant first and shifted in. The top two bits
/// are forced to 1 so the product of two candidates never comes up one bit
/// short of the requested modulus size, and the low bit is forced to 1 so
/// the candidate is odd.
///
/// Callers validate `bits >= 96` before any sampling happens. When `bits`
/// is not word-aligned (a modulus of 224 splits into two 112-bit halves),
/// the assembled value is masked down to `bits` bits first; for aligned
/// widths the mask is a no-op and the word stream maps 1:1 onto the value.
pub(crate) fn draw(rng: &mut Xoshiro128, bits: usize) -> BigUint {
    debug_assert!(bits >= 96);

    let words = (bits + 31) / 32;
    let mut value = BigUint::zero();
    for _ in 0..words {
        value = (value << 32usize) | BigUint::from(rng.next_u32());
    }

    if bits % 32 != 0 {
        value &= (BigUint::one() << bits) - BigUint::one();
    }

    value |= BigUint::one() << (bits - 1);
    value |= BigUint::one() << (bits - 2);
    value |= BigUint::one();
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::ToPrimitive;

    fn rng() -> Xoshiro128 {
        Xoshiro128::from_seed(&[0xA5; 16])
    }

    #[test]
    fn exact_bit_length_with_top_pair_set() {
        for bits in [96usize, 128, 256, 1024] {
            let c = draw(&mut rng(), bits);
            assert_eq!(c.bits(), bits);
            // both of the two most significant bits
            assert_eq!((&c >> (bits - 2)).to_u32(), Some(3));
        }
    }

    #[test]
    fn candidate_is_odd() {
        let c = draw(&mut rng(), 256);
        assert!((&c % 2u32).is_one());
    }

    #[test]
    fn unaligned_width_is_masked() {
        let c = draw(&mut rng(), 112);
        assert_eq!(c.bits(), 112);
        assert_eq!((&c >> 110usize).to_u32(), Some(3));
    }

    #[test]
    fn deterministic_for_a_given_seed() {
        let a = draw(&mut rng(), 512);
        let b = draw(&mut rng(), 512);
        assert_eq!(a, b);
    }

    #[test]
    fn word_stream_is_msw_first() {
        // With state (1, 0, 0, 0) the first draws are 5760, 5760, 0, ...;
        // the first word must end up in the most significant position.
        let mut seed = [0u8; 16];
        seed[3] = 1;
        let mut rng = Xoshiro128::from_seed(&seed);

        let c = draw(&mut rng, 96);
        let top_word = (&c >> 64usize).to_u64().unwrap();
        assert_eq!(top_word & 0x3FFF_FFFF, 5760);
    }
}
