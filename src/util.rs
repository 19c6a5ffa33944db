// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;
use num_traits::{One, Zero};

/// Greatest common divisor by Euclid's algorithm.
pub(crate) fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Computes `x^-1 mod m`, or `None` when `gcd(x, m) != 1`.
///
/// Iterative extended Euclidean variant that tracks only the Bezout
/// coefficient of `x` and stays within nonnegative integers: instead of a
/// signed coefficient it carries a parity flag, and folds the sign in at
/// the end as `m - u1`.
pub(crate) fn mod_inverse(x: &BigUint, m: &BigUint) -> Option<BigUint> {
    let mut u1 = BigUint::one();
    let mut u3 = x.clone();
    let mut v1 = BigUint::zero();
    let mut v3 = m.clone();
    let mut positive = true;

    while !v3.is_zero() {
        let q = &u3 / &v3;
        let t1 = &u1 + &q * &v1;
        let t3 = &u3 % &v3;
        u1 = v1;
        u3 = v3;
        v1 = t1;
        v3 = t3;
        positive = !positive;
    }

    if !u3.is_one() {
        return None;
    }

    Some(if positive { u1 } else { m - u1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(&big(12), &big(18)), big(6));
        assert_eq!(gcd(&big(17), &big(31)), big(1));
        assert_eq!(gcd(&big(0), &big(5)), big(5));
        assert_eq!(gcd(&big(5), &big(0)), big(5));
    }

    #[test]
    fn inverse_known_answers() {
        assert_eq!(mod_inverse(&big(3), &big(7)), Some(big(5)));
        assert_eq!(mod_inverse(&big(1), &big(97)), Some(big(1)));
        assert_eq!(mod_inverse(&big(10), &big(17)), Some(big(12)));
    }

    #[test]
    fn inverse_round_trips() {
        let m = big(1_000_000_007);
        for x in [2u64, 3, 65537, 999_999_999] {
            let inv = mod_inverse(&big(x), &m).unwrap();
            assert!((big(x) * inv) % &m == BigUint::one());
        }
    }

    #[test]
    fn non_coprime_inputs_have_no_inverse() {
        assert_eq!(mod_inverse(&big(6), &big(9)), None);
        assert_eq!(mod_inverse(&big(2), &big(4)), None);
    }

    #[test]
    fn inverse_lies_below_the_modulus() {
        let m = big(65537);
        for x in 2u64..200 {
            if let Some(inv) = mod_inverse(&big(x), &m) {
                assert!(inv < m);
                assert!(!inv.is_zero());
            }
        }
    }
}
