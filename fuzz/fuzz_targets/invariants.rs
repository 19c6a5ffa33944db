#![allow(
    dead_code,
    unused_imports,
    unused_variables,
    clippy::all,
    clippy::no_mangle_with_rust_abi // Fixes a common libfuzzer lint
)]
#![no_main]

use libfuzzer_sys::fuzz_target;

use num_bigint_dig::BigUint;
use num_traits::One;
use tane::generate;

fuzz_target!(|data: &[u8]| {
    let e = BigUint::from(65537u32);

    // Short seeds exercise the validation path.
    if data.len() < 32 {
        assert!(generate(192, data, &e).is_err());
        return;
    }

    // Degenerate halves are rejected (zero half) or produce equal primes
    // (identical halves); both must surface as errors, never hang or panic.
    if data[..16].iter().all(|&b| b == 0)
        || data[16..32].iter().all(|&b| b == 0)
        || data[..16] == data[16..32]
    {
        assert!(generate(192, data, &e).is_err());
        return;
    }

    let pair = generate(192, data, &e).unwrap();
    let public = pair.public_key();
    let secret = pair.private_key();

    assert_eq!(public.n(), &(secret.p() * secret.q()));
    assert_eq!(public.n().bits(), 192);
    assert!(secret.p() > secret.q());

    let phi = (secret.p() - BigUint::one()) * (secret.q() - BigUint::one());
    assert!(((secret.d() * public.e()) % phi).is_one());
    assert!(((secret.q() * secret.qi()) % secret.p()).is_one());
});
