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
use tane::generate;

fuzz_target!(|data: &[u8]| {
    if data.len() < 32
        || data[..16].iter().all(|&b| b == 0)
        || data[16..32].iter().all(|&b| b == 0)
        || data[..16] == data[16..32]
    {
        return;
    }

    let e = BigUint::from(65537u32);
    let first = generate(192, data, &e).unwrap();
    let second = generate(192, data, &e).unwrap();

    assert_eq!(first.public_key().n(), second.public_key().n());
    assert_eq!(first.private_key().d(), second.private_key().d());
    assert_eq!(first.private_key().p(), second.private_key().p());
    assert_eq!(first.private_key().q(), second.private_key().q());
});
