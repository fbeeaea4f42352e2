//! Random version-4 identifiers.
//!
//! The default generator is `SmallRng`: fast, but predictable to anyone who
//! observes enough output. Do not use these ids as tokens, secrets or
//! anything an attacker should not be able to guess.

use std::cell::RefCell;

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use uuid::{Builder, Uuid};

thread_local! {
    static RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_os_rng());
}

/// Generate a lowercase hyphenated id such as `1b4e28ba-2fa1-41d2-883f-0016d3cca427`.
///
/// The version nibble is always `4` and the variant nibble is one of
/// `8`, `9`, `a`, `b`. Not suitable for security-sensitive identifiers.
pub fn generate_uuid() -> String {
    RNG.with(|rng| generate_uuid_with(&mut *rng.borrow_mut()))
        .hyphenated()
        .to_string()
}

/// Build an id from the given random source.
pub fn generate_uuid_with<R: RngCore + ?Sized>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    Builder::from_random_bytes(bytes).into_uuid()
}
