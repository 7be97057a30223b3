// src/crypto/rng.rs
//! Secure randomness for salts
//!
//! Draws from `rand`'s thread-local CSPRNG (ChaCha seeded from the OS, reseeded periodically).

use rand::RngCore;

use crate::aliases::Salt16;
use crate::consts::DEFAULT_SALT_SIZE;

/// Generate a fresh random 16-byte salt.
#[inline(always)]
pub fn random_salt() -> Salt16 {
    let mut bytes = [0u8; DEFAULT_SALT_SIZE];
    rand::rng().fill_bytes(&mut bytes);
    Salt16::new(bytes)
}
