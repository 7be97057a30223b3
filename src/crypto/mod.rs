// src/crypto/mod.rs

//! Low-level crypto primitives (KDF, salt generation).
//!
//! See crate root for re-exports (e.g. [`Pbkdf2`](crate::Pbkdf2)).
//! HMAC types are defined in `aliases.rs`.

pub mod kdf;
#[cfg(feature = "rand")]
pub mod rng;
