//! # Key Derivation Functions (KDF)
//!
//! Password-based key derivation built on a keyed pseudorandom function.
//!
//! ## Modules
//!
//! - [`params`] - salt, iteration count and block numbering convention
//! - [`pbkdf2`] - the PBKDF2 engine and its block function
//!
//! ## Usage
//!
//! Most callers want [`Pbkdf2Builder`](crate::Pbkdf2Builder), which supplies a
//! random salt and a strong default iteration count. The engine is exposed for
//! callers that already hold their parameters (e.g. parsed from a stored header).

pub mod params;
pub mod pbkdf2;
