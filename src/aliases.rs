//! # Secure-Gate Type Aliases
//!
//! This module names the MAC primitives and buffer types used across the crate.
//! Secret-bearing types wrap [`SecretVec`](crate::secret::SecretVec): they zeroize on drop
//! and require an explicit `.expose_secret()` to read.
//!
//! ## Type Categories
//!
//! ### HMAC Primitives
//! - [`HmacSha1`] - HMAC-SHA1, the default PRF (PKCS #5 / RFC 6070 vectors)
//! - [`HmacSha256`] - HMAC-SHA256
//! - [`HmacSha512`] - HMAC-SHA512
//!
//! ### Dynamic Secrets
//! - [`SecretBytes`] - the raw password / secret held by an engine
//! - [`DerivedKey`] - key material returned by a derivation
//!
//! ### Fixed-Size Values
//! - [`Salt16`] - 16-byte salt produced by the random salt generator (public, not wiped)

use hmac::Hmac;
use sha1::Sha1;
use sha2::{Sha256, Sha512};

use crate::secret::SecretVec;

// ─────────────────────────────────────────────────────────────────────────────
// HMAC primitives
// ─────────────────────────────────────────────────────────────────────────────
pub type HmacSha1 = Hmac<Sha1>;
pub type HmacSha256 = Hmac<Sha256>;
pub type HmacSha512 = Hmac<Sha512>;

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
pub type SecretBytes = SecretVec;
pub type DerivedKey = SecretVec;

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size values
// ─────────────────────────────────────────────────────────────────────────────
pub type Salt16 = secure_gate::Fixed<[u8; 16]>;
