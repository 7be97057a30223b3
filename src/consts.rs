//! # Constants
//!
//! Object identifiers, iteration limits and defaults used by the engine and the builder.

/// PKCS #5 object identifier for PBKDF2 (`id-PBKDF2`).
pub const PBKDF2_OID: &str = "1.2.840.113549.1.5.12";

/// Minimum allowed PBKDF2 iteration count.
///
/// Must be at least `1`. A count of `0` is rejected, never coerced.
pub const PBKDF2_MIN_ITER: u32 = 1;

/// Default PBKDF2 iteration count used by [`Pbkdf2Builder`](crate::Pbkdf2Builder).
///
/// Set to `300_000`, in line with OWASP/NIST 2025+ guidance for HMAC-based PBKDF2.
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 300_000;

/// Default derived key length (32 bytes = 256-bit key).
pub const DEFAULT_PBKDF2_LENGTH: usize = 32;

/// Default salt size (16 bytes).
pub const DEFAULT_SALT_SIZE: usize = 16;

/// Width of the big-endian block index appended to the salt.
pub const BLOCK_INDEX_LEN: usize = 4;

/// Largest number of output blocks a single derivation may produce.
pub const MAX_BLOCKS: u64 = u32::MAX as u64;
