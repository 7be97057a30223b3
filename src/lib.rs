// src/lib.rs

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod secret;
pub mod utils;

// High-level API — builder with random salt + strong defaults
pub use builders::pbkdf2_builder::Pbkdf2Builder;
pub use error::KdfError;
pub use secret::SecretVec;

// Engine and parameters — for callers that already hold salt + iteration count
pub use crypto::kdf::params::{BlockConvention, KdfParameters};
pub use crypto::kdf::pbkdf2::{derive_pbkdf2_key, Pbkdf2};

#[cfg(feature = "rand")]
pub use crypto::rng::random_salt;

#[cfg(feature = "batch-ops")]
pub use batch_ops::{derive_batch, derive_keys_batch};

pub use consts::PBKDF2_OID;
