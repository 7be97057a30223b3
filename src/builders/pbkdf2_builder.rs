//! src/builders/pbkdf2_builder.rs
//! PBKDF2 builder — strong defaults, validation deferred to `build`

use core::fmt;
use core::marker::PhantomData;

use hmac::digest::KeyInit;
use hmac::Mac;

use crate::aliases::{DerivedKey, HmacSha1};
use crate::consts::DEFAULT_PBKDF2_ITERATIONS;
use crate::crypto::kdf::params::{BlockConvention, KdfParameters};
use crate::crypto::kdf::pbkdf2::Pbkdf2;
use crate::error::KdfError;

/// PBKDF2 key derivation builder
///
/// Defaults: [`DEFAULT_PBKDF2_ITERATIONS`] iterations, RFC 8018 block numbering
/// and, with the `rand` feature, a fresh random 16-byte salt.
///
/// # Thread Safety
///
/// This type is **thread-safe** (`Send + Sync`). All operations are pure.
#[derive(Clone)]
pub struct Pbkdf2Builder<M = HmacSha1> {
    iterations: u32,
    salt: Option<Vec<u8>>,
    convention: BlockConvention,
    _prf: PhantomData<fn() -> M>,
}

impl<M> Pbkdf2Builder<M>
where
    M: Mac + KeyInit + Clone,
{
    /// Create builder with strong defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            iterations: DEFAULT_PBKDF2_ITERATIONS,
            salt: default_salt(),
            convention: BlockConvention::default(),
            _prf: PhantomData,
        }
    }

    /// Set iteration count. `0` is kept as given and rejected by [`build`](Self::build).
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set custom salt — accepts `[u8; N]`, `Vec<u8>`, `&[u8]`, etc.
    #[must_use]
    pub fn with_salt(mut self, salt: impl AsRef<[u8]>) -> Self {
        self.salt = Some(salt.as_ref().to_vec());
        self
    }

    /// Set the block numbering convention (default [`BlockConvention::Rfc8018`]).
    #[must_use]
    pub fn with_convention(mut self, convention: BlockConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Current salt (for storing next to the derived key), if one is set.
    #[must_use]
    pub fn salt(&self) -> Option<&[u8]> {
        self.salt.as_deref()
    }

    /// Current iteration count
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Validate the configuration and bind it to `secret`.
    pub fn build(self, secret: &[u8]) -> Result<Pbkdf2<M>, KdfError> {
        let salt = self
            .salt
            .ok_or_else(|| KdfError::InvalidParameters("salt not set".into()))?;
        let params = KdfParameters::new(salt, self.iterations)?;
        Ok(Pbkdf2::from_params(secret, params)?.with_convention(self.convention))
    }

    /// Derive key directly into caller-provided buffer — **preferred**
    #[inline(always)]
    pub fn derive_secure(self, secret: &[u8], out_key: &mut [u8]) -> Result<(), KdfError> {
        self.build(secret)?.derive_into(out_key)
    }

    /// Convenience: derive and return a fresh secure key
    #[inline(always)]
    pub fn derive_secure_new(self, secret: &[u8], length: usize) -> Result<DerivedKey, KdfError> {
        self.build(secret)?.derive(length)
    }
}

impl<M> Default for Pbkdf2Builder<M>
where
    M: Mac + KeyInit + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<M> fmt::Debug for Pbkdf2Builder<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pbkdf2Builder")
            .field("iterations", &self.iterations)
            .field("salt", &self.salt)
            .field("convention", &self.convention)
            .finish()
    }
}

#[cfg(feature = "rand")]
fn default_salt() -> Option<Vec<u8>> {
    use secure_gate::RevealSecret;
    Some(crate::crypto::rng::random_salt().expose_secret().to_vec())
}

#[cfg(not(feature = "rand"))]
fn default_salt() -> Option<Vec<u8>> {
    None
}
