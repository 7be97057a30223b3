//! src/crypto/kdf/pbkdf2.rs
//! PBKDF2 engine over any RustCrypto MAC — owned PRF per call, zeroized buffers

use core::fmt;
use core::marker::PhantomData;

use hmac::digest::{KeyInit, OutputSizeUser};
use hmac::Mac;
use zeroize::{Zeroize, Zeroizing};

use crate::aliases::{DerivedKey, HmacSha1, SecretBytes};
use crate::consts::MAX_BLOCKS;
use crate::crypto::kdf::params::{BlockConvention, KdfParameters};
use crate::utils::{block_index_bytes, blocks_for, xor_into};
use crate::KdfError;

/// PBKDF2 key derivation engine bound to one secret.
///
/// Built once through [`initialize`](Self::initialize) or
/// [`from_params`](Self::from_params); immutable afterwards. Every call to
/// [`derive`](Self::derive) keys its own MAC instance from the stored secret,
/// so one engine can serve any number of derivations, including concurrent ones.
///
/// # Thread Safety
///
/// `Pbkdf2<M>` is `Send + Sync`: it holds no MAC state between calls.
pub struct Pbkdf2<M = HmacSha1> {
    secret: SecretBytes,
    params: KdfParameters,
    convention: BlockConvention,
    _prf: PhantomData<fn() -> M>,
}

impl<M> Pbkdf2<M>
where
    M: Mac + KeyInit + Clone,
{
    /// Validate `secret`, `salt` and `iteration_count` and bind them to a new engine.
    ///
    /// The secret is checked first: an empty secret fails with
    /// [`KdfError::InvalidSecret`] even when the parameters are also invalid.
    pub fn initialize(secret: &[u8], salt: &[u8], iteration_count: u32) -> Result<Self, KdfError> {
        check_secret::<M>(secret)?;
        let params = KdfParameters::new(salt, iteration_count)?;
        Ok(Self::bind(secret, params))
    }

    /// Bind already-validated parameters to `secret`.
    pub fn from_params(secret: &[u8], params: KdfParameters) -> Result<Self, KdfError> {
        check_secret::<M>(secret)?;
        Ok(Self::bind(secret, params))
    }

    fn bind(secret: &[u8], params: KdfParameters) -> Self {
        let engine = Self {
            secret: SecretBytes::new(secret.to_vec()),
            params,
            convention: BlockConvention::default(),
            _prf: PhantomData,
        };

        tracing::debug!(
            salt_len = engine.params.salt().len(),
            iterations = engine.params.iteration_count(),
            mac_len = Self::mac_output_len(),
            "PBKDF2 engine initialized"
        );

        engine
    }

    /// Switch the block numbering convention. Defaults to [`BlockConvention::Rfc8018`].
    #[must_use]
    pub fn with_convention(mut self, convention: BlockConvention) -> Self {
        tracing::debug!(?convention, "PBKDF2 block convention set");
        self.convention = convention;
        self
    }

    /// Output length of the bound MAC (`hLen`).
    #[must_use]
    pub fn mac_output_len() -> usize {
        <M as OutputSizeUser>::output_size()
    }

    /// Salt and iteration count this engine was built with.
    #[must_use]
    pub const fn params(&self) -> &KdfParameters {
        &self.params
    }

    /// Block numbering convention in effect.
    #[must_use]
    pub const fn convention(&self) -> BlockConvention {
        self.convention
    }

    /// Derive a fresh key of exactly `length` bytes.
    ///
    /// `length` accepts any integer type. Negative or unrepresentable values fail
    /// with [`KdfError::InvalidLength`]; `0` yields an empty key.
    pub fn derive<L>(&self, length: L) -> Result<DerivedKey, KdfError>
    where
        L: TryInto<usize>,
    {
        let length: usize = length.try_into().map_err(|_| {
            KdfError::InvalidLength("requested length must be a non-negative byte count".into())
        })?;
        check_length(length, Self::mac_output_len())?;

        let mut key = vec![0u8; length];
        if let Err(e) = self.derive_into(&mut key) {
            key.zeroize();
            return Err(e);
        }
        Ok(DerivedKey::new(key))
    }

    /// Derive directly into a caller-provided buffer, filling all of it.
    pub fn derive_into(&self, out_key: &mut [u8]) -> Result<(), KdfError> {
        let h_len = Self::mac_output_len();
        let blocks = check_length(out_key.len(), h_len)?;

        tracing::trace!(length = out_key.len(), blocks, "deriving PBKDF2 key");

        if out_key.is_empty() {
            return Ok(());
        }

        let prf = self.keyed_mac()?;
        let mut block = Zeroizing::new(vec![0u8; h_len]);
        let first = self.convention.first_block_index();

        for (offset, chunk) in out_key.chunks_mut(h_len).enumerate() {
            // offset < MAX_BLOCKS (checked above), so this cannot wrap
            let index = first + offset as u32;
            self.fill_block(&prf, index, &mut block);
            chunk.copy_from_slice(&block[..chunk.len()]);
        }

        Ok(())
    }

    /// Key a fresh MAC from the stored secret.
    fn keyed_mac(&self) -> Result<M, KdfError> {
        <M as KeyInit>::new_from_slice(self.secret.expose_secret()).map_err(|e| {
            KdfError::InternalInvariantViolation(format!(
                "MAC rejected a key accepted at initialization: {e}"
            ))
        })
    }

    /// Block function `F(index)`: XOR fold of the chained MAC iterates.
    ///
    /// Every iterate is computed and folded; the loop has no early exit.
    fn fill_block(&self, prf: &M, index: u32, acc: &mut [u8]) {
        acc.fill(0);

        let mut mac = prf.clone();
        mac.update(self.params.salt());
        mac.update(&block_index_bytes(index));
        let mut u = mac.finalize().into_bytes();
        xor_into(acc, &u);

        let iterates = self
            .convention
            .iterates_per_block(self.params.iteration_count());
        for _ in 1..iterates {
            let mut mac = prf.clone();
            mac.update(&u);
            u = mac.finalize().into_bytes();
            xor_into(acc, &u);
        }

        u.as_mut_slice().zeroize();
    }
}

impl<M> fmt::Debug for Pbkdf2<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pbkdf2")
            .field("secret", &"[REDACTED]")
            .field("params", &self.params)
            .field("convention", &self.convention)
            .finish()
    }
}

/// Derive PBKDF2 with MAC `M` directly into `out_key` (one-shot helper).
#[inline(always)]
pub fn derive_pbkdf2_key<M>(
    secret: &[u8],
    salt: &[u8],
    iterations: u32,
    out_key: &mut [u8],
) -> Result<(), KdfError>
where
    M: Mac + KeyInit + Clone,
{
    Pbkdf2::<M>::initialize(secret, salt, iterations)?.derive_into(out_key)
}

fn check_secret<M: KeyInit>(secret: &[u8]) -> Result<(), KdfError> {
    if secret.is_empty() {
        return Err(KdfError::InvalidSecret("secret must not be empty".into()));
    }
    <M as KeyInit>::new_from_slice(secret)
        .map(drop)
        .map_err(|e| KdfError::InvalidSecret(format!("MAC rejected secret as key: {e}")))
}

fn check_length(length: usize, h_len: usize) -> Result<u64, KdfError> {
    let blocks = blocks_for(length, h_len);
    if blocks > MAX_BLOCKS {
        return Err(KdfError::InvalidLength(format!(
            "{length} bytes needs {blocks} blocks (max {MAX_BLOCKS})"
        )));
    }
    Ok(blocks)
}
