#[cfg(feature = "batch-ops")]
use hmac::digest::KeyInit;
#[cfg(feature = "batch-ops")]
use hmac::Mac;
#[cfg(feature = "batch-ops")]
use rayon::prelude::*;

#[cfg(feature = "batch-ops")]
use crate::aliases::DerivedKey;
#[cfg(feature = "batch-ops")]
use crate::{KdfError, KdfParameters, Pbkdf2};

/// Run one derivation per entry of `lengths` on a shared engine, in parallel.
#[cfg(feature = "batch-ops")]
pub fn derive_batch<M>(engine: &Pbkdf2<M>, lengths: &[usize]) -> Result<Vec<DerivedKey>, KdfError>
where
    M: Mac + KeyInit + Clone,
{
    lengths.par_iter().map(|&len| engine.derive(len)).collect()
}

/// Derive one `length`-byte key per secret under the same parameters, in parallel.
#[cfg(feature = "batch-ops")]
pub fn derive_keys_batch<M>(
    secrets: &[&[u8]],
    params: &KdfParameters,
    length: usize,
) -> Result<Vec<DerivedKey>, KdfError>
where
    M: Mac + KeyInit + Clone,
{
    secrets
        .par_iter()
        .map(|secret| Pbkdf2::<M>::from_params(secret, params.clone())?.derive(length))
        .collect()
}
