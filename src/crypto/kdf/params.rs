//! src/crypto/kdf/params.rs
//! PBKDF2 parameters — validated once, immutable afterwards

use crate::consts::PBKDF2_MIN_ITER;
use crate::error::KdfError;

/// How output blocks are numbered and how many iterates each block folds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockConvention {
    /// PKCS #5 v2.1 / RFC 8018: indices start at `1` and
    /// `T_i = U_1 ^ U_2 ^ … ^ U_c`.
    #[default]
    Rfc8018,

    /// Compatibility mode for keys produced by older provider code: indices
    /// start at `0` and the fold also includes the extra iterate, i.e.
    /// `T_i = U_1 ^ U_2 ^ … ^ U_{c+1}`.
    ///
    /// Output is **not** interoperable with RFC 8018 implementations.
    LegacyZeroIndexed,
}

impl BlockConvention {
    /// Index of the first output block.
    #[must_use]
    pub const fn first_block_index(self) -> u32 {
        match self {
            Self::Rfc8018 => 1,
            Self::LegacyZeroIndexed => 0,
        }
    }

    /// Number of MAC iterates XOR-folded into each block for `iterations`.
    #[must_use]
    pub const fn iterates_per_block(self, iterations: u32) -> u64 {
        match self {
            Self::Rfc8018 => iterations as u64,
            Self::LegacyZeroIndexed => iterations as u64 + 1,
        }
    }
}

/// Salt and iteration count for one engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KdfParameters {
    salt: Vec<u8>,
    iteration_count: u32,
}

impl KdfParameters {
    /// Validates and stores the parameters.
    ///
    /// An empty salt is allowed; an iteration count below
    /// [`PBKDF2_MIN_ITER`] is not.
    pub fn new(salt: impl Into<Vec<u8>>, iteration_count: u32) -> Result<Self, KdfError> {
        if iteration_count < PBKDF2_MIN_ITER {
            return Err(KdfError::InvalidParameters(
                "PBKDF2 iterations must be ≥1".into(),
            ));
        }

        Ok(Self {
            salt: salt.into(),
            iteration_count,
        })
    }

    #[must_use]
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    #[must_use]
    pub const fn iteration_count(&self) -> u32 {
        self.iteration_count
    }
}
