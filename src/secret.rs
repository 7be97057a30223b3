//! src/secret.rs
//! Owned secret byte buffer — wiped (full capacity) before its memory is freed

use core::fmt;

use zeroize::Zeroizing;

/// Heap byte buffer for passwords and derived keys.
///
/// Contents are only reachable through [`expose_secret`](Self::expose_secret) /
/// [`expose_secret_mut`](Self::expose_secret_mut) and are zeroized on drop.
pub struct SecretVec(Zeroizing<Vec<u8>>);

impl SecretVec {
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(Zeroizing::new(bytes))
    }

    #[must_use]
    pub fn expose_secret(&self) -> &Vec<u8> {
        &self.0
    }

    pub fn expose_secret_mut(&mut self) -> &mut Vec<u8> {
        &mut self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for SecretVec {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Debug for SecretVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretVec([REDACTED; {}])", self.0.len())
    }
}
