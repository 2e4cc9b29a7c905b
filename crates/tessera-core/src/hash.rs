//! Transaction digests
//!
//! A [`SecureHash`] names a transaction by the 32-byte SHA-256 digest of its
//! serialized form. Digests are plain values: construction never touches an
//! ambient RNG, so deterministic tests derive them from caller-supplied seed
//! bytes instead of sampling randomness.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TesseraError;

/// 32-byte transaction digest.
///
/// Equality is by value and the derived ordering is lexicographic over the
/// raw bytes, which is what gives [`crate::StateRef`] a total order suitable
/// for set containers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct SecureHash([u8; 32]);

impl SecureHash {
    /// Wrap raw digest bytes
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Compute the SHA-256 digest of `data`
    pub fn compute(data: &[u8]) -> Self {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(data);
        let digest = hasher.finalize();
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for SecureHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for SecureHash {
    type Err = TesseraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(TesseraError::parse(format!(
                "expected 32-byte digest, got {} bytes",
                bytes.len()
            )));
        }
        let mut array = [0u8; 32];
        array.copy_from_slice(&bytes);
        Ok(Self(array))
    }
}

impl From<[u8; 32]> for SecureHash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}
