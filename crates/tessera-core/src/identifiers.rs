//! Ledger state references and notary identities
//!
//! This module provides the identifier types that name ledger state: a
//! [`StateRef`] points at one output slot of one transaction, and a
//! [`NotaryId`] names the validation authority governing a state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::TesseraError;
use crate::hash::SecureHash;

/// Reference to one output slot of one transaction
///
/// A `StateRef` is globally unique under the ledger's assumption that
/// transaction digests never collide. It is an opaque pointer: nothing about
/// the referenced state can be recovered from the reference alone.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct StateRef {
    /// Digest of the transaction that produced the state
    pub txid: SecureHash,
    /// Output slot within that transaction
    pub index: u32,
}

impl StateRef {
    /// Create a reference to output `index` of transaction `txid`
    pub fn new(txid: SecureHash, index: u32) -> Self {
        Self { txid, index }
    }

    /// Derive a reference from 32 bytes of caller-provided entropy.
    ///
    /// Test fixtures use this instead of ambient randomness so runs stay
    /// reproducible.
    pub fn from_entropy(entropy: [u8; 32], index: u32) -> Self {
        Self {
            txid: SecureHash::new(entropy),
            index,
        }
    }
}

impl fmt::Display for StateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.txid, self.index)
    }
}

impl FromStr for StateRef {
    type Err = TesseraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (txid, index) = s
            .rsplit_once(':')
            .ok_or_else(|| TesseraError::parse("state reference must be <txid>:<index>"))?;
        Ok(Self {
            txid: txid.parse()?,
            index: index
                .parse()
                .map_err(|_| TesseraError::parse(format!("invalid output index {index:?}")))?,
        })
    }
}

/// Notary identifier
///
/// Names the validation authority that governs a state's consumption. The
/// identifier is opaque; it carries no key material or cluster topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotaryId(pub Uuid);

impl NotaryId {
    /// Create a notary ID from 32 bytes of caller-provided entropy
    pub fn new_from_entropy(entropy: [u8; 32]) -> Self {
        let mut uuid_bytes = [0u8; 16];
        uuid_bytes.copy_from_slice(&entropy[..16]);
        Self(Uuid::from_bytes(uuid_bytes))
    }

    /// Get the inner UUID
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for NotaryId {
    fn default() -> Self {
        // Deterministic non-nil sentinel
        Self(Uuid::from_bytes([7u8; 16]))
    }
}

impl fmt::Display for NotaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notary-{}", self.0)
    }
}

impl FromStr for NotaryId {
    type Err = TesseraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Handle both raw UUIDs and prefixed format
        let uuid_str = s.strip_prefix("notary-").unwrap_or(s);
        Ok(NotaryId(Uuid::parse_str(uuid_str)?))
    }
}
