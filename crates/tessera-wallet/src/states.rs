//! Owned state payloads and state-and-reference entries
//!
//! The wallet core never interprets contract data: a state payload is an
//! opaque byte string tagged with its contract identifier, paired with the
//! notary that governs its consumption. A [`StateAndRef`] binds such a
//! payload to the [`StateRef`] where the ledger recorded it.
//!
//! # Identity vs payload
//!
//! A `StateAndRef`'s identity is its reference. Equality, ordering and
//! hashing consider only the `reference` field, so a `BTreeSet<StateAndRef>`
//! is a set of entries unique by underlying reference, which is exactly the
//! shape the delta algebra needs. References are unique across the ledger,
//! so two entries with the same reference describe the same state.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tessera_core::{NotaryId, StateRef};

/// Opaque owned-state payload
///
/// Contract execution is outside this core; higher layers deserialize
/// `data` with whatever codec the named contract uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateData {
    /// Contract identifier (e.g. "cash", "commercial-paper")
    pub contract: String,
    /// Serialized contract state
    pub data: Vec<u8>,
}

impl StateData {
    /// Create a payload for the given contract
    pub fn new(contract: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            contract: contract.into(),
            data,
        }
    }
}

/// A state payload together with its governing notary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionState {
    /// The owned state payload
    pub data: StateData,
    /// Notary whose signature is required to consume this state
    pub notary: NotaryId,
}

impl TransactionState {
    /// Pair a payload with its notary
    pub fn new(data: StateData, notary: NotaryId) -> Self {
        Self { data, notary }
    }
}

/// A state entry: the state found at a particular ledger reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateAndRef {
    /// Where the ledger recorded this state
    pub reference: StateRef,
    /// The state recorded there
    pub state: TransactionState,
}

impl StateAndRef {
    /// Create an entry describing `state` at `reference`
    pub fn new(reference: StateRef, state: TransactionState) -> Self {
        Self { reference, state }
    }
}

// Identity is the reference; the payload is not compared.
impl PartialEq for StateAndRef {
    fn eq(&self, other: &Self) -> bool {
        self.reference == other.reference
    }
}

impl Eq for StateAndRef {}

impl std::hash::Hash for StateAndRef {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.reference.hash(state);
    }
}

impl PartialOrd for StateAndRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StateAndRef {
    fn cmp(&self, other: &Self) -> Ordering {
        self.reference.cmp(&other.reference)
    }
}
