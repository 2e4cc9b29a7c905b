//! Wallet snapshot of current holdings
//!
//! A [`Wallet`] is the node's set of currently-owned, unspent states at some
//! point in a fold of observations. It is a pure value: applying an update
//! yields a fresh snapshot and leaves the original untouched. Serializing
//! updates, folding them, and persisting the snapshot all belong to an
//! external wallet service; this module only supplies the value semantics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tessera_core::StateRef;

use crate::states::StateAndRef;
use crate::update::WalletUpdate;

/// A node's currently-owned, unspent ledger states
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Wallet {
    /// Entries held, unique by underlying reference
    pub states: BTreeSet<StateAndRef>,
}

impl Wallet {
    /// The empty wallet
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a wallet holding the given entries
    pub fn new(states: impl IntoIterator<Item = StateAndRef>) -> Self {
        Self {
            states: states.into_iter().collect(),
        }
    }

    /// Number of entries held
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the wallet holds nothing
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Whether the wallet holds a state at `reference`
    pub fn contains(&self, reference: &StateRef) -> bool {
        self.states
            .iter()
            .any(|entry| &entry.reference == reference)
    }

    /// Iterate over held entries
    pub fn iter(&self) -> impl Iterator<Item = &StateAndRef> {
        self.states.iter()
    }

    /// Apply an update, yielding the wallet after its effect.
    ///
    /// Consumed references are removed first, then produced entries added;
    /// an update that consumes and produces the same reference therefore
    /// leaves the entry held, matching the combine algebra's asymmetric
    /// cancellation rule.
    pub fn apply(&self, update: &WalletUpdate) -> Wallet {
        let mut states: BTreeSet<StateAndRef> = self
            .states
            .iter()
            .filter(|entry| !update.has_consumed(&entry.reference))
            .cloned()
            .collect();
        states.extend(update.produced().cloned());

        tracing::trace!(
            consumed = update.consumed().count(),
            produced = update.produced().count(),
            held = states.len(),
            "applied wallet update"
        );

        Wallet { states }
    }
}

impl FromIterator<StateAndRef> for Wallet {
    fn from_iter<I: IntoIterator<Item = StateAndRef>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::{StateData, TransactionState};
    use tessera_core::{NotaryId, SecureHash};

    fn state_ref(n: u8) -> StateRef {
        StateRef::new(SecureHash::compute(&[n]), u32::from(n))
    }

    fn state_and_ref(n: u8) -> StateAndRef {
        StateAndRef::new(
            state_ref(n),
            TransactionState::new(
                StateData::new("dummy", vec![n]),
                NotaryId::new_from_entropy([0x4e; 32]),
            ),
        )
    }

    #[test]
    fn apply_no_update_is_a_no_op() {
        let wallet = Wallet::new([state_and_ref(0), state_and_ref(1)]);
        assert_eq!(wallet.apply(&WalletUpdate::none()), wallet);
    }

    #[test]
    fn apply_removes_consumed_and_adds_produced() {
        let wallet = Wallet::new([state_and_ref(0), state_and_ref(1)]);
        let update = WalletUpdate::new([state_ref(0)], [state_and_ref(2)]);
        let after = wallet.apply(&update);

        assert!(!after.contains(&state_ref(0)));
        assert!(after.contains(&state_ref(1)));
        assert!(after.contains(&state_ref(2)));
        assert_eq!(after.len(), 2);
        // The original snapshot is untouched.
        assert!(wallet.contains(&state_ref(0)));
    }

    #[test]
    fn apply_keeps_entry_consumed_and_reproduced_by_same_update() {
        let wallet = Wallet::new([state_and_ref(0)]);
        let update = WalletUpdate::new([state_ref(0)], [state_and_ref(0)]);
        let after = wallet.apply(&update);
        assert!(after.contains(&state_ref(0)));
    }

    #[test]
    fn empty_wallet_reports_empty() {
        assert!(Wallet::empty().is_empty());
        assert_eq!(Wallet::empty().len(), 0);
    }
}
