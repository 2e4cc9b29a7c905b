//! Tessera Wallet - reconciliation algebra for unspent ledger state
//!
//! A node's wallet is its view of the owned, unspent states on the ledger.
//! Each observed transaction yields a [`WalletUpdate`] describing which
//! state references it consumed and which state entries it produced.
//! Updates form a monoid under [`Combine`](tessera_core::Combine): folding
//! any sequence of observations yields a single net update whose `produced`
//! set means "currently held as of this point" and whose `consumed` set
//! means "spent at or before this point", with no cross-referencing left
//! for the reader.
//!
//! Deltas are computed by an external observer that inspects transactions
//! against known ownership; this crate only knows how to merge them and how
//! to apply a net update to a [`Wallet`] snapshot.

#![forbid(unsafe_code)]

/// Owned state payloads and state-and-reference entries
pub mod states;

/// The wallet delta and its combine operation
pub mod update;

/// Wallet snapshot of current holdings
pub mod wallet;

pub use states::{StateAndRef, StateData, TransactionState};
pub use update::WalletUpdate;
pub use wallet::Wallet;
