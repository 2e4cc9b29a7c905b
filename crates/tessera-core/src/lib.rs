//! Tessera Core - foundation types for ledger state reconciliation
//!
//! This crate provides the value types every other Tessera crate builds on:
//! transaction digests, ledger state references, notary identities, the
//! `Combine` algebra, and the unified error type.
//!
//! # Algebraic laws
//!
//! Types implementing [`Combine`] form a monoid:
//! - Identity: `x.combine(&T::identity()) == x` and
//!   `T::identity().combine(&x) == x`
//! - Associativity: `a.combine(&b).combine(&c) == a.combine(&b.combine(&c))`
//!
//! Everything here is a pure, immutable value. No I/O, no async, no
//! interior mutability; all operations are safe to call from any thread
//! on shared operands.

#![forbid(unsafe_code)]

/// Monoid trait for foldable change algebras
pub mod algebra;

/// Unified error handling
pub mod error;

/// Transaction digests
pub mod hash;

/// Ledger state references and notary identities
pub mod identifiers;

pub use algebra::{combine_all, Combine};
pub use error::{Result, TesseraError};
pub use hash::SecureHash;
pub use identifiers::{NotaryId, StateRef};
