//! Monoid trait for foldable change algebras
//!
//! A wallet's cumulative state is derived by folding observed deltas in
//! arrival order. [`Combine`] is the seam that makes the fold well defined:
//! implementors supply an identity element and an associative merge, so the
//! result of a fold is independent of how the sequence is chunked.

/// An associative merge with identity.
///
/// # Laws
///
/// - Identity: `x.combine(&Self::identity()) == x` and
///   `Self::identity().combine(&x) == x`
/// - Associativity: `a.combine(&b).combine(&c) == a.combine(&b.combine(&c))`
///
/// `combine` must be a pure value computation: operands are never mutated
/// and the result is a fresh value, so concurrent callers need no
/// synchronization.
pub trait Combine: Sized {
    /// The identity element ("no change")
    fn identity() -> Self;

    /// Merge `other` into `self`, yielding the net effect of both
    fn combine(&self, other: &Self) -> Self;

    /// In-place convenience for running folds
    fn combine_assign(&mut self, other: &Self) {
        *self = self.combine(other);
    }
}

/// Fold a sequence of values into their net effect.
///
/// Equivalent to a left fold from [`Combine::identity`]; by associativity the
/// result equals any other bracketing of the same sequence.
pub fn combine_all<T: Combine>(items: impl IntoIterator<Item = T>) -> T {
    items
        .into_iter()
        .fold(T::identity(), |acc, item| acc.combine(&item))
}
