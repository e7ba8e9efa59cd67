//! Lazy sequence adapters for bulk derivative retrieval.
//!
//! ## Purpose
//!
//! This module provides the vectorization wrappers that adapt a per-index (or
//! per-pair) derivative closure into a lazy bulk producer. A derivative
//! consumer can either ask a node for one block (`grad(param, i)`) or pull the
//! whole derivative space through these sequences (`grad_all`/`hess_all`).
//!
//! ## Design notes
//!
//! * **Pull-based**: Each entry is computed only when the consumer advances
//!   the iterator. Nothing is precomputed eagerly.
//! * **One-shot**: The sequences are plain iterators — finite and not
//!   restartable. Callers needing multiple passes re-invoke the bulk method.
//! * **Triangular Hessian iteration**: `MatrixSeq` yields, for each `i`, a row
//!   covering `j` in `0..=i` only. The Hessian is symmetric under swapping the
//!   `(i, ·)` and `(j, ·)` index pairs, so the upper triangle is never
//!   materialized; mirroring is the caller's responsibility.
//!
//! ## Invariants
//!
//! * `VectorSeq` over `len` produces exactly `len` items, in index order.
//! * `MatrixSeq` row `i` produces exactly `i + 1` items, in index order.
//!
//! ## Non-goals
//!
//! * No parallel or out-of-order iteration.
//! * No caching of produced entries.

// ============================================================================
// VectorSeq - Per-Index Sequence
// ============================================================================

/// A lazy, finite, one-shot sequence of `f(0), f(1), .., f(len - 1)`.
///
/// Wraps a per-index closure into a bulk producer; used for full-gradient
/// retrieval where each item is one parameter block.
#[derive(Debug, Clone)]
pub struct VectorSeq<F> {
    f: F,
    len: usize,
    next: usize,
}

impl<F> VectorSeq<F> {
    /// Create a sequence over indices `0..len` backed by `f`.
    pub fn new(len: usize, f: F) -> Self {
        Self { f, len, next: 0 }
    }
}

impl<I, F: FnMut(usize) -> I> Iterator for VectorSeq<F> {
    type Item = I;

    fn next(&mut self) -> Option<I> {
        if self.next >= self.len {
            return None;
        }
        let item = (self.f)(self.next);
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl<I, F: FnMut(usize) -> I> ExactSizeIterator for VectorSeq<F> {}

// ============================================================================
// MatrixSeq - Lower-Triangular Pair Sequence
// ============================================================================

/// A lazy sequence of lower-triangular rows over index pairs.
///
/// For each `i` in `0..len`, yields a [`PairRow`] producing
/// `f(i, 0), .., f(i, i)`. The closure must be `Copy` (capture by shared
/// reference) so each row can carry its own handle to it.
#[derive(Debug, Clone)]
pub struct MatrixSeq<F> {
    f: F,
    len: usize,
    next: usize,
}

impl<F> MatrixSeq<F> {
    /// Create a triangular sequence over row indices `0..len` backed by `f`.
    pub fn new(len: usize, f: F) -> Self {
        Self { f, len, next: 0 }
    }
}

impl<I, F: Fn(usize, usize) -> I + Copy> Iterator for MatrixSeq<F> {
    type Item = PairRow<F>;

    fn next(&mut self) -> Option<PairRow<F>> {
        if self.next >= self.len {
            return None;
        }
        let row = PairRow {
            f: self.f,
            i: self.next,
            next: 0,
        };
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl<I, F: Fn(usize, usize) -> I + Copy> ExactSizeIterator for MatrixSeq<F> {}

// ============================================================================
// PairRow - One Triangular Row
// ============================================================================

/// One row of a [`MatrixSeq`]: `f(i, 0), .., f(i, i)`.
#[derive(Debug, Clone)]
pub struct PairRow<F> {
    f: F,
    i: usize,
    next: usize,
}

impl<F> PairRow<F> {
    /// The row index `i` this row covers.
    pub fn row_index(&self) -> usize {
        self.i
    }
}

impl<I, F: Fn(usize, usize) -> I + Copy> Iterator for PairRow<F> {
    type Item = I;

    fn next(&mut self) -> Option<I> {
        if self.next > self.i {
            return None;
        }
        let item = (self.f)(self.i, self.next);
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.i + 1 - self.next;
        (remaining, Some(remaining))
    }
}

impl<I, F: Fn(usize, usize) -> I + Copy> ExactSizeIterator for PairRow<F> {}
