//! Tests for the lazy sequence adapters.
//!
//! These tests verify:
//! - Item counts and index order of `VectorSeq` and `MatrixSeq`
//! - Pull-based laziness (nothing computed before `next`)
//! - The bulk methods agreeing with their per-index counterparts

use std::cell::Cell;

use ndarray::arr1;
use symdiff_rs::prelude::*;

// ============================================================================
// VectorSeq
// ============================================================================

#[test]
fn test_vector_seq_yields_in_order() {
    let seq = VectorSeq::new(4, |i| i * 10);
    let items: Vec<usize> = seq.collect();
    assert_eq!(items, vec![0, 10, 20, 30]);
}

#[test]
fn test_vector_seq_empty() {
    let mut seq = VectorSeq::new(0, |i: usize| i);
    assert_eq!(seq.len(), 0);
    assert!(seq.next().is_none());
}

/// Entries are computed only when the consumer advances.
#[test]
fn test_vector_seq_is_lazy() {
    let calls = Cell::new(0usize);
    let mut seq = VectorSeq::new(3, |i| {
        calls.set(calls.get() + 1);
        i
    });

    assert_eq!(calls.get(), 0);
    seq.next();
    assert_eq!(calls.get(), 1);
    seq.next();
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_vector_seq_exact_size() {
    let mut seq = VectorSeq::new(3, |i| i);
    assert_eq!(seq.len(), 3);
    seq.next();
    assert_eq!(seq.len(), 2);
}

// ============================================================================
// MatrixSeq
// ============================================================================

/// Row `i` covers exactly the pairs `(i, 0) ..= (i, i)`.
#[test]
fn test_matrix_seq_lower_triangle() {
    let f = |i: usize, j: usize| (i, j);
    let mut pairs = Vec::new();
    for row in MatrixSeq::new(3, f) {
        pairs.extend(row);
    }
    assert_eq!(
        pairs,
        vec![(0, 0), (1, 0), (1, 1), (2, 0), (2, 1), (2, 2)]
    );
}

#[test]
fn test_matrix_seq_row_index_and_len() {
    let f = |i: usize, j: usize| (i, j);
    for (expected, row) in MatrixSeq::new(4, f).enumerate() {
        assert_eq!(row.row_index(), expected);
        assert_eq!(row.len(), expected + 1);
    }
}

#[test]
fn test_matrix_seq_empty() {
    let f = |i: usize, j: usize| (i, j);
    assert!(MatrixSeq::new(0, f).next().is_none());
}

// ============================================================================
// Bulk Retrieval Agreement
// ============================================================================

fn two_component_model() -> (Func<f64>, Vec<ndarray::ArrayD<f64>>) {
    let mut lin = Linear::new();
    lin.add_feature(&[2], 2.0);
    lin.add_feature(&[1], -1.0);
    let f = Func::power(Func::from(lin), 2.0);
    let param = vec![
        arr1(&[1.0, 2.0]).into_dyn(),
        arr1(&[3.0]).into_dyn(),
    ];
    (f, param)
}

/// `grad_all` produces the same blocks as per-index `grad`, in order.
#[test]
fn test_grad_all_matches_grad() {
    let (f, param) = two_component_model();

    let blocks: Vec<_> = f.grad_all(&param).collect();
    assert_eq!(blocks.len(), 2);
    for (i, block) in blocks.into_iter().enumerate() {
        assert_eq!(block.unwrap(), f.grad(&param, i).unwrap());
    }
}

/// `hess_all` walks the lower triangle and agrees with per-pair `hess`.
#[test]
fn test_hess_all_matches_hess() {
    let (f, param) = two_component_model();

    let mut rows = 0;
    for row in f.hess_all(&param) {
        let i = row.row_index();
        for (j, block) in row.enumerate() {
            assert!(j <= i);
            assert_eq!(block.unwrap(), f.hess(&param, i, j).unwrap());
        }
        rows += 1;
    }
    assert_eq!(rows, 2);
}

/// The bulk sequences never touch a node before being advanced: an
/// out-of-range model only errors when pulled.
#[test]
fn test_bulk_retrieval_defers_errors() {
    let f = Func::<f64>::from(OneHot);
    let param = vec![arr1(&[1.0]).into_dyn()];

    // Constructing the sequence is infallible.
    let empty = Func::from(Linear::<f64>::new());
    let mut seq = empty.grad_all(&param);
    let first = seq.next().unwrap();
    assert_eq!(
        first.unwrap_err(),
        FuncError::WeightOutOfRange { index: 0, len: 0 }
    );

    // A well-formed model pulls cleanly.
    let mut ok = f.grad_all(&param);
    assert!(ok.next().unwrap().is_ok());
    assert!(ok.next().is_none());
}
