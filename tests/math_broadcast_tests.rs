//! Tests for the internal tensor-shape helpers.
//!
//! Run with `cargo test --features dev`.

#![cfg(feature = "dev")]

use approx::assert_abs_diff_eq;
use ndarray::{arr0, arr1, arr2, ArrayD, IxDyn};
use symdiff_rs::internals::math::broadcast::{
    append_axes, identity_doubled, insert_axes_at, mul_outputwise, sign, signed_pow,
    zeros_stacked,
};

// ============================================================================
// Signed Power
// ============================================================================

#[test]
fn test_sign_zero_is_zero() {
    assert_eq!(sign(0.0_f64), 0.0);
    assert_eq!(sign(3.5_f64), 1.0);
    assert_eq!(sign(-0.1_f64), -1.0);
}

/// The signed definition extends fractional exponents to negative bases.
#[test]
fn test_signed_pow_cube_root() {
    let f = arr1(&[-8.0, 0.0, 27.0]).into_dyn();
    let out = signed_pow(&f, 1.0 / 3.0);
    assert_abs_diff_eq!(out[[0]], -2.0, epsilon = 1e-12);
    assert_eq!(out[[1]], 0.0);
    assert_abs_diff_eq!(out[[2]], 3.0, epsilon = 1e-12);
}

#[test]
fn test_signed_pow_square_is_odd() {
    let f = arr1(&[-3.0, 3.0]).into_dyn();
    let out = signed_pow(&f, 2.0);
    assert_eq!(out, arr1(&[-9.0, 9.0]).into_dyn());
}

// ============================================================================
// Axis Insertion
// ============================================================================

#[test]
fn test_append_axes_shapes() {
    let a = arr1(&[1.0, 2.0]).into_dyn();
    assert_eq!(append_axes(a.clone(), 0).shape(), &[2]);
    assert_eq!(append_axes(a, 2).shape(), &[2, 1, 1]);
}

#[test]
fn test_insert_axes_at_shapes() {
    let a = arr2(&[[1.0, 2.0], [3.0, 4.0]]).into_dyn();
    assert_eq!(insert_axes_at(a.clone(), 0, 1).shape(), &[1, 2, 2]);
    assert_eq!(insert_axes_at(a, 1, 2).shape(), &[2, 1, 1, 2]);
}

// ============================================================================
// Output-wise Multiply
// ============================================================================

/// A per-output coefficient scales whole trailing blocks of the tensor.
#[test]
fn test_mul_outputwise_scales_blocks() {
    // tensor: shape [2, 2] — two output rows of two parameter entries.
    let tensor = arr2(&[[1.0, 1.0], [1.0, 1.0]]).into_dyn();
    let coeff = arr1(&[2.0, 3.0]).into_dyn();

    let out = mul_outputwise(&tensor, &coeff);
    assert_eq!(out, arr2(&[[2.0, 2.0], [3.0, 3.0]]).into_dyn());
}

/// A 0-d coefficient degenerates to plain scalar multiplication.
#[test]
fn test_mul_outputwise_scalar_coeff() {
    let tensor = arr1(&[1.0, 2.0]).into_dyn();
    let coeff = arr0(4.0).into_dyn();
    assert_eq!(
        mul_outputwise(&tensor, &coeff),
        arr1(&[4.0, 8.0]).into_dyn()
    );
}

// ============================================================================
// Shape Construction
// ============================================================================

#[test]
fn test_zeros_stacked_concatenates() {
    let z: ArrayD<f64> = zeros_stacked(&[&[2], &[3, 1]]);
    assert_eq!(z, ArrayD::zeros(IxDyn(&[2, 3, 1])));
}

#[test]
fn test_zeros_stacked_all_empty() {
    let z: ArrayD<f64> = zeros_stacked(&[&[], &[]]);
    assert_eq!(z.ndim(), 0);
}

#[test]
fn test_identity_doubled_vector() {
    let id: ArrayD<f64> = identity_doubled(&[3]);
    assert_eq!(id.shape(), &[3, 3]);
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(id[[i, j]], if i == j { 1.0 } else { 0.0 });
        }
    }
}

#[test]
fn test_identity_doubled_matrix() {
    let id: ArrayD<f64> = identity_doubled(&[2, 2]);
    assert_eq!(id.shape(), &[2, 2, 2, 2]);
    assert_eq!(id[[0, 1, 0, 1]], 1.0);
    assert_eq!(id[[0, 1, 1, 0]], 0.0);
}

/// The 0-d identity is the scalar 1.
#[test]
fn test_identity_doubled_scalar() {
    let id: ArrayD<f64> = identity_doubled(&[]);
    assert_eq!(id.ndim(), 0);
    assert_eq!(id, arr0(1.0).into_dyn());
}
