//! Broadcasting and shape helpers for derivative tensors.
//!
//! ## Purpose
//!
//! This module implements the tensor-shape plumbing the chain-rule formulas
//! need: the signed-power transform, appending/inserting singleton axes so
//! per-output coefficients and outer products broadcast correctly, zero
//! tensors over stacked shapes, and the identity (Kronecker-delta) tensor.
//!
//! ## Design notes
//!
//! * **Sign convention**: `sign(0) = 0`, matching the array-math convention
//!   rather than `Float::signum` (which maps `+0` to `1`).
//! * **Axis insertion**: A coefficient of shape `f.shape` is multiplied
//!   against a gradient of shape `f.shape + param.shape` by appending one
//!   singleton axis per parameter dimension, then relying on the backend's
//!   co-broadcasting.
//!
//! ## Invariants
//!
//! * `zeros_stacked` output shape is the exact concatenation of its inputs.
//! * `identity_doubled(shape)` has shape `shape + shape` and is 1 exactly on
//!   coinciding multi-indices.
//!
//! ## Non-goals
//!
//! * No guarding of power singularities: `|f|^(p-2)` at `f = 0` with
//!   non-integer `p < 2` produces Inf/NaN and propagates as a value.

// External dependencies
use ndarray::{ArrayD, Axis, IxDyn};
use num_traits::Float;

// ============================================================================
// Signed Power
// ============================================================================

/// Sign of a scalar with `sign(0) = 0`.
#[inline]
pub fn sign<T: Float>(x: T) -> T {
    if x.is_zero() {
        T::zero()
    } else {
        x.signum()
    }
}

/// Elementwise signed power: `sign(x) * |x|^p`.
///
/// Extends exponentiation to negative bases for non-integer exponents,
/// keeping the transform odd in `x`.
pub fn signed_pow<T: Float>(f: &ArrayD<T>, p: T) -> ArrayD<T> {
    f.mapv(|x| sign(x) * x.abs().powf(p))
}

// ============================================================================
// Axis Insertion
// ============================================================================

/// Append `count` trailing singleton axes to `arr`.
pub fn append_axes<T>(mut arr: ArrayD<T>, count: usize) -> ArrayD<T> {
    for _ in 0..count {
        let end = Axis(arr.ndim());
        arr = arr.insert_axis(end);
    }
    arr
}

/// Insert `count` singleton axes at position `at` of `arr`.
pub fn insert_axes_at<T>(mut arr: ArrayD<T>, at: usize, count: usize) -> ArrayD<T> {
    for _ in 0..count {
        arr = arr.insert_axis(Axis(at));
    }
    arr
}

/// Multiply a derivative tensor by a per-output-element coefficient.
///
/// `coeff` has the node's output shape; `tensor` has the output shape plus
/// trailing parameter axes. The coefficient is padded with trailing singleton
/// axes so the two broadcast without colliding.
pub fn mul_outputwise<T: Float>(tensor: &ArrayD<T>, coeff: &ArrayD<T>) -> ArrayD<T> {
    debug_assert!(tensor.ndim() >= coeff.ndim());
    let padded = append_axes(coeff.clone(), tensor.ndim() - coeff.ndim());
    tensor * &padded
}

// ============================================================================
// Shape Construction
// ============================================================================

/// Zero tensor whose shape is the concatenation of the given shapes.
pub fn zeros_stacked<T: Float>(shapes: &[&[usize]]) -> ArrayD<T> {
    let dims: Vec<usize> = shapes.iter().flat_map(|s| s.iter().copied()).collect();
    ArrayD::zeros(IxDyn(&dims))
}

/// Identity (Kronecker-delta) tensor over the flattened size of `shape`,
/// shaped `shape + shape`.
///
/// Entry `(i_0..i_{n-1}, j_0..j_{n-1})` is 1 iff `i_d == j_d` for every axis.
pub fn identity_doubled<T: Float>(shape: &[usize]) -> ArrayD<T> {
    let n = shape.len();
    let mut dims = Vec::with_capacity(2 * n);
    dims.extend_from_slice(shape);
    dims.extend_from_slice(shape);
    ArrayD::from_shape_fn(IxDyn(&dims), |idx| {
        if (0..n).all(|d| idx[d] == idx[d + n]) {
            T::one()
        } else {
            T::zero()
        }
    })
}
