//! Tests for the scalar operator overloads.
//!
//! Each operator must build the documented affine wrapper and therefore
//! satisfy the linear chain rule numerically.

use approx::assert_abs_diff_eq;
use ndarray::{arr0, arr1};
use symdiff_rs::prelude::*;

fn onehot() -> Func<f64> {
    Func::from(OneHot)
}

// ============================================================================
// Numeric Behavior
// ============================================================================

#[test]
fn test_add_scalar() {
    let f = onehot() + 2.5;
    let param = vec![arr1(&[1.0, -1.0]).into_dyn()];
    assert_eq!(f.eval(&param).unwrap(), arr1(&[3.5, 1.5]).into_dyn());
}

#[test]
fn test_sub_scalar() {
    let f = onehot() - 2.5;
    let param = vec![arr1(&[1.0]).into_dyn()];
    assert_eq!(f.eval(&param).unwrap(), arr1(&[-1.5]).into_dyn());
}

#[test]
fn test_neg() {
    let f = -onehot();
    let param = vec![arr1(&[1.0, -2.0]).into_dyn()];
    assert_eq!(f.eval(&param).unwrap(), arr1(&[-1.0, 2.0]).into_dyn());
}

#[test]
fn test_mul_scalar() {
    let f = onehot() * 3.0;
    let param = vec![arr1(&[1.0, 2.0]).into_dyn()];
    assert_eq!(f.eval(&param).unwrap(), arr1(&[3.0, 6.0]).into_dyn());
}

#[test]
fn test_div_scalar() {
    let f = onehot() / 4.0;
    let param = vec![arr1(&[8.0]).into_dyn()];
    assert_eq!(f.eval(&param).unwrap(), arr1(&[2.0]).into_dyn());
}

// ============================================================================
// Derivative Behavior
// ============================================================================

/// Additive constants never reach the derivatives.
#[test]
fn test_add_leaves_grad_untouched() {
    let param = vec![arr1(&[1.0, 2.0]).into_dyn()];
    let plain = onehot().grad(&param, 0).unwrap();
    let shifted = (onehot() + 100.0).grad(&param, 0).unwrap();
    assert_eq!(plain, shifted);
}

/// Division scales the gradient by the reciprocal.
#[test]
fn test_div_scales_grad() {
    let f = onehot() / 4.0;
    let param = vec![arr1(&[8.0]).into_dyn()];

    let g = f.grad(&param, 0).unwrap();
    assert_eq!(g.shape(), &[1, 1]);
    assert_abs_diff_eq!(g[[0, 0]], 0.25, epsilon = 1e-12);
}

// ============================================================================
// Tree Shape
// ============================================================================

/// Affine sugar folds into the wrapper but never reaches through a power
/// node.
#[test]
fn test_ops_do_not_collapse_through_power() {
    let f = (Func::power(onehot(), 2.0) * 3.0) + 1.0;

    let Func::Affine(aff) = &f else {
        panic!("expected an affine node");
    };
    assert_eq!(aff.a(), 3.0);
    assert_eq!(aff.b(), &arr0(1.0).into_dyn());
    assert!(matches!(aff.base(), Func::Power(_)));

    let param = vec![arr1(&[2.0]).into_dyn()];
    assert_eq!(f.eval(&param).unwrap(), arr1(&[13.0]).into_dyn());
}
