//! Operator overloads (`+`, `-`, `*`, `/`, unary `-`).
//!
//! ## Purpose
//!
//! Algebraic sugar over scalar operands. Each operator is a specific
//! `(a, b)` pair applied through the collapsing `Affine` constructor, so
//! chains of operators fold into a single affine wrapper and never grow the
//! tree depth.
//!
//! ## Design notes
//!
//! * Operators consume the node and return a new composed node; trees are
//!   values.
//! * Division maps to multiplication by the reciprocal, `affine(x, 1/a, 0)`.
//!   Division by zero is not guarded; the resulting Inf scale propagates.

// External dependencies
use core::ops::{Add, Div, Mul, Neg, Sub};
use num_traits::Float;

// Internal dependencies
use crate::functions::node::Func;

// ============================================================================
// Scalar Operators
// ============================================================================

impl<T: Float> Add<T> for Func<T> {
    type Output = Func<T>;

    /// `self + b` → `affine(self, 1, b)`.
    fn add(self, b: T) -> Func<T> {
        Func::affine(self, T::one(), b)
    }
}

impl<T: Float> Sub<T> for Func<T> {
    type Output = Func<T>;

    /// `self - b` → `affine(self, 1, -b)`.
    fn sub(self, b: T) -> Func<T> {
        Func::affine(self, T::one(), -b)
    }
}

impl<T: Float> Neg for Func<T> {
    type Output = Func<T>;

    /// `-self` → `affine(self, -1, 0)`.
    fn neg(self) -> Func<T> {
        Func::affine(self, -T::one(), T::zero())
    }
}

impl<T: Float> Mul<T> for Func<T> {
    type Output = Func<T>;

    /// `self * a` → `affine(self, a, 0)`.
    fn mul(self, a: T) -> Func<T> {
        Func::affine(self, a, T::zero())
    }
}

impl<T: Float> Div<T> for Func<T> {
    type Output = Func<T>;

    /// `self / a` → `affine(self, 1/a, 0)`.
    fn div(self, a: T) -> Func<T> {
        Func::affine(self, T::one() / a, T::zero())
    }
}
