//! The function-node enum and its call contract.
//!
//! ## Purpose
//!
//! This module defines `Func`, the closed set of function-node variants, and
//! the three capabilities every node provides: `eval`, `grad`, and `hess`.
//! Bulk retrieval (`grad_all`, `hess_all`) is layered on top through the
//! sequence adapters.
//!
//! ## Design notes
//!
//! * **Closed dispatch**: The node set is a tagged enum, not a trait object.
//!   Only two composition wrappers and four leaves exist, so single-level
//!   match dispatch covers the whole hierarchy.
//! * **Immutability**: A `Func` is read-only after construction; the only
//!   mutation in the hierarchy (`Linear::add_feature`) happens before the
//!   builder is frozen into a tree. Trees may be shared and evaluated from
//!   multiple readers.
//! * **Parameters**: `param` is borrowed fresh on every call and never stored.
//!
//! ## Invariants
//!
//! * `grad(param, i).shape == eval(param).shape + param[i].shape`.
//! * `hess(param, i, j).shape == eval(param).shape + param[i].shape +
//!   param[j].shape`, symmetric under swapping the `(i, ·)`/`(j, ·)` pairs.
//!
//! ## Non-goals
//!
//! * No shape validation before arithmetic; backend broadcast failures
//!   propagate as panics.

// External dependencies
use ndarray::{ArrayD, IxDyn};
use num_traits::Float;

// Internal dependencies
use crate::functions::affine::Affine;
use crate::functions::constant::Constant;
use crate::functions::linear::Linear;
use crate::functions::onehot::OneHot;
use crate::functions::power::Power;
use crate::functions::vector::VectorScale;
use crate::primitives::errors::FuncError;
use crate::primitives::sequence::{MatrixSeq, VectorSeq};

// ============================================================================
// Parameter Access
// ============================================================================

/// Checked access to a parameter component.
pub(crate) fn component<T>(
    param: &[ArrayD<T>],
    index: usize,
) -> Result<&ArrayD<T>, FuncError> {
    param.get(index).ok_or(FuncError::ParamOutOfRange {
        index,
        len: param.len(),
    })
}

// ============================================================================
// Function Node
// ============================================================================

/// A node in a function tree.
///
/// Composition nodes (`Affine`, `Power`) own exactly one base node and apply
/// a transform, deriving their derivatives via the chain rule. Leaves
/// (`Linear`, `OneHot`, `Constant`, `Vector`) are direct functions of the
/// parameter sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Func<T> {
    /// Affine rescale of a base node: `a * base + b`.
    Affine(Affine<T>),
    /// Signed-power transform of a base node: `sign(f) * |f|^p`.
    Power(Power<T>),
    /// Linear combination of weighted parameter components.
    Linear(Linear<T>),
    /// Identity encoding of the first parameter component.
    OneHot(OneHot),
    /// Parameter-independent constant.
    Constant(Constant<T>),
    /// Elementwise scaling by a fixed vector.
    Vector(VectorScale<T>),
}

impl<T: Float> Func<T> {
    // ========================================================================
    // Builders
    // ========================================================================

    /// Affine wrapper `a * base + b` with a scalar offset.
    ///
    /// Collapses affine-of-affine at construction, so the returned node's
    /// base is never itself an `Affine`.
    pub fn affine(base: Func<T>, a: T, b: T) -> Func<T> {
        Func::Affine(Affine::new(base, a, ArrayD::from_elem(IxDyn(&[]), b)))
    }

    /// Affine wrapper `a * base + b` with a tensor offset.
    pub fn affine_offset(base: Func<T>, a: T, b: ArrayD<T>) -> Func<T> {
        Func::Affine(Affine::new(base, a, b))
    }

    /// Signed-power wrapper `sign(base) * |base|^p`.
    ///
    /// Collapses power-of-power at construction: `(x^p1)^p2 = x^(p1*p2)`.
    pub fn power(base: Func<T>, p: T) -> Func<T> {
        Func::Power(Power::new(base, p))
    }

    /// Constant leaf holding `values`.
    pub fn constant(values: ArrayD<T>) -> Func<T> {
        Func::Constant(Constant::new(values))
    }

    /// Fixed-vector scaling leaf holding `values`.
    pub fn vector(values: ArrayD<T>) -> Func<T> {
        Func::Vector(VectorScale::new(values))
    }

    // ========================================================================
    // Call Contract
    // ========================================================================

    /// Evaluate the tree against a parameter sequence.
    pub fn eval(&self, param: &[ArrayD<T>]) -> Result<ArrayD<T>, FuncError> {
        match self {
            Func::Affine(node) => node.eval(param),
            Func::Power(node) => node.eval(param),
            Func::Linear(node) => node.eval(param),
            Func::OneHot(node) => node.eval(param),
            Func::Constant(node) => node.eval(param),
            Func::Vector(node) => node.eval(param),
        }
    }

    /// Gradient block with respect to `param[i]`.
    ///
    /// Shape: `eval(param).shape + param[i].shape`.
    pub fn grad(&self, param: &[ArrayD<T>], i: usize) -> Result<ArrayD<T>, FuncError> {
        match self {
            Func::Affine(node) => node.grad(param, i),
            Func::Power(node) => node.grad(param, i),
            Func::Linear(node) => node.grad(param, i),
            Func::OneHot(node) => node.grad(param, i),
            Func::Constant(node) => node.grad(param, i),
            Func::Vector(node) => node.grad(param, i),
        }
    }

    /// Hessian block with respect to `(param[i], param[j])`.
    ///
    /// Shape: `eval(param).shape + param[i].shape + param[j].shape`.
    pub fn hess(
        &self,
        param: &[ArrayD<T>],
        i: usize,
        j: usize,
    ) -> Result<ArrayD<T>, FuncError> {
        match self {
            Func::Affine(node) => node.hess(param, i, j),
            Func::Power(node) => node.hess(param, i, j),
            Func::Linear(node) => node.hess(param, i, j),
            Func::OneHot(node) => node.hess(param, i, j),
            Func::Constant(node) => node.hess(param, i, j),
            Func::Vector(node) => node.hess(param, i, j),
        }
    }

    // ========================================================================
    // Bulk Retrieval
    // ========================================================================

    /// Lazy sequence of gradient blocks, one per parameter component.
    ///
    /// Equivalent to calling [`Func::grad`] for each `i` in
    /// `0..param.len()`, computed on demand. One-shot: re-invoke for another
    /// pass.
    pub fn grad_all<'a>(
        &'a self,
        param: &'a [ArrayD<T>],
    ) -> VectorSeq<impl FnMut(usize) -> Result<ArrayD<T>, FuncError> + 'a> {
        VectorSeq::new(param.len(), move |i| self.grad(param, i))
    }

    /// Lazy lower-triangular sequence of Hessian blocks.
    ///
    /// Row `i` covers `j` in `0..=i`; the upper triangle is the mirror of the
    /// lower one and is never materialized. One-shot: re-invoke for another
    /// pass.
    pub fn hess_all<'a>(
        &'a self,
        param: &'a [ArrayD<T>],
    ) -> MatrixSeq<impl Fn(usize, usize) -> Result<ArrayD<T>, FuncError> + Copy + 'a> {
        MatrixSeq::new(param.len(), move |i, j| self.hess(param, i, j))
    }
}

// ============================================================================
// Leaf Conversions
// ============================================================================

impl<T> From<Affine<T>> for Func<T> {
    fn from(node: Affine<T>) -> Self {
        Func::Affine(node)
    }
}

impl<T> From<Power<T>> for Func<T> {
    fn from(node: Power<T>) -> Self {
        Func::Power(node)
    }
}

impl<T> From<Linear<T>> for Func<T> {
    fn from(node: Linear<T>) -> Self {
        Func::Linear(node)
    }
}

impl<T> From<OneHot> for Func<T> {
    fn from(node: OneHot) -> Self {
        Func::OneHot(node)
    }
}

impl<T> From<Constant<T>> for Func<T> {
    fn from(node: Constant<T>) -> Self {
        Func::Constant(node)
    }
}

impl<T> From<VectorScale<T>> for Func<T> {
    fn from(node: VectorScale<T>) -> Self {
        Func::Vector(node)
    }
}
