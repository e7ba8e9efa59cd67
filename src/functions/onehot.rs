//! Identity-encoding leaf.
//!
//! ## Purpose
//!
//! A `OneHot` node passes the first parameter component through unchanged.
//! Its gradient is therefore the identity map — a Kronecker-delta tensor over
//! the flattened size of `param[0]` — and its Hessian is identically zero.
//!
//! ## Invariants
//!
//! * `grad` has shape `param[0].shape` doubled; `hess` has it tripled.
//! * The gradient is the same identity for every index `i`.

// External dependencies
use ndarray::ArrayD;
use num_traits::Float;

// Internal dependencies
use crate::functions::node::component;
use crate::math::broadcast::{identity_doubled, zeros_stacked};
use crate::primitives::errors::FuncError;

// ============================================================================
// OneHot Node
// ============================================================================

/// Identity encoding of the first parameter component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OneHot;

impl OneHot {
    pub(crate) fn eval<T: Float>(&self, param: &[ArrayD<T>]) -> Result<ArrayD<T>, FuncError> {
        Ok(component(param, 0)?.clone())
    }

    pub(crate) fn grad<T: Float>(
        &self,
        param: &[ArrayD<T>],
        _i: usize,
    ) -> Result<ArrayD<T>, FuncError> {
        let p0 = component(param, 0)?;
        Ok(identity_doubled(p0.shape()))
    }

    pub(crate) fn hess<T: Float>(
        &self,
        param: &[ArrayD<T>],
        _i: usize,
        _j: usize,
    ) -> Result<ArrayD<T>, FuncError> {
        let p0 = component(param, 0)?;
        Ok(zeros_stacked(&[p0.shape(), p0.shape(), p0.shape()]))
    }
}
