//! Parameter-independent constant leaf.
//!
//! A `Constant` node always evaluates to its stored array, ignoring the
//! parameter sequence entirely (an empty one is fine). No parameter
//! dependency is tracked, so its derivatives are degenerate 0-d zero tensors.

// External dependencies
use ndarray::{ArrayD, IxDyn};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FuncError;

// ============================================================================
// Constant Node
// ============================================================================

/// Parameter-independent constant.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant<T> {
    values: ArrayD<T>,
}

impl<T: Float> Constant<T> {
    /// Create a constant leaf holding `values`.
    pub fn new(values: ArrayD<T>) -> Self {
        Constant { values }
    }

    /// The stored array.
    pub fn values(&self) -> &ArrayD<T> {
        &self.values
    }

    pub(crate) fn eval(&self, _param: &[ArrayD<T>]) -> Result<ArrayD<T>, FuncError> {
        Ok(self.values.clone())
    }

    pub(crate) fn grad(&self, _param: &[ArrayD<T>], _i: usize) -> Result<ArrayD<T>, FuncError> {
        Ok(ArrayD::zeros(IxDyn(&[])))
    }

    pub(crate) fn hess(
        &self,
        _param: &[ArrayD<T>],
        _i: usize,
        _j: usize,
    ) -> Result<ArrayD<T>, FuncError> {
        Ok(ArrayD::zeros(IxDyn(&[])))
    }
}
