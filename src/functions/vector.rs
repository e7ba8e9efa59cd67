//! Fixed-vector elementwise scaling leaf.
//!
//! A `VectorScale` node multiplies the first parameter component elementwise
//! by a stored array. The gradient of that scaling is the stored array
//! itself; the Hessian is a flat zero vector sized by the stored array.

// External dependencies
use ndarray::{ArrayD, IxDyn};
use num_traits::Float;

// Internal dependencies
use crate::functions::node::component;
use crate::primitives::errors::FuncError;

// ============================================================================
// VectorScale Node
// ============================================================================

/// Elementwise scaling by a fixed vector.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorScale<T> {
    values: ArrayD<T>,
}

impl<T: Float> VectorScale<T> {
    /// Create a scaling leaf holding `values`.
    pub fn new(values: ArrayD<T>) -> Self {
        VectorScale { values }
    }

    /// The stored array.
    pub fn values(&self) -> &ArrayD<T> {
        &self.values
    }

    pub(crate) fn eval(&self, param: &[ArrayD<T>]) -> Result<ArrayD<T>, FuncError> {
        let p0 = component(param, 0)?;
        Ok(p0 * &self.values)
    }

    pub(crate) fn grad(&self, _param: &[ArrayD<T>], _i: usize) -> Result<ArrayD<T>, FuncError> {
        Ok(self.values.clone())
    }

    pub(crate) fn hess(
        &self,
        _param: &[ArrayD<T>],
        _i: usize,
        _j: usize,
    ) -> Result<ArrayD<T>, FuncError> {
        Ok(ArrayD::zeros(IxDyn(&[self.values.len()])))
    }
}
