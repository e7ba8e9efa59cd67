//! Linear-combination leaf with a two-phase builder.
//!
//! ## Purpose
//!
//! A `Linear` node accumulates weighted parameter components:
//! `eval = Σ_i reduce(param[i] * weight[i])`. It is the only mutable node in
//! the hierarchy — `add_feature` appends weight components during the builder
//! phase, before the node is frozen into a tree.
//!
//! ## Design notes
//!
//! * **Two-phase construction**: Mutation is confined to the standalone
//!   builder value; `Func::from(linear)` freezes it. A frozen tree is
//!   read-only and safely shareable across readers.
//! * **Reduction policy**: The contraction is configurable.
//!   `Reduction::Full` (the default) contracts every axis of every product to
//!   one scalar; `Reduction::LeadingAxis` contracts only the stacked
//!   component axis, summing the products elementwise and leaving each
//!   product's own axes intact. The policy must match the shape the consuming
//!   optimizer expects.
//! * **Index order**: The zero Hessian is shaped `weight[j].shape +
//!   weight[i].shape` — `j` leading, deliberately.
//!
//! ## Invariants
//!
//! * `grad(param, i) == weight[i]` exactly — the gradient of a linear form is
//!   its coefficient.
//! * `hess` is identically zero for any weights and parameter values.
//!
//! ## Non-goals
//!
//! * No validation of parameter/weight shape compatibility; backend broadcast
//!   failures propagate.

// External dependencies
use ndarray::{ArrayD, IxDyn};
use num_traits::Float;

// Internal dependencies
use crate::math::broadcast::zeros_stacked;
use crate::primitives::errors::FuncError;

// ============================================================================
// Reduction Policy
// ============================================================================

/// Contraction applied to the `param[i] * weight[i]` products in
/// [`Linear::eval`](Linear).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    /// Contract every axis: the whole combination reduces to a 0-d scalar.
    #[default]
    Full,

    /// Contract only the leading (stacked component) axis: products are
    /// summed elementwise across components, their own axes left intact.
    LeadingAxis,
}

// ============================================================================
// Linear Node
// ============================================================================

/// Linear combination of weighted parameter components.
#[derive(Debug, Clone, PartialEq)]
pub struct Linear<T> {
    weight: Vec<ArrayD<T>>,
    reduction: Reduction,
}

impl<T: Float> Linear<T> {
    /// Create an empty builder with the default [`Reduction::Full`] policy.
    pub fn new() -> Self {
        Linear {
            weight: Vec::new(),
            reduction: Reduction::default(),
        }
    }

    /// Set the reduction policy.
    pub fn with_reduction(mut self, reduction: Reduction) -> Self {
        self.reduction = reduction;
        self
    }

    /// Append a weight component: `weight` broadcast over `shape`.
    ///
    /// The only mutator in the whole hierarchy; call it during construction,
    /// before the node is frozen into a tree.
    pub fn add_feature(&mut self, shape: &[usize], weight: T) {
        self.weight.push(ArrayD::from_elem(IxDyn(shape), weight));
    }

    /// The accumulated weight components.
    pub fn weights(&self) -> &[ArrayD<T>] {
        &self.weight
    }

    /// Checked access to one weight component.
    fn component_weight(&self, index: usize) -> Result<&ArrayD<T>, FuncError> {
        self.weight.get(index).ok_or(FuncError::WeightOutOfRange {
            index,
            len: self.weight.len(),
        })
    }

    // ========================================================================
    // Call Contract
    // ========================================================================

    pub(crate) fn eval(&self, param: &[ArrayD<T>]) -> Result<ArrayD<T>, FuncError> {
        if self.weight.is_empty() {
            return Err(FuncError::NoWeights);
        }

        match self.reduction {
            Reduction::Full => {
                let mut total = T::zero();
                for (index, p) in param.iter().enumerate() {
                    let w = self.component_weight(index)?;
                    total = total + (p * w).sum();
                }
                Ok(ArrayD::from_elem(IxDyn(&[]), total))
            }
            Reduction::LeadingAxis => {
                let mut acc: Option<ArrayD<T>> = None;
                for (index, p) in param.iter().enumerate() {
                    let w = self.component_weight(index)?;
                    let product = p * w;
                    acc = Some(match acc {
                        Some(sum) => &sum + &product,
                        None => product,
                    });
                }
                Ok(acc.unwrap_or_else(|| ArrayD::zeros(IxDyn(&[]))))
            }
        }
    }

    /// `grad(param, i) == weight[i]` — the coefficient itself.
    pub(crate) fn grad(&self, _param: &[ArrayD<T>], i: usize) -> Result<ArrayD<T>, FuncError> {
        Ok(self.component_weight(i)?.clone())
    }

    /// Identically zero, shaped `weight[j].shape + weight[i].shape`.
    pub(crate) fn hess(
        &self,
        _param: &[ArrayD<T>],
        i: usize,
        j: usize,
    ) -> Result<ArrayD<T>, FuncError> {
        let wj = self.component_weight(j)?;
        let wi = self.component_weight(i)?;
        Ok(zeros_stacked(&[wj.shape(), wi.shape()]))
    }
}

impl<T: Float> Default for Linear<T> {
    fn default() -> Self {
        Self::new()
    }
}
