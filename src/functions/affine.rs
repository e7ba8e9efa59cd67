//! Affine composition node: `a * base + b`.
//!
//! ## Purpose
//!
//! Wraps a base node in a linear rescale. The chain rule for a linear map
//! passes derivatives through unchanged, scaled by `a`; the offset `b`
//! disappears from every derivative.
//!
//! ## Design notes
//!
//! * **Collapse invariant**: Composition of affine maps collapses to a single
//!   affine map at construction: `a2*(a1*x + b1) + b2 = (a2*a1)*x +
//!   (a2*b1 + b2)`. The stored base is never itself an `Affine`.
//! * **Scalar `a`, tensor `b`**: The scale factor is a scalar; the offset is
//!   a tensor (degenerate 0-d for scalar offsets) and co-broadcasts against
//!   the base's output.

// External dependencies
use ndarray::ArrayD;
use num_traits::Float;

// Internal dependencies
use crate::functions::node::Func;
use crate::primitives::errors::FuncError;

// ============================================================================
// Affine Node
// ============================================================================

/// Affine rescale of a base node: `eval = a * base.eval(param) + b`.
#[derive(Debug, Clone, PartialEq)]
pub struct Affine<T> {
    base: Box<Func<T>>,
    a: T,
    b: ArrayD<T>,
}

impl<T: Float> Affine<T> {
    /// Wrap `base` in the affine map `a * base + b`, collapsing a nested
    /// `Affine` base into a single map.
    pub fn new(base: Func<T>, a: T, b: ArrayD<T>) -> Self {
        match base {
            Func::Affine(inner) => {
                let scaled = inner.b.mapv(|x| x * a);
                Affine {
                    base: inner.base,
                    a: a * inner.a,
                    b: &scaled + &b,
                }
            }
            other => Affine {
                base: Box::new(other),
                a,
                b,
            },
        }
    }

    /// The wrapped base node.
    pub fn base(&self) -> &Func<T> {
        &self.base
    }

    /// The scale factor.
    pub fn a(&self) -> T {
        self.a
    }

    /// The offset tensor.
    pub fn b(&self) -> &ArrayD<T> {
        &self.b
    }

    // ========================================================================
    // Call Contract
    // ========================================================================

    pub(crate) fn eval(&self, param: &[ArrayD<T>]) -> Result<ArrayD<T>, FuncError> {
        let f = self.base.eval(param)?;
        let scaled = f.mapv(|x| x * self.a);
        Ok(&scaled + &self.b)
    }

    /// `grad = a * base.grad(param, i)` — purely linear chain rule.
    pub(crate) fn grad(&self, param: &[ArrayD<T>], i: usize) -> Result<ArrayD<T>, FuncError> {
        Ok(self.base.grad(param, i)?.mapv(|x| x * self.a))
    }

    /// `hess = a * base.hess(param, i, j)`.
    pub(crate) fn hess(
        &self,
        param: &[ArrayD<T>],
        i: usize,
        j: usize,
    ) -> Result<ArrayD<T>, FuncError> {
        Ok(self.base.hess(param, i, j)?.mapv(|x| x * self.a))
    }
}
