//! Signed-power composition node: `sign(f) * |f|^p`.
//!
//! ## Purpose
//!
//! Wraps a base node in a signed generalized power transform. The signed
//! definition keeps the transform well-defined and differentiable for
//! negative base values with non-integer exponents.
//!
//! ## Design notes
//!
//! * **Collapse invariant**: Nested powers collapse at construction,
//!   `(x^p1)^p2 = x^(p1*p2)`, tracked through the signed-power definition.
//! * **Exponent branches**: `p == 0` short-circuits to zero tensors of the
//!   documented derivative shapes; `p == 1` returns the base's derivatives
//!   untouched, keeping exact equality with no multiply-by-one noise.
//! * **Outer product**: The Hessian's first term multiplies the two gradient
//!   blocks along the output-feature axes only. Singleton axes are appended
//!   to `grad(i)` and inserted into `grad(j)` so the two parameter axis sets
//!   never collide.
//!
//! ## Invariants
//!
//! * `grad.shape == f.shape + param[i].shape` on every branch.
//! * `hess.shape == f.shape + param[i].shape + param[j].shape` on every
//!   branch.
//!
//! ## Non-goals
//!
//! * No guarding of `f = 0` with non-integer `p < 2`: the `|f|^(p-2)` factor
//!   in the Hessian produces Inf/NaN there and propagates as a value.

// External dependencies
use ndarray::ArrayD;
use num_traits::Float;

// Internal dependencies
use crate::functions::node::{component, Func};
use crate::math::broadcast::{
    append_axes, insert_axes_at, mul_outputwise, sign, signed_pow, zeros_stacked,
};
use crate::primitives::errors::FuncError;

// ============================================================================
// Power Node
// ============================================================================

/// Signed-power transform of a base node: `eval = sign(f) * |f|^p`.
#[derive(Debug, Clone, PartialEq)]
pub struct Power<T> {
    base: Box<Func<T>>,
    p: T,
}

impl<T: Float> Power<T> {
    /// Wrap `base` in a signed power with exponent `p`, collapsing a nested
    /// `Power` base into a single exponent.
    pub fn new(base: Func<T>, p: T) -> Self {
        match base {
            Func::Power(inner) => Power {
                base: inner.base,
                p: p * inner.p,
            },
            other => Power {
                base: Box::new(other),
                p,
            },
        }
    }

    /// The wrapped base node.
    pub fn base(&self) -> &Func<T> {
        &self.base
    }

    /// The exponent.
    pub fn p(&self) -> T {
        self.p
    }

    // ========================================================================
    // Call Contract
    // ========================================================================

    pub(crate) fn eval(&self, param: &[ArrayD<T>]) -> Result<ArrayD<T>, FuncError> {
        let f = self.base.eval(param)?;
        Ok(signed_pow(&f, self.p))
    }

    /// First derivative.
    ///
    /// * `p == 0`: constant function, zero tensor of shape
    ///   `f.shape + param[i].shape`.
    /// * `p == 1`: identity transform, `base.grad(param, i)` unchanged.
    /// * otherwise: `p * |f|^(p-1) * base.grad(param, i)`.
    pub(crate) fn grad(&self, param: &[ArrayD<T>], i: usize) -> Result<ArrayD<T>, FuncError> {
        if self.p == T::zero() {
            let f = self.base.eval(param)?;
            let pi = component(param, i)?;
            return Ok(zeros_stacked(&[f.shape(), pi.shape()]));
        }
        if self.p == T::one() {
            return self.base.grad(param, i);
        }

        let p = self.p;
        let f = self.base.eval(param)?;
        let g = self.base.grad(param, i)?;
        let coeff = f.mapv(|x| p * x.abs().powf(p - T::one()));
        Ok(mul_outputwise(&g, &coeff))
    }

    /// Second derivative, product-rule expansion of `p*|f|^(p-1) * base.grad`:
    ///
    /// ```text
    /// p*(p-1)*sign(f)*|f|^(p-2) * outer(grad_i, grad_j)
    ///   - p*|f|^(p-1) * base.hess(param, i, j)
    /// ```
    pub(crate) fn hess(
        &self,
        param: &[ArrayD<T>],
        i: usize,
        j: usize,
    ) -> Result<ArrayD<T>, FuncError> {
        if self.p == T::zero() {
            let f = self.base.eval(param)?;
            let pi = component(param, i)?;
            let pj = component(param, j)?;
            return Ok(zeros_stacked(&[f.shape(), pi.shape(), pj.shape()]));
        }
        if self.p == T::one() {
            return self.base.hess(param, i, j);
        }

        let p = self.p;
        let one = T::one();
        let two = T::from(2.0).unwrap();

        let f = self.base.eval(param)?;
        let gi = self.base.grad(param, i)?;
        let gj = self.base.grad(param, j)?;
        let base_hess = self.base.hess(param, i, j)?;

        // Axis bookkeeping: gi = f.shape + param[i].shape,
        // gj = f.shape + param[j].shape.
        let out_ndim = f.ndim();
        let i_ndim = gi.ndim() - out_ndim;
        let j_ndim = gj.ndim() - out_ndim;

        let gi_expanded = append_axes(gi, j_ndim);
        let gj_expanded = insert_axes_at(gj, out_ndim, i_ndim);
        let outer = &gi_expanded * &gj_expanded;

        let first_coeff = f.mapv(|x| p * (p - one) * sign(x) * x.abs().powf(p - two));
        let second_coeff = f.mapv(|x| p * x.abs().powf(p - one));

        let first = mul_outputwise(&outer, &first_coeff);
        let second = mul_outputwise(&base_hess, &second_coeff);
        Ok(&first - &second)
    }
}
