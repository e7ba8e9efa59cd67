//! # symdiff-rs — Composable functions with closed-form derivatives
//!
//! A small symbolic-differentiation engine. Scalar/tensor-valued functions of
//! several vector parameters are represented as composable, immutable objects
//! that evaluate themselves and produce their first (gradient) and second
//! (Hessian) derivatives with respect to any subset of their parameters,
//! through closed-form chain-rule composition — no automatic or numeric
//! differentiation anywhere.
//!
//! ## How it works
//!
//! A function tree is built from leaves (`Linear`, `OneHot`, `Constant`,
//! `VectorScale`) wrapped by composition nodes (`Affine`, `Power`). Each node
//! knows the chain rule for its own transform, so evaluation and
//! differentiation recurse down the tree:
//!
//! ```text
//!   Affine(a, b)          eval = a * base.eval + b
//!      │                  grad = a * base.grad
//!   Power(p)              eval = sign(f) * |f|^p
//!      │                  grad = p * |f|^(p-1) * base.grad
//!   Linear(w)             eval = Σ_i sum(param[i] * w[i])
//!                         grad = w[i]
//! ```
//!
//! Nested `Affine` and nested `Power` nodes collapse at construction time
//! (`a2*(a1*x+b1)+b2` folds into one affine map, `(x^p1)^p2` into `x^(p1*p2)`),
//! so chains of operator sugar never deepen the tree.
//!
//! ## Quick start
//!
//! ```rust
//! use symdiff_rs::prelude::*;
//! use ndarray::arr1;
//!
//! // f(x) = ((3*x1 + 3*x2)^2) / 2
//! let mut lin = Linear::new();
//! lin.add_feature(&[2], 3.0);
//! let model = Func::power(Func::from(lin), 2.0) * 0.5;
//!
//! let param = vec![arr1(&[1.0, 2.0]).into_dyn()];
//!
//! let value = model.eval(&param)?;
//! assert_eq!(value.sum(), 40.5); // (3 + 6)^2 / 2
//!
//! let grad = model.grad(&param, 0)?;
//! assert_eq!(grad, arr1(&[27.0, 27.0]).into_dyn());
//! # Ok::<(), FuncError>(())
//! ```
//!
//! ## Bulk derivative retrieval
//!
//! `grad` and `hess` take explicit parameter indices; `grad_all` and
//! `hess_all` return lazy, one-shot sequences over the whole index space.
//! `hess_all` only materializes the lower triangle (`j <= i`) — the Hessian is
//! symmetric, and mirroring the triangle into the full square matrix is the
//! caller's job:
//!
//! ```rust
//! use symdiff_rs::prelude::*;
//! use ndarray::arr1;
//!
//! let f = Func::from(OneHot) + 1.0;
//! let param = vec![arr1(&[2.0, 5.0]).into_dyn()];
//!
//! let grads = f.grad_all(&param).collect::<Result<Vec<_>, FuncError>>()?;
//! assert_eq!(grads.len(), 1);
//!
//! for (i, row) in f.hess_all(&param).enumerate() {
//!     assert_eq!(row.count(), i + 1); // lower triangle, diagonal included
//! }
//! # Ok::<(), FuncError>(())
//! ```
//!
//! ## Shapes
//!
//! For every node, `grad(param, i)` has shape `eval(param).shape +
//! param[i].shape`, and `hess(param, i, j)` has shape `eval(param).shape +
//! param[i].shape + param[j].shape`. The crate performs no shape validation of
//! its own: incompatible parameter/weight shapes surface as broadcast panics
//! from the `ndarray` backend and propagate to the caller.
//!
//! ## Non-goals
//!
//! * No automatic or numeric differentiation.
//! * No graph optimization beyond the affine/power collapse rules.
//! * No parallelism, no persistence.

#![deny(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - errors and lazy sequence adapters.
//
// Contains the error taxonomy (`FuncError`) and the vectorization wrappers
// (`VectorSeq`, `MatrixSeq`) that adapt per-index derivative closures into
// lazy bulk sequences.
mod primitives;

// Layer 2: Math - pure tensor helpers over the ndarray backend.
//
// Contains the signed-power transform, singleton-axis broadcasting helpers,
// stacked-shape zero tensors, and the Kronecker-delta identity builder.
mod math;

// Layer 3: Functions - the function-node hierarchy.
//
// Contains the `Func` node enum, the composition nodes (`Affine`, `Power`)
// with their chain rules, the leaf nodes (`Linear`, `OneHot`, `Constant`,
// `VectorScale`), and the operator sugar.
mod functions;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access to
/// the most commonly used types:
///
/// ```
/// use symdiff_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::functions::affine::Affine;
    pub use crate::functions::constant::Constant;
    pub use crate::functions::linear::{Linear, Reduction};
    pub use crate::functions::node::Func;
    pub use crate::functions::onehot::OneHot;
    pub use crate::functions::power::Power;
    pub use crate::functions::vector::VectorScale;
    pub use crate::primitives::errors::FuncError;
    pub use crate::primitives::sequence::{MatrixSeq, PairRow, VectorSeq};
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and sequence adapters.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal tensor math helpers.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal function-node implementations.
    pub mod functions {
        pub use crate::functions::*;
    }
}
