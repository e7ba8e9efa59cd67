//! Layer 3: Functions
//!
//! # Purpose
//!
//! This layer contains the function-node hierarchy:
//! - The `Func` enum and its `eval`/`grad`/`hess` dispatch
//! - Composition nodes (`Affine`, `Power`) deriving their derivatives from a
//!   base node via the chain rule
//! - Leaf nodes (`Linear`, `OneHot`, `Constant`, `VectorScale`) terminating
//!   the composition
//! - Operator sugar building collapsed `Affine` wrappers
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Functions ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// The function-node enum and its call contract.
pub mod node;

/// Affine composition node: `a * base + b`.
pub mod affine;

/// Signed-power composition node: `sign(f) * |f|^p`.
pub mod power;

/// Linear-combination leaf with a two-phase builder.
pub mod linear;

/// Identity-encoding leaf.
pub mod onehot;

/// Parameter-independent constant leaf.
pub mod constant;

/// Fixed-vector elementwise scaling leaf.
pub mod vector;

/// Operator overloads (`+`, `-`, `*`, `/`, unary `-`).
pub mod ops;
