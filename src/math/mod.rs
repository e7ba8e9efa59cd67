//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure tensor helpers over the `ndarray` backend:
//! - The signed-power transform and its zero-preserving `sign`
//! - Singleton-axis insertion for derivative broadcasting
//! - Zero tensors over stacked (concatenated) shapes
//! - The Kronecker-delta identity tensor
//!
//! These are reusable mathematical building blocks with no function-node
//! logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Functions
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Broadcasting and shape helpers for derivative tensors.
pub mod broadcast;
