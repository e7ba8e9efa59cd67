//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the foundational building blocks shared by the rest of
//! the crate:
//! - The error taxonomy (`FuncError`)
//! - Lazy sequence adapters for bulk derivative retrieval
//!
//! These carry no knowledge of any specific function node.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Functions
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for function evaluation and differentiation.
pub mod errors;

/// Lazy sequence adapters (vectorization wrappers).
pub mod sequence;
