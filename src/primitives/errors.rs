//! Error types for function evaluation and differentiation.
//!
//! ## Purpose
//!
//! This module defines the error taxonomy returned by `eval`/`grad`/`hess`
//! calls on a function tree.
//!
//! ## Design notes
//!
//! * **Fatal errors**: Every error aborts the current call and propagates to
//!   the caller unmodified. There are no retries and no recovery paths.
//! * **No shape validation**: Shape incompatibilities are not represented
//!   here. They surface as broadcast panics from the numeric backend.
//!
//! ## Invariants
//!
//! * Display strings are stable and suitable for user-facing diagnostics.
//!
//! ## Non-goals
//!
//! * This module does not validate parameter/weight shape compatibility.
//! * This module does not classify numeric failures (NaN/Inf propagate as
//!   values, not errors).

// External dependencies
use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors that can occur when evaluating or differentiating a function tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FuncError {
    /// A node referenced a parameter component beyond the supplied sequence.
    ParamOutOfRange {
        /// The parameter index that was requested.
        index: usize,
        /// The number of parameter components actually supplied.
        len: usize,
    },

    /// A linear node referenced a weight component it does not own.
    WeightOutOfRange {
        /// The weight index that was requested.
        index: usize,
        /// The number of weight components the node owns.
        len: usize,
    },

    /// A linear node was evaluated before any feature was added.
    NoWeights,
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Display for FuncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FuncError::ParamOutOfRange { index, len } => write!(
                f,
                "Parameter index {} out of range: only {} components supplied",
                index, len
            ),
            FuncError::WeightOutOfRange { index, len } => write!(
                f,
                "Weight index {} out of range: linear node owns {} components",
                index, len
            ),
            FuncError::NoWeights => {
                write!(f, "Linear node has no weight components")
            }
        }
    }
}

impl std::error::Error for FuncError {}
